//! Optional - zero or one value of a type
//!
//! An `Optional<T>` is either `None`, carrying nothing, or `Value(T)`, carrying
//! exactly one `T`. The variant is fixed at construction. Nothing in this
//! module changes the variant or the payload of an existing instance; to go
//! from "empty" to "present" you build a new `Optional`.
//!
//! The total way to get at the payload is a `match` (or [`Optional::fold`],
//! which is the same thing as a function). The partial accessors
//! ([`Optional::try_into_value`], [`Optional::try_value`],
//! [`Optional::unwrap_value`]) report [`NoValue`] or panic. They never
//! substitute a default.

mod error;

pub use self::error::NoValue;

use std::fmt;
use tracing::error;

/// Either no value, or exactly one value of type `T`.
///
/// Equality is structural: two `None` are always equal, two `Value` are equal
/// when their payloads are, and a `None` never equals a `Value`. Nesting is
/// preserved, so `Value(None)` and `None` are distinct instances of
/// `Optional<Optional<T>>`.
///
/// # Examples
/// ```
/// use optval::Optional;
///
/// let outer: Optional<Optional<i64>> = Optional::Value(Optional::None);
/// assert_ne!(outer, Optional::None);
///
/// match outer {
///     Optional::None => panic!("outer layer is value-carrying"),
///     Optional::Value(inner) => assert!(inner.is_none()),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// No value is present.
    None,
    /// A value is present.
    Value(T),
}

impl<T> Optional<T> {
    /// Create an empty `Optional`. Equivalent to `Optional::None`.
    #[inline]
    pub const fn none() -> Self {
        Optional::None
    }

    /// Wrap `value`. Equivalent to `Optional::Value(value)`.
    ///
    /// The value is never inspected, so a zero, an empty string or an empty
    /// `Optional` is still wrapped as present.
    #[inline]
    pub const fn value(value: T) -> Self {
        Optional::Value(value)
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Returns `true` if this is `Value`.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Optional::Value(_))
    }

    /// Borrow the payload, producing an `Optional<&T>` that can be matched
    /// without consuming `self`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::None => Optional::None,
            Optional::Value(v) => Optional::Value(v),
        }
    }

    /// Discriminate on the variant. Exactly one of `on_none` or `on_value` is
    /// called, and its result is returned.
    ///
    /// ```
    /// use optval::Optional;
    ///
    /// let len = Optional::Value("abc").fold(|| 0, |s| s.len());
    /// assert_eq!(len, 3);
    /// ```
    #[inline]
    pub fn fold<R, N, V>(self, on_none: N, on_value: V) -> R
    where
        N: FnOnce() -> R,
        V: FnOnce(T) -> R,
    {
        match self {
            Optional::None => on_none(),
            Optional::Value(v) => on_value(v),
        }
    }

    /// Take the payload, or `Err(NoValue)` if there is none.
    #[inline]
    pub fn try_into_value(self) -> Result<T, NoValue> {
        match self {
            Optional::None => Err(NoValue),
            Optional::Value(v) => Ok(v),
        }
    }

    /// Borrow the payload, or `Err(NoValue)` if there is none.
    #[inline]
    pub fn try_value(&self) -> Result<&T, NoValue> {
        self.as_ref().try_into_value()
    }

    /// Take the payload, panicking if there is none.
    ///
    /// This is a partial operation. Prefer a `match` or [`Optional::fold`]
    /// so the empty case is handled where it occurs.
    ///
    /// # Panics
    ///
    /// Panics with the [`NoValue`] message if `self` is `None`.
    ///
    /// ```should_panic
    /// use optval::Optional;
    ///
    /// let empty: Optional<u8> = Optional::None;
    /// empty.unwrap_value();
    /// ```
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        match self {
            Optional::Value(v) => v,
            Optional::None => {
                let location = std::panic::Location::caller();
                error!(%location, "unwrap_value called on Optional::None");
                panic!("{}", NoValue)
            }
        }
    }
}

impl<T> fmt::Display for Optional<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::None => f.write_str("None"),
            Optional::Value(v) => write!(f, "Value({v})"),
        }
    }
}

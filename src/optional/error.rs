use std::error::Error;
use std::fmt;

/// The error returned when a payload is requested from [`Optional::None`].
///
/// This is a logic error in the caller. It is never produced by constructing
/// or matching an [`Optional`], only by the partial accessors.
///
/// [`Optional`]: super::Optional
/// [`Optional::None`]: super::Optional::None
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoValue;

impl fmt::Display for NoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attempted to extract a value from Optional::None")
    }
}

impl Error for NoValue {}

use crate::{BacktraceWalker, BoxError, CaptureConfig, Message, Result, StackError};

/// Trace errors while propagating them with `?`
///
/// The stack is taken at the caller of [StackContext::traced], and
/// errors that are already traced get their frames refreshed instead of
/// being nested.
///
/// # Example
/// ```
/// # use stack_error::StackContext;
/// fn read_config() -> stack_error::Result<String> {
///     let content = std::fs::read_to_string("/does/not/exist").traced()?;
///     Ok(content)
/// }
///
/// let err = read_config().unwrap_err();
/// assert!(err.downcast_child_ref::<std::io::Error>().is_some());
/// ```
pub trait StackContext<T> {
    fn traced(self) -> Result<T>;
}

impl<T, E> StackContext<T> for std::result::Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn traced(self) -> Result<T> {
        match self {
            Ok(x) => Ok(x),
            Err(err) => Err(StackError::capture(
                &BacktraceWalker,
                CaptureConfig::default(),
                err.into(),
            )),
        }
    }
}

/// Turn a missing value into a traced error
pub trait StackOption<T> {
    fn traced_or(self, message: impl Into<String>) -> Result<T>;
}

impl<T> StackOption<T> for Option<T> {
    #[inline(never)]
    fn traced_or(self, message: impl Into<String>) -> Result<T> {
        match self {
            Some(x) => Ok(x),
            None => Err(StackError::capture(
                &BacktraceWalker,
                CaptureConfig::default(),
                Message::new(message).into(),
            )),
        }
    }
}

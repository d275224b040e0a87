use crate::{BacktraceWalker, BoxError, CaptureConfig, Message, StackError, StackWalker};

/// A [StackWalker] and a [CaptureConfig] to build [StackError]s with
///
/// [StackError::new] and [StackError::extend] are the same as going through
/// `Tracer::default()`.
///
/// # Example
/// ```
/// # use stack_error::{CaptureConfigBuilder, Tracer, BacktraceWalker};
/// let config = CaptureConfigBuilder::default().stack_limit(5).build().unwrap();
/// let tracer = Tracer::new(BacktraceWalker, config);
/// let err = tracer.error("disk full");
/// assert!(err.frames().len() <= 5);
/// assert!(err.to_string().starts_with("disk full in:\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracer<W = BacktraceWalker> {
    walker: W,
    config: CaptureConfig,
}

impl<W> Tracer<W>
where
    W: StackWalker,
{
    pub fn new(walker: W, config: CaptureConfig) -> Self {
        Self { walker, config }
    }

    pub fn walker(&self) -> &W {
        &self.walker
    }

    pub fn config(&self) -> CaptureConfig {
        self.config
    }

    /// Same as [StackError::new]
    #[inline(never)]
    pub fn error(&self, message: impl Into<String>) -> StackError {
        StackError::capture(&self.walker, self.config, Message::new(message).into())
    }

    /// Same as [StackError::extend]
    #[inline(never)]
    pub fn extend<E>(&self, err: E) -> StackError
    where
        E: Into<BoxError>,
    {
        StackError::capture(&self.walker, self.config, err.into())
    }
}

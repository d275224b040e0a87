use std::{
    error::Error as StdError,
    fmt::{Debug, Display},
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{BacktraceWalker, CaptureConfig, Frame, StackWalker};

/// Any error that can cross threads
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Last line of the rendering when frames had to be dropped
pub const LIMIT_MARKER: &str = "-- stack limit reached --";

/// Frames between the walker and the first frame worth recording, namely
/// [StackError::capture] and the public entry point that called it.
///
/// Every entry point must call [StackError::capture] directly.
const ENTRY_FRAMES: usize = 2;

/// Plain error carrying only a message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An error together with the call stack it went through
///
/// Wrapping a [StackError] again never nests it: the new value keeps the
/// innermost child and only the freshest frames.
pub struct StackError {
    child: BoxError,
    /// innermost first
    frames: Vec<Frame>,
    limit: usize,
}

impl StackError {
    /// A new error from `message`, traced from the caller
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::capture(
            &BacktraceWalker,
            CaptureConfig::default(),
            Message::new(message).into(),
        )
    }

    /// Attach the caller's stack to `err`
    ///
    /// If `err` already is a [StackError] its frames are replaced and its
    /// child is kept as is.
    #[inline(never)]
    pub fn extend<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::capture(&BacktraceWalker, CaptureConfig::default(), err.into())
    }

    /// The one place frames get captured.
    #[inline(never)]
    pub(crate) fn capture(
        walker: &dyn StackWalker,
        config: CaptureConfig,
        child: BoxError,
    ) -> Self {
        let limit = config.stack_limit();
        let child = match child.downcast::<StackError>() {
            Ok(nested) => {
                let StackError { child, frames, .. } = *nested;
                trace!(
                    "re-wrapping a traced error, dropping {} old frame(s)",
                    frames.len()
                );
                child
            }
            Err(child) => child,
        };

        let mut frames = walker.capture_frames(ENTRY_FRAMES, limit);
        frames.truncate(limit);
        trace!("captured {} frame(s) for `{child}`", frames.len());
        if frames.len() == limit {
            debug!("stack limit of {limit} reached, deeper frames are lost");
        }

        Self {
            child,
            frames,
            limit,
        }
    }

    /// The wrapped error
    pub fn child(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.child
    }

    pub fn into_child(self) -> BoxError {
        self.child
    }

    pub fn downcast_child_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.child.downcast_ref()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The cap that was active when the frames were captured
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether frames past [StackError::limit] were dropped
    pub fn is_truncated(&self) -> bool {
        self.frames.len() == self.limit
    }
}

impl Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in:\n{}", self.child, self.frames.iter().format("\n"))?;
        if self.is_truncated() {
            write!(f, "\n{LIMIT_MARKER}\n")?;
        }
        Ok(())
    }
}

impl Debug for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackError")
            .field("child", &self.child)
            .field("frames", &self.frames.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl StdError for StackError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.child)
    }
}

crate::test_utils::assert_trait!(stack_error_bounds; StackError; Send, Sync, StdError);

//! Errors that remember where they came from.
//!
//! A [StackError] wraps another error together with the call stack at the
//! place it was created ([StackError::new]) or last passed along
//! ([StackError::extend]). Re-wrapping replaces the frames instead of
//! stacking another trace on top, so the rendering stays a single list:
//!
//! ```text
//! Error! in:
//! src/lib.rs: 12 (my_crate::make_error)
//! src/main.rs: 4 (my_crate::main)
//! ```
//!
//! At most [DEFAULT_STACK_LIMIT] frames are kept; a full list ends with
//! `-- stack limit reached --`. The limit can be changed through a [Tracer].
//!
//! # Example
//! ```
//! use stack_error::{StackContext, StackError};
//!
//! fn parse(s: &str) -> stack_error::Result<u32> {
//!     s.parse::<u32>().traced()
//! }
//!
//! let err = parse("x").unwrap_err();
//! let again = StackError::extend(err);
//! assert!(again.downcast_child_ref::<std::num::ParseIntError>().is_some());
//! ```

mod config;
mod context;
mod error;
mod frame;
mod macros;
mod test_utils;
mod tracer;
mod walker;


pub use config::{
    CaptureConfig, CaptureConfigBuilder, CaptureConfigBuilderError, DEFAULT_STACK_LIMIT,
};
pub use context::{StackContext, StackOption};
pub use error::{BoxError, Message, StackError, LIMIT_MARKER};
pub use frame::{Frame, UNKNOWN};
pub use tracer::Tracer;
pub use walker::{BacktraceWalker, ScriptedWalker, StackWalker};

pub type Result<T> = std::result::Result<T, StackError>;

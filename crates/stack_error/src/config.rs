use derive_builder::Builder;

/// How many frames a capture keeps unless told otherwise
pub const DEFAULT_STACK_LIMIT: usize = 20;

/// Parameters of a stack capture
///
/// Build one with [CaptureConfigBuilder]; the default keeps
/// [DEFAULT_STACK_LIMIT] frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct CaptureConfig {
    /// Hard cap on the number of recorded frames. Deeper frames are dropped.
    #[builder(default = "DEFAULT_STACK_LIMIT")]
    stack_limit: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            stack_limit: DEFAULT_STACK_LIMIT,
        }
    }
}

impl CaptureConfig {
    pub fn stack_limit(&self) -> usize {
        self.stack_limit
    }
}

impl CaptureConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.stack_limit {
            Some(0) => Err("the stack limit must keep at least one frame".into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureConfig, CaptureConfigBuilder, DEFAULT_STACK_LIMIT};

    #[test]
    fn builder_defaults_to_twenty() {
        let config = CaptureConfigBuilder::default().build().unwrap();
        assert_eq!(config.stack_limit(), DEFAULT_STACK_LIMIT);
        assert_eq!(config, CaptureConfig::default());
    }

    #[test]
    fn builder_sets_limit() {
        let config = CaptureConfigBuilder::default()
            .stack_limit(5)
            .build()
            .unwrap();
        assert_eq!(config.stack_limit(), 5)
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = CaptureConfigBuilder::default()
            .stack_limit(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("at least one frame"), "{err}")
    }
}

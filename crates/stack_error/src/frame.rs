use std::fmt::Display;

/// What gets printed when a part of a call site could not be resolved
pub const UNKNOWN: &str = "?";

/// One recorded call site
///
/// Frames are only ever produced by a [StackWalker](crate::StackWalker) and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    file: String,
    line: u32,
    symbol: String,
}

impl Frame {
    pub fn new(file: impl Into<String>, line: u32, symbol: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            symbol: symbol.into(),
        }
    }

    /// A frame nothing could be resolved for
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, 0, UNKNOWN)
    }

    pub(crate) fn from_symbol(symbol: &backtrace::Symbol) -> Self {
        let file = symbol
            .filename()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| UNKNOWN.into());
        let line = symbol.lineno().unwrap_or(0);
        // `{:#}` drops the trailing hash of legacy mangled names
        let name = symbol
            .name()
            .map(|n| format!("{n:#}"))
            .unwrap_or_else(|| UNKNOWN.into());
        Self::new(file, line, name)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fully qualified name of the function active at this call site
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.file, self.line, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn display_layout() {
        let frame = Frame::new("src/main.rs", 42, "app::run");
        assert_eq!(frame.to_string(), "src/main.rs: 42 (app::run)")
    }

    #[test]
    fn unknown_frame() {
        assert_eq!(Frame::unknown().to_string(), "?: 0 (?)")
    }
}

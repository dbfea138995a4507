/// How backslash escapes inside quoted identifiers are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// `\"` decodes to `""`, `\n` to a newline followed by `n`, and any other
    /// `\X` to `\XX`. This is what existing documents were written against.
    #[default]
    Compatible,
    /// `\"` decodes to `"`, `\n` to a newline, any other `\X` stays `\X`.
    Standard,
}

/// Settings for a single parse.
///
/// ```ignore
/// let options = ParseOptions::default().strict(true).max_depth(Some(16));
/// let tree = parse_text_with("{ a b }", &options)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Report anomalies as errors instead of tolerating them
    pub strict: bool,
    /// Escape decoding for quoted identifiers
    pub escapes: EscapeMode,
    /// Maximum group nesting, the root group being depth 1
    pub max_depth: Option<usize>,
    /// Name recorded in error positions
    pub source_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict: false,
            escapes: EscapeMode::default(),
            max_depth: None,
            source_name: String::from("<text>"),
        }
    }
}

impl ParseOptions {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn escapes(mut self, escapes: EscapeMode) -> Self {
        self.escapes = escapes;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }
}

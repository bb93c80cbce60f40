/// Front-end configuration threaded through the pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// Keep comment tokens in the lexer output (useful for tooling that
    /// inspects the raw token stream; the parser ignores them either way)
    pub preserve_comments: bool,
    /// Colorize formatted diagnostics
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preserve_comments: false,
            use_color: true,
        }
    }
}

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of parenthesized groups, function arguments and
    /// exponent chains
    pub max_nesting: usize,
    /// Maximum depth of the finished tree. Display, Debug, evaluation and
    /// drop all recurse once per level.
    pub max_tree_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting: 256,
            max_tree_depth: 1024,
        }
    }
}

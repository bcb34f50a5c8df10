use serde::{Deserialize, Serialize};

/// Lookup and training options of [`DictionaryVectorizer`](crate::DictionaryVectorizer).
///
/// These options are not stored in model files, so the same configuration
/// must be given when a model is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Looks up the last space-separated token of unknown multi-word tokens.
    pub use_last_word: bool,

    /// Trains and uses the suffix table for unknown words.
    pub use_suffixes: bool,

    /// Minimum number of distinct training words a suffix must end.
    pub min_suffix_count: usize,

    /// Maximum suffix length in characters.
    pub max_suffix_length: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            use_last_word: false,
            use_suffixes: false,
            min_suffix_count: 10,
            max_suffix_length: 5,
        }
    }
}

impl VectorizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether multi-word tokens fall back to their last word.
    pub const fn use_last_word(mut self, flag: bool) -> Self {
        self.use_last_word = flag;
        self
    }

    /// Sets whether the suffix table is trained and used.
    pub const fn use_suffixes(mut self, flag: bool) -> Self {
        self.use_suffixes = flag;
        self
    }

    pub const fn min_suffix_count(mut self, count: usize) -> Self {
        self.min_suffix_count = count;
        self
    }

    pub const fn max_suffix_length(mut self, length: usize) -> Self {
        self.max_suffix_length = length;
        self
    }
}

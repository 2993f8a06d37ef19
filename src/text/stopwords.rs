use crate::ConfigError;
use std::collections::HashSet;
use std::path::Path;

/// Immutable stopword set, loaded once before the first page is processed
///
/// A missing stopword file is a precondition violation for the whole process,
/// not a per-page error: processing cannot start without it.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Loads the stopword set from a whitespace-separated file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the stopword file
    ///
    /// # Returns
    ///
    /// * `Ok(StopwordSet)` - Successfully loaded set
    /// * `Err(ConfigError)` - File missing or unreadable
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::MissingStopwords(path.display().to_string()))?;
        Ok(Self::from_text(&content))
    }

    /// Builds a stopword set from whitespace-separated text
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text
                .split_whitespace()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the token is a stopword
    ///
    /// Tokens are expected to already be lowercase (the tokenizer guarantees
    /// this for its output).
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

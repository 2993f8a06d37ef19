use std::collections::HashMap;

/// Returns true if the character is ASCII alphanumeric
///
/// Classification is by explicit code-point range: digits, uppercase letters,
/// lowercase letters. No Unicode word characters, no underscores, no locale
/// awareness; anything outside these three ranges is a token boundary.
fn is_ascii_alphanumeric(c: char) -> bool {
    let v = c as u32;
    (48..=57).contains(&v) || (65..=90).contains(&v) || (97..=122).contains(&v)
}

/// Tokenizes text into lowercase alphanumeric tokens
///
/// The input is split on whitespace into words. A word composed entirely of
/// ASCII alphanumeric characters becomes one token; a word containing any
/// other character is split at every non-alphanumeric boundary and each
/// non-empty fragment becomes its own token. All tokens are lowercased.
///
/// The result is a fully materialized vector, never a lazy iterator.
///
/// # Arguments
///
/// * `text` - The text to tokenize
///
/// # Examples
///
/// ```
/// use zot_scrape::text::tokenize;
///
/// let tokens = tokenize("Hello, world! foo_bar");
/// assert_eq!(tokens, vec!["hello", "world", "foo", "bar"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for word in text.split_whitespace() {
        if word.chars().all(is_ascii_alphanumeric) {
            tokens.push(word.to_ascii_lowercase());
        } else {
            split_word(word, &mut tokens);
        }
    }

    tokens
}

/// Splits a word containing non-alphanumeric characters into its
/// alphanumeric fragments, appending each non-empty fragment as a token
fn split_word(word: &str, tokens: &mut Vec<String>) {
    let mut fragment = String::new();

    for c in word.chars() {
        if is_ascii_alphanumeric(c) {
            fragment.push(c.to_ascii_lowercase());
        } else if !fragment.is_empty() {
            tokens.push(std::mem::take(&mut fragment));
        }
    }

    if !fragment.is_empty() {
        tokens.push(fragment);
    }
}

/// Aggregates tokens into a case-folded frequency table
///
/// # Arguments
///
/// * `tokens` - The token sequence to count
///
/// # Returns
///
/// A mapping from lowercase token to occurrence count
pub fn compute_word_frequencies<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, u64> {
    let mut frequencies = HashMap::new();

    for token in tokens {
        *frequencies
            .entry(token.as_ref().to_lowercase())
            .or_insert(0) += 1;
    }

    frequencies
}

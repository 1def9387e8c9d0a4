/// Splits text into display tokens on runs of whitespace.
///
/// Tokens are exact substrings of the input: no case folding, no punctuation
/// stripping. Leading, trailing, and repeated whitespace produce no tokens,
/// so the result never contains an empty string.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

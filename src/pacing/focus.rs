use unicode_segmentation::UnicodeSegmentation;

/// A token split around its focus point for single-token display.
///
/// The pivot sits at index `len / 2` of the token's grapheme clusters, so a
/// renderer can highlight it and keep it at a fixed column without knowing
/// anything about fonts or layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSplit {
    pub prefix: String,
    pub pivot: String,
    pub suffix: String,
}

/// Splits a token into (prefix, pivot, suffix) around the center grapheme.
///
/// - "reading" (7 graphemes, pivot index 3) -> ("rea", "d", "ing")
/// - single-grapheme tokens have empty prefix and suffix
/// - the empty token yields three empty parts (the tokenizer never produces
///   one, but the split stays total)
pub fn split_at_pivot(token: &str) -> FocusSplit {
    let graphemes: Vec<&str> = token.graphemes(true).collect();
    if graphemes.is_empty() {
        return FocusSplit {
            prefix: String::new(),
            pivot: String::new(),
            suffix: String::new(),
        };
    }

    let pivot_index = graphemes.len() / 2;
    FocusSplit {
        prefix: graphemes[..pivot_index].concat(),
        pivot: graphemes[pivot_index].to_string(),
        suffix: graphemes[pivot_index + 1..].concat(),
    }
}

// Korean-aware name ordering for company listings
use std::cmp::Ordering;

/// Character classes in the order the Korean locale sorts them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Symbol,
    Digit,
    Hangul,
    Latin,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '0'..='9' => CharClass::Digit,
        'a'..='z' | 'A'..='Z' => CharClass::Latin,
        // Compatibility jamo, then precomposed syllables
        '\u{3131}'..='\u{318E}' | '\u{AC00}'..='\u{D7A3}' => CharClass::Hangul,
        c if c.is_whitespace() || c.is_ascii_punctuation() => CharClass::Symbol,
        _ => CharClass::Other,
    }
}

fn sort_key(c: char) -> (CharClass, char) {
    (classify(c), c.to_ascii_lowercase())
}

/// Compare two names the way a Korean-locale collator would for our data
///
/// Symbols < digits < Hangul < Latin (case-insensitive) < everything else.
/// Hangul syllables are encoded in dictionary order, so code point order
/// within the class is the right order. Names that only differ by case
/// put the lowercase letter first.
pub fn korean_cmp(a: &str, b: &str) -> Ordering {
    let primary = a.chars().map(sort_key).cmp(b.chars().map(sort_key));
    primary.then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
}

fn case_key(c: char) -> (bool, char) {
    (c.is_uppercase(), c)
}

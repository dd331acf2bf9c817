//! Letter-level word tests.
//!
//! All helpers expect a canonical (lower-case) word and operate on `char`s.

use std::collections::HashSet;

/// Returns true for `a`, `e`, `i`, `o`, `u`.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Returns true for alphabetic characters that are not vowels (`y` included).
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

pub fn count_consonants(word: &str) -> usize {
    word.chars().filter(|&c| is_consonant(c)).count()
}

/// Returns true when two adjacent characters are equal (`"letter"`).
pub fn has_double_letters(word: &str) -> bool {
    word.chars().zip(word.chars().skip(1)).any(|(a, b)| a == b)
}

/// Returns true when any character occurs more than once.
pub fn has_repeated_letters(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().any(|c| !seen.insert(c))
}

/// Returns true when letters alternate vowel/consonant, starting from the
/// class of the first letter.
///
/// Position parity is taken over every character; non-alphabetic characters
/// are skipped but still occupy their position. Words of one character or
/// fewer trivially alternate.
pub fn is_alternating(word: &str) -> bool {
    let mut chars = word.chars().peekable();
    let Some(&first) = chars.peek() else {
        return true;
    };
    let vowel_start = is_vowel(first);

    chars.enumerate().all(|(i, c)| {
        if !is_vowel(c) && !is_consonant(c) {
            return true;
        }
        let should_be_vowel = (i % 2 == 0) == vowel_start;
        if should_be_vowel { is_vowel(c) } else { is_consonant(c) }
    })
}

/// Returns true when characters never decrease (`"billowy"`, `"abc"`).
pub fn is_alphabetical(word: &str) -> bool {
    word.chars().zip(word.chars().skip(1)).all(|(a, b)| a <= b)
}

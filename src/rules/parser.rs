use log::warn;

use crate::PredicateSpec;
use crate::error::{Error, RULE_COUNT, Result};
use crate::lexicon::Category;

/// Fixed aliases, checked before any numeric pattern.
fn alias(token: &str) -> Option<PredicateSpec> {
    let spec = match token {
        "noun" => PredicateSpec::PartOfSpeech(Category::Noun),
        "verb" => PredicateSpec::PartOfSpeech(Category::Verb),
        "adjective" | "adj" => PredicateSpec::PartOfSpeech(Category::Adjective),
        "adverb" | "adv" => PredicateSpec::PartOfSpeech(Category::Adverb),
        "double-letters" | "double" => PredicateSpec::DoubleLetters,
        "no-repeats" | "no-repeated" => PredicateSpec::NoRepeatedLetters,
        "alternating" | "alt" => PredicateSpec::Alternating,
        "alphabetical" | "alpha" => PredicateSpec::Alphabetical,
        _ => return None,
    };
    Some(spec)
}

/// `<N>-letter` / `<N>-letters`.
fn length_rule(token: &str) -> Option<PredicateSpec> {
    let caps = regex!(r"^(\d+)-letters?$").captures(token)?;
    caps[1].parse().ok().map(PredicateSpec::Length)
}

/// `<N>-vowel(s)` / `<N>-consonant(s)`.
fn letter_class_rule(token: &str) -> Option<PredicateSpec> {
    let caps = regex!(r"^(\d+)-(vowels?|consonants?)$").captures(token)?;
    let count = caps[1].parse().ok()?;
    if caps[2].starts_with('v') { Some(PredicateSpec::Vowels(count)) } else { Some(PredicateSpec::Consonants(count)) }
}

fn recognise(token: &str) -> Option<PredicateSpec> {
    alias(token).or_else(|| length_rule(token)).or_else(|| letter_class_rule(token))
}

/// Parse a rule token. Case and surrounding whitespace are ignored.
///
/// Unrecognised tokens fall back to [`PredicateSpec::Unconstrained`], which
/// matches every word; a warning is logged so the fallback is visible.
pub fn parse_rule(token: &str) -> PredicateSpec {
    let normalized = token.trim().to_lowercase();
    recognise(&normalized).unwrap_or_else(|| {
        warn!("unrecognised rule '{}' matches every word", token.trim());
        PredicateSpec::Unconstrained
    })
}

/// Like [`parse_rule`], but an unrecognised token is an error.
pub fn parse_rule_strict(token: &str) -> Result<PredicateSpec> {
    let normalized = token.trim().to_lowercase();
    recognise(&normalized).ok_or_else(|| Error::UnknownRule(token.trim().to_string()))
}

/// Parse the three stage rules of a cycle search.
pub fn parse_rules<S: AsRef<str>>(tokens: &[S], strict: bool) -> Result<[PredicateSpec; RULE_COUNT]> {
    if tokens.len() != RULE_COUNT {
        return Err(Error::rule_count(tokens.len()));
    }
    let parse = |t: &S| if strict { parse_rule_strict(t.as_ref()) } else { Ok(parse_rule(t.as_ref())) };
    Ok([parse(&tokens[0])?, parse(&tokens[1])?, parse(&tokens[2])?])
}

/// Split a comma-separated rule list (`"noun, 6-letters,double"`) into tokens.
pub fn parse_rule_list(list: &str) -> Vec<String> {
    list.split(',').map(|t| t.trim().to_string()).collect()
}

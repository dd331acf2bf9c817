//! The lexicon: the corpus searched for cycle words.
//!
//! A [`Lexicon`] is an explicitly constructed, immutable value. It holds the
//! canonical (lower-case, trimmed, deduplicated) word list in ascending order
//! plus an optional part-of-speech classification per word.
//!
//! ```text
//! popular.txt ──┐
//!               ├─ Lexicon::load ──▶ words: [a, aback, abandon, ...]
//! nouns.txt  ───┤                    tags:  abandon -> VERB | NOUN
//! verbs.txt  ───┤
//! ...        ───┘
//! ```
//!
//! Category data is optional. When none was supplied, part-of-speech
//! predicates simply never match; the lexicon itself does not treat that as
//! an error. Missing category files are reported by the loader (as a log
//! warning), never by the search.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use crate::error::{Error, Result};

/// A part-of-speech category a word may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Noun, Category::Verb, Category::Adjective, Category::Adverb];

    pub fn name(self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
        }
    }

    /// File holding this category's word list, e.g. `nouns.txt`.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Noun => "nouns.txt",
            Category::Verb => "verbs.txt",
            Category::Adjective => "adjectives.txt",
            Category::Adverb => "adverbs.txt",
        }
    }

    fn flag(self) -> CategorySet {
        match self {
            Category::Noun => CategorySet::NOUN,
            Category::Verb => CategorySet::VERB,
            Category::Adjective => CategorySet::ADJECTIVE,
            Category::Adverb => CategorySet::ADVERB,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "noun" => Ok(Category::Noun),
            "verb" => Ok(Category::Verb),
            "adjective" | "adj" => Ok(Category::Adjective),
            "adverb" | "adv" => Ok(Category::Adverb),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// Set of categories a single word is tagged with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CategorySet: u8 {
        const NOUN      = 1 << 0;
        const VERB      = 1 << 1;
        const ADJECTIVE = 1 << 2;
        const ADVERB    = 1 << 3;
    }
}

impl CategorySet {
    pub fn has(self, category: Category) -> bool {
        self.contains(category.flag())
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        category.flag()
    }
}

/// Canonical form of a word: trimmed and lower-cased. Returns `None` for blank input.
pub fn canonical(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Unique canonical words, ascending.
    words: Vec<String>,
    /// Category tags for words that have any.
    tags: HashMap<String, CategorySet>,
    /// Categories for which a word list was supplied (even an empty one).
    loaded: CategorySet,
}

impl Lexicon {
    /// A lexicon with no words and no category data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a lexicon from raw words. Blank entries are dropped; duplicates
    /// (after case folding) collapse to one.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = words.into_iter().filter_map(|w| canonical(w.as_ref())).collect();
        Lexicon { words: unique.into_iter().collect(), tags: HashMap::new(), loaded: CategorySet::empty() }
    }

    /// Tag `words` with `category`, returning the updated lexicon. Words not in
    /// the lexicon are ignored.
    pub fn with_category<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tag(category, words);
        self
    }

    fn tag<I, S>(&mut self, category: Category, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.loaded |= category.flag();
        for word in words.into_iter().filter_map(|w| canonical(w.as_ref())) {
            if self.words.binary_search(&word).is_ok() {
                *self.tags.entry(word).or_default() |= category.flag();
            }
        }
    }

    /// Load a newline-delimited word list plus any category lists found in
    /// `pos_dir` (defaults to the word list's directory).
    ///
    /// A missing or empty word list is an error. Missing category files are
    /// logged and skipped: part-of-speech rules then never match for that
    /// category.
    pub fn load(words_path: impl AsRef<Path>, pos_dir: Option<&Path>) -> Result<Self> {
        let words_path = words_path.as_ref();
        let text = fs::read_to_string(words_path).map_err(|e| Error::io(words_path, e))?;
        let mut lexicon = Lexicon::new(text.lines());
        if lexicon.is_empty() {
            return Err(Error::EmptyLexicon { path: words_path.to_path_buf() });
        }
        info!("loaded {} words from {}", lexicon.len(), words_path.display());

        let pos_dir = pos_dir.or_else(|| words_path.parent()).unwrap_or_else(|| Path::new("."));
        for category in Category::ALL {
            let path = pos_dir.join(category.file_name());
            match fs::read_to_string(&path) {
                Ok(text) => {
                    lexicon.tag(category, text.lines());
                    info!("loaded {} {} tags from {}", lexicon.category_len(category), category, path.display());
                }
                Err(err) => {
                    warn!("{} rules will never match: cannot read {}: {}", category, path.display(), err);
                }
            }
        }

        Ok(lexicon)
    }

    /// All words, in ascending order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        canonical(word).is_some_and(|w| self.words.binary_search(&w).is_ok())
    }

    /// Categories `word` is tagged with; empty when untagged or when no
    /// category data was loaded.
    pub fn categories(&self, word: &str) -> CategorySet {
        if let Some(set) = self.tags.get(word) {
            return *set;
        }
        canonical(word).and_then(|w| self.tags.get(&w).copied()).unwrap_or_default()
    }

    pub fn in_category(&self, word: &str, category: Category) -> bool {
        self.categories(word).has(category)
    }

    /// Whether any category list was supplied at all.
    pub fn has_categories(&self) -> bool {
        !self.loaded.is_empty()
    }

    /// Number of words tagged with `category`.
    pub fn category_len(&self, category: Category) -> usize {
        self.tags.values().filter(|set| set.has(category)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn new_canonicalises_and_sorts() {
        let lexicon = Lexicon::new(["Tart", " start ", "", "tart", "ARTSY"]);
        assert_eq!(lexicon.words(), &["artsy", "start", "tart"]);
        assert!(lexicon.contains("START"));
        assert!(!lexicon.contains("style"));
    }

    #[test]
    fn categories_degrade_to_empty_without_tag_data() {
        let lexicon = Lexicon::new(["run", "quickly"]);
        assert!(!lexicon.has_categories());
        assert!(lexicon.categories("run").is_empty());
        assert!(!lexicon.in_category("run", Category::Verb));
    }

    #[test]
    fn words_can_carry_several_categories() {
        let lexicon = Lexicon::new(["run", "quickly"])
            .with_category(Category::Verb, ["run"])
            .with_category(Category::Noun, ["Run"])
            .with_category(Category::Adverb, ["quickly"]);

        assert!(lexicon.has_categories());
        assert_eq!(lexicon.categories("run"), CategorySet::VERB | CategorySet::NOUN);
        assert!(lexicon.in_category("QUICKLY", Category::Adverb));
        assert_eq!(lexicon.category_len(Category::Noun), 1);
    }

    #[test]
    fn category_names_parse_with_aliases() {
        assert_eq!("Adj".parse::<Category>().unwrap(), Category::Adjective);
        assert_eq!(" adverb ".parse::<Category>().unwrap(), Category::Adverb);
        assert!(matches!("pronoun".parse::<Category>(), Err(Error::UnknownCategory(_))));
    }

    #[test]
    fn load_reads_word_list_and_available_category_files() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("popular.txt");
        let mut file = fs::File::create(&words_path).unwrap();
        writeln!(file, "Apple\nbanana\n\n  cherry  \napple").unwrap();
        fs::write(dir.path().join("nouns.txt"), "apple\nbanana\ndurian\nelderberry\n").unwrap();

        let lexicon = Lexicon::load(&words_path, None).unwrap();
        assert_eq!(lexicon.words(), &["apple", "banana", "cherry"]);
        assert!(lexicon.in_category("banana", Category::Noun));
        // Category entries outside the word list are not counted.
        assert_eq!(lexicon.category_len(Category::Noun), 2);
        assert!(lexicon.categories("durian").is_empty());
        assert!(!lexicon.in_category("banana", Category::Verb));
        assert_eq!(lexicon.category_len(Category::Verb), 0);
    }

    #[test]
    fn load_rejects_missing_and_empty_word_lists() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(Lexicon::load(&missing, None), Err(Error::Io { .. })));

        let blank = dir.path().join("blank.txt");
        fs::write(&blank, "\n \n").unwrap();
        assert!(matches!(Lexicon::load(&blank, None), Err(Error::EmptyLexicon { .. })));
    }
}

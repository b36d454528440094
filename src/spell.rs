//! Spelling checker that generates suggestions by mutating a misspelled word and probing a
//! lexicon.

use crate::set::Set;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A spelling checker backed by a lexicon of correctly spelled words.
///
/// The checker borrows a lexicon implementing [`Set`](crate::set::Set) and probes it to verify
/// spellings and to generate suggestions. Suggestions are produced by applying five classes of
/// mutations to the misspelled word and keeping the candidates found in the lexicon: swapping
/// each pair of adjacent characters, inserting each letter of the alphabet at each position,
/// deleting each character, replacing each character with each letter of the alphabet, and
/// splitting the word into two words at each position. The classes are applied in that order
/// and each candidate appears at most once, at the position of its first discovery.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use wordset::set::Set;
/// use wordset::spell::SpellChecker;
///
/// let mut lexicon = BTreeSet::new();
/// lexicon.add(String::from("word"));
///
/// let checker = SpellChecker::new(&lexicon);
///
/// assert!(checker.check("word"));
/// assert!(!checker.check("wrod"));
/// assert_eq!(checker.suggestions("wrod"), vec![String::from("word")]);
/// ```
pub struct SpellChecker<'a, S> {
    lexicon: &'a S,
}

impl<'a, S> SpellChecker<'a, S> {
    /// Constructs a new `SpellChecker` that looks up words in the given lexicon.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use wordset::spell::SpellChecker;
    ///
    /// let lexicon: BTreeSet<String> = BTreeSet::new();
    /// let checker = SpellChecker::new(&lexicon);
    /// ```
    pub fn new(lexicon: &'a S) -> Self {
        SpellChecker { lexicon }
    }

    /// Checks if a word is spelled correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use wordset::set::Set;
    /// use wordset::spell::SpellChecker;
    ///
    /// let mut lexicon = BTreeSet::new();
    /// lexicon.add(String::from("hello"));
    ///
    /// let checker = SpellChecker::new(&lexicon);
    /// assert!(checker.check("hello"));
    /// assert!(!checker.check("helo"));
    /// ```
    pub fn check(&self, word: &str) -> bool
    where
        S: Set<String>,
    {
        self.lexicon.contains(&String::from(word))
    }

    /// Returns suggested alternative spellings for a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use wordset::set::Set;
    /// use wordset::spell::SpellChecker;
    ///
    /// let mut lexicon = BTreeSet::new();
    /// lexicon.add(String::from("hot"));
    /// lexicon.add(String::from("dog"));
    ///
    /// let checker = SpellChecker::new(&lexicon);
    /// assert_eq!(
    ///     checker.suggestions("hotdog"),
    ///     vec![String::from("hot"), String::from("dog")],
    /// );
    /// ```
    pub fn suggestions(&self, word: &str) -> Vec<String>
    where
        S: Set<String>,
    {
        let chars = word.chars().collect::<Vec<char>>();
        let mut suggestions = Vec::new();
        self.add_swaps(&mut suggestions, &chars);
        self.add_insertions(&mut suggestions, &chars);
        self.add_deletions(&mut suggestions, &chars);
        self.add_replacements(&mut suggestions, &chars);
        self.add_splits(&mut suggestions, &chars);
        suggestions
    }

    fn push_candidate(&self, suggestions: &mut Vec<String>, candidate: String)
    where
        S: Set<String>,
    {
        if self.lexicon.contains(&candidate) && !suggestions.contains(&candidate) {
            suggestions.push(candidate);
        }
    }

    fn add_swaps(&self, suggestions: &mut Vec<String>, chars: &[char])
    where
        S: Set<String>,
    {
        for index in 1..chars.len() {
            let mut candidate = chars.to_vec();
            candidate.swap(index - 1, index);
            self.push_candidate(suggestions, candidate.into_iter().collect());
        }
    }

    fn add_insertions(&self, suggestions: &mut Vec<String>, chars: &[char])
    where
        S: Set<String>,
    {
        for index in 0..=chars.len() {
            for letter in ALPHABET.chars() {
                let mut candidate = chars.to_vec();
                candidate.insert(index, letter);
                self.push_candidate(suggestions, candidate.into_iter().collect());
            }
        }
    }

    fn add_deletions(&self, suggestions: &mut Vec<String>, chars: &[char])
    where
        S: Set<String>,
    {
        for index in 0..chars.len() {
            let mut candidate = chars.to_vec();
            candidate.remove(index);
            self.push_candidate(suggestions, candidate.into_iter().collect());
        }
    }

    fn add_replacements(&self, suggestions: &mut Vec<String>, chars: &[char])
    where
        S: Set<String>,
    {
        for index in 0..chars.len() {
            for letter in ALPHABET.chars() {
                let mut candidate = chars.to_vec();
                candidate[index] = letter;
                self.push_candidate(suggestions, candidate.into_iter().collect());
            }
        }
    }

    // Both halves have to be words for a split to be suggested, and then both are suggested.
    fn add_splits(&self, suggestions: &mut Vec<String>, chars: &[char])
    where
        S: Set<String>,
    {
        for index in 1..chars.len() {
            let prefix = chars[..index].iter().collect::<String>();
            let suffix = chars[index..].iter().collect::<String>();
            if self.lexicon.contains(&prefix) && self.lexicon.contains(&suffix) {
                if !suggestions.contains(&prefix) {
                    suggestions.push(prefix);
                }
                if !suggestions.contains(&suffix) {
                    suggestions.push(suffix);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SpellChecker;
    use crate::avl_tree::AvlSet;
    use crate::chained_hash::ChainedHashSet;
    use crate::set::Set;
    use std::collections::{BTreeSet, HashSet};

    fn lexicon_of(words: &[&str]) -> BTreeSet<String> {
        let mut lexicon = BTreeSet::new();
        for word in words {
            lexicon.add(String::from(*word));
        }
        lexicon
    }

    fn suggestions_of(lexicon: &[&str], word: &str) -> Vec<String> {
        let lexicon = lexicon_of(lexicon);
        SpellChecker::new(&lexicon).suggestions(word)
    }

    #[test]
    fn test_check() {
        let lexicon = lexicon_of(&["hello"]);
        let checker = SpellChecker::new(&lexicon);

        assert!(checker.check("hello"));
        assert!(!checker.check("helo"));
        assert!(!checker.check(""));
    }

    #[test]
    fn test_swap() {
        assert_eq!(suggestions_of(&["word"], "wrod"), vec!["word"]);
    }

    #[test]
    fn test_insertion() {
        assert_eq!(suggestions_of(&["word"], "wrd"), vec!["word"]);
    }

    #[test]
    fn test_deletion() {
        assert_eq!(suggestions_of(&["word"], "woord"), vec!["word"]);
    }

    #[test]
    fn test_replacement() {
        assert_eq!(suggestions_of(&["word"], "ward"), vec!["word"]);
    }

    #[test]
    fn test_split() {
        assert_eq!(suggestions_of(&["hot", "dog"], "hotdog"), vec!["hot", "dog"]);
    }

    #[test]
    fn test_split_requires_both_halves() {
        assert!(suggestions_of(&["hot"], "hotdg").is_empty());
    }

    #[test]
    fn test_class_order() {
        // "ace" by swapping, then "care" by insertion, then "car" by replacement.
        assert_eq!(
            suggestions_of(&["ace", "care", "car"], "cae"),
            vec!["ace", "care", "car"],
        );
    }

    #[test]
    fn test_no_duplicates() {
        // Deleting either 'o' of "woord" yields "word".
        let suggestions = suggestions_of(&["word"], "woord");
        assert_eq!(suggestions, vec!["word"]);
    }

    #[test]
    fn test_correct_word_suggests_itself() {
        // Replacing a character with itself reproduces the word.
        assert_eq!(suggestions_of(&["ab"], "ab"), vec!["ab"]);
    }

    #[test]
    fn test_empty_word() {
        // Only insertions apply, in alphabet order.
        assert_eq!(suggestions_of(&["a", "I"], ""), vec!["a", "I"]);
    }

    #[test]
    fn test_no_suggestions() {
        assert!(suggestions_of(&["word"], "zzz").is_empty());
    }

    #[test]
    fn test_backends_agree() {
        let words = ["word", "ward", "wood", "sword", "care", "car"];
        let expected = suggestions_of(&words, "wrd");

        let mut avl_set = AvlSet::new();
        let mut chained_hash_set = ChainedHashSet::new();
        let mut hash_set = HashSet::new();
        for word in &words {
            avl_set.add(String::from(*word));
            chained_hash_set.add(String::from(*word));
            hash_set.add(String::from(*word));
        }

        assert_eq!(SpellChecker::new(&avl_set).suggestions("wrd"), expected);
        assert_eq!(
            SpellChecker::new(&chained_hash_set).suggestions("wrd"),
            expected,
        );
        assert_eq!(SpellChecker::new(&hash_set).suggestions("wrd"), expected);
    }
}

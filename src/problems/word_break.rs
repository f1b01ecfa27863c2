//! Dictionary word segmentation as a rolling DP over prefix boundaries.
//!
//! Layers are char boundaries of the input: the step for layer `l` decides
//! whether the prefix of `l + 1` chars can be covered by dictionary words.
//! It scans earlier boundaries `j` in increasing order and stops at the first
//! one that is itself segmentable and whose slice `s[j..i]` is a word.
//! Boundaries further back than the longest dictionary word are skipped,
//! which bounds the work at O(n·k).
//!
//! The frontier is the whole prefix table. Each reachable entry keeps the
//! boundary it was reached from, so a segmentation can be read back without
//! a second pass.

use std::collections::HashSet;
use std::convert::Infallible;

use crate::traits::RollingProblem;
use crate::RollingEngine;

/// A deduplicated set of non-empty words.
///
/// Empty words are dropped on construction: an empty slice would "match" at
/// every boundary without consuming input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
    max_word_chars: usize,
}

impl Dictionary {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("ignoring empty dictionary word");
            return;
        }
        self.max_word_chars = self.max_word_chars.max(word.chars().count());
        self.words.insert(word.to_owned());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, in chars.
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// Whether `text` can be covered exactly by words of this dictionary.
    pub fn can_segment(&self, text: &str) -> bool {
        let problem = WordBreak::new(text, self);
        match RollingEngine::new(problem).run() {
            Ok(found) => found,
            Err(never) => match never {},
        }
    }

    /// One segmentation of `text`, or `None` if there is none.
    ///
    /// Each boundary remembers the earliest start that completes a word there,
    /// and the words are read back from the end along those choices.
    pub fn segment<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        let problem = WordBreak::new(text, self);
        let engine = RollingEngine::new(problem);
        let table = match engine.final_frontier() {
            Ok(table) => table,
            Err(never) => match never {},
        };
        engine.problem().words(&table)
    }
}

impl<W: AsRef<str>> FromIterator<W> for Dictionary {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A segmentation instance: input text plus the dictionary it is checked
/// against.
#[derive(Clone, Debug)]
pub struct WordBreak<'t, 'd> {
    text: &'t str,
    dictionary: &'d Dictionary,
    /// Byte offset of every char boundary, including `text.len()`.
    bounds: Vec<usize>,
}

/// Prefix table: `from[i]` is `Some(j)` when the first `i` chars are
/// segmentable and the last word spans boundaries `j..i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentTable {
    pub from: Vec<Option<usize>>, // length = chars + 1
}

impl SegmentTable {
    /// Whether the prefix of `chars` chars is segmentable.
    pub fn is_segmentable(&self, chars: usize) -> bool {
        self.from.get(chars).is_some_and(Option::is_some)
    }

    /// Number of segmentable prefixes seen so far, the empty one included.
    ///
    /// Cheap to keep per checkpoint, unlike the table itself.
    pub fn segmentable_prefixes(&self) -> usize {
        self.from.iter().filter(|entry| entry.is_some()).count()
    }
}

impl<'t, 'd> WordBreak<'t, 'd> {
    pub fn new(text: &'t str, dictionary: &'d Dictionary) -> Self {
        let bounds = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            dictionary,
            bounds,
        }
    }

    /// Length of the text in chars.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn slice(&self, from: usize, to: usize) -> &'t str {
        &self.text[self.bounds[from]..self.bounds[to]]
    }

    /// Follow back-pointers from the last boundary to recover the words.
    pub fn words(&self, table: &SegmentTable) -> Option<Vec<&'t str>> {
        let mut i = self.len();
        let mut words = Vec::new();
        while i > 0 {
            let j = table.from[i]?;
            words.push(self.slice(j, i));
            i = j;
        }
        words.reverse();
        Some(words)
    }
}

impl RollingProblem for WordBreak<'_, '_> {
    type Frontier = SegmentTable;
    type Output = bool;
    type Error = Infallible;

    fn num_layers(&self) -> usize {
        self.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        let mut from = vec![None; self.len() + 1];
        // the empty prefix needs no words
        from[0] = Some(0);
        SegmentTable { from }
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) -> Result<(), Infallible> {
        let i = layer + 1;
        let k = self.dictionary.max_word_chars();
        let lo = if k == 0 { i } else { i.saturating_sub(k) };
        let start = (lo..i)
            .find(|&j| frontier.from[j].is_some() && self.dictionary.contains(self.slice(j, i)));
        frontier.from[i] = start;
        Ok(())
    }

    fn extract(&self, frontier: &Self::Frontier) -> Self::Output {
        frontier.is_segmentable(self.len())
    }
}

/// Whether `text` can be covered exactly by words from `words`.
///
/// Duplicate and empty words are ignored; an empty `text` is always
/// segmentable.
///
/// ```
/// use rolling_dp::can_segment;
///
/// assert!(can_segment("leetcode", ["leet", "code"]));
/// assert!(!can_segment("catsandog", ["cats", "dog", "sand", "and", "cat"]));
/// ```
pub fn can_segment<I, W>(text: &str, words: I) -> bool
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    Dictionary::new(words).can_segment(text)
}

/// One segmentation of `text` into words of `dictionary`.
pub fn segment<'t>(text: &'t str, dictionary: &Dictionary) -> Option<Vec<&'t str>> {
    dictionary.segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_cases() {
        assert!(can_segment("leetcode", ["leet", "code"]));
        assert!(can_segment("applepenapple", ["apple", "pen"]));
        assert!(!can_segment("catsandog", ["cats", "dog", "sand", "and", "cat"]));
        assert!(can_segment("", ["a"]));
        assert!(can_segment("aaaaaaa", ["aaaa", "aaa"]));
    }

    #[test]
    fn empty_text_and_empty_dictionary() {
        let empty = Dictionary::default();
        assert!(empty.can_segment(""));
        assert!(!empty.can_segment("a"));
        assert_eq!(empty.segment(""), Some(vec![]));
    }

    #[test]
    fn empty_words_are_dropped() {
        let dict = Dictionary::new(["", "ab", "", "ab"]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.max_word_chars(), 2);
        assert!(!dict.contains(""));
        assert!(!dict.can_segment("abc"));
        assert!(dict.can_segment("abab"));

        let only_empty = Dictionary::new([""]);
        assert!(only_empty.is_empty());
        assert!(!only_empty.can_segment("x"));
    }

    #[test]
    fn segment_recovers_words() {
        let dict: Dictionary = ["apple", "pen"].into_iter().collect();
        assert_eq!(
            dict.segment("applepenapple"),
            Some(vec!["apple", "pen", "apple"])
        );
        let dict = Dictionary::new(["cats", "dog", "sand", "and", "cat"]);
        assert_eq!(dict.segment("catsandog"), None);
        assert_eq!(dict.segment("catsanddog"), Some(vec!["cat", "sand", "dog"]));
    }

    #[test]
    fn first_match_wins_in_table() {
        // prefix of 7 chars: j=3 ("aaa" + "aaaa") is found before j=4
        let dict = Dictionary::new(["aaaa", "aaa"]);
        let problem = WordBreak::new("aaaaaaa", &dict);
        let table = RollingEngine::new(problem.clone()).final_frontier().unwrap();
        assert_eq!(table.from[7], Some(3));
        assert!(!table.is_segmentable(1));
        assert!(!table.is_segmentable(2));
        assert!(table.is_segmentable(3));
        assert!(!table.is_segmentable(5));
        assert_eq!(problem.words(&table), Some(vec!["aaa", "aaaa"]));
    }

    #[test]
    fn checkpoints_can_hold_prefix_counts() {
        let dict = Dictionary::new(["aaaa", "aaa"]);
        let problem = WordBreak::new("aaaaaaa", &dict);
        let engine = RollingEngine::with_block_size(problem, 3);
        let (found, checkpoints) = engine
            .run_with_checkpoint_summaries(SegmentTable::segmentable_prefixes)
            .unwrap();
        assert!(found);
        // segmentable prefixes: 0, 3, 4, 6, 7
        let counts: Vec<(usize, usize)> = checkpoints
            .iter()
            .map(|c| (c.layer, c.frontier))
            .collect();
        assert_eq!(counts, vec![(0, 1), (3, 2), (6, 4), (7, 5)]);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn empty_word_is_logged_at_debug() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let dict = tracing::subscriber::with_default(subscriber, || Dictionary::new(["", "a"]));
        assert_eq!(dict.len(), 1);

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("ignoring empty dictionary word"), "{logged}");
        assert!(logged.contains("DEBUG"), "{logged}");
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let dict = Dictionary::new(["привет", "мир", "🦀"]);
        assert_eq!(dict.max_word_chars(), 6);
        assert_eq!(
            dict.segment("привет🦀мир"),
            Some(vec!["привет", "🦀", "мир"])
        );
        assert!(!dict.can_segment("приветмир!"));
    }

    #[test]
    fn word_longer_than_text_never_matches() {
        assert!(!can_segment("ab", ["abc"]));
        assert!(can_segment("abc", ["abc", "abcdef"]));
    }
}

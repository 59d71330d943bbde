//! BIP-39 English word list
//!
//! The 2048-word table compiled into the `bip39` crate. It is a plain
//! `'static` array, so there is nothing to initialize or tear down and it
//! can be read from any thread.

use bip39::Language;

/// Number of words in the list (one per 11-bit index)
pub const WORDLIST_LEN: usize = 2048;

#[inline]
fn words() -> &'static [&'static str; WORDLIST_LEN] {
    Language::English.word_list()
}

/// Word for an 11-bit index
pub fn word_at(index: u16) -> Option<&'static str> {
    words().get(usize::from(index)).copied()
}

/// Index of a word, if it is in the list.
///
/// Exact match only (lowercase, no surrounding whitespace).
pub fn word_index(word: &str) -> Option<u16> {
    // The English list is sorted
    words()
        .binary_search_by(|probe| (*probe).cmp(word))
        .ok()
        .map(|index| index as u16)
}

/// Copy of the full word list, in index order
pub fn word_list() -> Vec<&'static str> {
    words().to_vec()
}

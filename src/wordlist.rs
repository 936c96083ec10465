//
// Copyright 2019 rust-wallet developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
//!
//! # Wordlist
//!
//! Maps 11 bit word indices to words and back.
//!

use bip39::Language;

/// number of bits a word encodes
pub const WORD_BITS: usize = 11;

/// number of words in a complete wordlist
pub const WORDLIST_LEN: usize = 1 << WORD_BITS;

/// an ordered, read-only word list
#[derive(Clone, Copy, Debug)]
pub struct Wordlist<'a> {
    words: &'a [&'a str]
}

impl Wordlist<'static> {
    /// the canonical BIP39 English word list
    pub fn english() -> Wordlist<'static> {
        Wordlist { words: &Language::English.word_list()[..] }
    }
}

impl<'a> Wordlist<'a> {
    /// wrap an alternate list; position in the slice is the word index
    pub fn new(words: &'a [&'a str]) -> Wordlist<'a> {
        Wordlist { words }
    }

    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.words.iter().position(|w| *w == word).map(|i| i as u16)
    }

    pub fn word_at(&self, index: u16) -> Option<&'a str> {
        self.words.get(index as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Wordlist<'static> {
    fn default() -> Self {
        Wordlist::english()
    }
}

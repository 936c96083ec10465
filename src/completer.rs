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
//! # Final word calculation
//!
//! Completes an 11 or 23 word phrase with the one final word that makes the
//! checksum valid.
//!
//! The final word carries the last 7 (12 words) or 3 (24 words) entropy bits
//! in front of the checksum. Those bits are unknown and taken to be zero: the
//! known words are followed by word 0, the entropy is read back out of the
//! padded phrase and encoded again, which yields the checksum.
//!

use encoder::{encode, entropy_from_indices, lookup, Strength};
use error::Error;
use wordlist::Wordlist;

/// index of the temporary final word
pub const PLACEHOLDER_INDEX: u16 = 0;

/// Complete a partial phrase. Of 12 or 24 words the last is dropped without
/// looking at it.
pub fn complete<S: AsRef<str>>(partial: &[S], wordlist: &Wordlist) -> Result<Vec<String>, Error> {
    let known = match partial.len() {
        11 | 23 => partial,
        12 | 24 => &partial[..partial.len() - 1],
        len => return Err(Error::InvalidPhraseLength(len))
    };
    let mut indices = lookup(known, wordlist)?;
    indices.push(PLACEHOLDER_INDEX);
    let strength = Strength::from_word_count(indices.len()).ok_or(Error::InvalidPhraseLength(partial.len()))?;
    debug!("calculating final word of a {} word phrase", strength.word_count());
    let entropy = entropy_from_indices(indices.as_slice(), strength)?;
    encode(&entropy, wordlist)
}

/// only the calculated final word
pub fn final_word<S: AsRef<str>>(partial: &[S], wordlist: &Wordlist) -> Result<String, Error> {
    let mut words = complete(partial, wordlist)?;
    words.pop().ok_or(Error::InvalidPhraseLength(0))
}

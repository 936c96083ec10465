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
//! # Entropy encoding
//!
//! BIP39 entropy to mnemonic conversion: the entropy is followed by the
//! leading ENT/32 bits of its SHA256 digest and the concatenation is cut into
//! 11 bit word indices.
//!

use bitcoin::util::bip158::{BitStreamWriter, BitStreamReader};
use crypto::digest::Digest;
use crypto::sha2::Sha256;
use error::Error;
use std::io::Cursor;
use wordlist::{Wordlist, WORD_BITS};

/// Standard entropy lengths, the discriminant is the length in bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strength {
    Words12 = 16,
    Words15 = 20,
    Words18 = 24,
    Words21 = 28,
    Words24 = 32
}

impl Strength {
    /// strength for an entropy buffer of `len` bytes
    pub fn from_entropy_len(len: usize) -> Result<Strength, Error> {
        match len {
            16 => Ok(Strength::Words12),
            20 => Ok(Strength::Words15),
            24 => Ok(Strength::Words18),
            28 => Ok(Strength::Words21),
            32 => Ok(Strength::Words24),
            _ => Err(Error::InvalidEntropyLength(len))
        }
    }

    /// strength for a complete phrase of `count` words
    pub fn from_word_count(count: usize) -> Option<Strength> {
        match count {
            12 => Some(Strength::Words12),
            15 => Some(Strength::Words15),
            18 => Some(Strength::Words18),
            21 => Some(Strength::Words21),
            24 => Some(Strength::Words24),
            _ => None
        }
    }

    pub fn entropy_bytes(self) -> usize {
        self as usize
    }

    pub fn entropy_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    pub fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn word_count(self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / WORD_BITS
    }
}

pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.input(data);
    let mut digest = [0u8; 32];
    hasher.result(&mut digest);
    digest
}

/// the checksum bits of an entropy buffer, right aligned
pub fn checksum(entropy: &[u8]) -> Result<u8, Error> {
    let strength = Strength::from_entropy_len(entropy.len())?;
    Ok(sha256(entropy)[0] >> (8 - strength.checksum_bits()))
}

/// word indices of the mnemonic encoding `entropy`
pub fn encode_indices(entropy: &[u8]) -> Result<Vec<u16>, Error> {
    let strength = Strength::from_entropy_len(entropy.len())?;
    let mut bytes = Vec::with_capacity(entropy.len() + 1);
    {
        let mut writer = BitStreamWriter::new(&mut bytes);
        for b in entropy {
            writer.write(*b as u64, 8)?;
        }
        writer.write(checksum(entropy)? as u64, strength.checksum_bits() as u8)?;
        writer.flush()?;
    }
    trace!("split {} entropy and {} checksum bits into {} words",
           strength.entropy_bits(), strength.checksum_bits(), strength.word_count());
    read_indices(bytes.as_slice(), strength.word_count())
}

/// mnemonic encoding `entropy`
pub fn encode(entropy: &[u8], wordlist: &Wordlist) -> Result<Vec<String>, Error> {
    encode_indices(entropy)?.iter().map(|index|
        wordlist.word_at(*index).map(|w| w.to_owned()).ok_or(Error::WordIndexOutOfRange(*index))
    ).collect()
}

/// Entropy carried by a complete phrase. The checksum bits are dropped unchecked.
pub fn decode<S: AsRef<str>>(words: &[S], wordlist: &Wordlist) -> Result<Vec<u8>, Error> {
    let strength = Strength::from_word_count(words.len()).ok_or(Error::InvalidPhraseLength(words.len()))?;
    let indices = lookup(words, wordlist)?;
    entropy_from_indices(indices.as_slice(), strength)
}

/// word indices of `words`, failing on the first word not in the list
pub fn lookup<S: AsRef<str>>(words: &[S], wordlist: &Wordlist) -> Result<Vec<u16>, Error> {
    words.iter().map(|w| {
        let w = w.as_ref();
        wordlist.index_of(w).ok_or_else(|| Error::UnknownWord(w.to_owned()))
    }).collect()
}

/// The leading `strength.entropy_bits()` of the 11 bit concatenation of `indices`.
pub fn entropy_from_indices(indices: &[u16], strength: Strength) -> Result<Vec<u8>, Error> {
    if indices.len() != strength.word_count() {
        return Err(Error::InvalidPhraseLength(indices.len()));
    }
    let mut bytes = Vec::with_capacity(strength.entropy_bytes() + 1);
    {
        let mut writer = BitStreamWriter::new(&mut bytes);
        for index in indices {
            writer.write(*index as u64, WORD_BITS as u8)?;
        }
        writer.flush()?;
    }
    bytes.truncate(strength.entropy_bytes());
    Ok(bytes)
}

// cut a bit string into 11 bit word indices
fn read_indices(bytes: &[u8], count: usize) -> Result<Vec<u16>, Error> {
    let mut cursor = Cursor::new(bytes);
    let mut reader = BitStreamReader::new(&mut cursor);
    let mut indices = Vec::with_capacity(count);
    for _ in 0..count {
        indices.push(reader.read(WORD_BITS as u8)? as u16);
    }
    Ok(indices)
}

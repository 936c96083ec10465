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
//! # Mnemonic generation
//!
//! Dice rolls, coin flips or raw bytes to a mnemonic, and the final word of a
//! partial phrase. The free functions use the English word list and the
//! default configuration.
//!

use coin::{digest_coin, reduce_coin, validate_flips};
use completer::complete;
use config::{CoinReduction, GeneratorConfig};
use dice::{reduce_dice, validate_rolls};
use encoder::{encode, Strength};
use error::Error;
use normalize::{normalize, PhraseInput};
use rand::{thread_rng, RngCore};
use wordlist::Wordlist;

/// converts entropy sources to mnemonics over one word list
#[derive(Clone, Debug)]
pub struct MnemonicGenerator<'a> {
    wordlist: Wordlist<'a>,
    config: GeneratorConfig
}

impl MnemonicGenerator<'static> {
    pub fn english() -> MnemonicGenerator<'static> {
        MnemonicGenerator::new(Wordlist::english(), GeneratorConfig::default())
    }
}

impl<'a> MnemonicGenerator<'a> {
    pub fn new(wordlist: Wordlist<'a>, config: GeneratorConfig) -> MnemonicGenerator<'a> {
        MnemonicGenerator { wordlist, config }
    }

    pub fn wordlist(&self) -> &Wordlist<'a> {
        &self.wordlist
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// a 12 word phrase from exactly `dice_rolls_12_word` rolls, 24 words otherwise
    pub fn from_dice(&self, rolls: &str) -> Result<Vec<String>, Error> {
        validate_rolls(rolls)?;
        let strength = self.config.dice_strength(rolls.len());
        self.config.policy.check_dice(rolls.len(), strength)?;
        let entropy = reduce_dice(rolls, strength)?;
        self.from_bytes(&entropy)
    }

    /// a 12 word phrase from 128 flips, 24 words from 256
    pub fn from_coin_flips(&self, flips: &str) -> Result<Vec<String>, Error> {
        let strength = validate_flips(flips)?;
        self.config.policy.check_coin(flips.len(), strength)?;
        let entropy = match self.config.coin_reduction {
            CoinReduction::Digest => digest_coin(flips)?,
            CoinReduction::Pack => reduce_coin(flips)?
        };
        self.from_bytes(&entropy)
    }

    pub fn from_bytes(&self, entropy: &[u8]) -> Result<Vec<String>, Error> {
        encode(entropy, &self.wordlist)
    }

    /// complete an 11 or 23 word phrase, a 12th or 24th word is replaced
    pub fn calculate_checksum<I: Into<PhraseInput>>(&self, partial: I) -> Result<Vec<String>, Error> {
        let words = normalize(partial);
        complete(&words, &self.wordlist)
    }

    /// a phrase from the thread RNG rather than a physical source
    pub fn random(&self, strength: Strength) -> Result<Vec<String>, Error> {
        let mut entropy = vec![0u8; strength.entropy_bytes()];
        thread_rng().fill_bytes(entropy.as_mut_slice());
        self.from_bytes(&entropy)
    }
}

impl Default for MnemonicGenerator<'static> {
    fn default() -> Self {
        MnemonicGenerator::english()
    }
}

pub fn generate_mnemonic_from_dice(rolls: &str) -> Result<Vec<String>, Error> {
    MnemonicGenerator::english().from_dice(rolls)
}

pub fn generate_mnemonic_from_coin_flips(flips: &str) -> Result<Vec<String>, Error> {
    MnemonicGenerator::english().from_coin_flips(flips)
}

pub fn generate_mnemonic_from_bytes(entropy: &[u8]) -> Result<Vec<String>, Error> {
    MnemonicGenerator::english().from_bytes(entropy)
}

pub fn calculate_checksum<I: Into<PhraseInput>>(partial: I) -> Result<Vec<String>, Error> {
    MnemonicGenerator::english().calculate_checksum(partial)
}

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
//! # Generator configuration
//!
//! How symbol sequences map to phrase lengths and how many physical symbols
//! are considered enough.
//!

#[cfg(feature = "use-serde")]
use serde::{Serialize, Deserialize};

use encoder::Strength;
use error::Error;

/// dice rolls for a 12 word phrase (~129 bits)
pub const DICE_NUM_ROLLS_12WORD: usize = 50;
/// dice rolls for a 24 word phrase (~256 bits)
pub const DICE_NUM_ROLLS_24WORD: usize = 99;
pub const COIN_NUM_FLIPS_12WORD: usize = 128;
pub const COIN_NUM_FLIPS_24WORD: usize = 256;

/// how coin flips become entropy
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub enum CoinReduction {
    /// SHA256 of the flip text, as reference tools compute it
    Digest,
    /// flips packed into bytes one bit each
    Pack
}

/// minimum symbol counts per phrase length
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct EntropyPolicy {
    pub dice_12: usize,
    pub dice_24: usize,
    pub coin_12: usize,
    pub coin_24: usize,
    /// reject short sequences, off by default
    pub enforce: bool
}

impl Default for EntropyPolicy {
    fn default() -> Self {
        EntropyPolicy {
            dice_12: DICE_NUM_ROLLS_12WORD,
            dice_24: DICE_NUM_ROLLS_24WORD,
            coin_12: COIN_NUM_FLIPS_12WORD,
            coin_24: COIN_NUM_FLIPS_24WORD,
            enforce: false
        }
    }
}

impl EntropyPolicy {
    pub fn enforcing() -> EntropyPolicy {
        EntropyPolicy { enforce: true, ..Default::default() }
    }

    pub fn check_dice(&self, rolls: usize, strength: Strength) -> Result<(), Error> {
        let required = match strength {
            Strength::Words12 => self.dice_12,
            _ => self.dice_24
        };
        self.check(required, rolls)
    }

    pub fn check_coin(&self, flips: usize, strength: Strength) -> Result<(), Error> {
        let required = match strength {
            Strength::Words12 => self.coin_12,
            _ => self.coin_24
        };
        self.check(required, flips)
    }

    fn check(&self, required: usize, supplied: usize) -> Result<(), Error> {
        if self.enforce && supplied < required {
            warn!("rejecting {} entropy symbols, policy requires {}", supplied, required);
            return Err(Error::InsufficientEntropy { required, supplied });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// exactly this many rolls give a 12 word phrase, any other count 24 words
    pub dice_rolls_12_word: usize,
    pub coin_reduction: CoinReduction,
    pub policy: EntropyPolicy
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dice_rolls_12_word: DICE_NUM_ROLLS_12WORD,
            coin_reduction: CoinReduction::Digest,
            policy: EntropyPolicy::default()
        }
    }
}

impl GeneratorConfig {
    /// phrase strength selected by a dice sequence of `rolls` symbols
    pub fn dice_strength(&self, rolls: usize) -> Strength {
        if rolls == self.dice_rolls_12_word {
            Strength::Words12
        } else {
            Strength::Words24
        }
    }
}

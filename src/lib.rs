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
//! # Mnemonics from physical entropy
//!
//! Turns dice rolls, coin flips or raw entropy bytes into BIP39 mnemonics and
//! calculates the final word of an 11 or 23 word phrase.
//!

#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(unused_must_use)]
#![forbid(unsafe_code)]

extern crate bip39;
extern crate bitcoin;
extern crate crypto;
extern crate rand;
#[macro_use] extern crate log;
#[cfg(feature = "use-serde")]
extern crate serde;
#[cfg(test)]
extern crate hex;
#[cfg(test)]
extern crate serde_json;

pub mod error;
pub mod wordlist;
pub mod encoder;
pub mod dice;
pub mod coin;
pub mod normalize;
pub mod completer;
pub mod config;
pub mod generator;

pub use error::Error;
pub use encoder::Strength;
pub use wordlist::Wordlist;
pub use normalize::PhraseInput;
pub use config::{CoinReduction, EntropyPolicy, GeneratorConfig};
pub use generator::{MnemonicGenerator, generate_mnemonic_from_dice, generate_mnemonic_from_coin_flips,
                    generate_mnemonic_from_bytes, calculate_checksum};

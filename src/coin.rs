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
//! # Coin flip entropy
//!
//! A fair coin flip is exactly one bit, so flips can be packed straight into
//! entropy bytes, most significant bit first. Reference tools hash the flip
//! text the same way dice rolls are hashed instead; both reductions are offered
//! and `config::CoinReduction` selects one.
//!

use bitcoin::util::bip158::BitStreamWriter;
use encoder::{sha256, Strength};
use error::Error;

/// Check that `flips` is 128 or 256 symbols from {0, 1}, returns the
/// strength the flips select.
pub fn validate_flips(flips: &str) -> Result<Strength, Error> {
    if let Some(c) = flips.chars().find(|c| *c != '0' && *c != '1') {
        return Err(Error::InvalidSymbol(Some(c)));
    }
    match flips.len() {
        128 => Ok(Strength::Words12),
        256 => Ok(Strength::Words24),
        len => Err(Error::InvalidLength(len))
    }
}

/// pack flips into entropy bytes, the first flip is the top bit of byte 0
pub fn reduce_coin(flips: &str) -> Result<Vec<u8>, Error> {
    let strength = validate_flips(flips)?;
    debug!("packing {} coin flips", flips.len());
    let mut entropy = Vec::with_capacity(strength.entropy_bytes());
    {
        let mut writer = BitStreamWriter::new(&mut entropy);
        for c in flips.bytes() {
            writer.write((c - b'0') as u64, 1)?;
        }
        writer.flush()?;
    }
    Ok(entropy)
}

/// SHA256 of the flip text, cut to one bit per flip
pub fn digest_coin(flips: &str) -> Result<Vec<u8>, Error> {
    let strength = validate_flips(flips)?;
    debug!("hashing {} coin flips", flips.len());
    Ok(sha256(flips.as_bytes())[..strength.entropy_bytes()].to_vec())
}

/// inverse of `reduce_coin`
pub fn unpack(entropy: &[u8]) -> String {
    let mut flips = String::with_capacity(entropy.len() * 8);
    for b in entropy {
        for i in (0..8).rev() {
            flips.push(if (b >> i) & 1 == 1 { '1' } else { '0' });
        }
    }
    flips
}

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
//! # Dice entropy
//!
//! A die roll does not carry a whole number of bits, so the rolls are not
//! packed but hashed: the SHA256 digest of the roll digits, read as text, is
//! the entropy. The digest is cut to the requested strength.
//!
//! Any non-empty sequence is accepted. How many rolls are enough is the
//! caller's decision, see `config::EntropyPolicy`.
//!

use encoder::{sha256, Strength};
use error::Error;

/// check that `rolls` is a non-empty string of the digits 1 to 6
pub fn validate_rolls(rolls: &str) -> Result<(), Error> {
    if rolls.is_empty() {
        return Err(Error::InvalidSymbol(None));
    }
    match rolls.chars().find(|c| *c < '1' || *c > '6') {
        Some(c) => Err(Error::InvalidSymbol(Some(c))),
        None => Ok(())
    }
}

/// Entropy of `strength` from a sequence of die rolls. The generator only asks
/// for 128 or 256 bits, the other strengths take the leading 20, 24 or 28
/// digest bytes the same way.
pub fn reduce_dice(rolls: &str, strength: Strength) -> Result<Vec<u8>, Error> {
    validate_rolls(rolls)?;
    debug!("hashing {} dice rolls into {} bits of entropy", rolls.len(), strength.entropy_bits());
    let digest = sha256(rolls.as_bytes());
    Ok(digest[..strength.entropy_bytes()].to_vec())
}

#[cfg(test)]
mod test {
    use super::reduce_dice;
    use encoder::Strength;
    use error::Error;
    use hex::encode;

    #[test]
    fn digest_of_roll_text() {
        let entropy = reduce_dice("123456", Strength::Words24).unwrap();
        assert_eq!(encode(&entropy), "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92");
        let short = reduce_dice("123456", Strength::Words12).unwrap();
        assert_eq!(&short[..], &entropy[..16]);
    }

    #[test]
    fn digest_prefix_per_strength() {
        let full = reduce_dice("123456", Strength::Words24).unwrap();
        for strength in [Strength::Words12, Strength::Words15, Strength::Words18, Strength::Words21].iter() {
            let entropy = reduce_dice("123456", *strength).unwrap();
            assert_eq!(entropy.len(), strength.entropy_bytes());
            assert_eq!(&entropy[..], &full[..strength.entropy_bytes()]);
        }
    }

    #[test]
    fn deterministic() {
        let rolls = "6".repeat(99);
        assert_eq!(reduce_dice(&rolls, Strength::Words24).unwrap(), reduce_dice(&rolls, Strength::Words24).unwrap());
        assert!(reduce_dice(&rolls, Strength::Words24).unwrap() != reduce_dice(&rolls[1..], Strength::Words24).unwrap());
    }

    #[test]
    fn any_length() {
        for len in 1..120 {
            assert_eq!(reduce_dice(&"3".repeat(len), Strength::Words12).unwrap().len(), 16);
        }
    }

    #[test]
    fn invalid_symbols() {
        for (rolls, bad) in [("1234560", '0'), ("12a", 'a'), (" 123", ' '), ("123\n", '\n'), ("7", '7')].iter() {
            match reduce_dice(rolls, Strength::Words24) {
                Err(Error::InvalidSymbol(Some(c))) => assert_eq!(c, *bad),
                _ => panic!("expected InvalidSymbol for {:?}", rolls)
            }
        }
        match reduce_dice("", Strength::Words24) {
            Err(Error::InvalidSymbol(None)) => {},
            _ => panic!("expected InvalidSymbol for empty rolls")
        }
    }
}

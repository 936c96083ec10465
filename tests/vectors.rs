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
extern crate bip39;
extern crate hex;
extern crate mnemonic_entropy;
extern crate rand;
extern crate serde_json;

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use bip39::{Language, Mnemonic};
use hex::decode;
use rand::{thread_rng, Rng};
use serde_json::Value;

use mnemonic_entropy::{generate_mnemonic_from_dice, generate_mnemonic_from_coin_flips,
                       generate_mnemonic_from_bytes, calculate_checksum, Error};
use mnemonic_entropy::config::{DICE_NUM_ROLLS_12WORD, DICE_NUM_ROLLS_24WORD,
                               COIN_NUM_FLIPS_12WORD, COIN_NUM_FLIPS_24WORD};

fn vectors() -> Value {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("tests/vectors.json");
    let mut file = File::open(d).unwrap();
    let mut data = String::new();
    file.read_to_string(&mut data).unwrap();
    serde_json::from_str(&data).unwrap()
}

fn is_valid(words: &[String]) -> bool {
    Mnemonic::parse_in_normalized(Language::English, &words.join(" ")).is_ok()
}

fn random_symbols(alphabet: &[char], n: usize) -> String {
    let mut rng = thread_rng();
    (0..n).map(|_| alphabet[rng.gen_range(0, alphabet.len())]).collect()
}

#[test]
fn entropy_vectors() {
    for v in vectors()["entropy"].as_array().unwrap() {
        let entropy = decode(v[0].as_str().unwrap()).unwrap();
        let words = generate_mnemonic_from_bytes(&entropy).unwrap();
        assert_eq!(words.join(" "), v[1].as_str().unwrap());
    }
}

#[test]
fn dice_vectors() {
    for v in vectors()["dice"].as_array().unwrap() {
        let words = generate_mnemonic_from_dice(v[0].as_str().unwrap()).unwrap();
        assert!(is_valid(&words));
        assert_eq!(words.join(" "), v[1].as_str().unwrap());
    }
}

#[test]
fn coin_vectors() {
    for v in vectors()["coin"].as_array().unwrap() {
        let words = generate_mnemonic_from_coin_flips(v[0].as_str().unwrap()).unwrap();
        assert!(is_valid(&words));
        assert_eq!(words.join(" "), v[1].as_str().unwrap());
    }
}

#[test]
fn checksum_vectors() {
    for v in vectors()["checksum"].as_array().unwrap() {
        let partial = v.as_str().unwrap();
        let expected = calculate_checksum(partial).unwrap();
        assert!(is_valid(&expected));
        assert_eq!(calculate_checksum(partial.split(' ').collect::<Vec<_>>()).unwrap(), expected);
        assert_eq!(calculate_checksum(partial.replace(" ", ",")).unwrap(), expected);
        assert_eq!(calculate_checksum(partial.replace(" ", ", ")).unwrap(), expected);
        assert_eq!(calculate_checksum(format!("{} abandon", partial)).unwrap(), expected);
    }
}

#[test]
fn random_dice_rolls() {
    let dice = ['1', '2', '3', '4', '5', '6'];
    let words = generate_mnemonic_from_dice(&random_symbols(&dice, DICE_NUM_ROLLS_24WORD)).unwrap();
    assert_eq!(words.len(), 24);
    assert!(is_valid(&words));
    let words = generate_mnemonic_from_dice(&random_symbols(&dice, DICE_NUM_ROLLS_12WORD)).unwrap();
    assert_eq!(words.len(), 12);
    assert!(is_valid(&words));
}

#[test]
fn random_coin_flips() {
    let coin = ['0', '1'];
    let words = generate_mnemonic_from_coin_flips(&random_symbols(&coin, COIN_NUM_FLIPS_24WORD)).unwrap();
    assert_eq!(words.len(), 24);
    assert!(is_valid(&words));
    let words = generate_mnemonic_from_coin_flips(&random_symbols(&coin, COIN_NUM_FLIPS_12WORD)).unwrap();
    assert_eq!(words.len(), 12);
    assert!(is_valid(&words));
}

#[test]
fn invalid_input() {
    match generate_mnemonic_from_bytes(&[0u8; 15]) {
        Err(Error::InvalidEntropyLength(15)) => {},
        _ => panic!("expected InvalidEntropyLength")
    }
    match generate_mnemonic_from_dice("12 34") {
        Err(Error::InvalidSymbol(Some(' '))) => {},
        _ => panic!("expected InvalidSymbol")
    }
    match generate_mnemonic_from_coin_flips(&"1".repeat(200)) {
        Err(Error::InvalidLength(200)) => {},
        _ => panic!("expected InvalidLength")
    }
    let err = calculate_checksum("abandon ".repeat(9) + "about").unwrap_err();
    assert!(err.to_string().contains("12- or 24-word"));
    let err = calculate_checksum("foobar ".repeat(11) + "about").unwrap_err();
    assert!(err.to_string().contains("not in the dictionary"));
}

#[test]
fn unknown_words_anywhere() {
    let partial_24 = vectors()["checksum"][1].as_str().unwrap().to_owned();
    let mut words = partial_24.split(' ').collect::<Vec<_>>();
    words[17] = "foobar";
    match calculate_checksum(words.join(" ")) {
        Err(Error::UnknownWord(ref w)) => assert_eq!(w, "foobar"),
        _ => panic!("expected UnknownWord in a 23 word phrase")
    }
    match calculate_checksum("crawl focus rescue cable view pledge foobar dinner cousin unfair day") {
        Err(Error::UnknownWord(ref w)) => assert_eq!(w, "foobar"),
        _ => panic!("expected UnknownWord in an 11 word phrase")
    }
}

#[test]
fn blank_comma_token() {
    match calculate_checksum("crawl,focus,rescue,cable,,view,pledge,rather,dinner,cousin,unfair,day") {
        Err(Error::UnknownWord(ref w)) => assert_eq!(w, ""),
        other => panic!("expected UnknownWord for the blank token, got {:?}", other)
    }
    let trailing = calculate_checksum("crawl,focus,rescue,cable,view,pledge,rather,dinner,cousin,unfair,day,").unwrap();
    assert_eq!(trailing, calculate_checksum("crawl focus rescue cable view pledge rather dinner cousin unfair day").unwrap());
}

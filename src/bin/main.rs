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
extern crate hex;
#[macro_use] extern crate log;
extern crate simple_logger;
extern crate mnemonic_entropy;

use log::Level;
use std::env;
use std::error;
use std::process;

use mnemonic_entropy::{generate_mnemonic_from_dice, generate_mnemonic_from_coin_flips,
                       generate_mnemonic_from_bytes, calculate_checksum};

const USAGE: &str = "usage: mnemonic-entropy [-v] <dice|coins|entropy|checksum> <input>

  dice      die rolls 1-6, exactly 50 rolls give 12 words, any other count 24 words
  coins     128 or 256 coin flips 0/1
  entropy   16, 20, 24, 28 or 32 bytes of hex
  checksum  11 or 23 words, space or comma separated";

fn run(command: &str, input: &str) -> Result<Vec<String>, Box<dyn error::Error>> {
    match command {
        "dice" => Ok(generate_mnemonic_from_dice(input)?),
        "coins" => Ok(generate_mnemonic_from_coin_flips(input)?),
        "entropy" => {
            let entropy = hex::decode(input.trim()).map_err(|e| format!("invalid hex: {}", e))?;
            Ok(generate_mnemonic_from_bytes(&entropy)?)
        }
        "checksum" => Ok(calculate_checksum(input)?),
        _ => Err(USAGE.into())
    }
}

fn main() {
    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let verbose = args.first().map(|a| a == "-v").unwrap_or(false);
    if verbose {
        args.remove(0);
    }
    simple_logger::init_with_level(if verbose { Level::Debug } else { Level::Warn })
        .expect("logger is initialized once");

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    // the phrase may be passed unquoted
    let input = args[1..].join(" ");
    match run(&args[0], &input) {
        Ok(words) => {
            info!("{} word mnemonic", words.len());
            println!("{}", words.join(" "));
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

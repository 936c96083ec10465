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
//! # Mnemonic Error
//!
//! Modules of this library use this error class to indicate problems.
//!

use std::convert;
use std::error;
use std::fmt;
use std::io;

/// An error class to offer a unified error interface upstream
pub enum Error {
    /// entropy buffer is not 16, 20, 24, 28 or 32 bytes long
    InvalidEntropyLength(usize),
    /// a dice or coin symbol outside its alphabet, `None` if there were no symbols at all
    InvalidSymbol(Option<char>),
    /// coin flip count is not 128 or 256
    InvalidLength(usize),
    /// partial phrase is not 11, 12, 23 or 24 words
    InvalidPhraseLength(usize),
    /// word is not in the wordlist
    UnknownWord(String),
    /// the wordlist has no word at this index
    WordIndexOutOfRange(u16),
    /// fewer symbols than the entropy policy requires
    InsufficientEntropy { required: usize, supplied: usize },
    /// bit stream IO error
    IO(io::Error)
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IO(ref err) => Some(err),
            _ => None
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidEntropyLength(len) =>
                write!(f, "entropy must be 16, 20, 24, 28 or 32 bytes, not {}", len),
            Error::InvalidSymbol(Some(c)) => write!(f, "invalid entropy symbol {:?}", c),
            Error::InvalidSymbol(None) => write!(f, "no entropy symbols supplied"),
            Error::InvalidLength(len) =>
                write!(f, "must supply exactly 128 or 256 coin flips, not {}", len),
            Error::InvalidPhraseLength(len) =>
                write!(f, "must supply a 12- or 24-word mnemonic, got {} words", len),
            Error::UnknownWord(ref word) => write!(f, "{} not in the dictionary", word),
            Error::WordIndexOutOfRange(index) => write!(f, "no word at index {} in the wordlist", index),
            Error::InsufficientEntropy { required, supplied } =>
                write!(f, "at least {} entropy symbols required, {} supplied", required, supplied),
            Error::IO(ref err) => write!(f, "IO error: {}", err)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (self as &dyn fmt::Display).fmt(f)
    }
}

impl convert::From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::IO(e) => e,
            _ => io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
        }
    }
}

impl convert::From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IO(err)
    }
}

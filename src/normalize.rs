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
//! # Phrase input
//!
//! A phrase arrives either as a list of words or as one string delimited by
//! commas and/or whitespace. Both are brought to one ordered list of trimmed,
//! lower case words before anything looks the words up.
//!

/// phrase as supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhraseInput {
    Words(Vec<String>),
    Delimited(String)
}

impl PhraseInput {
    /// The canonical word sequence; dictionary membership is not checked here.
    /// Blank tokens at either end are dropped, a blank between two words is
    /// kept so the lookup rejects it.
    pub fn normalize(self) -> Vec<String> {
        match self {
            PhraseInput::Words(words) => trim_ends(words.iter()
                .map(|w| w.trim().to_lowercase())
                .collect()),
            PhraseInput::Delimited(text) => split(&text)
        }
    }
}

/// normalize any supported phrase input
pub fn normalize<I: Into<PhraseInput>>(input: I) -> Vec<String> {
    input.into().normalize()
}

// commas first, then whitespace inside each comma separated token
fn split(text: &str) -> Vec<String> {
    if text.contains(',') {
        trim_ends(text.split(',')
            .flat_map(|token| {
                let words = token.split_whitespace().map(|w| w.to_lowercase()).collect::<Vec<_>>();
                if words.is_empty() { vec![String::new()] } else { words }
            })
            .collect())
    } else {
        text.split_whitespace().map(|w| w.to_lowercase()).collect()
    }
}

fn trim_ends(mut words: Vec<String>) -> Vec<String> {
    while words.last().map(|w| w.is_empty()).unwrap_or(false) {
        words.pop();
    }
    let leading = words.iter().take_while(|w| w.is_empty()).count();
    words.split_off(leading)
}

impl<'a> From<&'a str> for PhraseInput {
    fn from(text: &'a str) -> PhraseInput {
        PhraseInput::Delimited(text.to_owned())
    }
}

impl From<String> for PhraseInput {
    fn from(text: String) -> PhraseInput {
        PhraseInput::Delimited(text)
    }
}

impl From<Vec<String>> for PhraseInput {
    fn from(words: Vec<String>) -> PhraseInput {
        PhraseInput::Words(words)
    }
}

impl<'a> From<Vec<&'a str>> for PhraseInput {
    fn from(words: Vec<&'a str>) -> PhraseInput {
        PhraseInput::Words(words.into_iter().map(|w| w.to_owned()).collect())
    }
}

impl<'a, 'b> From<&'b [&'a str]> for PhraseInput {
    fn from(words: &'b [&'a str]) -> PhraseInput {
        PhraseInput::Words(words.iter().map(|w| (*w).to_owned()).collect())
    }
}

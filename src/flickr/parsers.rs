/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use serde::de::Error;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNumber {
    Number(u64),
    Str(String),
}

// Parses counts and ids that Flickr sends either as JSON numbers or as numeric strings
pub fn from_str_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    <T as FromStr>::Err: Display,
{
    match StrOrNumber::deserialize(deserializer)? {
        StrOrNumber::Number(n) => {
            T::try_from(n).map_err(|_| D::Error::custom(format!("number {} out of range", n)))
        }
        StrOrNumber::Str(s) => s.trim().parse::<T>().map_err(D::Error::custom),
    }
}

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

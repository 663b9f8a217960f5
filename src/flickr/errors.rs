/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::flickr::ApiErrorCodes;
use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

/// Error conditions that can be returned while fetching a photo
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Flickr API error: {message} (code: {code})")]
    Api { code: u32, message: String },

    #[error("Group pool has no photos")]
    EmptyPool,

    #[error("No photo found on page {0}")]
    EmptyPage(u32),

    #[error("API Response is malformed: {0}")]
    ApiResponseMalformed(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Image could not be loaded: {0}")]
    ImageLoad(String),

    #[error("Image could not be decoded: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Broad failure categories, as seen by the presentation layer.
///
/// Every kind is retryable; configuration problems never reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum ErrorKind {
    Api,
    Network,
    ImageLoad,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { .. }
            | Self::EmptyPool
            | Self::EmptyPage(_)
            | Self::ApiResponseMalformed(_)
            | Self::UrlParsing(_) => ErrorKind::Api,
            Self::Request(_) | Self::Join(_) => ErrorKind::Network,
            Self::ImageLoad(_) | Self::ImageDecode(_) => ErrorKind::ImageLoad,
        }
    }

    /// The documented Flickr error code, if this is a remote failure with a known code
    pub fn api_code(&self) -> Option<ApiErrorCodes> {
        match self {
            Self::Api { code, .. } => ApiErrorCodes::try_from(*code).ok(),
            _ => None,
        }
    }
}

/// Missing or unusable credentials. Fatal: the viewer is never started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Flickr API Key is missing. Set {0}")]
    MissingApiKey(&'static str),

    #[error("Flickr Group ID is missing. Set {0}")]
    MissingGroupId(&'static str),
}

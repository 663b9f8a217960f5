/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::errors::FetchError;
use crate::flickr::parsers::from_str_or_number;
use crate::flickr::Photo;
use serde::Deserialize;
use strum_macros::{EnumString, IntoStaticStr};

/// Optional fields that can be requested along with each photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Extra {
    #[strum(serialize = "owner_name")]
    OwnerName,
    #[strum(serialize = "date_upload")]
    DateUpload,
    #[strum(serialize = "views")]
    Views,
}

/// Paging parameters for one pool listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolQuery {
    pub per_page: u32,
    pub page: u32,
    pub extras: Vec<Extra>,
}

impl PoolQuery {
    /// Smallest possible listing. Only the page count of the reply is of interest.
    pub fn count_only() -> Self {
        Self {
            per_page: 1,
            page: 1,
            extras: Vec::new(),
        }
    }

    /// A single photo from the given page, with the author's display name
    pub fn single_photo(page: u32) -> Self {
        Self {
            per_page: 1,
            page,
            extras: vec![Extra::OwnerName],
        }
    }

    /// The `extras` parameter value, `None` when nothing extra is requested
    pub fn extras_param(&self) -> Option<String> {
        if self.extras.is_empty() {
            return None;
        }
        let names: Vec<&'static str> = self.extras.iter().map(|e| (*e).into()).collect();
        Some(names.join(","))
    }
}

/// One page of a group pool listing
#[derive(Deserialize, Debug, Clone)]
pub struct PoolPage {
    #[serde(default = "first_page", deserialize_with = "from_str_or_number")]
    pub page: u32,

    #[serde(deserialize_with = "from_str_or_number")]
    pub pages: u32,

    #[serde(default, rename = "perpage", deserialize_with = "from_str_or_number")]
    pub per_page: u32,

    #[serde(default, deserialize_with = "from_str_or_number")]
    pub total: u64,

    #[serde(default, rename = "photo")]
    pub photos: Vec<Photo>,
}

fn first_page() -> u32 {
    1
}

/// Anything that can list the photos of a group pool, one page at a time.
///
/// [`crate::flickr::Client`] is the network implementation.
pub trait PoolSource: Send + Sync + 'static {
    fn pool_page(
        &self,
        query: &PoolQuery,
    ) -> impl Future<Output = Result<PoolPage, FetchError>> + Send;
}

// Expected response for a pool listing request
#[derive(Deserialize, Debug)]
pub(crate) struct PoolResponse {
    pub(crate) photos: PoolPage,
}

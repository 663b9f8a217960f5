/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::parsers::{from_empty_str_to_none, from_str_or_number};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

// Root of the photo web pages
pub const PHOTO_PAGE_ORIGIN: &str = "https://www.flickr.com/photos";

/// Holds the information returned for one photo of a group pool listing.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.groups.pools.getPhotos.html)
/// for more details on the individual fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: String,

    pub owner: String,

    #[serde(
        default,
        rename = "ownername",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub owner_name: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(deserialize_with = "from_str_or_number")]
    pub farm: u32,

    pub server: String,

    pub secret: String,
}

impl Photo {
    /// Static CDN url for this photo at the requested size
    pub fn image_url(&self, size: SizeSuffix) -> String {
        let suffix: &'static str = size.into();
        format!(
            "https://farm{}.staticflickr.com/{}/{}_{}{}.jpg",
            self.farm, self.server, self.id, self.secret, suffix
        )
    }

    /// Canonical web page of this photo
    pub fn page_url(&self) -> String {
        format!("{}/{}/{}", PHOTO_PAGE_ORIGIN, self.owner, self.id)
    }

    /// Display name of the author, falling back to the owner id when the name was not requested
    pub fn author(&self) -> &str {
        self.owner_name.as_deref().unwrap_or(&self.owner)
    }
}

/// Size variants served by the static CDN.
///
/// The string form is the suffix appended to `{id}_{secret}` in the image url.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum SizeSuffix {
    #[strum(serialize = "_s")]
    Square75,
    #[strum(serialize = "_q")]
    Square150,
    #[strum(serialize = "_t")]
    Thumbnail100,
    #[strum(serialize = "_m")]
    Small240,
    #[strum(serialize = "_n")]
    Small320,
    #[strum(serialize = "_w")]
    Small400,
    #[strum(serialize = "")]
    Medium500,
    #[strum(serialize = "_z")]
    Medium640,
    #[strum(serialize = "_c")]
    Medium800,
    #[default]
    #[strum(serialize = "_b")]
    Large1024,
}

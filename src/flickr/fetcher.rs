/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::errors::FetchError;
use crate::flickr::{Client, Credentials, Photo, PoolQuery, PoolSource, SizeSuffix};
use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;
use image::{DynamicImage, GenericImageView};
use log::{debug, info};
use std::sync::Arc;

/// A downloaded image that has been fully decoded and is ready to be shown
#[derive(Clone)]
pub struct ImageHandle {
    encoded: Bytes,
    decoded: DynamicImage,
}

impl ImageHandle {
    /// Decodes the image data. Fails if the data is not a complete, supported image.
    pub fn decode(encoded: Bytes) -> Result<Self, FetchError> {
        let decoded = image::load_from_memory(&encoded)?;
        Ok(Self { encoded, decoded })
    }

    /// Wraps an already decoded image
    pub fn from_decoded(encoded: Bytes, decoded: DynamicImage) -> Self {
        Self { encoded, decoded }
    }

    /// Original bytes as served by the CDN
    pub fn encoded(&self) -> &Bytes {
        &self.encoded
    }

    pub fn image(&self) -> &DynamicImage {
        &self.decoded
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.decoded.dimensions()
    }
}

impl std::fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageHandle")
            .field("encoded_len", &self.encoded.len())
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

/// Loads an image url into a displayable [`ImageHandle`]
pub trait ImageLoader: Send + Sync + 'static {
    fn load(&self, url: &str) -> impl Future<Output = Result<ImageHandle, FetchError>> + Send;
}

/// Downloads images over HTTP and decodes them off the async threads
#[derive(Debug, Clone, Default)]
pub struct HttpImageLoader {
    https_client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<ImageHandle, FetchError> {
        let resp = self.https_client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::ImageLoad(format!(
                "{} returned {}",
                url,
                resp.status()
            )));
        }
        let encoded = resp.bytes().await?;
        if encoded.is_empty() {
            return Err(FetchError::ImageLoad(format!("{} returned no data", url)));
        }
        tokio::task::spawn_blocking(move || ImageHandle::decode(encoded)).await?
    }
}

/// A photo whose image is loaded and decoded, waiting to be displayed
#[derive(Debug, Clone)]
pub struct PreloadedPhoto {
    pub metadata: Photo,
    pub image: ImageHandle,
    pub resolved_url: String,
}

/// Picks random photos out of a group pool
#[derive(Debug, Clone)]
pub struct Fetcher<S = Client, L = HttpImageLoader> {
    source: S,
    loader: L,
    size: SizeSuffix,
}

impl Fetcher {
    /// Creates a fetcher talking to the Flickr API with the provided credentials
    pub fn new(creds: &Credentials) -> Self {
        Self::with_parts(Client::new(creds), HttpImageLoader::new())
    }
}

impl<S: PoolSource, L: ImageLoader> Fetcher<S, L> {
    pub fn with_parts(source: S, loader: L) -> Self {
        Self {
            source,
            loader,
            size: SizeSuffix::default(),
        }
    }

    /// Image size requested from the CDN
    pub fn with_size(mut self, size: SizeSuffix) -> Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> SizeSuffix {
        self.size
    }

    /// Fetches one random photo from the pool and loads its image.
    ///
    /// The first request only learns the number of pages (one photo per page), the second
    /// one reads the single photo on a page picked uniformly at random.
    pub async fn fetch_random_photo(&self) -> Result<PreloadedPhoto, FetchError> {
        debug!("Requesting a new photo");
        let total_pages = self.source.pool_page(&PoolQuery::count_only()).await?.pages;
        if total_pages == 0 {
            return Err(FetchError::EmptyPool);
        }

        let page = rand::random_range(1..=total_pages);
        debug!("Total pages: {}, randomly selecting page: {}", total_pages, page);

        // The pool can shrink between the two requests, leaving the chosen page empty
        let metadata = self
            .source
            .pool_page(&PoolQuery::single_photo(page))
            .await?
            .photos
            .into_iter()
            .next()
            .ok_or(FetchError::EmptyPage(page))?;

        let resolved_url = metadata.image_url(self.size);
        info!("Selected photo: {} ({})", metadata.title, resolved_url);

        let image = self.loader.load(&resolved_url).await?;
        Ok(PreloadedPhoto {
            metadata,
            image,
            resolved_url,
        })
    }

    /// Endless stream of random photos. Stops at the first error.
    pub fn random_photos(&self) -> impl Stream<Item = Result<PreloadedPhoto, FetchError>> + '_ {
        try_stream! {
            loop {
                let photo = self.fetch_random_photo().await?;
                yield photo;
            }
        }
    }
}

/// Where the viewer gets its photos from. Implemented by [`Fetcher`].
pub trait PhotoFetcher: Send + Sync + 'static {
    /// Starts fetching one random photo.
    ///
    /// The returned future owns everything it needs, so it can be spawned as background work.
    fn fetch(
        self: Arc<Self>,
    ) -> impl Future<Output = Result<PreloadedPhoto, FetchError>> + Send + 'static;
}

impl<S: PoolSource, L: ImageLoader> PhotoFetcher for Fetcher<S, L> {
    fn fetch(
        self: Arc<Self>,
    ) -> impl Future<Output = Result<PreloadedPhoto, FetchError>> + Send + 'static {
        async move { self.fetch_random_photo().await }
    }
}

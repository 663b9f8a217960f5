/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::flickr::errors::FetchError;
use crate::flickr::pool::PoolResponse;
use crate::flickr::{ApiClient, Credentials, PoolPage, PoolQuery, PoolSource};
use std::sync::Arc;

/// Group pool client
///
/// ```rust,no_run
/// use flickr_shuffle::flickr::{Client, Credentials, PoolQuery};
///
/// async fn pool_size(creds: &Credentials) -> anyhow::Result<u64> {
///     let client = Client::new(creds);
///     let page = client.group_pool_page(&PoolQuery::count_only()).await?;
///     Ok(page.total)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
    group_id: String,
}

impl Client {
    const POOL_METHOD: &'static str = "flickr.groups.pools.getPhotos";

    pub fn new(creds: &Credentials) -> Self {
        Self::from_api_client(ApiClient::new(creds), creds)
    }

    /// Uses an already configured low level client (e.g. with a custom endpoint)
    pub fn from_api_client(api_client: ApiClient, creds: &Credentials) -> Self {
        Self {
            api_client: Arc::new(api_client),
            group_id: creds.group_id().into(),
        }
    }

    /// Returns one page of the configured group pool
    pub async fn group_pool_page(&self, query: &PoolQuery) -> Result<PoolPage, FetchError> {
        let per_page = query.per_page.to_string();
        let page = query.page.to_string();
        let extras = query.extras_param();

        let mut params = vec![
            ("group_id", self.group_id.as_str()),
            ("per_page", per_page.as_str()),
            ("page", page.as_str()),
        ];
        if let Some(extras) = extras.as_deref() {
            params.push(("extras", extras));
        }

        self.api_client
            .get::<PoolResponse>(Self::POOL_METHOD, Some(&params))
            .await
            .map(|v| v.photos)
    }
}

impl PoolSource for Client {
    async fn pool_page(&self, query: &PoolQuery) -> Result<PoolPage, FetchError> {
        self.group_pool_page(query).await
    }
}

/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::errors::{ConfigError, FetchError};
use crate::flickr::parsers::from_str_or_number;
use log::{debug, error};
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// Root Flickr REST API
pub const API_ORIGIN: &str = "https://api.flickr.com/services/rest/";

/// Environment variables holding the API key, in lookup order
pub const API_KEY_VARS: [&str; 2] = ["FLICKR_API_KEY", "NEXT_PUBLIC_FLICKR_API_KEY"];

/// Environment variables holding the group id, in lookup order
pub const GROUP_ID_VARS: [&str; 2] = ["FLICKR_GROUP_ID", "NEXT_PUBLIC_FLICKR_GROUP_ID"];

/// API key and group pool the viewer reads from.
///
/// Read once at startup and never changed afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    group_id: String,
}

impl Credentials {
    /// Creates credentials, rejecting empty values
    pub fn new(api_key: &str, group_id: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.trim();
        let group_id = group_id.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_VARS[0]));
        }
        if group_id.is_empty() {
            return Err(ConfigError::MissingGroupId(GROUP_ID_VARS[0]));
        }
        Ok(Self {
            api_key: api_key.into(),
            group_id: group_id.into(),
        })
    }

    /// Reads the credentials from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the credentials through the provided variable lookup.
    ///
    /// Each value is taken from the first variable of [`API_KEY_VARS`] / [`GROUP_ID_VARS`]
    /// that is set and not blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .find(|v| !v.trim().is_empty())
        };
        let api_key = first_set(&API_KEY_VARS).ok_or(ConfigError::MissingApiKey(API_KEY_VARS[0]))?;
        let group_id =
            first_set(&GROUP_ID_VARS).ok_or(ConfigError::MissingGroupId(GROUP_ID_VARS[0]))?;
        Self::new(&api_key, &group_id)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"xxx")
            .field("group_id", &"xxx")
            .finish()
    }
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    api_key: String,
    endpoint: String,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new Flickr client instance from provided credentials
    pub fn new(creds: &Credentials) -> Self {
        Self {
            api_key: creds.api_key.clone(),
            endpoint: API_ORIGIN.into(),
            https_client: reqwest::Client::new(),
        }
    }

    /// Sends requests to a different REST endpoint (proxies, test servers)
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Calls a Flickr REST method and unwraps the `stat` envelope of the reply
    pub async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<T, FetchError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", self.api_key.as_str()),
            ("format", "json"),
            ("nojsoncallback", "1"),
        ];
        if let Some(params) = params {
            query.extend_from_slice(params);
        }
        let req_url = reqwest::Url::parse_with_params(&self.endpoint, &query)?;
        debug!("GET {} {:?}", method, params);

        let body = self
            .https_client
            .get(req_url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        parse_response(&body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// This can be filter types as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Error codes per the Flickr API site for `flickr.groups.pools.getPhotos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    GroupNotFound = 1,
    PermissionDenied = 2,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// Parses a raw reply body, turning a `stat: "fail"` reply into [`FetchError::Api`]
pub fn parse_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    match serde_json::from_slice::<ResponseBody<T>>(body)? {
        ResponseBody::Ok(payload) => Ok(payload),
        ResponseBody::Fail { code, message } => {
            error!("Flickr API returned an error: {} (code: {})", message, code);
            Err(FetchError::Api { code, message })
        }
    }
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
#[serde(tag = "stat", rename_all = "lowercase")]
enum ResponseBody<ResponseType> {
    Ok(ResponseType),
    Fail {
        #[serde(deserialize_with = "from_str_or_number")]
        code: u32,

        #[serde(default)]
        message: String,
    },
}

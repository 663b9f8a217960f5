/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod errors;
pub mod fetcher;
mod parsers;
pub mod photo;
pub mod pool;

pub use api::*;
pub use client::*;
pub use errors::*;
pub use fetcher::*;
pub use photo::*;
pub use pool::*;

/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr Shuffle
//!
//! This library shows a random photo from a Flickr group pool, one at a time, with a
//! "load next" control in front of it.
//!
//! For further details on the Rest API refer to the
//! [Flickr API Docs](https://www.flickr.com/services/api/flickr.groups.pools.getPhotos.html)
//!
//! ## Features
//!
//! - Random photo selection from a group pool
//!     - Two step lookup (page count, then one photo from a random page)
//!     - Image is downloaded and decoded before it is handed out
//! - Presentation sequencing
//!     - Fade-out/fade-in swaps gated on the display layer's transition signal
//!     - Next photo preloaded in the background
//!     - Automatic retry on failure, fixed delay or bounded exponential backoff
//!     - Idle "attention" prompt on the load control
//!     - Copy link, dark mode and keyboard shortcuts
//! - Lower level interface for handling the raw communication
//!
//! *The display itself (images, buttons, transitions) is left up to the consumer of this
//! library through the [`viewer::DisplaySurface`] trait*
//!
//! ## Usage
//!
//! **You will need to acquire an API key from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr_shuffle::flickr::{Credentials, Fetcher};
//!
//! async fn print_random_photo() -> anyhow::Result<()> {
//!     // FLICKR_API_KEY and FLICKR_GROUP_ID are read from the environment
//!     let creds = Credentials::from_env()?;
//!     let fetcher = Fetcher::new(&creds);
//!
//!     let photo = fetcher.fetch_random_photo().await?;
//!     println!(
//!         "{} by {} ({})",
//!         photo.metadata.title,
//!         photo.metadata.author(),
//!         photo.resolved_url
//!     );
//!     Ok(())
//! }
//! ```
//!
pub mod flickr;
pub mod viewer;

/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod config;
pub mod errors;
pub mod keyboard;
pub mod sequencer;
pub mod surface;
pub mod theme;
pub mod transition;

pub use config::*;
pub use errors::*;
pub use keyboard::*;
pub use sequencer::*;
pub use surface::*;
pub use theme::*;
pub use transition::*;

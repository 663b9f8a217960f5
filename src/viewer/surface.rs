/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::PreloadedPhoto;
use crate::viewer::errors::ClipboardError;
use crate::viewer::theme::Theme;
use crate::viewer::transition::TransitionDone;
use strum_macros::{Display, IntoStaticStr};

/// Visual state of the "load next" control.
///
/// The string form is the class a web front end would put on the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, IntoStaticStr)]
pub enum ControlMode {
    #[default]
    #[strum(serialize = "ready")]
    Ready,
    #[strum(serialize = "loading")]
    Loading,
    /// Idle for a while; enabled, drawing the eye
    #[strum(serialize = "prompt-attention")]
    Attention,
    /// Retries exhausted; enabled, a click starts over
    #[strum(serialize = "gave-up")]
    GaveUp,
    /// Configuration error, permanently off
    #[strum(serialize = "disabled")]
    Disabled,
}

impl ControlMode {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Ready | Self::Attention | Self::GaveUp)
    }
}

/// State of the copy-link control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyControl {
    pub label: &'static str,
    pub enabled: bool,
}

/// Text shown next to a photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub label: &'static str,
    pub author: String,
    pub page_url: String,
    pub download_url: String,
}

impl Attribution {
    pub fn new(label: &'static str, photo: &PreloadedPhoto) -> Self {
        Self {
            label,
            author: photo.metadata.author().into(),
            page_url: photo.metadata.page_url(),
            download_url: photo.resolved_url.clone(),
        }
    }
}

/// The display layer the sequencer drives.
///
/// Implementations own the actual widgets. Every call is made from the sequencer and
/// must not block.
pub trait DisplaySurface: Send + Sync + 'static {
    /// A mounted image
    type Slot: Send + 'static;

    fn set_control(&self, mode: ControlMode);

    /// Shows the attribution and attaches the image, starting its fade-in
    fn mount(&self, photo: &PreloadedPhoto, attribution: &Attribution) -> Self::Slot;

    /// Starts fading the image out. The returned signal fires when the animation is over.
    fn fade_out(&self, slot: &Self::Slot) -> TransitionDone;

    /// Removes the image for good
    fn detach(&self, slot: Self::Slot);

    /// Replaces the photo area with a configuration error
    fn show_config_error(&self, title: &str, detail: &str);

    fn set_copy_control(&self, control: CopyControl);

    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError>;

    fn apply_theme(&self, theme: Theme);
}

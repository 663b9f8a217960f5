/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::SizeSuffix;
use std::time::Duration;
use strum_macros::{EnumString, IntoStaticStr};

/// How the sequencer behaves. Start from [`ViewerConfig::preloading`] or
/// [`ViewerConfig::direct`] and override fields as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Keep the next photo loading in the background while the current one is shown
    pub preload_next: bool,

    pub retry: RetryPolicy,

    /// Idle time after a swap before the load control asks for attention
    pub attention_after: Option<Duration>,

    /// How long the copy-link control shows its confirmation
    pub copy_feedback: Duration,

    pub size: SizeSuffix,

    pub locale: Locale,
}

impl ViewerConfig {
    pub const ATTENTION_DELAY: Duration = Duration::from_secs(15);
    pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

    /// Next photo always preloaded, idle prompt after 15 seconds
    pub fn preloading() -> Self {
        Self {
            preload_next: true,
            retry: RetryPolicy::default(),
            attention_after: Some(Self::ATTENTION_DELAY),
            copy_feedback: Self::COPY_FEEDBACK,
            size: SizeSuffix::default(),
            locale: Locale::default(),
        }
    }

    /// Every click fetches its photo on demand
    pub fn direct() -> Self {
        Self {
            preload_next: false,
            attention_after: None,
            ..Self::preloading()
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::preloading()
    }
}

/// When to try again after a failed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retry forever, always after the same delay.
    ///
    /// A long API outage keeps a request going out every `delay`.
    Fixed { delay: Duration },

    /// Double the delay after each consecutive failure, up to `max_delay`, and give up
    /// after `max_attempts` failures in a row.
    Exponential {
        initial: Duration,
        max_delay: Duration,
        max_attempts: u32,
    },
}

impl RetryPolicy {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Delay before the next attempt, given the number of consecutive failures so far
    /// (starting at 1). `None` means give up.
    pub fn delay_for(&self, failures: u32) -> Option<Duration> {
        match *self {
            Self::Fixed { delay } => Some(delay),
            Self::Exponential {
                initial,
                max_delay,
                max_attempts,
            } => {
                if failures >= max_attempts {
                    return None;
                }
                let factor = 2u32.saturating_pow(failures.saturating_sub(1));
                Some(initial.saturating_mul(factor).min(max_delay))
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Fixed {
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// Language of the user facing strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Locale {
    #[default]
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "es")]
    Spanish,
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
        }
    }
}

/// User facing strings
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub config_error_title: &'static str,
    pub config_error_body: &'static str,
    pub author_label: &'static str,
    pub copy_link: &'static str,
    pub link_copied: &'static str,
}

static ENGLISH: Messages = Messages {
    config_error_title: "Configuration Error",
    config_error_body: "Flickr API Key or Group ID is missing. The application cannot be initialized.",
    author_label: "Author:",
    copy_link: "Copy link",
    link_copied: "Copied!",
};

static SPANISH: Messages = Messages {
    config_error_title: "Error de configuración",
    config_error_body: "Falta la API Key o el Group ID de Flickr. La aplicación no puede iniciarse.",
    author_label: "Autor:",
    copy_link: "Copiar enlace",
    link_copied: "¡Copiado!",
};

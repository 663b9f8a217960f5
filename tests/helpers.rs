/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
#![allow(dead_code)]

use bytes::Bytes;
use flickr_shuffle::flickr::{
    FetchError, ImageHandle, ImageLoader, Photo, PhotoFetcher, PoolPage, PoolQuery, PoolSource,
    PreloadedPhoto, SizeSuffix,
};
use flickr_shuffle::viewer::{
    Attribution, ClipboardError, ControlMode, CopyControl, DisplaySurface, Theme, TransitionDone,
    transition,
};
use image::DynamicImage;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) fn photo(id: &str) -> Photo {
    Photo {
        id: id.into(),
        owner: "12345@N00".into(),
        owner_name: Some("Ada".into()),
        title: format!("Photo {}", id),
        farm: 5,
        server: "1234".into(),
        secret: "abcd".into(),
    }
}

pub(crate) fn image_handle() -> ImageHandle {
    ImageHandle::from_decoded(Bytes::from_static(b"jpeg"), DynamicImage::new_rgb8(4, 3))
}

pub(crate) fn preloaded(id: &str) -> PreloadedPhoto {
    let metadata = photo(id);
    PreloadedPhoto {
        resolved_url: metadata.image_url(SizeSuffix::default()),
        metadata,
        image: image_handle(),
    }
}

pub(crate) fn pool_page(pages: u32, photos: Vec<Photo>) -> PoolPage {
    PoolPage {
        page: 1,
        pages,
        per_page: 1,
        total: pages as u64,
        photos,
    }
}

pub(crate) fn invalid_api_key() -> FetchError {
    FetchError::Api {
        code: 100,
        message: "Invalid API Key (Key has invalid format)".into(),
    }
}

/// Everything the fakes saw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    FetchStarted(u32),
    Control(ControlMode),
    Mounted(String),
    FadeOut(String),
    Detached(String),
    ConfigError(String),
    CopyControl(&'static str, bool),
    Clipboard(String),
    Theme(Theme),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    pub(crate) fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub(crate) fn snapshot(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn position(&self, event: &Event) -> Option<usize> {
        self.snapshot().iter().position(|e| e == event)
    }

    pub(crate) fn rposition(&self, event: &Event) -> Option<usize> {
        self.snapshot().iter().rposition(|e| e == event)
    }
}

/// Pool listing replaying canned replies
#[derive(Clone, Default)]
pub(crate) struct FakePool {
    replies: Arc<Mutex<VecDeque<Result<PoolPage, FetchError>>>>,
    queries: Arc<Mutex<Vec<PoolQuery>>>,
}

impl FakePool {
    pub(crate) fn reply(&self, reply: Result<PoolPage, FetchError>) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn queries(&self) -> Vec<PoolQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl PoolSource for FakePool {
    async fn pool_page(&self, query: &PoolQuery) -> Result<PoolPage, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or(Err(FetchError::EmptyPool))
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeLoader {
    pub(crate) fail: bool,
    loaded: Arc<Mutex<Vec<String>>>,
}

impl FakeLoader {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn loaded(&self) -> Vec<String> {
        self.loaded.lock().unwrap().clone()
    }
}

impl ImageLoader for FakeLoader {
    async fn load(&self, url: &str) -> Result<ImageHandle, FetchError> {
        self.loaded.lock().unwrap().push(url.into());
        if self.fail {
            return Err(FetchError::ImageLoad(format!("{} returned 404 Not Found", url)));
        }
        Ok(image_handle())
    }
}

/// Photo fetcher replaying scripted results, then handing out `auto-<n>` photos
#[derive(Clone, Default)]
pub(crate) struct FakeFetcher {
    script: Arc<Mutex<VecDeque<Result<PreloadedPhoto, FetchError>>>>,
    calls: Arc<AtomicU32>,
    delay: Arc<Mutex<Duration>>,
    log: EventLog,
}

impl FakeFetcher {
    pub(crate) fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    pub(crate) fn then(&self, result: Result<PreloadedPhoto, FetchError>) -> &Self {
        self.script.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PhotoFetcher for FakeFetcher {
    fn fetch(
        self: Arc<Self>,
    ) -> impl Future<Output = Result<PreloadedPhoto, FetchError>> + Send + 'static {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.push(Event::FetchStarted(n));
        let scripted = self.script.lock().unwrap().pop_front();
        let result = scripted.unwrap_or_else(|| Ok(preloaded(&format!("auto-{}", n))));
        let delay = *self.delay.lock().unwrap();
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }
}

/// Display surface recording every call. Slots are photo ids.
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
    log: EventLog,
    mounted: Arc<Mutex<Vec<String>>>,
    fade: Duration,
    clipboard_broken: bool,
}

impl RecordingSurface {
    pub(crate) fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    /// Fade-outs take `fade` to report completion
    pub(crate) fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    pub(crate) fn with_broken_clipboard(mut self) -> Self {
        self.clipboard_broken = true;
        self
    }

    pub(crate) fn mounted(&self) -> Vec<String> {
        self.mounted.lock().unwrap().clone()
    }
}

impl DisplaySurface for RecordingSurface {
    type Slot = String;

    fn set_control(&self, mode: ControlMode) {
        self.log.push(Event::Control(mode));
    }

    fn mount(&self, photo: &PreloadedPhoto, attribution: &Attribution) -> String {
        assert_eq!(attribution.page_url, photo.metadata.page_url());
        let id = photo.metadata.id.clone();
        self.mounted.lock().unwrap().push(id.clone());
        self.log.push(Event::Mounted(id.clone()));
        id
    }

    fn fade_out(&self, slot: &String) -> TransitionDone {
        self.log.push(Event::FadeOut(slot.clone()));
        if self.fade.is_zero() {
            return TransitionDone::immediate();
        }
        let (notifier, done) = transition();
        let fade = self.fade;
        tokio::spawn(async move {
            tokio::time::sleep(fade).await;
            notifier.complete();
        });
        done
    }

    fn detach(&self, slot: String) {
        self.mounted.lock().unwrap().retain(|id| *id != slot);
        self.log.push(Event::Detached(slot));
    }

    fn show_config_error(&self, title: &str, _detail: &str) {
        self.log.push(Event::ConfigError(title.into()));
    }

    fn set_copy_control(&self, control: CopyControl) {
        self.log.push(Event::CopyControl(control.label, control.enabled));
    }

    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard_broken {
            return Err(ClipboardError::Unavailable("permission denied".into()));
        }
        self.log.push(Event::Clipboard(text.into()));
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) {
        self.log.push(Event::Theme(theme));
    }
}

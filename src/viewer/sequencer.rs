/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::{
    ConfigError, Credentials, FetchError, Fetcher, Photo, PhotoFetcher, PreloadedPhoto,
};
use crate::viewer::config::ViewerConfig;
use crate::viewer::errors::ClipboardError;
use crate::viewer::keyboard::{self, KeyEvent};
use crate::viewer::surface::{Attribution, ControlMode, CopyControl, DisplaySurface};
use crate::viewer::theme::Theme;
use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use strum_macros::Display;
use tokio::task::JoinHandle;

/// Where the sequencer is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// Waiting for the user
    Idle,
    /// A photo is being fetched for display
    Loading,
    /// The old photo is fading out, the new one is about to be mounted
    Transitioning,
    /// The last load failed, another attempt is scheduled
    Retrying,
    /// Retries exhausted
    GaveUp,
    ShutDown,
}

impl Phase {
    fn accepts_trigger(self) -> bool {
        matches!(self, Self::Idle | Self::Retrying | Self::GaveUp)
    }
}

/// Result of a load request
#[derive(Debug)]
pub enum TriggerOutcome {
    /// The photo is now on screen
    Displayed(Photo),
    /// Nothing was shown. `retry_in` is `None` when no retry is scheduled.
    Failed {
        error: FetchError,
        retry_in: Option<Duration>,
    },
    /// A load was already running (or the viewer is shut down)
    Ignored,
}

type PendingFetch = JoinHandle<Result<PreloadedPhoto, FetchError>>;

/// Drives what is on screen: which photo is displayed, which one is loading next, and
/// what state the load control is in.
///
/// Cheap to clone; all clones drive the same display. Background timers only hold weak
/// references, so dropping the last clone stops everything.
pub struct Sequencer<F, D: DisplaySurface> {
    inner: Arc<Inner<F, D>>,
}

impl<F, D: DisplaySurface> Clone for Sequencer<F, D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Inner<F, D: DisplaySurface> {
    fetcher: Arc<F>,
    surface: D,
    config: ViewerConfig,
    state: Mutex<State<D::Slot>>,
}

struct State<S> {
    phase: Phase,
    control: ControlMode,
    slot: Option<S>,
    current: Option<Photo>,
    pending: Option<PendingFetch>,
    failures: u32,
    retry_timer: Option<JoinHandle<()>>,
    attention_timer: Option<JoinHandle<()>>,
    copy_timer: Option<JoinHandle<()>>,
    theme: Theme,
}

impl<S> State<S> {
    fn abort_background(&mut self) {
        let timers = [
            self.retry_timer.take(),
            self.attention_timer.take(),
            self.copy_timer.take(),
        ];
        for timer in timers.into_iter().flatten() {
            timer.abort();
        }
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl<F, D: DisplaySurface> Drop for Inner<F, D> {
    fn drop(&mut self) {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .abort_background();
    }
}

impl<D: DisplaySurface> Sequencer<Fetcher, D> {
    /// Starts a viewer on the Flickr API with credentials from the environment
    pub fn launch_from_env(surface: D, config: ViewerConfig) -> Result<Self, ConfigError> {
        Self::launch(surface, config, Credentials::from_env(), |creds, config| {
            Fetcher::new(creds).with_size(config.size)
        })
    }
}

impl<F: PhotoFetcher, D: DisplaySurface> Sequencer<F, D> {
    pub fn new(fetcher: F, surface: D, config: ViewerConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher: Arc::new(fetcher),
                surface,
                config,
                state: Mutex::new(State {
                    phase: Phase::Idle,
                    control: ControlMode::Ready,
                    slot: None,
                    current: None,
                    pending: None,
                    failures: 0,
                    retry_timer: None,
                    attention_timer: None,
                    copy_timer: None,
                    theme: Theme::default(),
                }),
            }),
        }
    }

    /// Validates the credentials and builds the viewer.
    ///
    /// Without credentials the surface gets the configuration error, the load control is
    /// disabled for good and nothing is ever fetched.
    pub fn launch(
        surface: D,
        config: ViewerConfig,
        credentials: Result<Credentials, ConfigError>,
        build_fetcher: impl FnOnce(&Credentials, &ViewerConfig) -> F,
    ) -> Result<Self, ConfigError> {
        match credentials {
            Ok(creds) => {
                let fetcher = build_fetcher(&creds, &config);
                Ok(Self::new(fetcher, surface, config))
            }
            Err(err) => {
                error!("{}. The viewer cannot be initialized", err);
                let messages = config.messages();
                surface.show_config_error(messages.config_error_title, messages.config_error_body);
                surface.set_control(ControlMode::Disabled);
                Err(err)
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, State<D::Slot>> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    pub fn control(&self) -> ControlMode {
        self.state().control
    }

    /// Metadata of the photo on screen
    pub fn current_photo(&self) -> Option<Photo> {
        self.state().current.clone()
    }

    /// Whether a next photo is loading (or loaded) in the background
    pub fn has_pending(&self) -> bool {
        self.state().pending.is_some()
    }

    pub fn theme(&self) -> Theme {
        self.state().theme
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.inner.config
    }

    pub fn surface(&self) -> &D {
        &self.inner.surface
    }

    /// Loads the first photo
    pub async fn start(&self) -> TriggerOutcome {
        self.trigger().await
    }

    /// Loads and shows the next photo, the action behind the "load next" control.
    ///
    /// Does nothing while a load is already in progress.
    pub async fn trigger(&self) -> TriggerOutcome {
        {
            let mut state = self.state();
            if !state.phase.accepts_trigger() {
                debug!("Load requested while {}, ignoring", state.phase);
                return TriggerOutcome::Ignored;
            }
            if state.phase == Phase::GaveUp {
                state.failures = 0;
            }
            state.phase = Phase::Loading;
            if let Some(timer) = state.attention_timer.take() {
                timer.abort();
            }
            if let Some(timer) = state.retry_timer.take() {
                timer.abort();
            }
            self.set_control(&mut state, ControlMode::Loading);
        }

        match self.next_photo().await {
            Ok(photo) => self.show(photo).await,
            Err(error) => self.fail(error),
        }
    }

    /// Feeds a key press to the viewer. Returns the load outcome if the key triggered one.
    pub async fn handle_key(&self, event: &KeyEvent) -> Option<TriggerOutcome> {
        if !keyboard::triggers_load(event, self.control().is_enabled()) {
            return None;
        }
        Some(self.trigger().await)
    }

    /// Copies the page url of the displayed photo to the clipboard.
    ///
    /// Returns `None` while the previous copy confirmation is still showing.
    pub fn copy_link(&self) -> Result<Option<String>, ClipboardError> {
        let mut state = self.state();
        if state.copy_timer.is_some() {
            return Ok(None);
        }
        let url = state
            .current
            .as_ref()
            .map(Photo::page_url)
            .ok_or(ClipboardError::NothingToCopy)?;
        if let Err(err) = self.inner.surface.write_clipboard(&url) {
            warn!("Could not copy link: {}", err);
            return Err(err);
        }
        info!("Copied link {}", url);

        self.inner.surface.set_copy_control(CopyControl {
            label: self.inner.config.messages().link_copied,
            enabled: false,
        });
        state.copy_timer = Some(self.spawn_copy_reset());
        Ok(Some(url))
    }

    /// Switches between light and dark mode
    pub fn toggle_theme(&self) -> Theme {
        let mut state = self.state();
        state.theme = state.theme.toggled();
        self.inner.surface.apply_theme(state.theme);
        state.theme
    }

    /// Stops all background work. Loads requested afterwards are ignored.
    pub fn shutdown(&self) {
        let mut state = self.state();
        state.phase = Phase::ShutDown;
        if state.copy_timer.is_some() {
            self.inner.surface.set_copy_control(CopyControl {
                label: self.inner.config.messages().copy_link,
                enabled: true,
            });
        }
        state.abort_background();
        info!("Viewer shut down");
    }

    fn set_control(&self, state: &mut State<D::Slot>, mode: ControlMode) {
        state.control = mode;
        self.inner.surface.set_control(mode);
    }

    fn spawn_fetch(&self) -> PendingFetch {
        tokio::spawn(self.inner.fetcher.clone().fetch())
    }

    async fn next_photo(&self) -> Result<PreloadedPhoto, FetchError> {
        let pending = self.state().pending.take();
        match pending {
            Some(pending) => {
                debug!("Using the preloaded photo");
                pending.await?
            }
            None => self.inner.fetcher.clone().fetch().await,
        }
    }

    async fn show(&self, photo: PreloadedPhoto) -> TriggerOutcome {
        let previous = {
            let mut state = self.state();
            if state.phase == Phase::Loading {
                state.phase = Phase::Transitioning;
            }
            state.slot.take()
        };

        if let Some(previous) = previous {
            debug!("Fading out the current photo");
            self.inner.surface.fade_out(&previous).await;
            self.inner.surface.detach(previous);
        }

        let attribution = Attribution::new(self.inner.config.messages().author_label, &photo);
        let slot = self.inner.surface.mount(&photo, &attribution);
        debug!("Displaying {}", photo.resolved_url);

        let mut state = self.state();
        state.slot = Some(slot);
        state.current = Some(photo.metadata.clone());
        if state.phase == Phase::ShutDown {
            return TriggerOutcome::Displayed(photo.metadata);
        }

        state.failures = 0;
        if self.inner.config.preload_next {
            debug!("Preloading the next photo");
            state.pending = Some(self.spawn_fetch());
        }
        state.phase = Phase::Idle;
        self.set_control(&mut state, ControlMode::Ready);
        if let Some(delay) = self.inner.config.attention_after {
            state.attention_timer = Some(self.spawn_attention(delay));
        }
        TriggerOutcome::Displayed(photo.metadata)
    }

    fn fail(&self, error: FetchError) -> TriggerOutcome {
        let mut state = self.state();
        if state.phase == Phase::ShutDown {
            return TriggerOutcome::Failed {
                error,
                retry_in: None,
            };
        }

        state.failures += 1;
        let retry_in = self.inner.config.retry.delay_for(state.failures);
        match retry_in {
            Some(delay) => {
                error!(
                    "Photo request failed ({} error): {}. Retrying in {:?}",
                    error.kind(),
                    error,
                    delay
                );
                state.phase = Phase::Retrying;
                self.set_control(&mut state, ControlMode::Ready);
                state.retry_timer = Some(self.spawn_retry(delay));
            }
            None => {
                error!(
                    "Photo request failed ({} error): {}. Giving up after {} attempts",
                    error.kind(),
                    error,
                    state.failures
                );
                state.phase = Phase::GaveUp;
                self.set_control(&mut state, ControlMode::GaveUp);
            }
        }
        TriggerOutcome::Failed { error, retry_in }
    }

    // Boxed so the retry task does not make `trigger` a recursive future type
    fn trigger_boxed(&self) -> BoxFuture<'static, TriggerOutcome> {
        let this = self.clone();
        async move { this.trigger().await }.boxed()
    }

    fn downgrade(&self) -> Weak<Inner<F, D>> {
        Arc::downgrade(&self.inner)
    }

    fn upgrade(inner: &Weak<Inner<F, D>>) -> Option<Self> {
        inner.upgrade().map(|inner| Self { inner })
    }

    fn spawn_retry(&self, delay: Duration) -> JoinHandle<()> {
        let weak = self.downgrade();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(this) = Self::upgrade(&weak) else {
                return;
            };
            // Released before triggering, the trigger aborts a stored retry timer
            this.state().retry_timer = None;
            debug!("Retrying photo request");
            this.trigger_boxed().await;
        })
    }

    fn spawn_attention(&self, delay: Duration) -> JoinHandle<()> {
        let weak = self.downgrade();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(this) = Self::upgrade(&weak) else {
                return;
            };
            let mut state = this.state();
            state.attention_timer = None;
            if state.phase == Phase::Idle && state.control == ControlMode::Ready {
                debug!("Idle for {:?}, prompting for attention", delay);
                this.set_control(&mut state, ControlMode::Attention);
            }
        })
    }

    fn spawn_copy_reset(&self) -> JoinHandle<()> {
        let weak = self.downgrade();
        let delay = self.inner.config.copy_feedback;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(this) = Self::upgrade(&weak) else {
                return;
            };
            this.state().copy_timer = None;
            this.inner.surface.set_copy_control(CopyControl {
                label: this.inner.config.messages().copy_link,
                enabled: true,
            });
        })
    }
}

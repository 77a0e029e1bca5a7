// SPDX-License-Identifier: MPL-2.0
//! Demo viewer hosting a [`Lightbox`] in an Iced window.
//!
//! The `App` owns the lightbox and a [`SharedHost`] that the lightbox ports
//! write into. After every update the host state is drained: queued
//! fullscreen requests become window tasks, a store close drops the
//! lightbox, and the zoom view is mirrored for rendering.

mod message;
mod platform;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use platform::{iced_platform, HostState, SharedHost, ZoomView};

use crate::config::{self, paths, Options};
use crate::directory_scanner::{self, ScannedGallery};
use crate::domain::gallery::{Collection, ItemId};
use crate::error::Result;
use crate::infrastructure::download;
use crate::lightbox::{
    DownloadRequest, Effect, Lightbox, LightboxEvent, RawCallback, RawCallbacks, SlideChange,
    SlideCount,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Instant;

const APP_NAME: &str = "Iced Lightbox";

/// Root Iced application state.
pub struct App {
    lightbox: Option<Lightbox>,
    host: SharedHost,
    collection: Collection,
    options: Options,
    /// Zoom view mirrored from the host after each update.
    zoom: Option<ZoomView>,
    window_id: Option<window::Id>,
    fullscreen: bool,
    /// Time of the latest host tick, used for the progress bar.
    now: Instant,
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("open", &self.lightbox.is_some())
            .field("items", &self.collection.len())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Runs the viewer until the window closes.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (options, config_warning) = config::load_with_override(flags.config_dir.clone());
        let mut status =
            config_warning.map(|_| "Options could not be loaded; using defaults.".to_string());

        let gallery = match load_gallery(&flags) {
            Ok(gallery) => gallery,
            Err(err) => {
                tracing::warn!(%err, "failed to scan images");
                status = Some(err.to_string());
                ScannedGallery {
                    collection: Collection::default(),
                    selected: None,
                }
            }
        };

        let mut app = Self::with_gallery(gallery, options);
        if app.status.is_none() {
            app.status = status;
        }
        (app, Task::none())
    }

    /// Opens a lightbox over `gallery` when it has items.
    fn with_gallery(gallery: ScannedGallery, options: Options) -> Self {
        let mut app = Self {
            lightbox: None,
            host: SharedHost::default(),
            collection: gallery.collection,
            options,
            zoom: None,
            window_id: None,
            fullscreen: false,
            now: Instant::now(),
            status: None,
        };
        if app.collection.is_empty() {
            app.status = Some("Pass an image file or a directory to browse.".to_string());
        } else {
            app.open_lightbox(gallery.selected);
        }
        app
    }

    fn open_lightbox(&mut self, selected: Option<ItemId>) {
        let mut builder = Lightbox::builder(self.collection.clone(), iced_platform(&self.host))
            .options(self.options.clone())
            .callbacks(logging_callbacks());
        if let Some(id) = selected {
            builder = builder.selected(id);
        }
        self.lightbox = Some(builder.open(self.now));
    }

    fn title(&self) -> String {
        let current = self.lightbox.as_ref().and_then(Lightbox::current);
        match current {
            Some(item) => {
                let position = self
                    .collection
                    .iter()
                    .position(|candidate| candidate.id == item.id)
                    .map_or(0, |index| index + 1);
                let name = item.caption.as_deref().unwrap_or(item.id.as_str());
                format!("{name} ({position}/{}) - {APP_NAME}", self.collection.len())
            }
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let host = self.host.borrow();
        Subscription::batch([
            subscription::create_keyboard_subscription(host.keyboard),
            subscription::create_activity_subscription(),
            subscription::create_tick_subscription(self.lightbox.is_some()),
            subscription::create_autoplay_subscription(host.autoplay_period),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Lightbox(message) => match self.lightbox.as_mut() {
                Some(lightbox) => {
                    let effect = lightbox.update(message);
                    self.handle_effect(effect)
                }
                None => Task::none(),
            },
            Message::Tick(now) => {
                self.now = now;
                match self.lightbox.as_mut() {
                    Some(lightbox) => {
                        let effect = lightbox.tick(now);
                        self.handle_effect(effect)
                    }
                    None => Task::none(),
                }
            }
            Message::Open(id) => {
                if self.lightbox.is_none() {
                    self.status = None;
                    self.open_lightbox(Some(id));
                }
                Task::none()
            }
            Message::WindowSeen(id) => {
                self.window_id.get_or_insert(id);
                Task::none()
            }
            Message::SaveDialogResult { request, path } => match path {
                Some(path) => Task::perform(
                    async move {
                        download::save_to_path(&request, &path)
                            .await
                            .map(|_| path)
                            .map_err(|err| err.to_string())
                    },
                    Message::DownloadCompleted,
                ),
                None => Task::none(),
            },
            Message::DownloadCompleted(result) => {
                self.status = Some(match result {
                    Ok(path) => format!("Saved {}", path.display()),
                    Err(err) => {
                        tracing::warn!(%err, "download failed");
                        format!("Download failed: {err}")
                    }
                });
                Task::none()
            }
        };

        let host_task = self.drain_host();
        Task::batch([task, host_task])
    }

    fn view(&self) -> Element<'_, Message> {
        let progress_bar = &self.options.progress_bar;
        view::view(view::ViewContext {
            controls: self.lightbox.as_ref().map(|lightbox| lightbox.controls(self.now)),
            collection: &self.collection,
            zoom: self.zoom.as_ref(),
            bar_background: &progress_bar.background,
            bar_fill: &progress_bar.fill,
            bar_height: &progress_bar.height,
            status: self.status.as_deref(),
        })
    }

    fn handle_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Closed => {
                self.lightbox = None;
                self.leave_fullscreen()
            }
            Effect::Download(request) => save_dialog(request),
        }
    }

    /// Applies what the lightbox asked of the host since the last update.
    fn drain_host(&mut self) -> Task<Message> {
        let (fullscreen, close_requested) = {
            let mut host = self.host.borrow_mut();
            self.zoom = host.zoom.clone();
            (
                host.pending_fullscreen.take(),
                std::mem::take(&mut host.close_requested),
            )
        };

        if close_requested {
            // Dropping the lightbox unmounts it and writes back into the host.
            self.lightbox = None;
            self.zoom = None;
            return self.leave_fullscreen();
        }

        match (fullscreen, self.window_id) {
            (Some(target), Some(id)) => {
                tracing::debug!(item = %target.item, variant = ?target.variant, "entering fullscreen");
                self.fullscreen = true;
                window::set_mode(id, window::Mode::Fullscreen)
            }
            (Some(_), None) => {
                tracing::debug!("fullscreen requested before the window was seen");
                Task::none()
            }
            (None, _) => Task::none(),
        }
    }

    fn leave_fullscreen(&mut self) -> Task<Message> {
        match self.window_id {
            Some(id) if self.fullscreen => {
                self.fullscreen = false;
                window::set_mode(id, window::Mode::Windowed)
            }
            _ => Task::none(),
        }
    }
}

/// Resolves the launch path into a gallery. A directory opens on its first
/// image, a file opens on itself.
fn load_gallery(flags: &Flags) -> Result<ScannedGallery> {
    let Some(path) = flags.path.as_deref().map(Path::new) else {
        return Ok(ScannedGallery {
            collection: Collection::default(),
            selected: None,
        });
    };
    if path.is_dir() {
        let collection = directory_scanner::scan_directory(path, flags.sort_order)?;
        return Ok(ScannedGallery {
            collection,
            selected: None,
        });
    }
    directory_scanner::scan_around(path, flags.sort_order)
}

fn save_dialog(request: DownloadRequest) -> Task<Message> {
    let directory = paths::get_download_dir();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&request.file_name);
            if let Some(dir) = directory.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(&dir);
            }
            let path = dialog.save_file().await.map(|h| h.path().to_path_buf());
            (request, path)
        },
        |(request, path)| Message::SaveDialogResult { request, path },
    )
}

fn logging_callbacks() -> RawCallbacks {
    RawCallbacks::default()
        .on_slide_change(RawCallback::new(|change: &SlideChange| {
            tracing::info!(
                action = change.action.as_str(),
                index = change.index,
                item = %change.slides.current.id,
                "slide changed"
            );
        }))
        .on_lightbox_opened(RawCallback::new(|event: &LightboxEvent| {
            tracing::info!(item = ?event.current_slide.as_ref().map(|item| item.id.as_str()), "lightbox opened");
        }))
        .on_lightbox_closed(RawCallback::new(|event: &LightboxEvent| {
            tracing::info!(item = ?event.current_slide.as_ref().map(|item| item.id.as_str()), "lightbox closed");
        }))
        .on_count_slides(RawCallback::new(|count: &SlideCount| {
            tracing::debug!(total = count.total_slide, "slides counted");
        }))
}

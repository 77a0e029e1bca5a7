// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo viewer.

use crate::directory_scanner::SortOrder;
use crate::domain::gallery::ItemId;
use crate::lightbox::{self, DownloadRequest};
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Lightbox messages are
/// forwarded unchanged.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    /// Periodic tick for key settling, idle detection and the progress bar.
    Tick(Instant),
    /// Reopens the lightbox on the given item after it was closed.
    Open(ItemId),
    /// The window id, learned from the first window event.
    WindowSeen(window::Id),
    SaveDialogResult {
        request: DownloadRequest,
        path: Option<PathBuf>,
    },
    DownloadCompleted(Result<PathBuf, String>),
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Image file or directory to open.
    pub path: Option<String>,
    pub sort_order: SortOrder,
    /// Overrides the options directory.
    pub config_dir: Option<PathBuf>,
}

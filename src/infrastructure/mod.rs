// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the I/O the lightbox core leaves to its host.
//!
//! # Available Adapters
//!
//! - [`timer`]: Autoplay interval timer on the Tokio runtime (implements [`IntervalTimer`])
//! - [`download`]: Saving an item's source to disk over HTTP or from a local path
//!
//! [`IntervalTimer`]: crate::application::port::IntervalTimer

pub mod download;
pub mod timer;

pub use download::{save_to_directory, save_to_path};
pub use timer::{Ticks, TokioInterval};

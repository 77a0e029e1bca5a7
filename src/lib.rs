// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a lightbox navigation and interaction controller.
//!
//! The [`lightbox`] module holds the state machine: which item is shown,
//! which way the last transition went, and the autoplay, zoom and idle
//! modes, together with the resources (key subscriptions, zoom controllers,
//! timers, scroll lock) that must exist only while the lightbox is open.
//! Platform services are reached through the ports in
//! [`application::port`]; the [`app`] module hosts the controller in an
//! Iced demo viewer.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod lightbox;
pub mod test_utils;

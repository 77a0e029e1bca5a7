// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`Item`](gallery::Item), [`Collection`](gallery::Collection),
//!   [`Direction`](gallery::Direction)) and timing/zoom value objects
//!   ([`AutoplaySpeed`](gallery::AutoplaySpeed), [`IdleThreshold`](gallery::IdleThreshold),
//!   [`ZoomFactor`](gallery::ZoomFactor))

pub mod gallery;

// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Items, the ordered collection they live in, navigation direction, and the
//! value objects that keep autoplay, idle and zoom settings within range.

pub mod newtypes;
mod types;

pub use newtypes::{idle_bounds, zoom_bounds, AutoplaySpeed, IdleThreshold, ZoomFactor};
pub use types::{Collection, Direction, InteractionState, Item, ItemId, NavigationHint};

// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading and navigating domain data.
//! These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`navigation`]: Index lookup, wrap-around and direction resolution

pub mod navigation;

// Re-export main types
pub use navigation::{
    adjacent, index_of, next_index, previous_index, resolve_direction, Adjacent,
};

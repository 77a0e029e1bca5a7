// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer and the Iced adapters implement application layer ports
//! - The lightbox controller drives the ports, never a concrete platform
//!
//! # Example
//!
//! ```ignore
//! use iced_lightbox::application::port::KeyboardSource;
//! use iced_lightbox::application::query::next_index;
//!
//! struct DocumentKeys { /* ... */ }
//! impl KeyboardSource for DocumentKeys { /* ... */ }
//!
//! assert_eq!(next_index(2, 3), Some(0));
//! ```

pub mod port;
pub mod query;

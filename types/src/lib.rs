//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod geometry;
mod section;
mod state;
pub mod ui;

pub use geometry::SectionBox;
pub use section::{Section, UnknownSectionError};
pub use state::{MenuState, ScrollState};

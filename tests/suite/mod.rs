//! Integration test suite.

mod content;
mod navigation;

//! Restyle - React Native StyleSheet analyzer and cleaner
//!
//! Restyle is a CLI tool and library for keeping React Native style code tidy.
//! It finds `StyleSheet.create(...)` declarations, counts how often each named
//! style is referenced, removes unused entries, extracts inline styles into the
//! stylesheet, and consolidates duplicated inline style objects.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Style analysis and edit-planning engine
//! - `scanner`: Source file enumeration for batch operations

pub mod cli;
pub mod config;
pub mod core;
pub mod scanner;

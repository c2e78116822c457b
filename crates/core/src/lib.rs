//! Core business logic for Daybrief.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, defaulting rules, and report assembly live here.
//!
//! # Modules
//!
//! - `settings` - Report configuration singleton defaults
//! - `wizard` - Single-shot report parameter wizard
//! - `report` - Report payload, query windows, and context assembly
//! - `render` - HTML rendering and PDF conversion

pub mod render;
pub mod report;
pub mod settings;
pub mod wizard;

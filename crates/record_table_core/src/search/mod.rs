//! Search entry points.
//!
//! # Responsibility
//! - Derive the filtered view shown by the table.
//! - Keep match rules inside core so every host filters identically.

pub mod filter;

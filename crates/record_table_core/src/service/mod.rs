//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations behind validated, modal-driven use-cases.
//! - Keep UI/FFI layers decoupled from store details.

pub mod edit_controller;
pub mod record_table;

//! Domain model for table records and their edit form.
//!
//! # Responsibility
//! - Define the stored record shape and its stable key.
//! - Isolate the form-values to record conversion at one boundary.
//!
//! # Invariants
//! - Every stored record carries all three domain fields.
//! - Deletion is a hard delete; there are no tombstones.

pub mod form;
pub mod record;

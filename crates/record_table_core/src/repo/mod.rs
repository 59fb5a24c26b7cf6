//! Record store abstractions.
//!
//! # Responsibility
//! - Define the data access contract used by the edit controller.
//! - Keep store bookkeeping out of the view session.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateKey`)
//!   for writes; removal never fails.

pub mod record_repo;

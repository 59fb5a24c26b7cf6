//! Presentation table: sorting, pagination and the render model.
//!
//! # Responsibility
//! - Turn the filtered view into ordered, paged rows.
//! - Describe headers, actions and the modal as plain values.
//!
//! # Invariants
//! - Everything here is display-only; store order is never changed.

pub mod page;
pub mod sort;
pub mod view;

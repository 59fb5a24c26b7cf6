//! Flutter bridge for the record table core.

pub mod api;

//! Core domain logic for the record table widget.
//! This crate is the single source of truth for record, edit and search
//! invariants; UI hosts only draw what it renders.

pub mod config;
pub mod labels;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod table;

pub use config::TableConfig;
pub use logging::{init_logging, logging_status, LogLevel, LoggingError, LoggingStatus};
pub use model::form::{FieldError, FormField, FormValues, ValidationErrors};
pub use model::record::{format_date, parse_date, Record, RecordFields, RecordKey};
pub use repo::record_repo::{MemoryRecordRepository, RecordRepository, StoreError, StoreResult};
pub use search::filter::filter_records;
pub use service::edit_controller::{EditController, EditError, EditMode, ModalState, OpenModal};
pub use service::record_table::RecordTable;
pub use table::page::PageInfo;
pub use table::sort::{SortColumn, SortOrder, SortState};
pub use table::view::{ColumnView, FieldView, ModalView, RowView, TableView, ToolbarView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

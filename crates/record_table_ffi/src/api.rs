//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one opaque table handle per view instance to Dart via FRB.
//! - Translate core render models and errors into flat DTO envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.
//! - Record keys cross the boundary as their display strings.

use flutter_rust_bridge::frb;
use record_table_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_date,
    ping as ping_inner, EditError, RecordKey, RecordTable, SortColumn, SortOrder, TableConfig,
    TableView,
};
use std::sync::{Mutex, MutexGuard};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Inline field error shown next to a form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorDto {
    /// `name|date|value`.
    pub field: String,
    pub message: String,
}

/// Result envelope for table mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected record key, when one exists.
    pub key: Option<String>,
    /// Human-readable diagnostics message.
    pub message: String,
    /// Inline validation messages; empty unless validation failed.
    pub field_errors: Vec<FieldErrorDto>,
}

impl TableActionResponse {
    fn success(message: impl Into<String>, key: Option<RecordKey>) -> Self {
        Self {
            ok: true,
            key: key.map(|key| key.to_string()),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            key: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn from_edit_error(operation: &str, err: EditError) -> Self {
        let field_errors = match &err {
            EditError::Validation(errors) => errors
                .iter()
                .map(|error| FieldErrorDto {
                    field: error.field.as_str().to_string(),
                    message: error.message.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            ok: false,
            key: None,
            message: format!("{operation} failed: {err}"),
            field_errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDto {
    /// `name|date|value`, or empty for the actions column.
    pub id: String,
    pub title: String,
    pub sortable: bool,
    /// `ascend|descend`, or `None` when unsorted.
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowDto {
    pub key: String,
    pub name: String,
    pub date: String,
    pub value: f64,
    pub value_text: String,
    pub confirm_delete_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDto {
    pub field: String,
    pub label: String,
    pub text: String,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDto {
    pub title: String,
    pub editing_key: Option<String>,
    pub fields: Vec<FieldDto>,
}

/// Flat render model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewDto {
    pub add_label: String,
    pub search_placeholder: String,
    pub search_text: String,
    pub columns: Vec<ColumnDto>,
    pub rows: Vec<RowDto>,
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub page_count: u32,
    pub delete_confirm_prompt: String,
    pub modal: Option<ModalDto>,
    pub revision: u64,
    /// Non-empty only when rendering failed.
    pub message: String,
}

/// Opaque handle owning one record table view.
///
/// # FFI contract
/// - All methods are sync and run to completion before returning.
/// - A poisoned lock is reported as a failure, never a panic.
#[frb(opaque)]
pub struct RecordTableHandle {
    inner: Mutex<RecordTable>,
}

impl RecordTableHandle {
    /// Creates an empty table; page size comes from `RECORD_TABLE_PAGE_SIZE`.
    #[frb(sync)]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RecordTable::new(TableConfig::from_env())),
        }
    }

    #[frb(sync)]
    pub fn open_create(&self) -> TableActionResponse {
        self.with_table("open_create", |table| {
            table.open_create();
            TableActionResponse::success("Modal opened.", None)
        })
    }

    #[frb(sync)]
    pub fn open_edit(&self, key: String) -> TableActionResponse {
        self.with_key("open_edit", key.as_str(), |table, key| {
            match table.open_edit(key) {
                Ok(()) => TableActionResponse::success("Modal opened.", Some(key)),
                Err(err) => TableActionResponse::from_edit_error("open_edit", err),
            }
        })
    }

    #[frb(sync)]
    pub fn set_name(&self, name: String) -> TableActionResponse {
        self.with_table("set_name", |table| {
            field_response("set_name", table.set_name(name))
        })
    }

    /// Sets the form date from `YYYY-MM-DD`; empty or unparsable clears it.
    #[frb(sync)]
    pub fn set_date(&self, date: String) -> TableActionResponse {
        self.with_table("set_date", |table| {
            field_response("set_date", table.set_date(parse_date(date.as_str())))
        })
    }

    #[frb(sync)]
    pub fn set_value(&self, value: Option<f64>) -> TableActionResponse {
        self.with_table("set_value", |table| {
            field_response("set_value", table.set_value(value))
        })
    }

    /// Commits the open form and returns the created or edited key.
    #[frb(sync)]
    pub fn commit(&self) -> TableActionResponse {
        self.with_table("commit", |table| match table.commit() {
            Ok(key) => TableActionResponse::success("Record saved.", Some(key)),
            Err(err) => TableActionResponse::from_edit_error("commit", err),
        })
    }

    #[frb(sync)]
    pub fn cancel(&self) -> TableActionResponse {
        self.with_table("cancel", |table| {
            table.cancel();
            TableActionResponse::success("Modal closed.", None)
        })
    }

    #[frb(sync)]
    pub fn request_delete(&self, key: String) -> TableActionResponse {
        self.with_key("request_delete", key.as_str(), |table, key| {
            table.request_delete(key);
            TableActionResponse::success("Delete pending confirmation.", Some(key))
        })
    }

    /// Confirms the pending delete. A missing row is still `ok`.
    #[frb(sync)]
    pub fn confirm_delete(&self) -> TableActionResponse {
        self.with_table("confirm_delete", |table| {
            let key = table.pending_delete();
            let message = if table.confirm_delete() {
                "Record deleted."
            } else {
                "Nothing to delete."
            };
            TableActionResponse::success(message, key)
        })
    }

    #[frb(sync)]
    pub fn dismiss_delete(&self) -> TableActionResponse {
        self.with_table("dismiss_delete", |table| {
            table.dismiss_delete();
            TableActionResponse::success("Delete dismissed.", None)
        })
    }

    #[frb(sync)]
    pub fn set_search_text(&self, text: String) -> TableActionResponse {
        self.with_table("set_search_text", |table| {
            table.set_search_text(text);
            TableActionResponse::success("Search updated.", None)
        })
    }

    /// Advances the sort cycle on `column` (`name|date|value`).
    #[frb(sync)]
    pub fn toggle_sort(&self, column: String) -> TableActionResponse {
        let Some(column) = SortColumn::parse(column.as_str()) else {
            return TableActionResponse::failure(format!(
                "toggle_sort failed: unknown column `{column}`"
            ));
        };
        self.with_table("toggle_sort", |table| {
            table.toggle_sort(column);
            TableActionResponse::success("Sort updated.", None)
        })
    }

    #[frb(sync)]
    pub fn set_page(&self, page: u32) -> TableActionResponse {
        self.with_table("set_page", |table| {
            table.set_page(page as usize);
            TableActionResponse::success("Page updated.", None)
        })
    }

    #[frb(sync)]
    pub fn render(&self) -> TableViewDto {
        match self.lock() {
            Ok(table) => to_view_dto(table.render()),
            Err(message) => empty_view_dto(format!("render failed: {message}")),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RecordTable>, String> {
        self.inner.lock().map_err(|_| {
            log::error!("event=lock_poisoned module=ffi status=error");
            "table state lock poisoned".to_string()
        })
    }

    fn with_table(
        &self,
        operation: &str,
        f: impl FnOnce(&mut RecordTable) -> TableActionResponse,
    ) -> TableActionResponse {
        match self.lock() {
            Ok(mut table) => f(&mut table),
            Err(message) => TableActionResponse::failure(format!("{operation} failed: {message}")),
        }
    }

    fn with_key(
        &self,
        operation: &str,
        key: &str,
        f: impl FnOnce(&mut RecordTable, RecordKey) -> TableActionResponse,
    ) -> TableActionResponse {
        let Some(parsed) = RecordKey::parse(key) else {
            return TableActionResponse::failure(format!(
                "{operation} failed: invalid record key `{key}`"
            ));
        };
        self.with_table(operation, |table| f(table, parsed))
    }
}

impl Default for RecordTableHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn field_response(operation: &str, result: Result<(), EditError>) -> TableActionResponse {
    match result {
        Ok(()) => TableActionResponse::success("Field updated.", None),
        Err(err) => TableActionResponse::from_edit_error(operation, err),
    }
}

fn sort_order_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "ascend",
        SortOrder::Descending => "descend",
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn to_view_dto(view: TableView) -> TableViewDto {
    TableViewDto {
        add_label: view.toolbar.add_label,
        search_placeholder: view.toolbar.search_placeholder,
        search_text: view.toolbar.search_text,
        columns: view
            .columns
            .into_iter()
            .map(|column| ColumnDto {
                id: column
                    .column
                    .map(|id| id.as_str().to_string())
                    .unwrap_or_default(),
                title: column.title,
                sortable: column.sortable,
                sort_order: column
                    .sort_order
                    .map(|order| sort_order_label(order).to_string()),
            })
            .collect(),
        rows: view
            .rows
            .into_iter()
            .map(|row| RowDto {
                key: row.key.to_string(),
                name: row.name,
                date: row.date,
                value: row.value,
                value_text: row.value_text,
                confirm_delete_open: row.confirm_delete_open,
            })
            .collect(),
        page: to_u32(view.page.page),
        page_size: to_u32(view.page.page_size),
        total: to_u32(view.page.total),
        page_count: to_u32(view.page.page_count),
        delete_confirm_prompt: view.delete_confirm_prompt,
        modal: view.modal.map(|modal| ModalDto {
            title: modal.title,
            editing_key: modal.editing_key.map(|key| key.to_string()),
            fields: modal
                .fields
                .into_iter()
                .map(|field| FieldDto {
                    field: field.field,
                    label: field.label,
                    text: field.text,
                    required: field.required,
                    error: field.error,
                })
                .collect(),
        }),
        revision: view.revision,
        message: String::new(),
    }
}

fn empty_view_dto(message: String) -> TableViewDto {
    let mut dto = to_view_dto(RecordTable::default().render());
    dto.message = message;
    dto
}

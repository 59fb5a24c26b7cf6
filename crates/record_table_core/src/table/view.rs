//! Render model for the presentation table.
//!
//! # Responsibility
//! - Project session state into plain values a UI host can draw as-is.
//! - Carry every literal label so hosts never hardcode UI text.
//!
//! # Invariants
//! - Building a view never mutates the store or the session.
//! - Row dates are `YYYY-MM-DD`; row values use display number text.

use crate::labels;
use crate::model::form::FormField;
use crate::model::record::{format_date, format_value, Record, RecordKey};
use crate::service::edit_controller::{EditMode, OpenModal};
use crate::table::page::PageInfo;
use crate::table::sort::{SortColumn, SortOrder, SortState};
use serde::{Deserialize, Serialize};

/// Toolbar above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarView {
    pub add_label: String,
    pub search_placeholder: String,
    pub search_text: String,
}

/// One column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    /// `None` for the actions column.
    pub column: Option<SortColumn>,
    pub title: String,
    pub sortable: bool,
    pub sort_order: Option<SortOrder>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    pub key: RecordKey,
    pub name: String,
    pub date: String,
    pub value: f64,
    pub value_text: String,
    /// Whether this row's delete confirmation is showing.
    pub confirm_delete_open: bool,
}

/// One form item inside the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub field: String,
    pub label: String,
    /// Current input text; dates as `YYYY-MM-DD`, empty when unset.
    pub text: String,
    pub required: bool,
    pub error: Option<String>,
}

/// The open add/edit modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalView {
    pub title: String,
    pub editing_key: Option<RecordKey>,
    pub fields: Vec<FieldView>,
}

/// Complete render model for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub toolbar: ToolbarView,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    pub page: PageInfo,
    pub delete_confirm_prompt: String,
    pub modal: Option<ModalView>,
    /// Store revision this view was built from.
    pub revision: u64,
}

pub(crate) fn toolbar_view(search_text: &str) -> ToolbarView {
    ToolbarView {
        add_label: labels::ADD_BUTTON.to_string(),
        search_placeholder: labels::SEARCH_PLACEHOLDER.to_string(),
        search_text: search_text.to_string(),
    }
}

pub(crate) fn column_views(sort: &SortState) -> Vec<ColumnView> {
    let mut columns = SortColumn::ALL
        .iter()
        .map(|column| ColumnView {
            column: Some(*column),
            title: column.title().to_string(),
            sortable: true,
            sort_order: sort.order_for(*column),
        })
        .collect::<Vec<_>>();
    columns.push(ColumnView {
        column: None,
        title: labels::COLUMN_ACTIONS.to_string(),
        sortable: false,
        sort_order: None,
    });
    columns
}

pub(crate) fn row_view(record: &Record, pending_delete: Option<RecordKey>) -> RowView {
    RowView {
        key: record.key,
        name: record.name.clone(),
        date: record.date_text(),
        value: record.value,
        value_text: record.value_text(),
        confirm_delete_open: pending_delete == Some(record.key),
    }
}

pub(crate) fn modal_view(open: &OpenModal) -> ModalView {
    let (title, editing_key) = match open.mode {
        EditMode::Create => (labels::MODAL_TITLE_CREATE, None),
        EditMode::Edit(key) => (labels::MODAL_TITLE_EDIT, Some(key)),
    };
    let fields = FormField::ALL
        .iter()
        .map(|field| FieldView {
            field: field.as_str().to_string(),
            label: field.label().to_string(),
            text: field_text(open, *field),
            required: true,
            error: open.errors.message_for(*field).map(str::to_string),
        })
        .collect();

    ModalView {
        title: title.to_string(),
        editing_key,
        fields,
    }
}

fn field_text(open: &OpenModal, field: FormField) -> String {
    match field {
        FormField::Name => open.form.name.clone(),
        FormField::Date => open.form.date.map(format_date).unwrap_or_default(),
        FormField::Value => open.form.value.map(format_value).unwrap_or_default(),
    }
}

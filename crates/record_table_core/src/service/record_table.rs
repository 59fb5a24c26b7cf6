//! View session for one record table instance.
//!
//! # Responsibility
//! - Own the edit controller, search text, sort state, page and pending
//!   delete for one view.
//! - Expose one synchronous method per user action.
//! - Build the render model on demand.
//!
//! # Invariants
//! - Delete only happens through `request_delete` followed by
//!   `confirm_delete`.
//! - The filtered view is derived on every render; nothing is cached.
//! - Sorting and paging never change store order.

use crate::config::TableConfig;
use crate::labels;
use crate::model::record::{Record, RecordKey};
use crate::repo::record_repo::{MemoryRecordRepository, RecordRepository};
use crate::search::filter::filter_records;
use crate::service::edit_controller::{EditController, EditError, ModalState, OpenModal};
use crate::table::page::paginate;
use crate::table::sort::{SortColumn, SortState};
use crate::table::view::{column_views, modal_view, row_view, toolbar_view, TableView};
use chrono::NaiveDate;
use log::debug;

/// One record table view with its in-memory store.
pub struct RecordTable<R: RecordRepository = MemoryRecordRepository> {
    controller: EditController<R>,
    config: TableConfig,
    search_text: String,
    sort: SortState,
    page: usize,
    pending_delete: Option<RecordKey>,
}

impl RecordTable<MemoryRecordRepository> {
    /// Creates an empty table backed by a process-memory store.
    pub fn new(config: TableConfig) -> Self {
        Self::with_repository(MemoryRecordRepository::new(), config)
    }
}

impl Default for RecordTable<MemoryRecordRepository> {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl<R: RecordRepository> RecordTable<R> {
    pub fn with_repository(repo: R, config: TableConfig) -> Self {
        Self {
            controller: EditController::new(repo),
            config,
            search_text: String::new(),
            sort: SortState::default(),
            page: 1,
            pending_delete: None,
        }
    }

    /// All records in store order.
    pub fn records(&self) -> &[Record] {
        self.controller.records()
    }

    pub fn modal(&self) -> &ModalState {
        self.controller.modal()
    }

    pub fn open_modal(&self) -> Option<&OpenModal> {
        self.controller.open_modal()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pending_delete(&self) -> Option<RecordKey> {
        self.pending_delete
    }

    pub fn open_create(&mut self) {
        self.controller.open_create();
    }

    pub fn open_edit(&mut self, key: RecordKey) -> Result<(), EditError> {
        self.controller.open_edit(key)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EditError> {
        self.controller.set_name(name)
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) -> Result<(), EditError> {
        self.controller.set_date(date)
    }

    pub fn set_value(&mut self, value: Option<f64>) -> Result<(), EditError> {
        self.controller.set_value(value)
    }

    /// Commits the open modal. See [`EditController::commit`].
    pub fn commit(&mut self) -> Result<RecordKey, EditError> {
        self.controller.commit()
    }

    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    /// Opens the delete confirmation for the row with `key`.
    ///
    /// Opening it on another row replaces the previous pending delete.
    pub fn request_delete(&mut self, key: RecordKey) {
        self.pending_delete = Some(key);
    }

    /// Confirms the pending delete. Returns whether a row was removed.
    ///
    /// Without a pending delete, or when the key is already gone, this is a
    /// silent no-op.
    pub fn confirm_delete(&mut self) -> bool {
        match self.pending_delete.take() {
            Some(key) => self.controller.delete(key),
            None => false,
        }
    }

    /// Closes the delete confirmation without deleting.
    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Replaces the search text; applied synchronously on next render.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        debug!(
            "event=search_update module=table chars={}",
            self.search_text.chars().count()
        );
    }

    /// Advances the three-state sort cycle on `column`.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        debug!(
            "event=sort_toggle module=table column={} order={:?}",
            column.as_str(),
            self.sort.order_for(column)
        );
    }

    /// Requests a 1-based page; clamped at render time.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filtered rows in display order, before pagination.
    pub fn visible_records(&self) -> Vec<&Record> {
        let mut rows = filter_records(self.records(), &self.search_text);
        self.sort.apply(&mut rows);
        rows
    }

    /// Builds the render model for the current state.
    pub fn render(&self) -> TableView {
        let (page_rows, page) = paginate(self.visible_records(), self.page, self.config.page_size);
        let rows = page_rows
            .into_iter()
            .map(|record| row_view(record, self.pending_delete))
            .collect();

        TableView {
            toolbar: toolbar_view(&self.search_text),
            columns: column_views(&self.sort),
            rows,
            page,
            delete_confirm_prompt: labels::DELETE_CONFIRM.to_string(),
            modal: self.controller.open_modal().map(modal_view),
            revision: self.controller.repository().revision(),
        }
    }
}

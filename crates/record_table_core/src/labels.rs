//! Literal UI text rendered by the record table.
//!
//! # Responsibility
//! - Keep every user-visible string in one place.
//!
//! # Invariants
//! - Values are part of the observable contract and must not be reworded.

/// Primary toolbar button that opens the create modal.
pub const ADD_BUTTON: &str = "Добавить";
/// Placeholder of the search input.
pub const SEARCH_PLACEHOLDER: &str = "Поиск...";

pub const COLUMN_NAME: &str = "Имя";
pub const COLUMN_DATE: &str = "Дата";
pub const COLUMN_VALUE: &str = "Значение";
pub const COLUMN_ACTIONS: &str = "Действия";

/// Prompt shown by the per-row delete confirmation.
pub const DELETE_CONFIRM: &str = "Уверены, что хотите удалить?";

pub const MODAL_TITLE_CREATE: &str = "Добавить запись";
pub const MODAL_TITLE_EDIT: &str = "Редактировать запись";

pub const NAME_REQUIRED: &str = "Пожалуйста, введите имя";
pub const DATE_REQUIRED: &str = "Пожалуйста, выберите дату";
pub const VALUE_REQUIRED: &str = "Пожалуйста, введите значение";

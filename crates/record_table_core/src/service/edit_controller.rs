//! Edit controller for create/edit/delete transitions.
//!
//! # Responsibility
//! - Own the record store and the transient modal state.
//! - Validate form values before any store mutation.
//!
//! # Invariants
//! - The store is only mutated by `commit` and `delete`.
//! - A failed validation leaves the modal open and the store unchanged.
//! - Commit and cancel are the only transitions back to closed.
//! - New keys are generated at commit time, never at open time.

use crate::model::form::{FormField, FormValues, ValidationErrors};
use crate::model::record::{Record, RecordKey};
use crate::repo::record_repo::{RecordRepository, StoreError};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Controller error for modal use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// Required fields are missing; the modal stays open.
    Validation(ValidationErrors),
    /// Operation needs an open modal.
    ModalClosed,
    /// Edit target is not in the store.
    RecordNotFound(RecordKey),
    /// Store rejected the write.
    Store(StoreError),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "validation failed: {errors}"),
            Self::ModalClosed => write!(f, "edit modal is not open"),
            Self::RecordNotFound(key) => write!(f, "record not found: {key}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Store(err) => Some(err),
            Self::ModalClosed | Self::RecordNotFound(_) => None,
        }
    }
}

impl From<StoreError> for EditError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(key) => Self::RecordNotFound(key),
            other => Self::Store(other),
        }
    }
}

/// Whether the modal creates a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(RecordKey),
}

/// Contents of the open modal.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenModal {
    pub mode: EditMode,
    pub form: FormValues,
    pub errors: ValidationErrors,
}

/// Modal state machine: closed, or open in create/edit mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(OpenModal),
}

/// Use-case controller over a record repository.
pub struct EditController<R: RecordRepository> {
    repo: R,
    modal: ModalState,
}

impl<R: RecordRepository> EditController<R> {
    /// Creates a controller using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            modal: ModalState::Closed,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn records(&self) -> &[Record] {
        self.repo.records()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn open_modal(&self) -> Option<&OpenModal> {
        match &self.modal {
            ModalState::Open(open) => Some(open),
            ModalState::Closed => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    /// Opens an empty form with no edit target.
    pub fn open_create(&mut self) {
        self.modal = ModalState::Open(OpenModal {
            mode: EditMode::Create,
            form: FormValues::default(),
            errors: ValidationErrors::default(),
        });
        debug!("event=modal_open module=edit mode=create");
    }

    /// Opens the form pre-filled from the record with `key`.
    ///
    /// # Errors
    /// - `RecordNotFound` when no record has `key`; modal state is untouched.
    pub fn open_edit(&mut self, key: RecordKey) -> Result<(), EditError> {
        let record = self.repo.get(key).ok_or(EditError::RecordNotFound(key))?;
        self.modal = ModalState::Open(OpenModal {
            mode: EditMode::Edit(key),
            form: FormValues::from_record(record),
            errors: ValidationErrors::default(),
        });
        debug!("event=modal_open module=edit mode=edit");
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EditError> {
        let name = name.into();
        self.update_field(FormField::Name, |form| form.name = name)
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) -> Result<(), EditError> {
        self.update_field(FormField::Date, |form| form.date = date)
    }

    pub fn set_value(&mut self, value: Option<f64>) -> Result<(), EditError> {
        self.update_field(FormField::Value, |form| form.value = value)
    }

    /// Validates and commits the open form.
    ///
    /// Returns the key of the created or edited record.
    ///
    /// # Errors
    /// - `ModalClosed` when no modal is open.
    /// - `Validation` when required fields are missing; errors are also
    ///   attached to the open modal.
    /// - `RecordNotFound` when the edit target vanished; the modal closes and
    ///   the store is unchanged.
    pub fn commit(&mut self) -> Result<RecordKey, EditError> {
        let ModalState::Open(open) = &mut self.modal else {
            return Err(EditError::ModalClosed);
        };

        let fields = match open.form.to_fields() {
            Ok(fields) => fields,
            Err(errors) => {
                open.errors = errors.clone();
                info!(
                    "event=record_commit module=edit status=invalid missing={}",
                    errors.len()
                );
                return Err(EditError::Validation(errors));
            }
        };

        let mode = open.mode;
        self.modal = ModalState::Closed;

        match mode {
            EditMode::Create => {
                let key = self.repo.append(Record::new(fields))?;
                info!(
                    "event=record_create module=edit status=ok total={}",
                    self.repo.records().len()
                );
                Ok(key)
            }
            EditMode::Edit(key) => {
                if let Err(err) = self.repo.replace(Record::with_key(key, fields)) {
                    warn!("event=record_update module=edit status=error reason=not_found");
                    return Err(err.into());
                }
                info!("event=record_update module=edit status=ok");
                Ok(key)
            }
        }
    }

    /// Closes the modal without touching the store.
    pub fn cancel(&mut self) {
        if self.is_modal_open() {
            debug!("event=modal_cancel module=edit");
        }
        self.modal = ModalState::Closed;
    }

    /// Removes the record with `key`; a missing key is a silent no-op.
    ///
    /// Callers are responsible for the confirmation step.
    pub fn delete(&mut self, key: RecordKey) -> bool {
        let removed = self.repo.remove(key);
        if removed {
            info!(
                "event=record_delete module=edit status=ok total={}",
                self.repo.records().len()
            );
        } else {
            debug!("event=record_delete module=edit status=noop");
        }
        removed
    }

    fn update_field(
        &mut self,
        field: FormField,
        apply: impl FnOnce(&mut FormValues),
    ) -> Result<(), EditError> {
        let ModalState::Open(open) = &mut self.modal else {
            return Err(EditError::ModalClosed);
        };
        apply(&mut open.form);
        if open.form.is_filled(field) {
            open.errors.clear(field);
        } else {
            open.errors.require(field);
        }
        Ok(())
    }
}

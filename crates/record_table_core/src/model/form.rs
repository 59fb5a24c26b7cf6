//! Edit form values and required-field validation.
//!
//! # Responsibility
//! - Hold the date-aware editing representation while the modal is open.
//! - Convert form values into stored record fields in one pure function.
//!
//! # Invariants
//! - `to_fields` reports every failing field, not just the first one.
//! - A record built from `to_fields` output is always complete.

use crate::labels;
use crate::model::record::{Record, RecordFields};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form field identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Date,
    Value,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Date, FormField::Value];

    /// Field label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => labels::COLUMN_NAME,
            Self::Date => labels::COLUMN_DATE,
            Self::Value => labels::COLUMN_VALUE,
        }
    }

    /// Message shown when the field is left empty.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Name => labels::NAME_REQUIRED,
            Self::Date => labels::DATE_REQUIRED,
            Self::Value => labels::VALUE_REQUIRED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Value => "value",
        }
    }
}

/// One inline validation message attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Set of inline field errors, at most one per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns the message currently shown next to `field`, if any.
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Shows the required message for `field`, keeping field order.
    pub fn require(&mut self, field: FormField) {
        if self.message_for(field).is_some() {
            return;
        }
        self.errors.push(FieldError {
            field,
            message: field.required_message(),
        });
        self.errors.sort_by_key(|error| field_rank(error.field));
    }

    pub fn clear(&mut self, field: FormField) {
        self.errors.retain(|error| error.field != field);
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field.as_str(), error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Values held by the modal form while it is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
}

impl FormValues {
    /// Pre-populates the form from an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            date: Some(record.date),
            value: Some(record.value),
        }
    }

    /// Returns whether `field` currently satisfies its required rule.
    ///
    /// Only an empty name fails; whitespace is accepted as typed. A value
    /// that is not a finite number counts as missing.
    pub fn is_filled(&self, field: FormField) -> bool {
        match field {
            FormField::Name => !self.name.is_empty(),
            FormField::Date => self.date.is_some(),
            FormField::Value => self.value.is_some_and(f64::is_finite),
        }
    }

    /// Converts form values into record fields.
    ///
    /// # Errors
    /// - Returns every missing required field with its inline message.
    pub fn to_fields(&self) -> Result<RecordFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in FormField::ALL {
            if !self.is_filled(field) {
                errors.require(field);
            }
        }

        match (self.date, self.value) {
            (Some(date), Some(value)) if errors.is_empty() => Ok(RecordFields {
                name: self.name.clone(),
                date,
                value,
            }),
            _ => Err(errors),
        }
    }
}

fn field_rank(field: FormField) -> usize {
    match field {
        FormField::Name => 0,
        FormField::Date => 1,
        FormField::Value => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, FormValues, ValidationErrors};
    use crate::labels;
    use chrono::NaiveDate;

    #[test]
    fn empty_form_reports_all_required_messages_in_order() {
        let errors = FormValues::default().to_fields().unwrap_err();
        let messages: Vec<_> = errors.iter().map(|error| error.message).collect();
        assert_eq!(
            messages,
            vec![
                labels::NAME_REQUIRED,
                labels::DATE_REQUIRED,
                labels::VALUE_REQUIRED
            ]
        );
    }

    #[test]
    fn complete_form_converts_to_fields() {
        let form = FormValues {
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            value: Some(10.0),
        };
        let fields = form.to_fields().unwrap();
        assert_eq!(fields.name, "Alice");
        assert_eq!(fields.value, 10.0);
    }

    #[test]
    fn zero_value_counts_as_present() {
        let form = FormValues {
            name: "zero".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            value: Some(0.0),
        };
        assert!(form.to_fields().is_ok());
    }

    #[test]
    fn non_finite_value_counts_as_missing() {
        let form = FormValues {
            name: "nan".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            value: Some(f64::NAN),
        };
        let errors = form.to_fields().unwrap_err();
        assert_eq!(
            errors.message_for(FormField::Value),
            Some(labels::VALUE_REQUIRED)
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn require_and_clear_keep_one_error_per_field() {
        let mut errors = ValidationErrors::default();
        errors.require(FormField::Value);
        errors.require(FormField::Name);
        errors.require(FormField::Name);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.iter().next().unwrap().field, FormField::Name);

        errors.clear(FormField::Name);
        assert_eq!(errors.message_for(FormField::Name), None);
        assert!(!errors.is_empty());
    }
}

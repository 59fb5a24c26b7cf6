//! Column sorting for the presentation table.
//!
//! # Responsibility
//! - Track the single active sort criterion.
//! - Order rendered rows per column semantics.
//!
//! # Invariants
//! - Sorting reorders a borrowed row list and never touches the store.
//! - Sorting is stable; equal rows keep filtered order in both directions.
//! - Each column cycles `none -> ascending -> descending -> none`.

use crate::labels;
use crate::model::record::Record;
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

thread_local! {
    static NAME_COLLATOR: Option<Collator> = build_name_collator();
}

/// Sortable data columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Date,
    Value,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::Name, SortColumn::Date, SortColumn::Value];

    pub fn title(self) -> &'static str {
        match self {
            Self::Name => labels::COLUMN_NAME,
            Self::Date => labels::COLUMN_DATE,
            Self::Value => labels::COLUMN_VALUE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Value => "value",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "date" => Some(Self::Date),
            "value" => Some(Self::Value),
            _ => None,
        }
    }

    /// Ascending comparator for this column.
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::Date => a.date.cmp(&b.date),
            Self::Value => a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The active sort criterion, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    active: Option<(SortColumn, SortOrder)>,
}

impl SortState {
    pub fn new(column: SortColumn, order: SortOrder) -> Self {
        Self {
            active: Some((column, order)),
        }
    }

    pub fn active(&self) -> Option<(SortColumn, SortOrder)> {
        self.active
    }

    /// Advances the three-state cycle for `column`.
    ///
    /// Clicking a different column starts that column at ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((current, SortOrder::Ascending)) if current == column => {
                Some((column, SortOrder::Descending))
            }
            Some((current, SortOrder::Descending)) if current == column => None,
            _ => Some((column, SortOrder::Ascending)),
        };
    }

    /// Returns the order shown on `column`'s header.
    pub fn order_for(&self, column: SortColumn) -> Option<SortOrder> {
        match self.active {
            Some((current, order)) if current == column => Some(order),
            _ => None,
        }
    }

    /// Sorts rows in place. A no-op when no criterion is active.
    pub fn apply(&self, rows: &mut [&Record]) {
        let Some((column, order)) = self.active else {
            return;
        };
        match order {
            SortOrder::Ascending => rows.sort_by(|a, b| column.compare(a, b)),
            SortOrder::Descending => rows.sort_by(|a, b| column.compare(a, b).reverse()),
        }
    }
}

/// Case-aware name ordering.
///
/// Uses Russian tertiary collation: letters first (`ё` next to `е`,
/// `É` next to `E`), then accents, then case with lowercase first. Names
/// equal under collation fall back to code point order so the order stays
/// total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a)),
        })
        .then_with(|| a.cmp(b))
}

fn build_name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&locale!("ru").into(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!("event=collator_init module=table status=error fallback=codepoint error={err}");
            None
        }
    }
}

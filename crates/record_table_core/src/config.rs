//! Table configuration.
//!
//! # Invariants
//! - `page_size` is always within `1..=MAX_PAGE_SIZE`.
//! - Invalid environment input falls back to defaults instead of failing.

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;
pub const PAGE_SIZE_ENV: &str = "RECORD_TABLE_PAGE_SIZE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableConfig {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: normalize_page_size(Some(page_size)),
        }
    }

    /// Reads `RECORD_TABLE_PAGE_SIZE`; unset, empty or invalid means default.
    pub fn from_env() -> Self {
        let raw = std::env::var(PAGE_SIZE_ENV).ok();
        Self {
            page_size: normalize_page_size(raw.as_deref().and_then(parse_page_size)),
        }
    }
}

/// Normalizes a page size: `0`/unset becomes the default, large values cap.
pub fn normalize_page_size(page_size: Option<usize>) -> usize {
    match page_size {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(value) if value > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
        Some(value) => value,
    }
}

fn parse_page_size(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{normalize_page_size, parse_page_size, TableConfig, DEFAULT_PAGE_SIZE};

    #[test]
    fn normalize_page_size_applies_default_and_cap() {
        assert_eq!(normalize_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(0)), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(25)), 25);
        assert_eq!(normalize_page_size(Some(5_000)), 100);
    }

    #[test]
    fn parse_page_size_rejects_garbage() {
        assert_eq!(parse_page_size(" 20 "), Some(20));
        assert_eq!(parse_page_size(""), None);
        assert_eq!(parse_page_size("ten"), None);
        assert_eq!(parse_page_size("-1"), None);
    }

    #[test]
    fn with_page_size_normalizes() {
        assert_eq!(TableConfig::with_page_size(0).page_size, DEFAULT_PAGE_SIZE);
    }
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `record_table_core` linkage outside the Flutter/FFI runtime.
//! - Print a deterministic demo table for quick local sanity checks.

use record_table_core::{parse_date, EditError, RecordTable, SortColumn, TableConfig};

const DEMO_ROWS: [(&str, &str, f64); 3] = [
    ("Иван", "2024-03-01", 12.5),
    ("Alice", "2024-01-01", 10.0),
    ("Bob", "2023-11-20", -4.0),
];

fn main() {
    println!("record_table_core ping={}", record_table_core::ping());
    println!("record_table_core version={}", record_table_core::core_version());

    let mut table = RecordTable::new(TableConfig::from_env());
    for (name, date, value) in DEMO_ROWS {
        if let Err(err) = add_row(&mut table, name, date, value) {
            eprintln!("demo row rejected: {err}");
            table.cancel();
        }
    }
    table.toggle_sort(SortColumn::Date);

    let view = table.render();
    let header = view
        .columns
        .iter()
        .map(|column| column.title.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{header}");
    for row in &view.rows {
        println!("{} | {} | {}", row.name, row.date, row.value_text);
    }
    println!(
        "page {}/{} total={}",
        view.page.page, view.page.page_count, view.page.total
    );
}

fn add_row(table: &mut RecordTable, name: &str, date: &str, value: f64) -> Result<(), EditError> {
    table.open_create();
    table.set_name(name)?;
    table.set_date(parse_date(date))?;
    table.set_value(Some(value))?;
    table.commit()?;
    Ok(())
}

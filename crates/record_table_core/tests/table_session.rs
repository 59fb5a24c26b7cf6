use chrono::NaiveDate;
use record_table_core::labels;
use record_table_core::{
    EditError, ModalState, RecordKey, RecordTable, SortColumn, SortOrder, TableConfig,
};

fn add(table: &mut RecordTable, name: &str, date: &str, value: f64) -> RecordKey {
    table.open_create();
    table.set_name(name).unwrap();
    table
        .set_date(NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .unwrap();
    table.set_value(Some(value)).unwrap();
    table.commit().unwrap()
}

fn rendered_names(table: &RecordTable) -> Vec<String> {
    table
        .render()
        .rows
        .into_iter()
        .map(|row| row.name)
        .collect()
}

fn store_names(table: &RecordTable) -> Vec<String> {
    table
        .records()
        .iter()
        .map(|record| record.name.clone())
        .collect()
}

#[test]
fn render_exposes_literal_labels() {
    let table = RecordTable::default();
    let view = table.render();

    assert_eq!(view.toolbar.add_label, "Добавить");
    assert_eq!(view.toolbar.search_placeholder, "Поиск...");
    let titles: Vec<_> = view.columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Имя", "Дата", "Значение", "Действия"]);
    assert!(!view.columns[3].sortable);
    assert_eq!(view.delete_confirm_prompt, "Уверены, что хотите удалить?");
    assert!(view.modal.is_none());
}

#[test]
fn modal_title_follows_mode() {
    let mut table = RecordTable::default();
    table.open_create();
    assert_eq!(
        table.render().modal.unwrap().title,
        labels::MODAL_TITLE_CREATE
    );
    table.cancel();

    let key = add(&mut table, "Alice", "2024-01-01", 10.0);
    table.open_edit(key).unwrap();
    let modal = table.render().modal.unwrap();
    assert_eq!(modal.title, labels::MODAL_TITLE_EDIT);
    assert_eq!(modal.editing_key, Some(key));
    let texts: Vec<_> = modal.fields.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(texts, vec!["Alice", "2024-01-01", "10"]);
}

#[test]
fn alice_scenario_through_session() {
    let mut table = RecordTable::default();
    add(&mut table, "Alice", "2024-01-01", 10.0);
    assert_eq!(table.records().len(), 1);

    table.set_search_text("alice");
    assert_eq!(rendered_names(&table), vec!["Alice"]);

    table.set_search_text("bob");
    assert_eq!(table.search_text(), "bob");
    assert!(table.render().rows.is_empty());
    assert_eq!(table.records().len(), 1);
}

#[test]
fn delete_requires_explicit_confirmation() {
    let mut table = RecordTable::default();
    let key = add(&mut table, "only", "2024-01-01", 1.0);

    table.request_delete(key);
    let view = table.render();
    assert!(view.rows[0].confirm_delete_open);
    table.dismiss_delete();
    assert_eq!(table.records().len(), 1);
    assert!(!table.render().rows[0].confirm_delete_open);

    assert!(!table.confirm_delete());
    assert_eq!(table.records().len(), 1);

    table.request_delete(key);
    assert!(table.confirm_delete());
    assert!(table.records().is_empty());
    assert_eq!(table.pending_delete(), None);
}

#[test]
fn confirming_delete_of_missing_key_is_silent_noop() {
    let mut table = RecordTable::default();
    add(&mut table, "stay", "2024-01-01", 1.0);
    table.request_delete(RecordKey::generate());
    assert!(!table.confirm_delete());
    assert_eq!(table.records().len(), 1);
}

#[test]
fn empty_name_scenario_keeps_modal_open_with_message() {
    let mut table = RecordTable::default();
    table.open_create();
    table
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 1))
        .unwrap();
    table.set_value(Some(3.0)).unwrap();

    assert!(matches!(table.commit(), Err(EditError::Validation(_))));
    assert!(matches!(table.modal(), ModalState::Open(_)));
    assert!(table.records().is_empty());

    let modal = table.render().modal.unwrap();
    assert_eq!(
        modal.fields[0].error.as_deref(),
        Some("Пожалуйста, введите имя")
    );
    assert_eq!(modal.fields[1].error, None);
}

#[test]
fn sort_is_display_only_and_three_state() {
    let mut table = RecordTable::default();
    add(&mut table, "bob", "2024-03-01", 2.0);
    add(&mut table, "Alice", "2023-12-31", 30.0);
    add(&mut table, "carol", "2024-01-15", -1.0);
    let store_order = store_names(&table);

    table.toggle_sort(SortColumn::Name);
    assert_eq!(rendered_names(&table), vec!["Alice", "bob", "carol"]);
    table.toggle_sort(SortColumn::Name);
    assert_eq!(rendered_names(&table), vec!["carol", "bob", "Alice"]);
    assert_eq!(
        table.render().columns[0].sort_order,
        Some(SortOrder::Descending)
    );
    table.toggle_sort(SortColumn::Name);
    assert_eq!(table.sort().active(), None);
    assert_eq!(rendered_names(&table), store_order);

    table.toggle_sort(SortColumn::Date);
    assert_eq!(rendered_names(&table), vec!["Alice", "carol", "bob"]);

    table.toggle_sort(SortColumn::Value);
    assert_eq!(rendered_names(&table), vec!["carol", "bob", "Alice"]);
    assert_eq!(table.render().columns[1].sort_order, None);

    assert_eq!(store_names(&table), store_order);
}

#[test]
fn date_sort_is_chronological_not_lexicographic() {
    let mut table = RecordTable::default();
    add(&mut table, "late", "2024-10-02", 1.0);
    add(&mut table, "early", "0999-01-01", 1.0);
    add(&mut table, "mid", "2024-09-30", 1.0);

    table.toggle_sort(SortColumn::Date);
    assert_eq!(rendered_names(&table), vec!["early", "mid", "late"]);
}

#[test]
fn value_sort_is_numeric() {
    let mut table = RecordTable::default();
    add(&mut table, "nine", "2024-01-01", 9.0);
    add(&mut table, "hundred", "2024-01-01", 100.0);
    add(&mut table, "ten", "2024-01-01", 10.0);

    table.toggle_sort(SortColumn::Value);
    assert_eq!(rendered_names(&table), vec!["nine", "ten", "hundred"]);
}

#[test]
fn sorting_twice_is_deterministic_and_keeps_row_set() {
    let mut table = RecordTable::default();
    for (name, value) in [("a", 1.0), ("b", 1.0), ("c", 0.0), ("d", 1.0)] {
        add(&mut table, name, "2024-01-01", value);
    }

    table.toggle_sort(SortColumn::Value);
    let first = rendered_names(&table);
    let second = rendered_names(&table);
    assert_eq!(first, second);
    assert_eq!(first, vec!["c", "a", "b", "d"]);

    table.toggle_sort(SortColumn::Value);
    assert_eq!(rendered_names(&table), vec!["a", "b", "d", "c"]);

    let mut sorted = rendered_names(&table);
    sorted.sort();
    let mut stored = store_names(&table);
    stored.sort();
    assert_eq!(sorted, stored);
}

#[test]
fn pagination_clamps_when_search_shrinks_result() {
    let mut table = RecordTable::new(TableConfig::with_page_size(10));
    for index in 0..23 {
        add(&mut table, &format!("row{index:02}"), "2024-01-01", index as f64);
    }

    table.set_page(3);
    let view = table.render();
    assert_eq!(view.page.page, 3);
    assert_eq!(view.page.page_count, 3);
    assert_eq!(view.page.total, 23);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[0].name, "row20");

    table.set_search_text("row1");
    let view = table.render();
    assert_eq!(view.page.total, 10);
    assert_eq!(view.page.page, 1);
    assert_eq!(view.rows.len(), 10);
}

#[test]
fn render_revision_follows_store_changes() {
    let mut table = RecordTable::default();
    let before = table.render().revision;
    let key = add(&mut table, "x", "2024-01-01", 1.0);
    let after_create = table.render().revision;
    assert!(after_create > before);

    table.set_search_text("nothing");
    assert_eq!(table.render().revision, after_create);

    table.request_delete(key);
    table.confirm_delete();
    assert!(table.render().revision > after_create);
}

#[test]
fn table_view_serializes_for_hosts() {
    let mut table = RecordTable::default();
    add(&mut table, "Alice", "2024-01-01", 10.0);
    table.toggle_sort(SortColumn::Date);

    let json = serde_json::to_value(table.render()).unwrap();
    assert_eq!(json["rows"][0]["date"], "2024-01-01");
    assert_eq!(json["rows"][0]["value_text"], "10");
    assert_eq!(json["columns"][1]["sort_order"], "ascending");
    assert_eq!(json["columns"][1]["column"], "date");
}

//! Integration tests for the table engine.

use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tabula_core::{
    CellValue, CheckState, Column, ColumnModel, DataStatus, DataTable, PageItem, SortDirection,
    SortState, TableAction, TableCallbacks, TableConfig, TableMessage, TableOptions, TableRow,
    TableView,
};

fn people() -> Vec<TableRow> {
    vec![
        TableRow::new().cell("name", "B").cell("email", "b@mail.com"),
        TableRow::new().cell("name", "A").cell("email", "a@mail.com"),
    ]
}

fn people_columns() -> ColumnModel<TableRow> {
    ColumnModel::try_new(vec![
        Column::field("name", "Name").sortable(),
        Column::field("email", "Email"),
    ])
    .expect("unique ids")
}

fn names(view: &TableView<'_, TableRow>) -> Vec<String> {
    view.page()
        .expect("populated")
        .rows
        .iter()
        .map(|r| r.cells[0].display())
        .collect()
}

#[test]
fn test_basic_render_keeps_source_order() {
    let rows = people();
    let mut table = DataTable::new(people_columns(), TableOptions::default()).expect("valid");
    let view = table.view(&rows, &DataStatus::ready());

    assert_eq!(names(&view), vec!["B", "A"]);
    let page = view.page().expect("populated");
    assert_eq!(
        page.headers.iter().map(|h| h.header.as_str()).collect::<Vec<_>>(),
        vec!["Name", "Email"]
    );
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.row_span, Some((1, 2)));
    assert_eq!(page.select_all, CheckState::Unchecked);
}

#[test]
fn test_sort_trigger_notifies_ascending() {
    let rows = people();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut table = DataTable::new(people_columns(), TableOptions::default())
        .expect("valid")
        .with_callbacks(TableCallbacks::new().on_sort_change(move |s| sink.borrow_mut().push(s.cloned())));

    table.view(&rows, &DataStatus::ready());
    table.dispatch(TableAction::HeaderClicked("name".to_string()));

    assert_eq!(
        *seen.borrow(),
        vec![Some(SortState {
            column_id: "name".to_string(),
            direction: SortDirection::Ascending,
        })]
    );
    assert_eq!(names(&table.view(&rows, &DataStatus::ready())), vec!["A", "B"]);
}

#[test]
fn test_global_filter_is_case_insensitive_substring() {
    let rows = people();
    let mut table = DataTable::new(people_columns(), TableOptions::default()).expect("valid");

    table.set_global_filter(Some("A@"));
    assert_eq!(names(&table.view(&rows, &DataStatus::ready())), vec!["A"]);

    // "b@mail.com" contains an "a" as well
    table.set_global_filter(Some("a"));
    assert_eq!(names(&table.view(&rows, &DataStatus::ready())), vec!["B", "A"]);

    table.set_global_filter(None);
    assert_eq!(names(&table.view(&rows, &DataStatus::ready())), vec!["B", "A"]);
}

#[test]
fn test_empty_rows_render_no_data_state() {
    let mut table = DataTable::new(people_columns(), TableOptions::default()).expect("valid");
    match table.view(&[], &DataStatus::ready()) {
        TableView::Empty { filtered } => assert!(!filtered),
        other => panic!("expected empty state, got {other:?}"),
    }

    let mut manual =
        DataTable::new(people_columns(), TableOptions::new().manual(0)).expect("valid");
    assert!(manual.view(&[], &DataStatus::ready()).is_empty());
}

#[test]
fn test_manual_pagination_passes_rows_through() {
    let rows: Vec<TableRow> = (0..10)
        .map(|i| TableRow::new().cell("name", format!("server{i}")))
        .collect();
    let pages = Rc::new(RefCell::new(Vec::new()));
    let sink = pages.clone();
    let mut table = DataTable::new(people_columns(), TableOptions::new().manual(137))
        .expect("valid")
        .with_callbacks(TableCallbacks::new().on_page_change(move |p| sink.borrow_mut().push(p)));

    let view = table.view(&rows, &DataStatus::ready());
    let page = view.page().expect("populated");
    assert_eq!(page.pagination.total_pages, 14);
    assert_eq!(page.pagination.total_count, 137);
    assert!(page.pagination.manual);
    assert_eq!(
        page.rows.iter().map(|r| r.source_index).collect::<Vec<_>>(),
        (0..10).collect::<Vec<_>>()
    );

    table.go_to_page(14);
    assert_eq!(*pages.borrow(), vec![14]);

    // The caller supplies the last page of 7 rows
    let last: Vec<TableRow> = rows.into_iter().take(7).collect();
    let view = table.view(&last, &DataStatus::ready());
    let page = view.page().expect("populated");
    assert_eq!(page.len(), 7);
    assert_eq!(page.pagination.row_span, Some((131, 137)));
    assert!(!page.pagination.can_next);
}

#[test]
fn test_manual_pages_fetched_separately_are_each_sorted() {
    let fetch = |names: [&str; 3]| -> Vec<TableRow> {
        names.into_iter().map(|n| TableRow::new().cell("name", n)).collect()
    };
    let mut table = DataTable::new(people_columns(), TableOptions::new().page_size(3).manual(6))
        .expect("valid");
    table.click_header("name");

    let page_one = fetch(["C", "A", "B"]);
    assert_eq!(names(&table.view(&page_one, &DataStatus::ready())), vec!["A", "B", "C"]);
    drop(page_one);

    assert_eq!(table.go_to_page(2), Some(TableMessage::PageChanged(2)));
    let page_two = fetch(["X", "Z", "Y"]);
    assert_eq!(names(&table.view(&page_two, &DataStatus::ready())), vec!["X", "Y", "Z"]);
}

#[test]
fn test_manual_total_shrinks_and_clamps_page() {
    let rows = vec![TableRow::new().cell("name", "x")];
    let mut table =
        DataTable::new(people_columns(), TableOptions::new().manual(100)).expect("valid");
    table.view(&rows, &DataStatus::ready());
    table.go_to_page(10);
    table.set_total_count(25);
    assert_eq!(table.current_page(), 3);
}

#[test]
fn test_loading_and_error_take_priority() {
    let rows = people();
    let retries = Rc::new(RefCell::new(0));
    let sink = retries.clone();
    let mut table = DataTable::new(people_columns(), TableOptions::default())
        .expect("valid")
        .with_callbacks(TableCallbacks::new().on_retry(move || *sink.borrow_mut() += 1));

    assert!(table.view(&rows, &DataStatus::loading()).is_loading());
    match table.view(&rows, &DataStatus::failed("503 Service Unavailable")) {
        TableView::Error { message } => assert_eq!(message, "503 Service Unavailable"),
        other => panic!("expected error state, got {other:?}"),
    }
    table.dispatch(TableAction::RetryClicked);
    assert_eq!(*retries.borrow(), 1);
}

#[test]
fn test_shift_click_selects_range_on_page() {
    let rows: Vec<TableRow> = (0..8)
        .map(|i| TableRow::new().cell("name", format!("r{i}")))
        .collect();
    let mut table = DataTable::new(people_columns(), TableOptions::default()).expect("valid");
    table.view(&rows, &DataStatus::ready());

    table.dispatch(TableAction::RowToggled { index: 5, shift: false });
    table.dispatch(TableAction::RowToggled { index: 2, shift: true });

    let view = table.view(&rows, &DataStatus::ready());
    let page = view.page().expect("populated");
    let selected: Vec<String> = page
        .rows
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.cells[0].display())
        .collect();
    assert_eq!(selected, vec!["r2", "r3", "r4", "r5"]);
    assert_eq!(page.select_all, CheckState::Indeterminate);
}

#[test]
fn test_derived_column_and_visibility() {
    let rows = people();
    let columns = ColumnModel::try_new(vec![
        Column::field("name", "Name"),
        Column::derived("domain", "Domain", |row: &TableRow, _| {
            row.get("email")
                .map(CellValue::display)
                .and_then(|e| e.split_once('@').map(|(_, d)| d.to_string()))
                .map_or(CellValue::Empty, CellValue::from)
        }),
        Column::derived("position", "#", |_: &TableRow, index| CellValue::from(index as f64 + 1.0)),
    ])
    .expect("unique ids");
    let mut table = DataTable::new(columns, TableOptions::default()).expect("valid");

    table.toggle_column("position");
    let view = table.view(&rows, &DataStatus::ready());
    let page = view.page().expect("populated");
    assert_eq!(page.headers.len(), 2);
    assert_eq!(page.rows[0].cells, vec![CellValue::from("B"), CellValue::from("mail.com")]);

    table.toggle_column("position");
    let view = table.view(&rows, &DataStatus::ready());
    assert_eq!(view.page().expect("populated").rows[1].cells[2], CellValue::Number(2.0));
}

#[test]
fn test_hidden_columns_do_not_match_filter() {
    let rows = people();
    let mut table = DataTable::new(people_columns(), TableOptions::default()).expect("valid");
    table.toggle_column("email");
    table.set_global_filter(Some("mail"));
    assert!(table.view(&rows, &DataStatus::ready()).is_empty());
}

#[test]
fn test_page_window_for_many_pages() {
    let rows: Vec<TableRow> = (0..200)
        .map(|i| TableRow::new().cell("name", format!("{i:03}")))
        .collect();
    let mut table = DataTable::new(people_columns(), TableOptions::new().page(10)).expect("valid");
    let view = table.view(&rows, &DataStatus::ready());
    assert_eq!(
        view.page().expect("populated").pagination.window,
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(9),
            PageItem::Page(10),
            PageItem::Page(11),
            PageItem::Ellipsis,
            PageItem::Page(20),
        ]
    );
}

#[test]
fn test_yaml_config_over_json_rows() {
    let yaml = r"
page_size: 2
initial_sort: { column_id: total, direction: desc }
columns:
  - { id: customer, header: Customer, field: customer.name }
  - { id: total, header: Total, sortable: true, align: right }
";
    let config = TableConfig::from_yaml(yaml).expect("valid config");
    let rows = vec![
        json!({"customer": {"name": "Ana"}, "total": 12.5}),
        json!({"customer": {"name": "Bo"}, "total": 40}),
        json!({"customer": {"name": "Cy"}, "total": 7}),
    ];
    let mut table: DataTable<serde_json::Value> = DataTable::from_config(config).expect("valid");

    let view = table.view(&rows, &DataStatus::ready());
    let page = view.page().expect("populated");
    assert_eq!(
        page.rows.iter().map(|r| r.cells[0].display()).collect::<Vec<_>>(),
        vec!["Bo", "Ana"]
    );
    assert_eq!(page.headers[1].sort, Some(SortDirection::Descending));
    assert_eq!(page.pagination.total_pages, 2);
}

#[test]
fn test_independent_tables_do_not_share_state() {
    let rows = people();
    let mut first = DataTable::new(people_columns(), TableOptions::default()).expect("valid");
    let mut second = DataTable::new(people_columns(), TableOptions::default()).expect("valid");

    first.click_header("name");
    first.view(&rows, &DataStatus::ready());
    first.toggle_row(0);

    assert!(second.sort().is_none());
    let view = second.view(&rows, &DataStatus::ready());
    assert!(view.page().expect("populated").selected_rows().is_empty());
}

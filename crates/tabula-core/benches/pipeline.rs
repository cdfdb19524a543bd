//! Benchmarks for the row pipeline and table rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabula_core::pipeline::{filter_rows, sort_rows, transform};
use tabula_core::{
    Column, ColumnModel, DataStatus, DataTable, SortState, TableOptions, TableRow, TransformCache,
};

fn rows(n: usize) -> Vec<TableRow> {
    (0..n)
        .map(|i| {
            TableRow::new()
                .cell("name", format!("customer_{:05}", (i * 7919) % n))
                .cell("amount", ((i * 31) % 1000) as f64)
                .cell("status", if i % 3 == 0 { "paid" } else { "pending" })
        })
        .collect()
}

fn columns() -> ColumnModel<TableRow> {
    ColumnModel::try_new(vec![
        Column::field("name", "Name").sortable(),
        Column::field("amount", "Amount").sortable(),
        Column::field("status", "Status"),
    ])
    .expect("unique column ids")
}

fn bench_filter(c: &mut Criterion) {
    let rows = rows(10_000);
    let columns = columns();

    c.bench_function("filter_10k_rows", |b| {
        b.iter(|| filter_rows(&rows, &columns, black_box(Some("paid"))))
    });
}

fn bench_sort(c: &mut Criterion) {
    let rows = rows(10_000);
    let columns = columns();
    let order: Vec<usize> = (0..rows.len()).collect();
    let sort = SortState::descending("amount");

    c.bench_function("sort_10k_rows_by_number", |b| {
        b.iter(|| sort_rows(&rows, black_box(order.clone()), &columns, Some(&sort)))
    });
}

fn bench_transform(c: &mut Criterion) {
    let rows = rows(10_000);
    let columns = columns();
    let sort = SortState::ascending("name");

    c.bench_function("filter_and_sort_10k_rows", |b| {
        b.iter(|| transform(&rows, &columns, black_box(Some("customer_0")), Some(&sort)))
    });
}

fn bench_cache_hit(c: &mut Criterion) {
    let rows = rows(10_000);
    let columns = columns();
    let sort = SortState::ascending("name");
    let mut cache = TransformCache::new();
    cache.get(&rows, Some(1), &columns, Some("paid"), Some(&sort));

    c.bench_function("transform_cache_hit", |b| {
        b.iter(|| {
            cache
                .get(&rows, Some(1), &columns, black_box(Some("paid")), Some(&sort))
                .len()
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let rows = rows(10_000);
    let mut table =
        DataTable::new(columns(), TableOptions::new().page_size(50)).expect("valid options");
    table.click_header("amount");
    let status = DataStatus::ready().with_version(1);

    c.bench_function("view_page_of_50", |b| {
        b.iter(|| table.view(black_box(&rows), &status).page().map(|p| p.len()))
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_sort,
    bench_transform,
    bench_cache_hit,
    bench_view,
);
criterion_main!(benches);

//! Benchmark tests for catalog and controller operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use selectar_core::{OptionCatalog, SelectOption};
use selectar_widgets::{SelectConfig, SelectController};

fn bench_catalog_new(c: &mut Criterion) {
    c.bench_function("catalog_new_with_100_options", |b| {
        b.iter(|| {
            let options: Vec<SelectOption> = (0..100)
                .map(|i| SelectOption::simple(format!("option_{i}")))
                .collect();
            OptionCatalog::new(black_box(options))
        })
    });
}

fn bench_catalog_set_value(c: &mut Criterion) {
    let options: Vec<SelectOption> = (0..1000)
        .map(|i| SelectOption::simple(format!("option_{i}")))
        .collect();
    let mut catalog = OptionCatalog::new(options).expect("unique values");
    let ids: Vec<String> = (0..50).map(|i| format!("option_{}", i * 20)).collect();

    c.bench_function("catalog_set_value_50_of_1000", |b| {
        b.iter(|| catalog.set_value(black_box(&ids)))
    });
}

fn bench_controller_toggle_churn(c: &mut Criterion) {
    let options: Vec<SelectOption> = (0..100)
        .map(|i| SelectOption::simple(format!("option_{i}")))
        .collect();
    let mut ctl = SelectController::new(options, SelectConfig::new().multiple(true))
        .expect("unique values");

    c.bench_function("controller_toggle_select", |b| {
        b.iter(|| {
            ctl.toggle_select(black_box("option_50"));
            ctl.take_events();
            ctl.take_render_requests();
        })
    });
}

fn bench_controller_filter(c: &mut Criterion) {
    let options: Vec<SelectOption> = (0..1000)
        .map(|i| SelectOption::simple(format!("option_{i}")))
        .collect();
    let mut ctl = SelectController::new(options, SelectConfig::new()).expect("unique values");
    ctl.open();
    ctl.mount_dropdown();

    c.bench_function("controller_filter_1000_options", |b| {
        b.iter(|| ctl.handle_input(black_box("option_42")))
    });
}

criterion_group!(
    benches,
    bench_catalog_new,
    bench_catalog_set_value,
    bench_controller_toggle_churn,
    bench_controller_filter
);
criterion_main!(benches);

//! Performance benchmarks for view selection and rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parlor::app::App;
use parlor::selector::{select_view_for, ViewSelector};
use parlor::state::AppState;
use parlor::store::{Store, StoreAction};
use parlor::ui;
use ratatui::{backend::TestBackend, Terminal};

const STATUSES: [Option<&str>; 5] = [
    None,
    Some("logged"),
    Some("started"),
    Some("spectating"),
    Some(""),
];

/// Benchmark the pure status to view mapping
fn bench_select_view(c: &mut Criterion) {
    c.bench_function("select_view_for", |b| {
        b.iter(|| {
            for raw in STATUSES {
                black_box(select_view_for(black_box(raw)));
            }
        })
    });
}

/// Benchmark a full store round trip with mounted selectors
fn bench_dispatch_with_selectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_with_selectors");

    for count in [1, 8, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let store = Store::new();
            let selectors: Vec<ViewSelector> =
                (0..count).map(|_| ViewSelector::mount(&store)).collect();
            b.iter(|| {
                store.dispatch(StoreAction::LoggedIn);
                store.dispatch(StoreAction::GameStarted);
                store.dispatch(StoreAction::LoggedOut);
            });
            black_box(selectors);
        });
    }

    group.finish();
}

/// Benchmark drawing each view into a test buffer
fn bench_render_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_view");

    for status in ["none", "logged", "started"] {
        let state = match status {
            "none" => AppState::new(),
            other => AppState::with_status(other),
        };
        let app = App::new(Store::with_state(state));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_function(status, |b| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, black_box(&app))).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_view,
    bench_dispatch_with_selectors,
    bench_render_views
);
criterion_main!(benches);

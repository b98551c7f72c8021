//! Benchmarks for the per-scroll-event work
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use exhibition::content::{Artwork, Chapter};
use exhibition::gallery::CategoryFilter;
use exhibition::scroll::*;

fn create_chapters(count: usize) -> (Vec<Chapter>, Vec<f64>) {
    let chapters = (0..count)
        .map(|i| Chapter::new(i.to_string(), format!("Chapter {}", i)).bg(format!("#{:06x}", i * 977)))
        .collect();
    let tops = (0..count).map(|i| i as f64 * 1100.0).collect();
    (chapters, tops)
}

fn bench_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation");

    for size in [10, 100, 1000] {
        let (chapters, tops) = create_chapters(size);
        let rect_tops: Vec<f64> = tops.iter().map(|t| t - 5000.0).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("active_index_{}", size), |b| {
            let frame = ScrollFrame::new(size as f64 * 550.0, 900.0);
            b.iter(|| active_index(black_box(frame), black_box(&tops)))
        });

        group.bench_function(format!("scroll_sweep_{}", size), |b| {
            b.iter(|| {
                let mut activator = ScrollActivator::new(&chapters, ActivationVariant::STORYLINE);
                let mut y = 0.0;
                let mut now = 0.0;
                while y < size as f64 * 1100.0 {
                    activator.on_scroll(ScrollFrame::new(y, 900.0), &tops, now);
                    y += 120.0;
                    now += 16.0;
                }
                activator.active()
            })
        });

        group.bench_function(format!("parallax_{}", size), |b| {
            b.iter(|| parallax_offsets(black_box(&rect_tops)))
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let artworks: Vec<Artwork> = (0..1000)
        .map(|i| Artwork::new(format!("Work {}", i), format!("Category {}", i % 12)))
        .collect();

    group.bench_function("build_1000", |b| {
        b.iter(|| CategoryFilter::from_artworks(black_box(&artworks)))
    });

    group.bench_function("visible_1000", |b| {
        let mut filter = CategoryFilter::from_artworks(&artworks);
        filter.select("Category 3");
        b.iter(|| filter.visible_indices(black_box(&artworks)))
    });

    group.finish();
}

criterion_group!(benches, bench_activation, bench_filter);
criterion_main!(benches);

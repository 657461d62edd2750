use boxchart_rs::core::{
    ContainerMetrics, FiveNumberSummary, LabelBudget, LabelLayoutInputs, LabelRotation,
    MeasureRangeTuning, fit_measure_bounds, round_to_nice,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_measure_fit_10k(c: &mut Criterion) {
    let summaries: Vec<FiveNumberSummary> = (0..10_000)
        .map(|i| {
            let base = 100.0 + (i as f64) * 0.05;
            FiveNumberSummary::new(base - 4.0, base - 2.0, base, base + 2.0, base + 4.0)
                .expect("valid generated summary")
        })
        .collect();

    c.bench_function("measure_fit_10k", |b| {
        b.iter(|| {
            let _ = fit_measure_bounds(black_box(&summaries), MeasureRangeTuning::default())
                .expect("fit should succeed");
        })
    });
}

fn bench_round_to_nice(c: &mut Criterion) {
    c.bench_function("round_to_nice", |b| {
        b.iter(|| {
            let _ = round_to_nice(black_box(108.0));
            let _ = round_to_nice(black_box(-0.0421));
        })
    });
}

fn bench_label_budget_and_clip_1k(c: &mut Criterion) {
    let labels: Vec<String> = (0..1_000)
        .map(|i| format!("category label number {i} with a fairly verbose suffix"))
        .collect();
    let inputs = LabelLayoutInputs {
        category_count: labels.len(),
        rotation: LabelRotation::Horizontal,
        font_size_px: 11.0,
        container: ContainerMetrics::new(1920.0, 1080.0),
        chart_padding_percent: 5.0,
    };

    c.bench_function("label_budget_and_clip_1k", |b| {
        b.iter(|| {
            let budget = LabelBudget::resolve(black_box(inputs));
            for label in &labels {
                let _ = budget.clip(black_box(label));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_measure_fit_10k,
    bench_round_to_nice,
    bench_label_budget_and_clip_1k
);
criterion_main!(benches);

use ascii_chart::{AnsiCode, Config, Series, core::rng::Lcg, plot};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn walks(n: usize, len: usize) -> Vec<Series> {
    let mut rng = Lcg::seed(42);
    (0..n).map(|_| Series::from(rng.walk(len, 0.0, 1.0))).collect()
}

fn bench_plot(c: &mut Criterion) {
    let single = walks(1, 200);
    c.bench_function("plot_200_h20", |b| {
        b.iter(|| plot(black_box(&single), Config::builder().height(20)).unwrap());
    });

    let many = walks(4, 120);
    c.bench_function("plot_4x120_padded_axis", |b| {
        b.iter(|| {
            plot(
                black_box(&many),
                Config::builder()
                    .height(30)
                    .colors([AnsiCode::red(), AnsiCode::cyan()])
                    .horizontal_point_spacing(1)
                    .display_x_axis(true),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_plot);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use slip_runtime::frame;
use slip_runtime::value;

fn build_chain(depth: usize, slots: usize) -> slip_runtime::value::ValueRef {
    let mut chain = frame::make_frame(value::null_value(), slots);
    for _ in 0..depth {
        chain = frame::make_frame(chain, slots);
    }
    chain
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_resolve");
    for depth in [0usize, 2, 8, 32] {
        let chain = build_chain(depth, 4);
        frame::assign(&chain, depth, 1, value::integer(7));
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| black_box(frame::resolve(black_box(&chain), depth, 1)));
        });
    }
    group.finish();
}

fn bench_assign(c: &mut Criterion) {
    let chain = build_chain(8, 4);
    c.bench_function("frame_assign_depth_8", |b| {
        let v = value::integer(3);
        b.iter(|| frame::assign(black_box(&chain), 8, 2, v.clone()));
    });
}

criterion_group!(benches, bench_resolve, bench_assign);
criterion_main!(benches);

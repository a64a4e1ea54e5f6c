use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use tonari::{Bounds, Pos, ProximityGraph};

fn generate_random_points(n: usize, width: f64, height: f64) -> Vec<Pos> {
    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        let x = rng.random_range(0.0..width);
        let y = rng.random_range(0.0..height);
        points.push(Pos::new(x, y));
    }

    points
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Build");
    let bounds = Bounds::new(0.0, 1000.0, 0.0, 1000.0);

    for &n in &[100, 1000, 10000] {
        group.bench_function(format!("build_{}", n), |b| {
            let points = generate_random_points(n, 1000.0, 1000.0);
            b.iter(|| {
                let mut graph = ProximityGraph::new();
                graph.build(&points, bounds).unwrap();
                black_box(graph.size());
            });
        });
    }

    group.finish();
}

fn bench_close_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radius Query");
    let bounds = Bounds::new(0.0, 1000.0, 0.0, 1000.0);

    for &n in &[100, 1000, 10000] {
        group.bench_function(format!("close_to_{}", n), |b| {
            let points = generate_random_points(n, 1000.0, 1000.0);
            let mut graph = ProximityGraph::new();
            graph.build(&points, bounds).unwrap();
            // 预先触发邻接表编译，只测查询本身
            graph.node(0).unwrap();

            b.iter(|| {
                black_box(graph.close_to(0, 150.0).unwrap());
            });
        });

        group.bench_function(format!("close_to_unbounded_{}", n), |b| {
            let points = generate_random_points(n, 1000.0, 1000.0);
            let mut graph = ProximityGraph::new();
            graph.build(&points, bounds).unwrap();
            graph.node(0).unwrap();

            b.iter(|| {
                black_box(graph.close_to(0, f64::INFINITY).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_close_to);
criterion_main!(benches);

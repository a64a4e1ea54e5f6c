// 手动验证邻近图从构建到查询的完整链路
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tonari::{Bounds, Pos, ProximityGraph};

fn seeded_points(n: usize, width: f64, height: f64, seed: u64) -> Vec<Pos> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Pos::new(
                rng.random_range(0.0..width),
                rng.random_range(0.0..height),
            )
        })
        .collect()
}

#[test]
fn test_first_quadrant_scenario() {
    println!("\n=== Testing first quadrant scenario ===");

    let points = Pos::zip(
        &[3.0, 5.0, 13.0, 0.0, 5.0, 6.0, 11.0, 20.0, 7.0],
        &[3.0, 2.0, 6.0, 15.0, 5.0, 9.0, 11.0, 15.0, 4.0],
    )
    .unwrap();

    let mut graph = ProximityGraph::with_min_separation(0.1);
    let edges = graph
        .build(&points, Bounds::new(-1.0, 21.0, -1.0, 16.0))
        .unwrap();
    println!("Built graph: {} sites, {} edges", points.len(), edges.len());

    let n0 = graph.node(0).unwrap();
    println!("Site 0 next to: {:?}", n0.neighbors());
    assert_eq!(n0.neighbors().len(), 3, "Site 0 neighbor count");

    let n2 = graph.node(2).unwrap();
    println!("Site 2 next to: {:?}", n2.neighbors());
    assert_eq!(n2.neighbors().len(), 5, "Site 2 neighbors");

    let adj = graph.close_to(0, 5.0).unwrap();
    println!("Site 0 close to: {:?}", adj);
    assert_eq!(adj.len(), 3, "Site 0 region");

    let adj = graph.close_to(8, 10.0).unwrap();
    println!("Site 8 close to: {:?}", adj);
    assert_eq!(adj.len(), 6, "Site 8 region");

    println!("✓ first quadrant scenario passed");
}

#[test]
fn test_random_cloud_query_properties() {
    let _ = env_logger::builder().is_test(true).try_init();
    println!("\n=== Testing random cloud query properties ===");

    let points = seeded_points(500, 1000.0, 1000.0, 20260827);
    let bounds = Bounds::new(0.0, 1000.0, 0.0, 1000.0);

    let mut graph = ProximityGraph::new();
    let edge_count = graph.build(&points, bounds).unwrap().len();
    println!("Built graph: {} sites, {} edges", graph.size(), edge_count);
    assert_eq!(graph.size(), 500);

    let radius = 120.0;
    for origin in [0usize, 123, 250, 499] {
        let result = graph.close_to(origin, radius).unwrap();
        let origin_pos = points[origin];

        // 出发点不在结果里
        assert!(!result.contains(&(origin as u32)));

        // 访问标记保证没有重复
        let mut dedup = result.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), result.len(), "duplicate ids in result");

        // 结果里的每个站点都在半径以内
        for &id in &result {
            let d = points[id as usize].distance(origin_pos);
            assert!(
                d <= radius,
                "site {} at distance {} exceeds radius {}",
                id,
                d,
                radius
            );
        }

        println!(
            "Site {:3}: {} sites within radius {}",
            origin,
            result.len(),
            radius
        );
    }

    println!("✓ random cloud query properties passed");
}

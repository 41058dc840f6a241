//! Print hull sizes and iteration counters of both algorithms side by side.
//!
//! Usage:
//!   cargo run -p hull2 --example compare_counters -- random
//!   cargo run -p hull2 --example compare_counters -- polygon
//!
//! - random mode: uniform clouds on an 800x600 canvas
//! - polygon mode: rounded regular n-gons (every point on the hull)

use hull2::api::{
    compute_hull, random_points, regular_polygon, Algorithm, Point, PointCloudCfg, ReplayToken,
    SampleBounds,
};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "random".to_string());
    match mode.as_str() {
        "random" => show_random_mode(),
        "polygon" => show_polygon_mode(),
        _ => {
            eprintln!("usage: compare_counters [random|polygon]");
        }
    }
}

fn show(label: &str, pts: &[Point]) {
    for algo in Algorithm::ALL {
        match compute_hull(algo, pts) {
            Ok(res) => println!(
                "{label}: {:<16} n={} hull={} iterations={}",
                res.algorithm_name(),
                pts.len(),
                res.vertex_count(),
                res.iterations
            ),
            Err(err) => println!("{label}: {algo}: {err}"),
        }
    }
}

fn show_random_mode() {
    for (i, n) in [5usize, 20, 80, 160].into_iter().enumerate() {
        let cfg = PointCloudCfg {
            count: n,
            bounds: SampleBounds::canvas(800, 600),
        };
        let set = random_points(cfg, ReplayToken { seed: 2025, index: i as u64 });
        show(&format!("random sample {i}"), set.as_slice());
    }
}

fn show_polygon_mode() {
    for n in [3usize, 6, 12, 24] {
        let poly = regular_polygon(n, 250.0, Point::new(400, 300));
        show(&format!("{n}-gon"), &poly);
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2::api::{
    is_strictly_convex_ccw, random_points, same_vertex_set, Algorithm, AlgorithmResult,
    BruteForceCfg, BruteForceHull, CollinearPolicy, HullAlgorithm, MonotoneChainHull,
    Point, PointCloudCfg, ReplayToken, SampleBounds,
};
use serde_json::{json, Value};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod session;

use provenance::{write_sidecar, Payload};
use session::{statistics_lines, Session};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: compute, compare, and sample point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and print the statistics overlay
    Run {
        /// brute-force (slow) or monotone-chain (fast)
        #[arg(long)]
        algo: Algorithm,
        /// Point file (.csv/.parquet with x,y columns, or .json)
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON result; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Brute force only: drop collinear points inside hull edges
        #[arg(long)]
        extremes_only: bool,
    },
    /// Run both algorithms on the same input and check that they agree
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Sample a reproducible point set on a canvas
    Random {
        #[arg(long, default_value_t = 50)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 800)]
        width: i32,
        #[arg(long, default_value_t = 600)]
        height: i32,
        /// .csv or .json
        #[arg(long)]
        out: PathBuf,
    },
    /// Interactive point entry on stdin: `x y` adds a point; `slow`, `fast`,
    /// `clear`, `show`, `quit` act on the collection
    Session,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            input,
            out,
            extremes_only,
        } => run(algo, &input, out.as_deref(), extremes_only),
        Action::Compare { input } => compare(&input),
        Action::Random {
            count,
            seed,
            index,
            width,
            height,
            out,
        } => random(count, ReplayToken { seed, index }, width, height, &out),
        Action::Session => {
            let stdin = std::io::stdin();
            interactive(stdin.lock(), &mut std::io::stdout())
        }
        Action::Report => report(),
    }
}

fn brute_force_cfg(extremes_only: bool) -> BruteForceCfg {
    BruteForceCfg {
        collinear: if extremes_only {
            CollinearPolicy::ExtremesOnly
        } else {
            CollinearPolicy::Retain
        },
    }
}

fn run(algo: Algorithm, input: &Path, out: Option<&Path>, extremes_only: bool) -> Result<()> {
    tracing::info!(algo = algo.key(), input = %input.display(), extremes_only, "run");
    let points = input::read_points(input)?;
    let mut session = Session::with_points(points);

    let shown = match algo {
        Algorithm::BruteForce => session.run_brute_force(brute_force_cfg(extremes_only)),
        Algorithm::MonotoneChain => session.run(algo),
    };
    let Some(result) = shown.cloned() else {
        println!(
            "need at least 3 points, got {}; nothing to show",
            session.points().len()
        );
        return Ok(());
    };

    for line in session.statistics() {
        println!("{line}");
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let doc = result_json(&result, session.points().len());
        fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let payload = Payload::new(json!({
            "algo": algo.key(),
            "extremes_only": extremes_only,
        }))
        .with_input(input);
        write_sidecar(out, payload)?;
    }
    Ok(())
}

fn compare(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "compare");
    let points = input::read_points(input)?;
    let pts = points.as_slice();
    let (slow, exact, fast) = match (
        BruteForceHull::default().compute(pts),
        BruteForceHull::new(brute_force_cfg(true)).compute(pts),
        MonotoneChainHull.compute(pts),
    ) {
        (Ok(s), Ok(e), Ok(f)) => (s, e, f),
        (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
            println!("{err}");
            return Ok(());
        }
    };

    for res in [&slow, &fast] {
        for line in statistics_lines(res, pts.len()) {
            println!("{line}");
        }
        println!();
    }

    let polygon = fast.hull.len() >= 3;
    let agree = if polygon {
        same_vertex_set(&exact.hull, &fast.hull)
    } else {
        exact.hull.is_empty()
    };
    let collinear_extra = slow.hull.len().saturating_sub(exact.hull.len());
    println!("vertex sets agree (extreme points): {agree}");
    println!("collinear boundary points kept by brute force: {collinear_extra}");
    println!(
        "monotone chain hull strictly convex: {}",
        polygon && is_strictly_convex_ccw(&fast.hull)
    );
    if !agree {
        tracing::warn!(
            brute = exact.hull.len(),
            monotone = fast.hull.len(),
            "hull vertex sets differ"
        );
    }
    Ok(())
}

fn random(count: usize, tok: ReplayToken, width: i32, height: i32, out: &Path) -> Result<()> {
    tracing::info!(count, seed = tok.seed, index = tok.index, out = %out.display(), "random");
    let cfg = PointCloudCfg {
        count,
        bounds: SampleBounds::canvas(width, height),
    };
    let points = random_points(cfg, tok);
    input::write_points(out, &points)?;
    let payload = Payload::new(json!({
        "count": count,
        "seed": tok.seed,
        "index": tok.index,
        "width": width,
        "height": height,
    }));
    write_sidecar(out, payload)?;
    Ok(())
}

/// Line-driven stand-in for click entry: one command or one point per line.
fn interactive<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    for line in reader.lines() {
        let line = line.context("reading stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["clear"] => {
                session.clear();
                writeln!(out, "cleared")?;
            }
            ["show"] => match session.result() {
                Some(res) => {
                    let hull: Vec<String> = res.hull.iter().map(|p| p.to_string()).collect();
                    writeln!(out, "hull: {}", hull.join(" "))?;
                }
                None => writeln!(out, "no result ({} points)", session.points().len())?,
            },
            [x, y] if x.parse::<i32>().is_ok() => {
                let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
                    writeln!(out, "expected two integers, got {line:?}")?;
                    continue;
                };
                session.add_point(Point::new(x, y));
            }
            [name] => match name.parse::<Algorithm>() {
                Ok(algo) => {
                    if session.run(algo).is_none() {
                        writeln!(out, "need at least 3 points")?;
                    }
                    for stat in session.statistics() {
                        writeln!(out, "{stat}")?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            _ => writeln!(out, "unrecognized input {line:?}")?,
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hull2_version": hull2::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.key()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn result_json(result: &AlgorithmResult, n: usize) -> Value {
    json!({
        "algorithm": result.algorithm.key(),
        "label": result.algorithm_name(),
        "points": n,
        "iterations": result.iterations,
        "hull": result.hull.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2::api::compute_monotone_chain_hull;
    use tempfile::tempdir;

    #[test]
    fn result_json_shape() {
        let pts = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
            Point::new(2, 2),
        ];
        let res = compute_monotone_chain_hull(&pts).unwrap();
        let doc = result_json(&res, pts.len());
        assert_eq!(doc["algorithm"], "monotone-chain");
        assert_eq!(doc["label"], "Fast Convex Hull");
        assert_eq!(doc["points"], 5);
        assert_eq!(doc["iterations"], 10);
        assert_eq!(doc["hull"], json!([[0, 0], [4, 0], [4, 4], [0, 4]]));
    }

    #[test]
    fn run_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        fs::write(&input, "[[0,0],[4,0],[4,4],[0,4],[2,2]]").unwrap();
        let out = dir.path().join("res/hull.json");
        run(Algorithm::BruteForce, &input, Some(&out), false).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["iterations"], 60);
        assert!(dir.path().join("res/hull.provenance.json").exists());
    }

    #[test]
    fn interactive_session_transcript() {
        let script = "0 0\n4 0\nfast\n4 4\n0 4\n2 2\nslow\nshow\nclear\nshow\nquit\n9 9\n";
        let mut out = Vec::new();
        interactive(script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "need at least 3 points",
                "Algorithm: Slow Convex Hull",
                "Points: 5",
                "Hull Vertices: 4",
                "Iterations: 60",
                "hull: (0, 0) (4, 0) (4, 4) (0, 4)",
                "cleared",
                "no result (0 points)",
            ]
        );
    }

    #[test]
    fn random_output_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let tok = ReplayToken { seed: 3, index: 1 };
        random(25, tok, 200, 100, &a).unwrap();
        random(25, tok, 200, 100, &b).unwrap();
        assert_eq!(input::read_points(&a).unwrap(), input::read_points(&b).unwrap());
    }
}

//! Point-set files: `.csv` / `.parquet` (columns `x`, `y`) and `.json`.
//!
//! JSON accepts either `{"points": [[x, y], ...]}` or a bare `[[x, y], ...]`.

use anyhow::{bail, Context, Result};
use hull2::{Point, PointSet};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoints {
    Wrapped { points: Vec<[i32; 2]> },
    Bare(Vec<[i32; 2]>),
}

#[derive(Serialize)]
struct JsonPointsOut {
    points: Vec<[i32; 2]>,
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Read a point set, choosing the format by file extension.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let points = match extension(path).as_str() {
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf)?
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf)?
        }
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let parsed: JsonPoints = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            let raw = match parsed {
                JsonPoints::Wrapped { points } | JsonPoints::Bare(points) => points,
            };
            raw.into_iter().map(Point::from).collect()
        }
        other => bail!("unsupported point file extension {other:?} (csv, parquet, json)"),
    };
    tracing::info!(path = %path.display(), n = points.len(), "read_points");
    Ok(points)
}

fn points_from_frame(lf: LazyFrame) -> Result<PointSet> {
    let df = lf
        .select([
            col("x").cast(DataType::Int32),
            col("y").cast(DataType::Int32),
        ])
        .collect()?;
    let xs = df.column("x")?.i32()?;
    let ys = df.column("y")?.i32()?;
    let mut out = PointSet::new();
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row}: missing or non-integer coordinate"),
        }
    }
    Ok(out)
}

/// Write a point set as `.csv` (header `x,y`) or `.json` (`{"points": ...}`).
pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match extension(path).as_str() {
        "csv" => {
            let xs: Vec<i32> = points.as_slice().iter().map(|p| p.x).collect();
            let ys: Vec<i32> = points.as_slice().iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let mut file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        }
        "json" => {
            let doc = JsonPointsOut {
                points: points.as_slice().iter().map(|p| [p.x, p.y]).collect(),
            };
            fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        other => bail!("unsupported output extension {other:?} (csv, json)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_wrapped_and_bare_json() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        fs::write(&a, r#"{"points": [[0, 0], [4, 0], [2, 3]]}"#).unwrap();
        fs::write(&b, "[[1, 1], [1, 1]]").unwrap();
        let pa = read_points(&a).unwrap();
        assert_eq!(
            pa.as_slice(),
            &[Point::new(0, 0), Point::new(4, 0), Point::new(2, 3)]
        );
        assert_eq!(read_points(&b).unwrap().len(), 2);
    }

    #[test]
    fn reads_csv_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.as_slice()[4], Point::new(2, 2));
    }

    #[test]
    fn csv_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/pts.csv");
        let set: PointSet = vec![Point::new(-3, 7), Point::new(10, 0)].into();
        write_points(&path, &set).unwrap();
        assert_eq!(read_points(&path).unwrap(), set);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = read_points(Path::new("points.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }
}

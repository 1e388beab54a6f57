//! Point input (CSV via polars, JSON via serde) and JSON result output.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polygonation::api::{Point, Polygonate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read points from `.csv` (columns `x`, `y`) or `.json` (`[[x, y], …]`).
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        other => bail!("unsupported points file extension {other:?} ({})", path.display()),
    }
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y from {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "points_csv");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Point>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let xy: Vec<[f64; 2]> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(xy.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

/// JSON document written by `run`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TessellationOut {
    pub version: String,
    pub policy: String,
    pub convex: bool,
    pub points: Vec<[f64; 2]>,
    pub shapes: Vec<Vec<usize>>,
    pub neighbors: Vec<Vec<usize>>,
    pub descendants: Vec<usize>,
}

impl TessellationOut {
    pub fn from_polygonate(pg: &Polygonate) -> Self {
        Self {
            version: polygonation::VERSION.to_string(),
            policy: pg.cfg().policy.to_string(),
            convex: pg.cfg().convex,
            points: pg.points().iter().map(|p| [p.x, p.y]).collect(),
            shapes: pg.shapes().to_vec(),
            neighbors: pg.neighbors().to_vec(),
            descendants: pg.descendants().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polygonation::api::PolygonateCfg;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_points_round_into_tessellation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0,0],[1,0],[1,1],[0,1],[0.5,0.6]]").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts.len(), 5);
        let pg = Polygonate::new(pts, PolygonateCfg::default()).unwrap();
        let doc = TessellationOut::from_polygonate(&pg);
        assert_eq!(doc.shapes.len(), 3);
        assert_eq!(doc.policy, "acute");
        let text = serde_json::to_string(&doc).unwrap();
        let back: TessellationOut = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn csv_points_are_read_by_column_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,y,x\n0,0,0\n1,0,1\n2,1,1\n3,1,0\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0)
            ]
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_points(Path::new("points.txt")).is_err());
    }
}

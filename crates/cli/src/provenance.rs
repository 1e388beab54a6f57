//! Run record written next to each tessellation output.

use anyhow::{Context, Result};
use polygonation::api::Polygonate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where the tessellated points came from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointsFrom {
    File { path: String },
    Uniform { count: usize, seed: u64 },
}

/// How a tessellation was produced and what it came out as.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    pub code_rev: String,
    pub version: String,
    pub points_from: PointsFrom,
    pub policy: String,
    pub convex: bool,
    pub points: usize,
    pub simplices: usize,
    pub melts: usize,
    pub shapes: usize,
    pub artifact: String,
}

impl RunRecord {
    pub fn new(pg: &Polygonate, points_from: PointsFrom, artifact: &Path) -> Self {
        Self {
            code_rev: code_rev(),
            version: polygonation::VERSION.to_string(),
            points_from,
            policy: pg.cfg().policy.to_string(),
            convex: pg.cfg().convex,
            points: pg.points().len(),
            simplices: pg.simplex_count(),
            melts: pg.melt_count(),
            shapes: pg.shapes().len(),
            artifact: artifact.display().to_string(),
        }
    }

    /// Write the record to `<artifact stem>.provenance.json` beside the
    /// artifact and return that path.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), shapes = self.shapes, "run record");
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit of the running code: `GIT_COMMIT` at build time, else `git`, else
/// "unknown".
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_owned)
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polygonation::api::{Point, PolygonateCfg};
    use tempfile::tempdir;

    fn square_with_center() -> Polygonate {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.5, 0.6),
        ];
        Polygonate::new(points, PolygonateCfg::default()).unwrap()
    }

    #[test]
    fn sidecar_sits_beside_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/shapes.json")),
            Path::new("/tmp/output/shapes.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("out/shapes")),
            Path::new("out/shapes.provenance.json")
        );
    }

    #[test]
    fn record_counts_the_tessellation() {
        let pg = square_with_center();
        let from = PointsFrom::Uniform { count: 5, seed: 7 };
        let record = RunRecord::new(&pg, from.clone(), Path::new("shapes.json"));
        assert_eq!(record.points_from, from);
        assert_eq!(record.policy, "acute");
        assert!(record.convex);
        assert_eq!(record.points, 5);
        assert_eq!(record.simplices, 4);
        assert_eq!(record.shapes, 3);
        assert_eq!(record.melts, record.simplices - record.shapes);
        assert_eq!(record.version, polygonation::VERSION);
    }

    #[test]
    fn written_record_reads_back() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("shapes.json");
        let from = PointsFrom::File {
            path: "points.csv".to_string(),
        };
        let record = RunRecord::new(&square_with_center(), from, &artifact);
        let path = record.write_beside(&artifact).unwrap();
        assert_eq!(path, dir.path().join("shapes.provenance.json"));

        let raw = fs::read(&path).unwrap();
        let back: RunRecord = serde_json::from_slice(&raw).unwrap();
        assert_eq!(back, record);
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(json["points_from"]["kind"], "file");
        assert_eq!(json["points_from"]["path"], "points.csv");
    }
}

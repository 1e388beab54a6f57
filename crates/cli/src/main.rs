use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use polygonation::api::{uniform_points, EdgePolicy, Point, Polygonate, PolygonateCfg, ReplayToken};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{load_points, TessellationOut};
use provenance::{PointsFrom, RunRecord};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Tessellate point sets into polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Where the points come from and how to tessellate them.
#[derive(Args, Debug)]
struct Source {
    /// Points file: `.csv` with `x`,`y` columns or `.json` array of `[x, y]`
    #[arg(long, conflicts_with = "count")]
    input: Option<String>,
    /// Draw this many uniform points in the unit square instead of reading a file
    #[arg(long)]
    count: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value = "acute", value_parser = EdgePolicy::parse_strict)]
    policy: EdgePolicy,
    /// Allow non-convex shapes
    #[arg(long)]
    concave: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Tessellate and write shapes/neighbors as JSON, plus a run record
    Run {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        out: String,
    },
    /// Print the shape index containing each query point (-1 outside the hull)
    Locate {
        #[command(flatten)]
        source: Source,
        /// Query as `x,y`; repeatable
        #[arg(long = "at", required = true, value_parser = parse_xy)]
        at: Vec<(f64, f64)>,
    },
    /// Print version, code revision and the known policies as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { source, out } => run(source, out),
        Action::Locate { source, at } => locate(source, at),
        Action::Report => report(),
    }
}

fn parse_xy(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn cfg_of(source: &Source) -> PolygonateCfg {
    PolygonateCfg::default()
        .with_policy(source.policy)
        .with_convex(!source.concave)
}

fn points_of(source: &Source) -> Result<Vec<Point>> {
    match (&source.input, source.count) {
        (Some(path), _) => load_points(Path::new(path)),
        (None, Some(n)) => Ok(uniform_points(n, ReplayToken::new(source.seed))),
        (None, None) => bail!("either --input or --count is required"),
    }
}

fn build(source: &Source) -> Result<Polygonate> {
    let points = points_of(source)?;
    let cfg = cfg_of(source);
    tracing::info!(points = points.len(), policy = %cfg.policy, convex = cfg.convex, "tessellate");
    Polygonate::new(points, cfg).context("tessellation failed")
}

fn run(source: Source, out: String) -> Result<()> {
    let pg = build(&source)?;
    tracing::info!(
        shapes = pg.shapes().len(),
        simplices = pg.simplex_count(),
        melts = pg.melt_count(),
        out,
        "done"
    );

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = TessellationOut::from_polygonate(&pg);
    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {out}"))?;

    let points_from = match (source.input, source.count) {
        (Some(path), _) => PointsFrom::File { path },
        (None, count) => PointsFrom::Uniform {
            count: count.unwrap_or(pg.points().len()),
            seed: source.seed,
        },
    };
    RunRecord::new(&pg, points_from, out_path).write_beside(out_path)?;
    Ok(())
}

fn locate(source: Source, at: Vec<(f64, f64)>) -> Result<()> {
    let pg = build(&source)?;
    for (x, y) in at {
        let si = pg
            .find_shape(Point::new(x, y))
            .map_or(-1, |si| si as i64);
        println!("{x},{y}\t{si}");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "version": polygonation::VERSION,
        "policies": EdgePolicy::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

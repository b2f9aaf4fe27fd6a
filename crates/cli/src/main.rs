mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use maskhull::prelude::{
    analyze_mask, analyze_points, Collinear, HullCfg, Mask, MaskHull, Point, PointSet,
};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "maskhull")]
#[command(about = "Convex hull and area of foreground masks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull of an ASCII mask file (`#`/`1` foreground, `.`/`0` background)
    Hull {
        #[arg(long)]
        mask: PathBuf,
        #[command(flatten)]
        opts: HullOpts,
    },
    /// Hull of a CSV point list with integer `row` and `col` columns
    Points {
        #[arg(long)]
        csv: PathBuf,
        #[command(flatten)]
        opts: HullOpts,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct HullOpts {
    /// Report every point on a hull edge, not only the corners
    #[arg(long)]
    keep_collinear: bool,
    /// Write the result as JSON, with a provenance sidecar next to it
    #[arg(long)]
    out: Option<PathBuf>,
}

impl HullOpts {
    fn cfg(&self) -> HullCfg {
        if self.keep_collinear {
            HullCfg::keep_collinear()
        } else {
            HullCfg::default()
        }
    }
}

#[derive(Serialize)]
struct HullReport<'a> {
    input: &'a Path,
    collinear: Collinear,
    #[serde(flatten)]
    result: MaskHull,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { mask, opts } => hull(&mask, &opts),
        Action::Points { csv, opts } => points(&csv, &opts),
        Action::Report => report(),
    }
}

fn hull(path: &Path, opts: &HullOpts) -> Result<()> {
    tracing::info!(input = %path.display(), keep_collinear = opts.keep_collinear, "hull");
    let mask = load_mask(path)?;
    let result = analyze_mask(&mask, opts.cfg())
        .with_context(|| format!("computing hull of {}", path.display()))?;
    emit("hull", path, opts, result)
}

fn points(path: &Path, opts: &HullOpts) -> Result<()> {
    tracing::info!(input = %path.display(), keep_collinear = opts.keep_collinear, "points");
    let ps = load_points_csv(path)?;
    let result = analyze_points(&ps, opts.cfg())
        .with_context(|| format!("computing hull of {}", path.display()))?;
    emit("points", path, opts, result)
}

fn load_mask(path: &Path) -> Result<Mask> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading mask {}", path.display()))?;
    Mask::parse_ascii(&text).with_context(|| format!("parsing mask {}", path.display()))
}

fn load_points_csv(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading points {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let rows = int_column(&df, "row")?;
    let cols = int_column(&df, "col")?;
    Ok(PointSet::from_points(
        rows.into_iter().zip(cols).map(|(r, c)| Point::new(r, c)),
    ))
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Int64)?;
    let values = series.i64()?;
    if values.null_count() > 0 {
        bail!("column `{name}` has {} empty cells", values.null_count());
    }
    Ok(values.into_iter().flatten().collect())
}

fn emit(cmd: &str, input: &Path, opts: &HullOpts, result: MaskHull) -> Result<()> {
    println!("Area = {:.4}", result.area);
    println!("Vertices ({}):", result.hull.len());
    for v in result.hull.vertices() {
        println!("  ({}, {})", v.row, v.col);
    }
    let Some(out) = &opts.out else {
        return Ok(());
    };
    let cfg = opts.cfg();
    let report = HullReport {
        input,
        collinear: cfg.collinear,
        result,
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(serde_json::json!({
        "cmd": cmd,
        "collinear": cfg.collinear,
    }))
    .with_input(input);
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "maskhull_version": maskhull::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

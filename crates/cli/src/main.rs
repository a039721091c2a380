mod io;
mod provenance;
mod view;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::hull2::util::{contains_eps, is_clockwise, is_minimal, HullSummary};
use dchull::hull2::{compute_hull_with_view, ViewCtx};
use nalgebra::Vector2;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::io::Format;
use crate::provenance::{current_git_rev, write_sidecar, Payload};
use crate::view::{event_json, LogView};

#[derive(Parser)]
#[command(name = "dchull-cli")]
#[command(about = "Divide-and-conquer convex hulls of point files")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log every drawing call (debug level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (csv, json or parquet)
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Pause after each drawing call
        #[arg(long)]
        animate: bool,
        /// Check containment, orientation and minimality of the result
        #[arg(long)]
        verify: bool,
        /// Write every drawing call as JSON
        #[arg(long)]
        trace: Option<PathBuf>,
    },
    /// Write a reproducible random point cloud
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Lattice half-extent for `--shape grid`
        #[arg(long, default_value_t = 10)]
        half: i32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Shape {
    Disk,
    Square,
    Circle,
    Grid,
}

struct RunArgs {
    input: PathBuf,
    out: PathBuf,
    animate: bool,
    verify: bool,
    trace: Option<PathBuf>,
}

#[derive(Serialize)]
struct HullDoc<'a> {
    hull: Vec<[f64; 2]>,
    input_points: usize,
    vertices: usize,
    area: f64,
    perimeter: f64,
    elapsed_sec: f64,
    tag: Option<&'a str>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    dispatch(cmd)
}

fn dispatch(cmd: Cmd) -> Result<()> {
    let tag = cmd.tag;
    match cmd.action {
        Action::Run {
            input,
            out,
            animate,
            verify,
            trace,
        } => run(
            RunArgs {
                input,
                out,
                animate,
                verify,
                trace,
            },
            tag,
        ),
        Action::Sample {
            count,
            seed,
            index,
            shape,
            scale,
            half,
            out,
        } => {
            let shape = match shape {
                Shape::Disk => CloudShape::Disk,
                Shape::Square => CloudShape::Square,
                Shape::Circle => CloudShape::Circle,
                Shape::Grid => CloudShape::Grid { half },
            };
            sample(CloudCfg { count, shape, scale }, ReplayToken { seed, index }, &out, tag)
        }
        Action::Report => report(tag),
    }
}

fn run(args: RunArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %args.input.display(),
        out = %args.out.display(),
        tag = ?tag,
        "run"
    );
    let points = io::read_points(&args.input)?;
    tracing::info!(points = points.len(), "input_loaded");

    let mut view = if args.trace.is_some() {
        LogView::recording()
    } else {
        LogView::default()
    };
    let (hull, elapsed) = {
        let mut ctx = ViewCtx::new(&mut view).animate(args.animate);
        let start = Instant::now();
        let hull = compute_hull_with_view(&points, &mut ctx)
            .with_context(|| format!("convex hull of {}", args.input.display()))?;
        let elapsed = start.elapsed().as_secs_f64();
        ctx.status(&format!("Time Elapsed (Convex Hull): {elapsed:.3} sec"));
        (hull, elapsed)
    };

    let summary = HullSummary::of(&hull);
    tracing::info!(
        vertices = summary.vertices,
        area = summary.area,
        perimeter = summary.perimeter,
        elapsed_sec = elapsed,
        "hull"
    );
    if args.verify {
        verify(&points, &hull)?;
        tracing::info!("verified");
    }

    io::ensure_parent(&args.out)?;
    if Format::of(&args.out)? == Format::Json {
        let doc = HullDoc {
            hull: io::pairs(&hull),
            input_points: points.len(),
            vertices: summary.vertices,
            area: summary.area,
            perimeter: summary.perimeter,
            elapsed_sec: elapsed,
            tag: tag.as_deref(),
        };
        std::fs::write(&args.out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", args.out.display()))?;
    } else {
        io::write_points(&args.out, &hull)?;
    }

    if let Some(trace) = &args.trace {
        io::ensure_parent(trace)?;
        let events: Vec<_> = view.events().iter().map(event_json).collect();
        std::fs::write(trace, serde_json::to_vec_pretty(&json!({ "events": events }))?)
            .with_context(|| format!("writing {}", trace.display()))?;
        tracing::info!(events = events.len(), trace = %trace.display(), "trace_written");
    }

    let payload = Payload::new(json!({
        "input": args.input.to_string_lossy(),
        "animate": args.animate,
        "verify": args.verify,
        "trace": args.trace.as_ref().map(|p| p.to_string_lossy().into_owned()),
    }))
    .with_metrics(json!({
        "input_points": points.len(),
        "vertices": summary.vertices,
        "area": summary.area,
        "perimeter": summary.perimeter,
        "elapsed_sec": elapsed,
    }))
    .with_tag(tag);
    let prov = write_sidecar(&args.out, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn verify(points: &[Vector2<f64>], hull: &[Vector2<f64>]) -> Result<()> {
    if !is_clockwise(hull) {
        bail!("hull is not strictly clockwise");
    }
    if !is_minimal(hull) {
        bail!("hull keeps a repeated or collinear vertex");
    }
    if let Some(p) = points.iter().find(|p| !contains_eps(hull, **p)) {
        bail!("input point ({}, {}) lies outside the hull", p.x, p.y);
    }
    Ok(())
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, shape = ?cfg.shape, seed = tok.seed, index = tok.index, "sample");
    let points = draw_cloud(cfg, tok);
    io::write_points(out, &points)?;
    let payload = Payload::new(json!({
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "scale": cfg.scale,
        "seed": tok.seed,
        "index": tok.index,
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "version": dchull::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn exec(args: &[&str]) -> Result<()> {
        let cmd = Cmd::try_parse_from(std::iter::once("dchull-cli").chain(args.iter().copied()))?;
        dispatch(cmd)
    }

    #[test]
    fn parses_global_tag_after_subcommand() {
        let cmd = Cmd::try_parse_from(["dchull-cli", "report", "--tag", "t1"]).unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        let cmd = Cmd::try_parse_from([
            "dchull-cli", "sample", "--out", "a.csv", "--shape", "grid", "--half", "3",
        ])
        .unwrap();
        match cmd.action {
            Action::Sample { shape, half, .. } => {
                assert_eq!(shape, Shape::Grid);
                assert_eq!(half, 3);
            }
            _ => panic!("expected sample"),
        }
        assert!(Cmd::try_parse_from(["dchull-cli", "run", "--input", "a.csv"]).is_err());
    }

    #[test]
    fn sample_then_run_writes_hull_sidecar_and_trace() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.csv");
        let out = dir.path().join("res/hull.json");
        let trace = dir.path().join("res/steps.json");
        let (pts_s, out_s, trace_s) = (
            pts.to_str().unwrap(),
            out.to_str().unwrap(),
            trace.to_str().unwrap(),
        );
        exec(&["sample", "--count", "200", "--seed", "4", "--out", pts_s]).unwrap();
        assert!(dir.path().join("pts.provenance.json").exists());

        exec(&[
            "run", "--input", pts_s, "--out", out_s, "--verify", "--trace", trace_s, "--tag",
            "smoke",
        ])
        .unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let hull = doc["hull"].as_array().unwrap();
        assert!(hull.len() >= 3);
        assert_eq!(doc["vertices"].as_u64().unwrap() as usize, hull.len());
        assert_eq!(doc["input_points"], 200);
        assert_eq!(doc["tag"], "smoke");

        let prov: Value =
            serde_json::from_slice(&fs::read(dir.path().join("res/hull.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["params"]["verify"], true);
        assert_eq!(prov["tag"], "smoke");

        let steps: Value = serde_json::from_slice(&fs::read(&trace).unwrap()).unwrap();
        let events = steps["events"].as_array().unwrap();
        let last = events.last().unwrap();
        assert_eq!(last["op"], "status");
        assert!(last["message"]
            .as_str()
            .unwrap()
            .starts_with("Time Elapsed (Convex Hull): "));
        assert!(events
            .iter()
            .any(|e| e["op"] == "add_lines" && e["color"] == "red"));
    }

    #[test]
    fn hull_output_reads_back_as_input() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.json");
        fs::write(&pts, "[[0,0],[4,0],[4,4],[0,4],[2,2],[1,3]]").unwrap();
        let out = dir.path().join("hull.json");
        let again = dir.path().join("again.csv");
        exec(&["run", "--input", pts.to_str().unwrap(), "--out", out.to_str().unwrap()]).unwrap();
        exec(&[
            "run",
            "--input",
            out.to_str().unwrap(),
            "--out",
            again.to_str().unwrap(),
            "--verify",
        ])
        .unwrap();
        let first = io::read_points(&out).unwrap();
        let second = io::read_points(&again).unwrap();
        assert_eq!(first.len(), 4);
        assert!(dchull::hull2::util::same_cycle(&first, &second));
    }

    #[test]
    fn empty_input_fails() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("empty.json");
        fs::write(&pts, "[]").unwrap();
        let out = dir.path().join("hull.json");
        let err = exec(&["run", "--input", pts.to_str().unwrap(), "--out", out.to_str().unwrap()])
            .unwrap_err();
        assert!(format!("{err:#}").contains("at least one point"), "{err:#}");
        assert!(!out.exists());
    }

    #[test]
    fn verify_rejects_a_bad_hull() {
        let pts = vec![Vector2::new(0.0, 0.0), Vector2::new(5.0, 5.0)];
        let tri = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 0.0),
        ];
        assert!(verify(&pts, &tri).is_err());
        let ccw: Vec<_> = tri.iter().rev().copied().collect();
        assert!(verify(&tri, &ccw).is_err());
        assert!(verify(&tri, &tri).is_ok());
    }
}

//! Point files: CSV and parquet via polars, JSON via serde.
//!
//! Tabular files carry numeric columns `x` and `y`. JSON is either a bare
//! array of `[x, y]` pairs or an object with a `points` (or `hull`) array, so a
//! hull written by `run` can be read back as input.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    Parquet,
}

impl Format {
    pub fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Format::Csv),
            Some("json") => Ok(Format::Json),
            Some("parquet") => Ok(Format::Parquet),
            other => bail!(
                "unsupported point file extension {:?} for {}",
                other,
                path.display()
            ),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointsDoc {
    Bare(Vec<[f64; 2]>),
    Wrapped {
        #[serde(alias = "hull")]
        points: Vec<[f64; 2]>,
    },
}

#[derive(Serialize)]
struct PointsOut<'a> {
    points: &'a [[f64; 2]],
}

pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    match Format::of(path)? {
        Format::Json => read_json(path),
        Format::Csv => {
            let df = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            frame_points(&df)
        }
        Format::Parquet => {
            let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            frame_points(&df)
        }
    }
}

fn read_json(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PointsDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    let raw = match doc {
        PointsDoc::Bare(p) | PointsDoc::Wrapped { points: p } => p,
    };
    Ok(raw.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

fn frame_points(df: &DataFrame) -> Result<Vec<Vector2<f64>>> {
    let col = |name: &str| -> Result<Vec<f64>> {
        let s = df
            .column(name)
            .with_context(|| format!("point table needs a numeric `{name}` column"))?
            .cast(&DataType::Float64)?;
        s.f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("null `{name}` at row {row}")))
            .collect()
    };
    let xs = col("x")?;
    let ys = col("y")?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Vector2::new(x, y))
        .collect())
}

pub fn pairs(points: &[Vector2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn write_points(path: &Path, points: &[Vector2<f64>]) -> Result<()> {
    ensure_parent(path)?;
    match Format::of(path)? {
        Format::Json => {
            let raw = pairs(points);
            let doc = PointsOut { points: &raw };
            fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let mut df = points_frame(points)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
        Format::Parquet => {
            let mut df = points_frame(points)?;
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }
    Ok(())
}

fn points_frame(points: &[Vector2<f64>]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 1.5),
            Vector2::new(2.0, 1.5),
            Vector2::new(2.0, 0.0),
        ]
    }

    #[test]
    fn csv_and_parquet_keep_points() {
        let dir = tempdir().unwrap();
        for name in ["pts.csv", "pts.parquet"] {
            let path = dir.path().join(name);
            write_points(&path, &square()).unwrap();
            assert_eq!(read_points(&path).unwrap(), square());
        }
    }

    #[test]
    fn csv_integer_columns_are_cast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "x,y,label\n0,0,a\n3,4,b\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)]);
    }

    #[test]
    fn csv_without_y_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n0,0\n").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("`y`"), "{err:#}");
    }

    #[test]
    fn json_accepts_bare_wrapped_and_hull_documents() {
        let dir = tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        fs::write(&bare, "[[1, 2], [3.5, -1]]").unwrap();
        let hull = dir.path().join("hull.json");
        fs::write(&hull, r#"{"hull": [[1, 2], [3.5, -1]], "vertices": 2}"#).unwrap();
        let expected = vec![Vector2::new(1.0, 2.0), Vector2::new(3.5, -1.0)];
        assert_eq!(read_points(&bare).unwrap(), expected);
        assert_eq!(read_points(&hull).unwrap(), expected);

        let wrapped = dir.path().join("out/wrapped.json");
        write_points(&wrapped, &expected).unwrap();
        assert_eq!(read_points(&wrapped).unwrap(), expected);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(Format::of(Path::new("points.txt")).is_err());
        assert!(Format::of(Path::new("points")).is_err());
        assert_eq!(Format::of(Path::new("a/b.csv")).unwrap(), Format::Csv);
    }
}

//! Hands the selected points to whatever displays them, either as `x y z` rows which point
//! cloud viewers load directly or as a JSON document with indices and selection radii.

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use fpsample::SelectedSet;
use fpsample::io::write_xyz;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Xyz,
    Json,
}

pub fn emit(selected: &SelectedSet, format: Format, path: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    write_selected(&mut writer, selected, format)?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn write_selected<W: Write>(writer: &mut W, selected: &SelectedSet, format: Format) -> Result<()> {
    match format {
        Format::Xyz => write_xyz(writer, selected.points())
            .map_err(|e| anyhow!("failed to write points: {e}")),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, selected)
                .context("failed to write JSON")?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpsample::{Point3, sample_farthest_points};

    fn selection() -> SelectedSet {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
        ];
        sample_farthest_points(&points, 2, Some(0)).unwrap()
    }

    #[test]
    fn xyz_rows() {
        let mut buffer = Vec::new();
        write_selected(&mut buffer, &selection(), Format::Xyz).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 0 0\n10 0 0\n");
    }

    #[test]
    fn json_document() {
        let mut buffer = Vec::new();
        write_selected(&mut buffer, &selection(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["indices"], serde_json::json!([0, 1]));
        assert_eq!(value["points"][1], serde_json::json!([10.0, 0.0, 0.0]));
        assert!(value["radii"][0].is_null());
        assert_eq!(value["radii"][1], serde_json::json!(10.0));
    }
}

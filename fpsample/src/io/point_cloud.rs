//! This module has I/O functionality for point clouds stored as plain text, one point per row
//! with whitespace separated columns. The first three columns are x, y and z; any further
//! columns (normals, colors, intensities) are ignored. Text after a `#` is a comment.

use crate::{Point3, PointCloud, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub fn load_xyz(path: &Path) -> Result<PointCloud> {
    let file = File::open(path)?;
    read_xyz(BufReader::new(file))
}

/// Read a point cloud from `x y z` rows. Every data row must have the same number of columns as
/// the first one. Tokens such as `nan` or `inf` parse successfully, it is up to the consumer of
/// the cloud to decide whether non-finite coordinates are acceptable.
///
/// # Examples
///
/// ```
/// use fpsample::io::read_xyz;
/// use fpsample::PointCloudFeatures;
/// let text = "# x y z\n0 0 0\n1.5 2 -3\n";
/// let cloud = read_xyz(text.as_bytes()).unwrap();
/// assert_eq!(cloud.len(), 2);
/// ```
pub fn read_xyz<R: BufRead>(reader: R) -> Result<PointCloud> {
    let mut points = Vec::new();
    let mut columns = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let count = content.split_whitespace().count();
        match columns {
            None => columns = Some(count),
            Some(expected) if expected != count => {
                return Err(format!(
                    "line {line_no}: expected {expected} columns like the first row, found {count}"
                )
                .into());
            }
            _ => {}
        }

        let Some((x, y, z)) = content.split_whitespace().next_tuple() else {
            return Err(
                format!("line {line_no}: expected at least 3 columns, found {count}").into(),
            );
        };

        points.push(Point3::new(
            parse_coord(x, line_no)?,
            parse_coord(y, line_no)?,
            parse_coord(z, line_no)?,
        ));
    }

    Ok(PointCloud::new(points))
}

fn parse_coord(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| format!("line {line_no}: invalid coordinate '{token}': {e}").into())
}

/// Write points as `x y z` rows. Values are written with the shortest representation that
/// reads back to the same f64.
pub fn write_xyz<W: Write>(mut writer: W, points: &[Point3]) -> Result<()> {
    for p in points {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    Ok(())
}

pub fn save_xyz(path: &Path, points: &[Point3]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_xyz(&mut writer, points)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointCloudFeatures;

    #[test]
    fn reads_rows_and_skips_comments() {
        let text = "# header\n\n0 0 0\n  1.5\t2 -3  \n4 5 6 # trailing comment\n";
        let cloud = read_xyz(text.as_bytes()).unwrap();
        assert_eq!(
            cloud.points(),
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.5, 2.0, -3.0),
                Point3::new(4.0, 5.0, 6.0),
            ]
        );
    }

    #[test]
    fn ignores_extra_columns() {
        let text = "1 2 3 0 0 1\n4 5 6 0 1 0\n";
        let cloud = read_xyz(text.as_bytes()).unwrap();
        assert_eq!(cloud.points()[1], Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn empty_text_is_an_empty_cloud() {
        let cloud = read_xyz("# nothing here\n\n".as_bytes()).unwrap();
        assert!(cloud.is_empty());
    }

    #[test]
    fn too_few_columns() {
        let err = read_xyz("1 2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 1:"));
    }

    #[test]
    fn inconsistent_columns() {
        let err = read_xyz("1 2 3\n4 5 6 7\n".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn bad_number() {
        let err = read_xyz("1 2 3\n\n4 five 6\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("five"));
    }

    #[test]
    fn non_finite_tokens_parse() {
        let cloud = read_xyz("nan 0 0\n0 inf 0\n".as_bytes()).unwrap();
        assert!(cloud.points()[0].x.is_nan());
        assert!(cloud.points()[1].y.is_infinite());
    }

    #[test]
    fn written_points_read_back() {
        let points = vec![
            Point3::new(0.1, -2.5, 1e-9),
            Point3::new(1.0 / 3.0, 12345.678, -0.0),
        ];
        let mut buffer = Vec::new();
        write_xyz(&mut buffer, &points).unwrap();
        let cloud = read_xyz(buffer.as_slice()).unwrap();
        assert_eq!(cloud.points(), points.as_slice());
    }
}

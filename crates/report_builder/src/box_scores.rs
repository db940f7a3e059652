//! CSV <-> Frame conversion for box-score and enriched report files.
//!
//! Reading is tolerant: every cell goes through the frame's raw-field parse
//! (blank -> missing, numeric -> number, anything else -> text). Writing
//! emits the frame's registered columns in order, missing cells as blanks.

use anyhow::{Context, Result};
use std::path::Path;
use wbb_core::{Field, Frame, Record};

/// Read any headered CSV into a frame.
pub fn read_frame_csv(path: &Path) -> Result<Frame> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open CSV: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read CSV header: {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut frame = Frame::with_columns(headers.clone());

    for (line, result) in reader.records().enumerate() {
        let record =
            result.with_context(|| format!("bad CSV record at line {} in {}", line + 2, path.display()))?;
        let mut row = Record::new();
        for (i, cell) in record.iter().enumerate() {
            if let Some(column) = headers.get(i) {
                row.set(column, Field::from_raw(cell));
            }
        }
        frame.push_row(row);
    }

    log::info!(
        "read {} rows x {} columns from {}",
        frame.len(),
        frame.columns().len(),
        path.display()
    );
    Ok(frame)
}

/// Write a frame back out as CSV.
pub fn write_frame_csv(frame: &Frame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create CSV: {}", path.display()))?;

    writer.write_record(frame.columns())?;

    for rec in frame.rows() {
        let cells: Vec<String> = frame
            .columns()
            .iter()
            .map(|column| match rec.get(column) {
                Some(Field::Number(n)) => format!("{}", n),
                Some(Field::Text(s)) => s.clone(),
                _ => String::new(),
            })
            .collect();
        writer.write_record(&cells)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("box.csv");
        let output = dir.path().join("out.csv");

        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "team,efg_pct,position").unwrap();
        writeln!(file, "UConn,0.55,Guard").unwrap();
        writeln!(file, "Iowa,,Forward").unwrap();
        drop(file);

        let frame = read_frame_csv(&input).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.rows()[0].text("team"), Some("UConn"));
        assert_eq!(frame.rows()[0].coerced_number("efg_pct"), Some(0.55));
        assert_eq!(frame.rows()[1].coerced_number("efg_pct"), None);

        write_frame_csv(&frame, &output).unwrap();
        let back = read_frame_csv(&output).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.rows()[1].text("position"), Some("Forward"));
        assert_eq!(back.rows()[1].coerced_number("efg_pct"), None);
    }
}

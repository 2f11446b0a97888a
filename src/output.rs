use crate::error::AppError;
use crate::metadata::ScanResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the index as pretty-printed UTF-8 JSON.
pub fn write_json(output_path: &Path, result: &ScanResult) -> Result<(), AppError> {
    let file = File::create(output_path).map_err(|source| AppError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.flush().map_err(|source| AppError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    log::info!("Written to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ImageRecord, ScanInfo};
    use tempfile::TempDir;

    fn sample() -> ScanResult {
        ScanResult {
            scan_info: ScanInfo {
                scan_date: "2024-05-01T10:00:00.000000".to_string(),
                total_images: 1,
                scan_directory: "/photos".to_string(),
            },
            images: vec![ImageRecord {
                filename: "café.jpg".to_string(),
                relative_path: "été/café.jpg".to_string(),
                width: None,
                height: None,
            }],
        }
    }

    #[test]
    fn writes_readable_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        write_json(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("été/café.jpg"));
        assert!(text.contains("\n  \"scan_info\""));
        let back: ScanResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/index.json");
        let err = write_json(&path, &sample()).unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }
}

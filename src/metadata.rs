// src/metadata.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub filename: String,
    pub relative_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScanInfo {
    pub scan_date: String,
    pub total_images: usize,
    pub scan_directory: String,
}

/// The index produced by one scan.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub scan_info: ScanInfo,
    pub images: Vec<ImageRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimensions_are_omitted_from_json() {
        let record = ImageRecord {
            filename: "a.jpg".to_string(),
            relative_path: "sub/a.jpg".to_string(),
            width: None,
            height: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"filename": "a.jpg", "relative_path": "sub/a.jpg"})
        );
    }

    #[test]
    fn result_has_expected_shape() {
        let result = ScanResult {
            scan_info: ScanInfo {
                scan_date: "2024-05-01T10:00:00.000000".to_string(),
                total_images: 1,
                scan_directory: "/photos".to_string(),
            },
            images: vec![ImageRecord {
                filename: "b.png".to_string(),
                relative_path: "b.png".to_string(),
                width: Some(4),
                height: Some(3),
            }],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["scan_info"]["total_images"], 1);
        assert_eq!(value["scan_info"]["scan_directory"], "/photos");
        assert_eq!(value["images"][0]["width"], 4);
        assert_eq!(value["images"][0]["height"], 3);
    }
}

use crate::metadata::ScanResult;
use std::path::Path;

/// Human-readable summary followed by a numbered list of relative paths.
pub fn render_summary(result: &ScanResult, output_file: &Path) -> String {
    let mut out = format!(
        "Scan Summary:\n  Total Images: {}\n  Scan Directory: {}\n  JSON Output File: {}\n{}\nFound Images:\n",
        result.scan_info.total_images,
        result.scan_info.scan_directory,
        output_file.display(),
        "-".repeat(40),
    );
    for (i, image) in result.images.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, image.relative_path));
    }
    out
}

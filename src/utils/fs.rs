use std::path::PathBuf;

/// clap value parser for directory arguments.
pub fn validate_dir(path: &str) -> Result<PathBuf, String> {
    let pb = PathBuf::from(path);
    if pb.is_dir() {
        Ok(pb)
    } else {
        Err(format!("'{}' is not an existing directory", path))
    }
}

/// Formats a byte count for listings, e.g. `"1.5 KiB"`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", size, unit)
}

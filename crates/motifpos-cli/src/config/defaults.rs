use motifpos::engine::config::DEFAULT_OCCUPANCY_MARKER;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub occupancy_marker: String,
    pub table_path: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            occupancy_marker: DEFAULT_OCCUPANCY_MARKER.to_string(),
            table_path: PathBuf::from("fixed_positions.jsonl"),
        }
    }
}

use crate::cli::SourceKind;
use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetFormat(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Unknown fixed-position source '{0}'. Expected 'motif-files' or 'occupancy'.")]
    UnknownSource(String),
}

/// Splits a `--set` override into its key and value, trimming both.
pub fn parse_set_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidSetFormat(kv_pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(kv_pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_source_kind(value: &str) -> Result<SourceKind, ParseError> {
    SourceKind::from_str(value, true).map_err(|_| ParseError::UnknownSource(value.to_string()))
}

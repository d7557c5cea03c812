use crate::error::{Result, UtabError};
use crate::model::User;

/// Fixed column order for CSV export.
pub const CSV_HEADER: [&str; 6] = ["id", "name", "username", "email", "city", "company"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

pub fn run(records: &[User], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(records),
        ExportFormat::Json => to_json(records),
    }
}

/// Serializes the records as RFC-4180 CSV.
///
/// Field values containing a comma, double quote or newline are wrapped in
/// double quotes with internal quotes doubled; values are taken verbatim,
/// never truncated. The header row is emitted even for zero records.
pub fn to_csv(records: &[User]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| UtabError::Export(e.to_string()))?;
    for user in records {
        writer
            .write_record([
                user.id.to_string(),
                user.name.clone(),
                user.username.clone(),
                user.email.clone(),
                user.address.city.clone(),
                user.company.name.clone(),
            ])
            .map_err(|e| UtabError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| UtabError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| UtabError::Export(e.to_string()))
}

/// Serializes the records as pretty-printed JSON (2-space indentation),
/// mirroring the upstream record shape exactly for a lossless round trip.
pub fn to_json(records: &[User]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

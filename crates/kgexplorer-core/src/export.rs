use anyhow::{Context, Result};
use kgexplorer_common::config::ExportFormat;
use kgexplorer_common::CandidateRow;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// `YYYY-MM-DD_HH-MM-SS` in local time.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Writes `body` under `dir`, creating `dir` if missing. A given name lacking
/// the extension gets it appended and an existing file of that name is
/// replaced. Without a name, `results_<timestamp>.<ext>` is used; if that
/// already exists, `_1`, `_2`, ... is added so earlier exports survive.
fn write_output(dir: &Path, filename: Option<&str>, ext: &str, body: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create results directory {}", dir.display()))?;

    if let Some(name) = filename.map(str::trim).filter(|n| !n.is_empty()) {
        let name = if name.ends_with(&format!(".{ext}")) {
            name.to_string()
        } else {
            format!("{name}.{ext}")
        };
        let path = dir.join(name);
        fs::write(&path, body)?;
        return Ok(path);
    }

    let stem = format!("results_{}", timestamp());
    let mut attempt = 0u32;
    loop {
        let name = match attempt {
            0 => format!("{stem}.{ext}"),
            n => format!("{stem}_{n}.{ext}"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(body.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

pub fn export_json(rows: &[CandidateRow], dir: &Path, filename: Option<&str>) -> Result<PathBuf> {
    let body = serde_json::to_string_pretty(rows)?;
    let path = write_output(dir, filename, "json", &body).context("Error exporting results to JSON")?;
    tracing::info!("Results exported to {}", path.display());
    Ok(path)
}

pub fn export_csv(rows: &[CandidateRow], dir: &Path, filename: Option<&str>) -> Result<PathBuf> {
    let mut body = String::from("label,count\n");
    for row in rows {
        body.push_str(&csv_escape(&row.label));
        body.push(',');
        body.push_str(&row.count.to_string());
        body.push('\n');
    }
    let path = write_output(dir, filename, "csv", &body).context("Error exporting results to CSV")?;
    tracing::info!("Results exported to {}", path.display());
    Ok(path)
}

/// Dispatches on the configured format.
pub fn export_rows(rows: &[CandidateRow], dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    match format {
        ExportFormat::Json => export_json(rows, dir, None),
        ExportFormat::Csv => export_csv(rows, dir, None),
    }
}

fn csv_escape(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

//! Files command implementation.

use anyhow::Result;
use appenv::{EnvLoader, FileTree};
use serde::Serialize;
use std::path::Path;

use crate::args::OutputFormat;

/// Which files a load would read, in application order.
#[derive(Debug, Serialize)]
pub struct FilesReport {
    pub app_env: String,
    pub files: Vec<FileStatus>,
}

#[derive(Debug, Serialize)]
pub struct FileStatus {
    pub path: String,
    pub required: bool,
    pub exists: bool,
}

pub fn run(dir: &Path, app_env: Option<&str>, format: OutputFormat) -> Result<()> {
    let loader = super::build_loader(dir, app_env);
    let report = report(&loader);
    print!("{}", render(&report, format)?);
    Ok(())
}

pub fn report<T: FileTree>(loader: &EnvLoader<T>) -> FilesReport {
    let app_env = loader.resolve_app_env();
    let tree = loader.file_tree();

    let env_path = loader.env_file_path(&app_env);
    let shared_path = loader.shared_file_path();

    FilesReport {
        files: vec![
            FileStatus {
                path: env_path.display().to_string(),
                required: true,
                exists: tree.exists(&env_path),
            },
            FileStatus {
                path: shared_path.display().to_string(),
                required: false,
                exists: tree.exists(&shared_path),
            },
        ],
        app_env,
    }
}

pub fn render(report: &FilesReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut output = format!("environment: {}\n", report.app_env);
            for file in &report.files {
                let state = match (file.exists, file.required) {
                    (true, _) => "found",
                    (false, true) => "missing (required)",
                    (false, false) => "missing",
                };
                output.push_str(&format!("{}\t{}\n", file.path, state));
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let mut output = serde_json::to_string_pretty(report)?;
            output.push('\n');
            Ok(output)
        }
    }
}

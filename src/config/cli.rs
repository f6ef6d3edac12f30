use crate::core::etl::EtlEngine;
use crate::core::parser::classify_io_error;
use crate::core::pipeline::AgeReportPipeline;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::RunSummary;
use crate::utils::error::{ReportError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Filesystem storage rooted at `base_path`. An empty base resolves paths as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(&full_path).map_err(|e| classify_io_error(path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Fails with `ResourceNotFound` unless `path` names an existing regular file.
pub fn ensure_input_file(path: &str) -> Result<()> {
    if Path::new(path).is_file() {
        Ok(())
    } else {
        Err(ReportError::ResourceNotFound {
            path: path.to_string(),
        })
    }
}

/// Runs the age report against the local filesystem.
///
/// When the input is not an existing file only its diagnostic is written to
/// `out`; the engine never runs and `None` is returned.
pub fn run_local_report<C: ConfigProvider, W: Write>(
    config: C,
    out: &mut W,
) -> Result<Option<RunSummary>> {
    if let Some(path) = config.input_path() {
        if let Err(e) = ensure_input_file(path) {
            tracing::warn!("Input rejected ({:?}): {}", e.category(), e);
            writeln!(out, "{}", e.user_friendly_message())?;
            return Ok(None);
        }
    }

    let engine = EtlEngine::new(AgeReportPipeline::new(LocalStorage::default(), config));
    engine.run(out).map(Some)
}

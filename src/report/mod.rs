pub mod csv_export;
pub mod format;
pub mod text;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TradingConfig;
use crate::core::ScenarioResult;
use crate::models::ParsedSignal;

/// Everything an export needs: the signal, the sizing it was run with, and
/// the computed scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub generated_at: DateTime<Utc>,
    pub signal: ParsedSignal,
    pub config: TradingConfig,
    pub result: ScenarioResult,
}

impl ScenarioReport {
    pub fn new(signal: ParsedSignal, config: TradingConfig, result: ScenarioResult) -> Self {
        Self::at(Utc::now(), signal, config, result)
    }

    pub fn at(
        generated_at: DateTime<Utc>,
        signal: ParsedSignal,
        config: TradingConfig,
        result: ScenarioResult,
    ) -> Self {
        Self {
            generated_at,
            signal,
            config,
            result,
        }
    }

    fn file_stem(&self, kind: &str) -> String {
        format!(
            "{}_{}_{}",
            self.signal.symbol_or_unknown(),
            kind,
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.file_stem("analysis"))
    }

    pub fn text_file_name(&self) -> String {
        format!("{}.txt", self.file_stem("report"))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the CSV export into `dir`, returning the file path.
    pub fn save_csv(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = prepare_path(dir.as_ref(), &self.csv_file_name())?;
        fs::write(&path, self.to_csv()?)?;
        Ok(path)
    }

    /// Writes the plain-text report into `dir`, returning the file path.
    pub fn save_text(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = prepare_path(dir.as_ref(), &self.text_file_name())?;
        fs::write(&path, self.to_text())?;
        Ok(path)
    }
}

fn prepare_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(file_name))
}

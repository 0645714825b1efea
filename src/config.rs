//! Runtime configuration utilities for epicalc.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::metrics::{StudyDesign, StudyGoal};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root folder for batch outputs.
    pub outputs_dir: PathBuf,
    /// Design applied when a request or batch row does not name one.
    pub default_design: StudyDesign,
    /// Goal applied when a request or batch row does not name one.
    pub default_goal: StudyGoal,
    /// Default bind address for `serve`.
    pub api_host: String,
    pub api_port: u16,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let default_design = match env::var("DEFAULT_STUDY_DESIGN") {
            Ok(raw) => raw
                .parse::<StudyDesign>()
                .context("parsing DEFAULT_STUDY_DESIGN")?,
            Err(_) => StudyDesign::Rct,
        };
        let default_goal = match env::var("DEFAULT_STUDY_GOAL") {
            Ok(raw) => raw
                .parse::<StudyGoal>()
                .context("parsing DEFAULT_STUDY_GOAL")?,
            Err(_) => StudyGoal::Undesirable,
        };
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            outputs_dir,
            default_design,
            default_goal,
            api_host,
            api_port,
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            outputs_dir: PathBuf::from("./outputs"),
            default_design: StudyDesign::Rct,
            default_goal: StudyGoal::Undesirable,
            api_host: "127.0.0.1".to_string(),
            api_port: 8080,
        }
    }
}

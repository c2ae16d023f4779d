//! Optional TOML configuration.
//!
//! Raw deserialization structs keep `Option` fields; resolution to concrete
//! values (timings, script, install command) happens in the accessor methods
//! so the rest of the program never sees a half-configured state. A missing
//! file means defaults; a malformed file is the one startup error a user can
//! cause, and it is reported with its path.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use vitrine_types::{DemoScenario, OutputLine, SequencerTimings};

use crate::script;

/// Directory holding the config file, theme preference, and logs.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vitrine"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VitrineConfig {
    pub app: Option<AppConfig>,
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Override the install command offered by the copy control.
    pub install_command: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Replace the built-in demo script entirely.
    pub scenarios: Option<Vec<ScenarioConfig>>,
    pub initial_delay_ms: Option<u64>,
    pub type_delay_ms: Option<u64>,
    pub type_jitter_ms: Option<u64>,
    pub pause_ms: Option<u64>,
    pub reveal_ms: Option<u64>,
    pub hold_ms: Option<u64>,
}

/// User-supplied scenario: a command plus plain output lines.
#[derive(Debug, Deserialize)]
pub struct ScenarioConfig {
    pub command: String,
    #[serde(default)]
    pub output: Vec<String>,
}

impl VitrineConfig {
    /// Load the config file if one exists. `Ok(None)` when there is no file
    /// (or no config dir on this platform).
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match Self::path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        Some(config_dir()?.join("vitrine.toml"))
    }

    /// Sequencer pacing with any configured overrides applied.
    #[must_use]
    pub fn timings(&self) -> SequencerTimings {
        let mut timings = SequencerTimings::default();
        if let Some(demo) = &self.demo {
            let ms = std::time::Duration::from_millis;
            if let Some(v) = demo.initial_delay_ms {
                timings.initial_delay = ms(v);
            }
            if let Some(v) = demo.type_delay_ms {
                timings.type_delay_base = ms(v);
            }
            if let Some(v) = demo.type_jitter_ms {
                timings.type_delay_jitter = ms(v);
            }
            if let Some(v) = demo.pause_ms {
                timings.pause_after_command = ms(v);
            }
            if let Some(v) = demo.reveal_ms {
                timings.reveal_transition = ms(v);
            }
            if let Some(v) = demo.hold_ms {
                timings.hold = ms(v);
            }
        }
        timings
    }

    /// Demo script: the configured scenarios, or the built-in ones.
    #[must_use]
    pub fn scenarios(&self) -> Vec<DemoScenario> {
        let configured = self
            .demo
            .as_ref()
            .and_then(|demo| demo.scenarios.as_ref())
            .filter(|scenarios| !scenarios.is_empty());

        match configured {
            Some(scenarios) => scenarios
                .iter()
                .map(|s| {
                    DemoScenario::new(
                        s.command.clone(),
                        s.output.iter().map(OutputLine::plain).collect(),
                    )
                })
                .collect(),
            None => script::builtin_script(),
        }
    }

    #[must_use]
    pub fn install_command(&self) -> &str {
        self.app
            .as_ref()
            .and_then(|app| app.install_command.as_deref())
            .unwrap_or(script::INSTALL_COMMAND)
    }
}

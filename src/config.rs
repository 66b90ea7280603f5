use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::TutorError;
use crate::executor::shell::DEFAULT_SHELL;
use crate::gate::policy::{DEFAULT_FORBIDDEN, DEFAULT_MAX_LENGTH, DEFAULT_TIMEOUT, GatePolicy};

const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KiB

/// Environment variable naming the optional TOML config file.
pub const CONFIG_ENV_VAR: &str = "TEXTTUTOR_CONFIG";

// --- TOML deserialization structs (private, map 1:1 to TOML schema) ---

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    gate: GateSection,
    #[serde(default)]
    console: ConsoleSection,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct GateSection {
    max_length: Option<usize>,
    forbidden: Option<Vec<String>>,
    timeout_secs: Option<u64>,
    shell: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConsoleSection {
    color: Option<bool>,
}

// --- Validated configuration ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    gate: GatePolicy,
    shell: String,
    color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gate: GatePolicy::default(),
            shell: DEFAULT_SHELL.to_owned(),
            color: true,
        }
    }
}

impl FromStr for Config {
    type Err = TutorError;

    /// Parse and validate a config from a TOML string. Missing keys take defaults.
    fn from_str(content: &str) -> Result<Self, TutorError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| TutorError::ConfigLoad(e.to_string()))?;

        let gate = compile_gate(file.gate.max_length, file.gate.forbidden, file.gate.timeout_secs)?;

        let shell = file.gate.shell.unwrap_or_else(|| DEFAULT_SHELL.to_owned());
        if shell.trim().is_empty() {
            return Err(TutorError::ConfigValidation(
                "gate.shell must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            gate,
            shell,
            color: file.console.color.unwrap_or(true),
        })
    }
}

impl Config {
    /// Load a config from a TOML file. Checks file size before reading.
    pub fn load(path: &Path) -> Result<Self, TutorError> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| TutorError::ConfigLoad(format!("cannot read {}: {e}", path.display())))?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(TutorError::ConfigLoad(format!(
                "config file exceeds {MAX_CONFIG_FILE_SIZE} byte limit"
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TutorError::ConfigLoad(format!("cannot read {}: {e}", path.display())))?;

        content.parse()
    }

    /// Load from `TEXTTUTOR_CONFIG` when set, otherwise use defaults.
    pub fn from_env() -> Result<Self, TutorError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!(path = %Path::new(&path).display(), "loading config");
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn gate_policy(&self) -> &GatePolicy {
        &self.gate
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn color(&self) -> bool {
        self.color
    }
}

fn compile_gate(
    max_length: Option<usize>,
    forbidden: Option<Vec<String>>,
    timeout_secs: Option<u64>,
) -> Result<GatePolicy, TutorError> {
    let max_length = max_length.unwrap_or(DEFAULT_MAX_LENGTH);
    if max_length == 0 {
        return Err(TutorError::ConfigValidation(
            "gate.max_length must be greater than zero".to_owned(),
        ));
    }

    let forbidden = forbidden
        .unwrap_or_else(|| DEFAULT_FORBIDDEN.iter().map(|s| (*s).to_owned()).collect());
    if let Some(index) = forbidden.iter().position(String::is_empty) {
        return Err(TutorError::ConfigValidation(format!(
            "gate.forbidden[{index}] must not be empty"
        )));
    }

    let timeout = match timeout_secs {
        Some(0) => {
            return Err(TutorError::ConfigValidation(
                "gate.timeout_secs must be greater than zero".to_owned(),
            ));
        }
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    Ok(GatePolicy::new(max_length, forbidden, timeout))
}

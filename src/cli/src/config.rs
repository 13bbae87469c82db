use std::{fs, io::ErrorKind, path::Path};

use color_eyre::eyre::WrapErr;
use cube_core::DEFAULT_SCRAMBLE_LENGTH;
use log::debug;
use serde::{Deserialize, Serialize};

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Moves in a scramble when `-n` is not given.
    pub scramble_length: usize,
    /// Paint the net with terminal colors.
    pub color: bool,
    /// Fixed seed for scrambles when `--seed` is not given.
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            color: true,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Load the config the user asked for, or the one in the platform config
    /// directory if there is one.
    ///
    /// An explicitly given path must exist; the default location may be
    /// missing, in which case the defaults are used.
    pub fn load(explicit: Option<&Path>) -> color_eyre::Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let Some(mut path) = dirs::config_dir() else {
            return Ok(Self::default());
        };
        path.push("cube");
        path.push("config.toml");

        match fs::metadata(&path) {
            Ok(_) => Self::read(&path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).wrap_err_with(|| format!("Failed to read {}", path.display())),
        }
    }

    fn read(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str::<CliConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded {config:?} from {}", path.display());
        Ok(config)
    }
}

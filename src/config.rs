// Configuration management
//
// Host-facing knobs chosen at construction time: audio mixing parameters,
// the default nametable mirroring for carts that do not control it, and
// debug tracing. Persisted as TOML.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file path
const CONFIG_FILE: &str = "famicore.toml";

/// Core configuration
///
/// Stores the settings a host embedding the core applies at power-on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Audio settings
    pub audio: AudioConfig,

    /// Video settings
    pub video: VideoConfig,

    /// Debug settings
    pub debug: DebugConfig,
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Master volume fed to `Apu::set_volume` (0-255)
    pub volume: u8,

    /// PCM samples produced per 240 Hz APU step (usually 183, 184 or 200
    /// depending on the host sample rate)
    pub samples_per_step: u16,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Initial nametable mirroring: 0/1 single-screen low/high,
    /// 2 vertical, 3 horizontal, 4 four-screen
    pub mirror_mode: u8,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Emit a `log::trace!` line per executed CPU instruction
    pub trace_cpu: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            audio: AudioConfig {
                volume: 255,
                samples_per_step: 184,
            },
            video: VideoConfig { mirror_mode: 3 },
            debug: DebugConfig { trace_cpu: false },
        }
    }
}

impl CoreConfig {
    /// Load configuration from the default file or fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_else(|_| {
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            let _ = config.save(CONFIG_FILE);
            config
        })
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Errors produced while loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read or written
    Io(io::Error),
    /// File contents are not valid configuration TOML
    Parse(toml::de::Error),
    /// Configuration could not be serialized
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};
use thiserror::Error;
use tracing::{info, warn};

pub const SETTINGS_ENV: &str = "FOLIO_SETTINGS";
pub const DEFAULT_SETTINGS_PATH: &str = "core/settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path} could not be read: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("settings file {path} is malformed: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    Static,
    Catalog,
    Remote,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub ipv4_addr: Ipv4Setting,
    pub port: U16Setting,
    pub content_mode: ModeSetting,
    pub remote_url: StrSetting,
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout_secs: U16Setting,
    pub data_path: StrSetting,
    pub key_path: StrSetting,
    #[serde(default = "default_base_name")]
    pub base_name: StrSetting,
    #[serde(default = "default_log_format")]
    pub log_format: LogFormatSetting,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrSetting {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct U16Setting {
    pub name: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Ipv4Setting {
    pub name: String,
    pub value: Ipv4Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ModeSetting {
    pub name: String,
    pub value: ContentMode,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LogFormatSetting {
    pub name: String,
    pub value: LogFormat,
}

fn default_remote_timeout() -> U16Setting {
    U16Setting {
        name: "Remote timeout (seconds)".to_string(),
        value: 10,
    }
}

fn default_base_name() -> StrSetting {
    StrSetting {
        name: "Base name".to_string(),
        value: "/".to_string(),
    }
}

fn default_log_format() -> LogFormatSetting {
    LogFormatSetting {
        name: "Log format".to_string(),
        value: LogFormat::Compact,
    }
}

impl Settings {
    /// Reads settings from `FOLIO_SETTINGS`, falling back to the default path.
    pub fn load() -> Result<Self, SettingsError> {
        let path =
            std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load_from(&path)
    }

    /// A missing file yields the defaults; anything else unreadable is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                warn!(path = %shown, "settings file not found, using defaults");
                return Ok(Settings::new());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: shown,
                    source,
                })
            }
        };

        let mut buffer = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut buffer)
            .map_err(|source| SettingsError::Read {
                path: shown.clone(),
                source,
            })?;
        let settings = serde_json::from_slice::<Settings>(&buffer).map_err(|source| {
            SettingsError::Parse {
                path: shown.clone(),
                source,
            }
        })?;
        info!(path = %shown, mode = ?settings.content_mode.value, "settings loaded");
        Ok(settings)
    }

    pub fn new() -> Self {
        Settings {
            ipv4_addr: Ipv4Setting {
                name: "Ipv4 Address".to_string(),
                value: Ipv4Addr::new(127, 0, 0, 1),
            },
            port: U16Setting {
                name: "Port".to_string(),
                value: 4010,
            },
            content_mode: ModeSetting {
                name: "Content mode".to_string(),
                value: ContentMode::Catalog,
            },
            remote_url: StrSetting {
                name: "Remote URL".to_string(),
                value: "http://127.0.0.1:4020/v1".to_string(),
            },
            remote_timeout_secs: default_remote_timeout(),
            data_path: StrSetting {
                name: "data_path".to_string(),
                value: "data".to_string(),
            },
            key_path: StrSetting {
                name: "key_path".to_string(),
                value: "key/pass.key".to_string(),
            },
            base_name: default_base_name(),
            log_format: default_log_format(),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.ipv4_addr.value, self.port.value))
    }

    /// Route prefix for the page scope: "" for the root, "/folio" for "folio/".
    pub fn page_prefix(&self) -> String {
        let trimmed = self.base_name.value.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(dir.path().join("absent.json")).unwrap();
        assert_eq!(settings.content_mode.value, ContentMode::Catalog);
        assert_eq!(settings.socket_addr().to_string(), "127.0.0.1:4010");
    }

    #[test]
    fn reads_named_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut settings = Settings::new();
        settings.content_mode.value = ContentMode::Static;
        settings.port.value = 8081;
        write!(file, "{}", serde_json::to_string(&settings).unwrap()).unwrap();

        let loaded = Settings::load_from(file.path()).unwrap();
        assert_eq!(loaded.content_mode.value, ContentMode::Static);
        assert_eq!(loaded.port.value, 8081);
    }

    #[test]
    fn optional_settings_default_when_omitted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut value = serde_json::to_value(Settings::new()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("base_name");
        object.remove("log_format");
        object.remove("remote_timeout_secs");
        write!(file, "{}", value).unwrap();

        let loaded = Settings::load_from(file.path()).unwrap();
        assert_eq!(loaded.base_name.value, "/");
        assert_eq!(loaded.log_format.value, LogFormat::Compact);
        assert_eq!(loaded.remote_timeout_secs.value, 10);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let error = Settings::load_from(file.path()).unwrap_err();
        assert!(matches!(error, SettingsError::Parse { .. }));
    }

    #[test]
    fn page_prefix_normalizes_base_name() {
        let mut settings = Settings::new();
        assert_eq!(settings.page_prefix(), "");
        settings.base_name.value = "folio/".to_string();
        assert_eq!(settings.page_prefix(), "/folio");
    }
}

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base language of stored data and UI texts (ISO 639-1)
    #[serde(default = "default_base_language")]
    pub base_language: String,

    /// Address the HTTP API listens on
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Path to the SQLite player store; platform data directory when unset
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Translation provider config
    #[serde(default)]
    pub translation: TranslationApiConfig,

    /// Face-recognition provider config
    #[serde(default)]
    pub face_recognition: FaceApiConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for the cloud translation API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationApiConfig {
    /// Service endpoint URL
    #[serde(default = "default_translate_endpoint")]
    pub endpoint: String,

    /// API key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Delay between sequential batch requests, in milliseconds.
    /// Serializes calls to respect the provider's rate limits.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translate_endpoint(),
            api_key: String::new(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Configuration for the face-recognition API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FaceApiConfig {
    /// Service endpoint URL
    #[serde(default = "default_face_endpoint")]
    pub endpoint: String,

    /// API key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Face collection holding indexed player faces
    #[serde(default = "default_collection_id")]
    pub collection_id: String,

    /// Maximum candidates returned per search
    #[serde(default = "default_max_candidates")]
    pub max_candidates: u32,

    /// Similarity threshold for a match, 0-100
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FaceApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_face_endpoint(),
            api_key: String::new(),
            collection_id: default_collection_id(),
            max_candidates: default_max_candidates(),
            similarity_threshold: default_similarity_threshold(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_base_language() -> String {
    "es".to_string()
}

fn default_listen_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_translate_endpoint() -> String {
    "http://localhost:8090".to_string()
}

fn default_face_endpoint() -> String {
    "http://localhost:8091".to_string()
}

fn default_collection_id() -> String {
    "futbol-players-collection".to_string()
}

fn default_max_candidates() -> u32 {
    5
}

fn default_similarity_threshold() -> f32 {
    80.0
}

fn default_request_delay_ms() -> u64 {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the base language code
        let _base_name = crate::language_utils::get_language_name(&self.base_language)?;

        Url::parse(&self.translation.endpoint)
            .map_err(|e| anyhow!("Invalid translation endpoint: {}", e))?;
        Url::parse(&self.face_recognition.endpoint)
            .map_err(|e| anyhow!("Invalid face-recognition endpoint: {}", e))?;
        if self.face_recognition.collection_id.is_empty() {
            return Err(anyhow!("Face collection id cannot be empty"));
        }
        if !(0.0..=100.0).contains(&self.face_recognition.similarity_threshold) {
            return Err(anyhow!(
                "Similarity threshold must be within 0-100, got {}",
                self.face_recognition.similarity_threshold
            ));
        }
        if self.face_recognition.max_candidates == 0 {
            return Err(anyhow!("Max candidates must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            base_language: default_base_language(),
            listen_address: default_listen_address(),
            database_path: None,
            translation: TranslationApiConfig::default(),
            face_recognition: FaceApiConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

pub mod cli;

use crate::adapters::remote::{DEFAULT_ADJECTIVES_URL, DEFAULT_NOUNS_URL};
use crate::core::composer::{PasswordComposer, SpecialMode, DEFAULT_SYMBOLS, MEMORABLE_TOKENS};
use crate::core::retry::{Backoff, RetryPolicy};
use crate::utils::error::{PassError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

pub use cli::CliArgs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub retry: RetryConfig,
    pub fallback: FallbackConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub include_words: bool,
    pub expose_error_details: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    CachedFile,
    #[default]
    RemoteFetch,
    CompanionService,
    StaticFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub backend: Backend,
    pub adjectives_url: String,
    pub nouns_url: String,
    pub cache_dir: Option<String>,
    pub companion_url: Option<String>,
    pub timeout_seconds: u64,
    pub min_pool_size: usize,
    pub preload: bool,
    pub refresh_interval_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub backoff: Backoff,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub special_mode: SpecialMode,
    pub special_count: usize,
    pub special_alphabet: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "public".to_string(),
            include_words: true,
            expose_error_details: true,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            adjectives_url: DEFAULT_ADJECTIVES_URL.to_string(),
            nouns_url: DEFAULT_NOUNS_URL.to_string(),
            cache_dir: None,
            companion_url: None,
            timeout_seconds: 5,
            min_pool_size: 10,
            preload: true,
            refresh_interval_seconds: None,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            backoff: Backoff::Exponential,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            special_mode: SpecialMode::Symbols,
            special_count: 1,
            special_alphabet: None,
        }
    }
}

impl FromStr for Backend {
    type Err = PassError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "cached_file" | "cache" => Ok(Backend::CachedFile),
            "remote_fetch" | "remote" => Ok(Backend::RemoteFetch),
            "companion_service" | "companion" | "wordnet" => Ok(Backend::CompanionService),
            "static_fallback" | "static" => Ok(Backend::StaticFallback),
            _ => Err(PassError::InvalidConfigValueError {
                field: "source.backend".to_string(),
                value: s.to_string(),
                reason: "Expected one of: cached_file, remote_fetch, companion_service, static_fallback"
                    .to_string(),
            }),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_seconds.map(Duration::from_secs)
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.base_delay_ms),
            self.backoff,
        )
    }
}

impl PasswordConfig {
    /// 依設定建立組合器；自訂字元表優先於模式預設值
    pub fn composer(&self) -> PasswordComposer {
        let defaults: &[&str] = match self.special_mode {
            SpecialMode::Symbols => DEFAULT_SYMBOLS,
            SpecialMode::Memorable => MEMORABLE_TOKENS,
        };
        let alphabet = self
            .special_alphabet
            .clone()
            .unwrap_or_else(|| defaults.iter().map(|s| s.to_string()).collect());
        PasswordComposer::new(self.special_mode, self.special_count, alphabet)
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PassError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads the file if given, otherwise defaults, then applies process
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${CACHE_DIR})
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid env var pattern")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Applies the environment overrides, resolving each key through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_override("PORT", &port)?;
        }
        if let Some(backend) = lookup("MEMOPASS_BACKEND") {
            self.source.backend = backend.parse()?;
        }
        if let Some(url) = lookup("MEMOPASS_ADJECTIVES_URL") {
            self.source.adjectives_url = url;
        }
        if let Some(url) = lookup("MEMOPASS_NOUNS_URL") {
            self.source.nouns_url = url;
        }
        if let Some(dir) = lookup("MEMOPASS_CACHE_DIR") {
            self.source.cache_dir = Some(dir);
        }
        if let Some(url) = lookup("MEMOPASS_COMPANION_URL") {
            self.source.companion_url = Some(url);
        }
        if let Some(attempts) = lookup("MEMOPASS_RETRY_ATTEMPTS") {
            self.retry.max_attempts = parse_override("MEMOPASS_RETRY_ATTEMPTS", &attempts)?;
        }
        if let Some(enabled) = lookup("MEMOPASS_ENABLE_FALLBACK") {
            self.fallback.enabled = parse_bool("MEMOPASS_ENABLE_FALLBACK", &enabled)?;
        }
        if let Some(mode) = lookup("MEMOPASS_SPECIAL_MODE") {
            self.password.special_mode = match mode.trim().to_ascii_lowercase().as_str() {
                "symbols" => SpecialMode::Symbols,
                "memorable" => SpecialMode::Memorable,
                _ => {
                    return Err(PassError::InvalidConfigValueError {
                        field: "MEMOPASS_SPECIAL_MODE".to_string(),
                        value: mode.clone(),
                        reason: "Expected 'symbols' or 'memorable'".to_string(),
                    })
                }
            };
        }
        if let Some(count) = lookup("MEMOPASS_SPECIAL_COUNT") {
            self.password.special_count = parse_override("MEMOPASS_SPECIAL_COUNT", &count)?;
        }
        if let Some(alphabet) = lookup("MEMOPASS_SPECIAL_ALPHABET") {
            // 以空白分隔，例如 "! @ # $"
            self.password.special_alphabet =
                Some(alphabet.split_whitespace().map(str::to_string).collect());
        }
        Ok(())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validate_path("server.static_dir", &self.server.static_dir)?;

        match self.source.backend {
            Backend::RemoteFetch => {
                validate_url("source.adjectives_url", &self.source.adjectives_url)?;
                validate_url("source.nouns_url", &self.source.nouns_url)?;
            }
            Backend::CompanionService => {
                let url = self.source.companion_url.as_deref().ok_or_else(|| {
                    PassError::MissingConfigError {
                        field: "source.companion_url".to_string(),
                    }
                })?;
                validate_url("source.companion_url", url)?;
            }
            Backend::CachedFile => {
                let dir = self.source.cache_dir.as_deref().ok_or_else(|| {
                    PassError::MissingConfigError {
                        field: "source.cache_dir".to_string(),
                    }
                })?;
                validate_path("source.cache_dir", dir)?;
            }
            Backend::StaticFallback => {}
        }
        if let Some(dir) = &self.source.cache_dir {
            validate_path("source.cache_dir", dir)?;
        }

        validate_positive_number("source.timeout_seconds", self.source.timeout_seconds as usize, 1)?;
        validate_positive_number("source.min_pool_size", self.source.min_pool_size, 1)?;
        if let Some(interval) = self.source.refresh_interval_seconds {
            validate_positive_number("source.refresh_interval_seconds", interval as usize, 1)?;
        }
        validate_range("retry.max_attempts", self.retry.max_attempts, 1, 10)?;

        if self.password.special_mode == SpecialMode::Symbols {
            validate_range("password.special_count", self.password.special_count, 1, 3)?;
        }
        let composer = self.password.composer();
        if composer.alphabet().is_empty() {
            return Err(PassError::InvalidConfigValueError {
                field: "password.special_alphabet".to_string(),
                value: "[]".to_string(),
                reason: "Alphabet cannot be empty".to_string(),
            });
        }
        for token in composer.alphabet() {
            validate_non_empty_string("password.special_alphabet", token)?;
            validate_range("password.special_alphabet token length", token.chars().count(), 1, 3)?;
            if token.chars().any(|c| c.is_ascii_alphanumeric() || c.is_whitespace()) {
                return Err(PassError::InvalidConfigValueError {
                    field: "password.special_alphabet".to_string(),
                    value: token.clone(),
                    reason: "Special tokens may not contain letters, digits or spaces".to_string(),
                });
            }
        }
        if composer.mode() == SpecialMode::Symbols
            && composer.alphabet().iter().any(|t| t.chars().count() != 1)
        {
            return Err(PassError::InvalidConfigValueError {
                field: "password.special_alphabet".to_string(),
                value: composer.alphabet().join(" "),
                reason: "Symbols mode takes single characters; use memorable mode for tokens"
                    .to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

fn parse_override<T: FromStr>(field: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| PassError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PassError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Expected true or false".to_string(),
        }),
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub retry_attempts: u32,
    pub query_config: QueryConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            retry_attempts: 1,
            query_config: QueryConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Cuánto tiempo se sirve una consulta en caché sin volver a pedirla.
    pub stale_minutes: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { stale_minutes: 5 }
    }
}

impl QueryConfig {
    pub fn stale_ms(&self) -> f64 {
        f64::from(self.stale_minutes) * 60.0 * 1000.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub max_upload_mb: u32,
    pub toast_capacity: usize,
    pub toast_ttl_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: 5,
            toast_capacity: 5,
            toast_ttl_ms: 3000,
        }
    }
}

impl UIConfig {
    pub fn max_upload_bytes(&self) -> f64 {
        f64::from(self.max_upload_mb) * 1024.0 * 1024.0
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .unwrap_or("1").parse().unwrap_or(1),
            query_config: QueryConfig {
                stale_minutes: option_env!("QUERY_STALE_MINUTES")
                    .unwrap_or("5").parse().unwrap_or(5),
            },
            ui_config: UIConfig {
                max_upload_mb: option_env!("MAX_UPLOAD_MB")
                    .unwrap_or("5").parse().unwrap_or(5),
                toast_capacity: option_env!("TOAST_CAPACITY")
                    .unwrap_or("5").parse().unwrap_or(5),
                toast_ttl_ms: option_env!("TOAST_TTL_MS")
                    .unwrap_or("3000").parse().unwrap_or(3000),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_query_and_toast_policy() {
        let config = AppConfig::default();
        assert_eq!(config.retry_attempts, 1);
        assert_eq!(config.query_config.stale_ms(), 300_000.0);
        assert_eq!(config.ui_config.toast_capacity, 5);
        assert_eq!(config.ui_config.toast_ttl_ms, 3000);
        assert_eq!(config.ui_config.max_upload_bytes(), 5.0 * 1024.0 * 1024.0);
    }

    #[test]
    fn log_level_follows_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}

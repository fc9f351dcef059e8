use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub map: MapConfig,
    pub autocomplete: AutocompleteConfig,
    pub animation: AnimationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "debug".to_string(),
            map: MapConfig::default(),
            autocomplete: AutocompleteConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub map_id: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 41.8781, // Chicago
            default_center_lng: -87.6298,
            default_zoom: 11.0,
            map_id: "737244cb20fa7a98".to_string(),
        }
    }
}

/// Restricciones del widget de autocompletado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteConfig {
    pub country: String,
    pub types: Vec<String>,
    pub fields: Vec<String>,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            types: vec!["establishment".to_string()],
            fields: vec![
                "place_id".to_string(),
                "geometry".to_string(),
                "name".to_string(),
                "formatted_address".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub src: String,
    pub state_machine: String,
    /// Espera fija antes de comprobar el canvas (0 = ninguna)
    pub bind_delay_ms: u32,
    pub canvas_poll_interval_ms: u32,
    pub canvas_wait_timeout_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            src: "marker_.riv".to_string(),
            state_machine: "Motion".to_string(),
            bind_delay_ms: 0,
            canvas_poll_interval_ms: 50,
            canvas_wait_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            map: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map.default_center_lng),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map.default_zoom),
                map_id: option_env!("GOOGLE_MAPS_MAP_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.map.map_id),
            },
            autocomplete: AutocompleteConfig {
                country: option_env!("AUTOCOMPLETE_COUNTRY")
                    .map(str::to_string)
                    .unwrap_or(defaults.autocomplete.country),
                ..defaults.autocomplete
            },
            animation: AnimationConfig {
                src: option_env!("RIVE_SRC")
                    .map(str::to_string)
                    .unwrap_or(defaults.animation.src),
                state_machine: option_env!("RIVE_STATE_MACHINE")
                    .map(str::to_string)
                    .unwrap_or(defaults.animation.state_machine),
                bind_delay_ms: option_env!("BIND_DELAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.animation.bind_delay_ms),
                canvas_poll_interval_ms: option_env!("CANVAS_POLL_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.animation.canvas_poll_interval_ms),
                canvas_wait_timeout_ms: option_env!("CANVAS_WAIT_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.animation.canvas_wait_timeout_ms),
            },
        }
    }

    /// Nivel de log efectivo: `warn` si el logging está desactivado
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        self.log_level.parse().unwrap_or(log::Level::Debug)
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
    fn test_defaults_match_demo_setup() {
        let config = AppConfig::default();
        assert_eq!(config.map.default_center_lat, 41.8781);
        assert_eq!(config.map.default_center_lng, -87.6298);
        assert_eq!(config.map.default_zoom, 11.0);
        assert_eq!(config.autocomplete.country, "US");
        assert_eq!(config.autocomplete.types, vec!["establishment"]);
        assert_eq!(
            config.autocomplete.fields,
            vec!["place_id", "geometry", "name", "formatted_address"]
        );
        assert_eq!(config.animation.src, "marker_.riv");
        assert_eq!(config.animation.state_machine, "Motion");
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "info".to_string();
        assert_eq!(config.log_level(), log::Level::Info);

        config.log_level = "ruido".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}

use std::env;

use crate::shared::constants::{
    DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE, DEFAULT_MAP_ZOOM,
};
use crate::shared::geo::Coordinate;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub map: MapConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Map behaviour: fallback viewpoint, zoom and demo data
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Viewpoint used whenever the device position cannot be obtained
    pub fallback: Coordinate,
    pub default_zoom: u8,
    /// Seed the store with the demo points at startup
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            map: MapConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MapConfig {
    pub fn from_env() -> Result<Self, String> {
        let latitude = env::var("MAP_FALLBACK_LATITUDE")
            .unwrap_or_else(|_| DEFAULT_FALLBACK_LATITUDE.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_FALLBACK_LATITUDE must be a valid number".to_string())?;

        let longitude = env::var("MAP_FALLBACK_LONGITUDE")
            .unwrap_or_else(|_| DEFAULT_FALLBACK_LONGITUDE.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_FALLBACK_LONGITUDE must be a valid number".to_string())?;

        let fallback = Coordinate::new(latitude, longitude)
            .map_err(|e| format!("Invalid MAP_FALLBACK_LATITUDE/LONGITUDE: {}", e))?;

        let default_zoom = env::var("MAP_DEFAULT_ZOOM")
            .unwrap_or_else(|_| DEFAULT_MAP_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_DEFAULT_ZOOM must be a number between 0 and 255".to_string())?;

        let seed_demo_data = env::var("MAP_SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "MAP_SEED_DEMO_DATA must be true or false".to_string())?;

        Ok(Self {
            fallback,
            default_zoom,
            seed_demo_data,
        })
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback: Coordinate::DEFAULT_FALLBACK,
            default_zoom: DEFAULT_MAP_ZOOM,
            seed_demo_data: true,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Urban Maps API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Civic points of interest, filters and QR administration".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Application configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub api_base: String,
    pub mock_mode: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            api_key: env::var("API_KEY").unwrap_or_default(),
            api_base: env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            mock_mode: env::var("MOCK_MODE")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_level: env::var("RUST_LOG")
                .unwrap_or_else(|_| "shop_assist_svc=info,tower_http=debug".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            mock_mode: true,
            log_level: String::new(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }
}

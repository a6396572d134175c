use crate::consts;
use crate::errors::MockServerError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: consts::DEFAULT_HOST.to_string(),
            port: consts::DEFAULT_PORT,
        }
    }
}

pub fn load_config() -> Result<Config, MockServerError> {
    let host =
        std::env::var("MOCK_VLLM_HOST").unwrap_or_else(|_| consts::DEFAULT_HOST.to_string());
    let port = match std::env::var("MOCK_VLLM_PORT") {
        Ok(value) => value.parse::<u16>()?,
        Err(_) => consts::DEFAULT_PORT,
    };

    Ok(Config { host, port })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_loopback() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }
}

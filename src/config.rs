use serde::Deserialize;

/// Category names that are never offered as selectable products
///
/// Kept out of the environment because several entries contain commas.
pub const EXCLUDED_ITEMS: &[&str] = &[
    "Fruits",
    "Jams, Jellies & Sweet Spreads",
    "Jams, Jellies & Preserves",
    "Processed",
    "Red",
    "White",
    "Brown",
];

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// SQLite database holding the product, top_products and market_basket tables
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum pooled SQLite connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Rules must have lift strictly above this to be recommended
    #[serde(default = "default_lift_threshold")]
    pub lift_threshold: f64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "sqlite://product_apriori_senti.db?mode=ro".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_lift_threshold() -> f64 {
    1.0
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.lift_threshold, 1.0);
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 5);
        assert!(config.database_url.starts_with("sqlite://"));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
            ("LIFT_THRESHOLD".to_string(), "1.5".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ];
        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.lift_threshold, 1.5);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(Config::from_vars(vars).is_err());
    }
}

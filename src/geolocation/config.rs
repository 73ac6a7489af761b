pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub endpoint: url::Url,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: url::Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub const DEFAULT_PROGRAM: &str = "systemctl";
pub const DEFAULT_UNIT: &str = "hysteria-server.service";

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
    /// Service manager binary, invoked as `<program> restart <unit>`.
    pub program: String,
    pub unit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

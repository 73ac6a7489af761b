use crate::common::{ConfigSnafu, CountryCode, FixedLocator, Locator, Result};
use crate::eventlog::EventLog;
use crate::geolocation::IpApiLocator;
use crate::hysteria::HysteriaConfig;
use crate::service::SiteRotator;
use crate::systemd::Systemctl;

pub const ENV_PREFIX: &str = "HYSITE";

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub geolocation: crate::geolocation::Config,
    pub hysteria: crate::hysteria::Config,
    pub systemd: crate::systemd::Config,
    pub eventlog: crate::eventlog::Config,
}

fn config_error(err: config::ConfigError) -> crate::common::Error {
    ConfigSnafu {
        prefix: ENV_PREFIX,
        message: err.to_string(),
    }
    .build()
}

impl Config {
    /// Built-in defaults overridden by `HYSITE_<SECTION>__<KEY>` variables,
    /// e.g. `HYSITE_HYSTERIA__CONFIG_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    pub(crate) fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = config::Config::try_from(&Self::default()).map_err(config_error)?;
        config::Config::builder()
            .add_source(defaults)
            .add_source(source)
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)
    }

    pub fn locator(&self, country: Option<CountryCode>) -> Box<dyn Locator> {
        match country {
            Some(code) => Box::new(FixedLocator(code)),
            None => Box::new(IpApiLocator::from(self.geolocation.clone())),
        }
    }

    /// Wires the pipeline. The log must already be bootstrapped so that
    /// failures before the first event still reach the console.
    pub fn get_service(self, log: EventLog, country: Option<CountryCode>) -> SiteRotator {
        SiteRotator::new(
            self.locator(country),
            HysteriaConfig::new(self.hysteria.config_path),
            Box::new(Systemctl::from(self.systemd)),
            log,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(
            config.geolocation.endpoint.as_str(),
            "http://ip-api.com/json"
        );
        assert_eq!(config.geolocation.timeout_secs, 10);
        assert_eq!(
            config.hysteria.config_path,
            Path::new("/etc/hysteria/config.yaml")
        );
        assert_eq!(config.systemd.program, "systemctl");
        assert_eq!(config.systemd.unit, "hysteria-server.service");
        assert_eq!(
            config.eventlog.path,
            Path::new("/root/hy/auto-change-site.log")
        );
        assert_eq!((config.eventlog.owner_uid, config.eventlog.owner_gid), (0, 0));
    }

    #[test]
    fn test_env_overrides() {
        let config = from_vars(&[
            ("HYSITE_HYSTERIA__CONFIG_PATH", "/tmp/hysteria.yaml"),
            ("HYSITE_GEOLOCATION__TIMEOUT_SECS", "3"),
            ("HYSITE_SYSTEMD__UNIT", "hysteria.service"),
        ])
        .unwrap();
        assert_eq!(config.hysteria.config_path, Path::new("/tmp/hysteria.yaml"));
        assert_eq!(config.geolocation.timeout_secs, 3);
        assert_eq!(config.systemd.unit, "hysteria.service");
        assert_eq!(config.systemd.program, "systemctl");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = from_vars(&[("HYSITE_GEOLOCATION__ENDPOINT", "not a url")]).unwrap_err();
        assert!(err.to_string().contains(ENV_PREFIX), "{err}");
    }
}

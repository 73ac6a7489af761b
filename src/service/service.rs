use super::{Outcome, Uuid};
use crate::common::{Locator, Result, ServiceManager};
use crate::eventlog::EventLog;
use crate::geolocation::locate_or_default;
use crate::hysteria::HysteriaConfig;
use crate::pool::UrlPool;

pub struct SiteRotator {
    locator: Box<dyn Locator>,
    hysteria: HysteriaConfig,
    manager: Box<dyn ServiceManager>,
    log: EventLog,
}

/// Geolocates the host and draws a URL from the matching pool.
pub fn select_site(locator: &dyn Locator) -> Outcome {
    let run_id = Uuid::new_v4();
    let country = locate_or_default(locator);
    let pool = UrlPool::for_country(&country);
    let url = pool.pick(&mut rand::thread_rng()).to_string();

    tracing::info!(
        run_id = run_id.to_string(),
        country = country.as_str(),
        pool = pool.urls().len(),
        url = url.as_str(),
        "Selected masquerade URL",
    );

    Outcome {
        run_id,
        country,
        url,
    }
}

impl SiteRotator {
    pub fn new(
        locator: Box<dyn Locator>,
        hysteria: HysteriaConfig,
        manager: Box<dyn ServiceManager>,
        log: EventLog,
    ) -> Self {
        Self {
            locator,
            hysteria,
            manager,
            log,
        }
    }

    /// Points the masquerade at a fresh site and restarts the server.
    ///
    /// Any failure stops the run. A failed restart leaves the new URL in
    /// place.
    pub fn rotate(&self) -> Result<Outcome> {
        let outcome = select_site(self.locator.as_ref());

        let run_id = &outcome.run_id;
        self.log
            .info(run_id, &format!("Run started, region: {}", outcome.country))?;

        if let Err(err) = self.hysteria.set_masquerade_url(&outcome.url) {
            self.log
                .error(run_id, &format!("Failed to update config: {err}"));
            return Err(err);
        }

        if let Err(err) = self.manager.restart() {
            self.log.error(
                run_id,
                &format!(
                    "Failed to restart service: {err}, failed target URL: {}",
                    outcome.url
                ),
            );
            return Err(err);
        }

        self.log.info(
            run_id,
            &format!("Masquerade URL changed, now using: {}", outcome.url),
        )?;
        Ok(outcome)
    }
}

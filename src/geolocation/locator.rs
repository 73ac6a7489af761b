use std::time::Duration;

use snafu::ResultExt;

use super::models::GeoResponse;
use crate::common::{CountryCode, Locator, RequestSnafu, ResponseSnafu, Result};

const LOCATOR_NAME: &str = "ip-api";

pub struct IpApiLocator {
    agent: ureq::Agent,
    endpoint: url::Url,
}

/// Extracts the country code from a lookup response body.
///
/// A body without a usable `countryCode`, as returned for failed lookups,
/// maps to the default code.
pub(crate) fn parse_response(body: &str) -> Result<CountryCode> {
    let response: GeoResponse =
        serde_json::from_str(body)
            .boxed_local()
            .context(ResponseSnafu {
                message: "Failed to deserialize geolocation response",
            })?;

    match response.country_code {
        Some(code) if !code.trim().is_empty() => CountryCode::parse(&code),
        _ => {
            tracing::debug!(
                locator = LOCATOR_NAME,
                status = ?response.status,
                message = ?response.message,
                "Response has no country code",
            );
            Ok(CountryCode::default())
        }
    }
}

impl Locator for IpApiLocator {
    fn country_code(&self) -> Result<CountryCode> {
        tracing::debug!(url = self.endpoint.as_str(), method = "GET", "Sending request");
        let body = self
            .agent
            .get(self.endpoint.as_str())
            .call()
            .context(RequestSnafu {
                url: self.endpoint.as_str(),
                method: "GET",
            })?
            .into_string()
            .boxed_local()
            .context(ResponseSnafu {
                message: "Failed to read geolocation response",
            })?;

        let code = parse_response(&body)?;
        tracing::info!(locator = LOCATOR_NAME, country = code.as_str(), "Lookup completed");
        Ok(code)
    }
}

impl From<super::Config> for IpApiLocator {
    fn from(value: super::Config) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(value.timeout_secs))
                .build(),
            endpoint: value.endpoint,
        }
    }
}

/// Runs the lookup, falling back to the default country on any failure.
///
/// Failures only reach the console log; they never stop a run.
pub fn locate_or_default(locator: &dyn Locator) -> CountryCode {
    match locator.country_code() {
        Ok(code) => code,
        Err(err) => {
            let fallback = CountryCode::default();
            tracing::warn!(
                error = err.to_string(),
                fallback = fallback.as_str(),
                "Geolocation failed, using fallback country",
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    /// Serves a single HTTP response on a random local port.
    fn serve_once(body: &'static str) -> url::Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            )
            .unwrap();
        });
        url::Url::parse(&format!("http://{addr}/json")).unwrap()
    }

    fn locator(endpoint: url::Url) -> IpApiLocator {
        IpApiLocator::from(super::super::Config {
            endpoint,
            timeout_secs: 2,
        })
    }

    #[test]
    fn test_parse_response() {
        let code = parse_response(r#"{"status":"success","countryCode":"SG"}"#).unwrap();
        assert_eq!(code.as_str(), "SG");
    }

    #[test]
    fn test_parse_response_without_country_code_defaults() {
        let code = parse_response(r#"{"status":"fail","message":"reserved range"}"#).unwrap();
        assert_eq!(code, CountryCode::default());
    }

    #[test]
    fn test_parse_response_with_empty_country_code_defaults() {
        let code = parse_response(r#"{"status":"success","countryCode":""}"#).unwrap();
        assert_eq!(code, CountryCode::default());
    }

    #[test]
    fn test_parse_response_rejects_garbage() {
        assert!(parse_response("<html>").is_err());
    }

    #[test]
    fn test_lookup_over_http() {
        let endpoint = serve_once(r#"{"status":"success","countryCode":"SG"}"#);
        let code = locator(endpoint).country_code().unwrap();
        assert_eq!(code.as_str(), "SG");
    }

    #[test]
    fn test_unreachable_endpoint_falls_back_to_us() {
        // Bind then drop to get a local port with nothing listening.
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let endpoint = url::Url::parse(&format!("http://{addr}/json")).unwrap();
        let locator = locator(endpoint);

        assert!(locator.country_code().is_err());
        assert_eq!(locate_or_default(&locator).as_str(), "US");
    }

    #[test]
    fn test_silent_endpoint_times_out_to_us() {
        // Connections complete in the backlog but nothing ever answers.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint =
            url::Url::parse(&format!("http://{}/json", listener.local_addr().unwrap())).unwrap();
        let locator = IpApiLocator::from(super::super::Config {
            endpoint,
            timeout_secs: 1,
        });

        let started = std::time::Instant::now();
        let code = locate_or_default(&locator);

        assert_eq!(code.as_str(), "US");
        assert!(started.elapsed() < Duration::from_secs(5), "{:?}", started.elapsed());
        drop(listener);
    }
}

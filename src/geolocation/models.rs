/// Subset of the ip-api.com response body.
#[derive(serde::Deserialize)]
pub(super) struct GeoResponse {
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

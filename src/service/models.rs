pub use uuid::Uuid;

use crate::common::CountryCode;

/// What a rotation run settled on.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub run_id: Uuid,
    pub country: CountryCode,
    pub url: String,
}

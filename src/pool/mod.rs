mod selector;
mod urls;

pub use selector::*;
pub use urls::FALLBACK_URL;

mod error;
mod models;
mod privilege;

pub use error::*;
pub use models::*;
pub use privilege::*;

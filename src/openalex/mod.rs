//! OpenAlex Works API

pub mod models;
pub use models::*;
pub mod works;
pub use works::*;

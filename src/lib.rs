#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod error;
pub use error::*;
pub mod config;
pub use config::*;
pub mod client;
pub use client::*;
pub mod openalex;
pub use openalex::*;
pub mod coauthors;
pub use coauthors::*;
pub mod collector;
pub use collector::*;
pub mod batch;
pub use batch::*;
pub(crate) mod utils;

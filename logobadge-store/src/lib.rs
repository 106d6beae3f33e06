// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Configuration storage for `LogoBadge`.
//!
//! Settings live in a JSON file under the platform config directory. A
//! missing file is not an error; every field has a default.

mod config;
mod error;

pub use config::{AssetConfig, Config, GeneralConfig, OutputConfig, default_config_dir};
pub use error::StoreError;

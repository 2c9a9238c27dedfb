pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ContentFile;
pub use core::validator::{
    run_validation, CheckResult, Report, SelfTest, ValidationMode, ValidationRules, Validator,
};
pub use domain::model::ContentStore;
pub use domain::ports::ContentProvider;
pub use utils::error::{PortfolioError, Result};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, no validation yet)
//!     → loader.rs (NET_TEST_URL override)
//!     → loader.rs (command-line overrides)
//!     → validation.rs (semantic checks, once, on the merged result)
//!     → ProbeConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Every field has a default; running with no file and no env is valid
//! - An empty environment value counts as unset
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    apply_env_overrides, apply_overrides, load_config, read_config, resolve, ConfigError, Overrides,
    TARGET_URL_ENV,
};
pub use schema::{ProbeConfig, DEFAULT_TARGET_URL};

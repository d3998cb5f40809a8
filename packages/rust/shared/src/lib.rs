//! Shared types, error model, and configuration for mdtut.
//!
//! This crate is the foundation depended on by all other mdtut crates.
//! It provides:
//! - [`MdtutError`]: the unified error type
//! - Model types ([`Label`], [`Block`])
//! - Configuration ([`AppConfig`], [`ExtractConfig`], config loading)

pub mod config;
pub mod error;
pub mod text;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ExtractConfig, config_dir, config_file_path, init_config,
    init_config_in, load_config, load_config_from,
};
pub use error::{MdtutError, Result};
pub use text::sample_string;
pub use types::{ANY_LABEL, Block, Label};

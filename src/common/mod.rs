//! Common utilities and types shared across roleset

pub mod config;
pub mod error;
pub mod merge;
pub mod utils;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use merge::{merge_list, merge_list_by_key, merge_map};
pub use utils::{env_config_map_name, parse_parent_name_and_ordinal};

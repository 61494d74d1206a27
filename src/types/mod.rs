mod scaffold_config;

pub use scaffold_config::{ScaffoldConfig, DEFAULT_PORT};

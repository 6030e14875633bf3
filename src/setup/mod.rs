pub mod init;
pub mod init_types;

pub use init::{init_tracing_and_env, parse_date, resolve_seed};
pub use init_types::GeneratorSettings;

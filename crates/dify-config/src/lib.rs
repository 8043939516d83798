pub mod config;
pub mod constants;
mod error;

pub use config::{
    DifyProps, EnvValue, EnvironmentVariable, ParameterRef, SecretRef, Target, load_props,
    parse_props,
};
pub use error::{ConfigError, Result};

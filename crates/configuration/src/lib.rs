use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, LimitsConfig, ServerConfig, SnapshotConfig};

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional: every setting has a default, and an absent file
/// yields the default configuration. Validation failures (an unparsable
/// file, a non-positive request limit) are reported as `ConfigError`.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    if config.limits.max_quantity <= rust_decimal::Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "limits.max_quantity must be greater than 0".to_string(),
        ));
    }

    Ok(config)
}

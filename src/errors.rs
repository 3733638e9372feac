use thiserror::Error;

// Define an enum to represent configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    // Variant for a variable that is set but is not a base-10 unsigned integer
    #[error("invalid value {value:?} for {var}: {source}")]
    InvalidTunable {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    // Variant for a variable whose bytes are not valid UTF-8
    #[error("value of {var} is not valid UTF-8")]
    NotUnicode { var: &'static str },
}

// Type alias for results that use `ConfigError` as the error type
pub type Result<T> = std::result::Result<T, ConfigError>;

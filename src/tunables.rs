use std::env;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::errors::{ConfigError, Result};

/// Initial output buffer capacity reserved by the encoder, in bytes.
pub const DEFAULT_ENCODE_BUFFER_SIZE: usize = 1024 * 1024 * 2;

/// Ceiling on nested-structure depth while encoding.
pub const DEFAULT_MAX_ENCODE_STACK_SIZE: usize = 65536;

/// Ceiling on nested-structure depth while decoding.
pub const DEFAULT_MAX_DECODE_STACK_SIZE: usize = 65536;

/// Ceiling on nesting depth accepted from input JSON. Guards the parser
/// against stack exhaustion on maliciously deep documents.
pub const DEFAULT_MAX_DECODE_JSON_DEPTH: usize = 65536;

pub const ENV_ENCODE_BUFFER_SIZE: &str = "SONIC_OPTION_DefaultEncodeBufferSize";
pub const ENV_MAX_ENCODE_STACK_SIZE: &str = "SONIC_OPTION_MaxEncodeStackSize";
pub const ENV_MAX_DECODE_STACK_SIZE: &str = "SONIC_OPTION_MaxDecodeStackSize";
pub const ENV_MAX_DECODE_JSON_DEPTH: &str = "SONIC_OPTION_MaxDecodeJSONDepth";

/// Process-wide numeric limits for the codec engine.
///
/// Each limit starts from its compiled-in default and may be overridden at
/// most once, from its environment variable, when [`init`] runs. After that
/// the snapshot never changes, so readers need no synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tunables {
    pub encode_buffer_size: usize,
    pub max_encode_stack_size: usize,
    pub max_decode_stack_size: usize,
    pub max_decode_json_depth: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            encode_buffer_size: DEFAULT_ENCODE_BUFFER_SIZE,
            max_encode_stack_size: DEFAULT_MAX_ENCODE_STACK_SIZE,
            max_decode_stack_size: DEFAULT_MAX_DECODE_STACK_SIZE,
            max_decode_json_depth: DEFAULT_MAX_DECODE_JSON_DEPTH,
        }
    }
}

impl Tunables {
    /// Builds a snapshot from the environment without touching global state.
    ///
    /// A variable that is unset or empty leaves its default in place. A set
    /// variable must parse as a base-10 unsigned integer; anything else,
    /// including negative values like `"-1"`, is rejected so startup can
    /// fail instead of running with an ambiguous limit.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            encode_buffer_size: read_override(
                ENV_ENCODE_BUFFER_SIZE,
                DEFAULT_ENCODE_BUFFER_SIZE,
            )?,
            max_encode_stack_size: read_override(
                ENV_MAX_ENCODE_STACK_SIZE,
                DEFAULT_MAX_ENCODE_STACK_SIZE,
            )?,
            max_decode_stack_size: read_override(
                ENV_MAX_DECODE_STACK_SIZE,
                DEFAULT_MAX_DECODE_STACK_SIZE,
            )?,
            max_decode_json_depth: read_override(
                ENV_MAX_DECODE_JSON_DEPTH,
                DEFAULT_MAX_DECODE_JSON_DEPTH,
            )?,
        })
    }
}

fn read_override(var: &'static str, default: usize) -> Result<usize> {
    let raw = match env::var(var) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(default),
        Err(env::VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode { var }),
    };
    if raw.is_empty() {
        return Ok(default);
    }
    let parsed = raw
        .parse::<usize>()
        .map_err(|source| ConfigError::InvalidTunable { var, value: raw, source })?;
    debug!(var, value = parsed, "tunable overridden from environment");
    Ok(parsed)
}

static TUNABLES: OnceLock<Tunables> = OnceLock::new();

/// Reads the environment overrides and installs the process-wide snapshot.
///
/// Call this before any code reads the limits; the embedding process must
/// treat an error as fatal. The first successful call wins — later calls
/// return the installed snapshot without consulting the environment again.
pub fn init() -> Result<&'static Tunables> {
    if let Some(installed) = TUNABLES.get() {
        return Ok(installed);
    }
    let parsed = Tunables::from_env()?;
    Ok(TUNABLES.get_or_init(|| parsed))
}

/// The installed snapshot.
///
/// If [`init`] never ran, this installs the compiled-in defaults; overrides
/// take effect only through `init` at startup.
pub fn current() -> &'static Tunables {
    TUNABLES.get_or_init(Tunables::default)
}

/// Initial encoder output buffer capacity, in bytes.
pub fn encode_buffer_size() -> usize {
    current().encode_buffer_size
}

/// Maximum nested-structure depth the encoder accepts.
pub fn max_encode_stack_size() -> usize {
    current().max_encode_stack_size
}

/// Maximum nested-structure depth the decoder accepts.
pub fn max_decode_stack_size() -> usize {
    current().max_decode_stack_size
}

/// Maximum nesting depth accepted from input JSON.
pub fn max_decode_json_depth() -> usize {
    current().max_decode_json_depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_values() {
        let t = Tunables::default();
        assert_eq!(t.encode_buffer_size, 2 * 1024 * 1024);
        assert_eq!(t.max_encode_stack_size, 65536);
        assert_eq!(t.max_decode_stack_size, 65536);
        assert_eq!(t.max_decode_json_depth, 65536);
    }

    #[test]
    fn snapshot_serializes_by_field_name() {
        let json = serde_json::to_value(Tunables::default()).unwrap();
        assert_eq!(json["encode_buffer_size"], 2_097_152);
        assert_eq!(json["max_decode_json_depth"], 65536);
    }

    #[test]
    fn invalid_value_error_names_variable_and_value() {
        let source = "abc".parse::<usize>().unwrap_err();
        let err = ConfigError::InvalidTunable {
            var: ENV_MAX_DECODE_JSON_DEPTH,
            value: "abc".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains(ENV_MAX_DECODE_JSON_DEPTH), "missing variable in: {msg}");
        assert!(msg.contains("abc"), "missing value in: {msg}");
    }
}

pub mod errors;
pub mod options;   // per-compilation knobs consumed by the codec compiler
pub mod tunables;  // process-wide limits, overridable once from the environment

pub use errors::{ConfigError, Result};
pub use options::CompileOptions;

/// Re-export the most-used helpers for callers that read limits directly.
pub use tunables::{
    current, encode_buffer_size, init, max_decode_json_depth, max_decode_stack_size,
    max_encode_stack_size, Tunables,
};

//! compiler.rs - Manages the compilation and caching of user-supplied patterns.
//!
//! Text validation accepts a caller-provided `allowedPattern`. Compiling a regex
//! on every call is wasteful, so compiled patterns are kept in a thread-safe,
//! process-wide cache keyed by the pattern text.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::MAX_PATTERN_LENGTH;
use crate::errors::InputGuardError;

/// Compiled size limit for a single user pattern.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

lazy_static! {
    /// A thread-safe, global cache for compiled patterns, keyed by pattern text.
    static ref COMPILED_PATTERN_CACHE: RwLock<HashMap<String, Arc<Regex>>> = RwLock::new(HashMap::new());
}

/// Compiles a single pattern without consulting the cache.
pub fn compile_pattern(pattern: &str) -> Result<Regex, InputGuardError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(InputGuardError::PatternLengthExceeded(pattern.len(), MAX_PATTERN_LENGTH));
    }

    RegexBuilder::new(pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|e| InputGuardError::PatternCompilationError(pattern.to_string(), e))
}

/// Gets a compiled pattern from the cache or compiles it if not found.
///
/// Returns an `Arc` so callers can share the compiled regex cheaply.
pub fn get_or_compile_pattern(pattern: &str) -> Result<Arc<Regex>, InputGuardError> {
    {
        let cache = COMPILED_PATTERN_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = cache.get(pattern) {
            return Ok(Arc::clone(regex));
        }
    }

    debug!("Pattern not found in cache. Compiling now ({} bytes).", pattern.len());
    let compiled = Arc::new(compile_pattern(pattern)?);

    COMPILED_PATTERN_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(pattern.to_string(), Arc::clone(&compiled));

    Ok(compiled)
}

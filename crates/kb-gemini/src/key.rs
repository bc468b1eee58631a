//! Shape checks for generative-language API keys, run before any network
//! call.

/// Published keys all carry this prefix.
pub const KEY_PREFIX: &str = "AIza";

/// Real keys are 39 characters; anything shorter than this is garbage.
pub const MIN_KEY_LEN: usize = 30;

/// Returns true when `key` looks like a plausible API key.
pub fn key_format_is_valid(key: &str) -> bool {
    key.starts_with(KEY_PREFIX) && key.len() >= MIN_KEY_LEN
}

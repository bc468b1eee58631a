//! Client for the generative-language completion API.
//!
//! `CompletionClient` is an enum over concrete backends; handlers never see
//! wire types or trait objects. The `Mock` variant records prompts so tests
//! can assert on upstream traffic without a network.

pub mod client;
pub mod completion;
pub mod error;
pub mod key;
pub mod mock;


pub use client::GeminiClient;
pub use completion::CompletionClient;
pub use error::{GeminiError, Result};
pub use key::{KEY_PREFIX, MIN_KEY_LEN, key_format_is_valid};
pub use mock::MockCompletion;

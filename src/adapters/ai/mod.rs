//! AI Adapters.
//!
//! Implementations of the AiProvider and CourtroomAi ports.
//!
//! ## Available Adapters
//!
//! - `AnthropicProvider` - Anthropic Claude models over the messages API
//! - `CourtroomGenerator` - CourtroomAi implementation over any AiProvider
//! - `MockAiProvider` - Configurable provider mock for testing
//! - `MockCourtroomAi` - Configurable content generator mock for testing

mod anthropic_provider;
mod courtroom_generator;
mod mock_courtroom;
mod mock_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use courtroom_generator::CourtroomGenerator;
pub use mock_courtroom::MockCourtroomAi;
pub use mock_provider::{MockAiProvider, MockError, MockResponse};

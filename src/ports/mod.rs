//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `AiProvider` - raw LLM completion port (request/response, no streaming)
//! - `CourtroomAi` - the content generator contract the battle engine drives
//! - `ModeAccessChecker` - subscription-gated mode access decision point

mod access_checker;
mod ai_provider;
mod courtroom_ai;

pub use access_checker::{AccessResult, ModeAccessChecker};
pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use courtroom_ai::{CourtroomAi, ExaminationContext};

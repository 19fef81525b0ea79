// Mock interview pipeline: prompt selection, transcript shaping, generation,
// best-effort review persistence, and the client-side session state machine.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod client;
pub mod handlers;
pub mod prompts;
pub mod selector;
pub mod service;
pub mod session;
pub mod store;
pub mod transcript;

// The analysis core: request/response contract with the Gemini service.
// Implements: prompt assembly, the fixed reply schema, the single-call client,
// and the canonical result shape. All model calls go through `client` — no
// other module talks to the API directly.

pub mod client;
pub mod handlers;
pub mod prompts;
pub mod request;
pub mod result;
pub mod schema;

pub use client::GeminiClient;
pub use request::AnalysisRequest;
pub use result::AnalysisResult;

//! On-demand summary of the loaded dataset via the Gemini API
//!
//! A compact JSON digest of the dataset is sent once per request from a
//! background worker; the answer is shown in a popup.

mod gemini;
mod prompt;
pub mod summary_render;
mod summary_state;
mod worker;

pub use gemini::{GeminiClient, SummaryError};
pub use prompt::{DropSample, SummaryPayload, TopValue, build_payload, build_prompt};
pub use summary_state::{SummaryRequest, SummaryResponse, SummaryState, SummaryStatus};
pub use worker::spawn_worker;

pub const NO_INSIGHTS: &str = "No insights generated.";
pub const FAILURE_MESSAGE: &str =
    "Failed to perform AI analysis. Check your connection or API key status.";

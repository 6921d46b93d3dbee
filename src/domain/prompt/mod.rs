//! Prompt assembly for the completion API.
//!
//! A [`PromptContent`] is an insertion-ordered mapping of human-readable
//! labels to values. Rendering flattens it into one `- <label>: <value>`
//! line per entry; entry order is significant because it shapes the model's
//! response, so it is preserved verbatim. The flattened block is embedded
//! under a fixed instructional preamble to form the full request text.

mod builders;
mod content;

pub use builders::{advice_prompt, campaign_prompt, render_prompt, value_prop_prompt};
pub use content::{PromptContent, PromptValue};

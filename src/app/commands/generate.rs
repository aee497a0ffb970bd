//! Generate command - assemble the prompt for a topic selection.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, TopicSelection, generate_prompt};

/// Execute the generate command.
///
/// Unknown topic identifiers are kept and produce the generic fallback text.
pub fn execute(ctx: &AppContext, topic_ids: &[String], task: &str) -> Result<String, AppError> {
    let selection =
        TopicSelection::many(topic_ids.iter().cloned()).ok_or(AppError::NoTopicsSelected)?;
    debug!(topics = ?selection.ids(), "generating prompt");
    Ok(generate_prompt(ctx.registry(), &selection, task))
}

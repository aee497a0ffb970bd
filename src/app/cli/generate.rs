use dialoguer::{Input, MultiSelect};

use crate::app::AppContext;
use crate::app::commands::generate;
use crate::domain::AppError;

pub(super) fn run_generate(
    ctx: &AppContext,
    topics: Vec<String>,
    task: Option<String>,
) -> Result<(), AppError> {
    let topics = if topics.is_empty() { prompt_topics(ctx)? } else { topics };
    let task = match task {
        Some(task) => task,
        None => prompt_task()?,
    };

    let prompt = generate::execute(ctx, &topics, &task)?;
    println!("{}", prompt);
    Ok(())
}

fn prompt_topics(ctx: &AppContext) -> Result<Vec<String>, AppError> {
    let state = ctx.user_state();
    if state.topics.is_empty() {
        return Err(AppError::NoTopicsSelected);
    }

    let items: Vec<String> =
        state.topics.iter().map(|topic| format!("{} ({})", topic.name, topic.id())).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select topics (space to toggle, enter to confirm)")
        .items(&items)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select topics: {}", err)))?
        .unwrap_or_default();

    Ok(picked.into_iter().map(|index| state.topics[index].id().to_string()).collect())
}

fn prompt_task() -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("Task")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| AppError::config_error(format!("Failed to read task: {}", err)))
}

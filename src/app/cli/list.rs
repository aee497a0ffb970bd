use crate::app::AppContext;
use crate::app::commands::list;
use crate::domain::AppError;

pub(super) fn run_list(ctx: &AppContext, query: Option<&str>, all: bool) -> Result<(), AppError> {
    let listing = list::execute(ctx, query, all);

    if listing.topics.is_empty() {
        match query {
            Some(query) => println!("No topics match '{}'", query),
            None => println!("No topics available"),
        }
        return Ok(());
    }

    println!("Available topics:");
    for topic in &listing.topics {
        println!("  {} - {}: {}", topic.id, topic.name, topic.description);
    }
    if listing.hidden > 0 {
        println!("\n... {} more (use --all to show everything)", listing.hidden);
    }
    Ok(())
}

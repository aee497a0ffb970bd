use crate::app::AppContext;
use crate::app::commands::show;
use crate::domain::AppError;

pub(super) fn run_show(ctx: &AppContext, topic: &str) -> Result<(), AppError> {
    let detail = show::execute(ctx, topic)?;

    println!("{} ({})", detail.name, detail.id);
    println!("{}", detail.description);
    if !detail.keywords.is_empty() {
        println!("\nKeywords: {}", detail.keywords.join(", "));
    }
    println!("\nPrompt files:");
    for (file, found) in &detail.prompt_files {
        let marker = if *found { "ok" } else { "missing" };
        println!("  - {} ({})", file, marker);
    }
    if !detail.guidelines.is_empty() {
        println!("\nGuidelines:\n{}", detail.guidelines);
    }
    Ok(())
}

use serde_json::Value;

use crate::cli::ListArgs;
use crate::commands::draft_line;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub async fn run(ctx: &AppContext, args: ListArgs) -> AppResult<()> {
    let any_email = args
        .any_email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty());
    let drafts = ctx.options.drafts().list(any_email, None).await?;

    if ctx.output.mode() == OutputMode::Text {
        let lines = list_lines(&drafts);
        if lines.is_empty() {
            println!("0 drafts");
            return Ok(());
        }

        for (index, line) in lines.iter().enumerate() {
            println!("{}. {line}", index + 1);
        }

        return Ok(());
    }

    let text = format!("{} drafts", list_lines(&drafts).len());
    ctx.output.emit(&text, &drafts)
}

fn list_lines(drafts: &Value) -> Vec<String> {
    match drafts {
        Value::Array(drafts) => drafts.iter().map(draft_line).collect(),
        Value::Null => Vec::new(),
        other => vec![draft_line(other)],
    }
}

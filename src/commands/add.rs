use crate::api::models::NewDraft;
use crate::cli::AddArgs;
use crate::commands::{compose_fields, draft_line};
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext, args: AddArgs) -> AppResult<()> {
    let params = NewDraft {
        fields: compose_fields(args.compose)?,
        access_token: None,
    };
    let draft = ctx.options.drafts().add(params).await?;

    let text = format!("draft created: {}", draft_line(&draft));
    ctx.output.emit(&text, &draft)
}

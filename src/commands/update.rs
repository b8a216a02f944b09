use crate::api::models::UpdateDraft;
use crate::cli::UpdateArgs;
use crate::commands::{compose_fields, draft_line};
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext, args: UpdateArgs) -> AppResult<()> {
    let mut params = UpdateDraft::new(args.id, args.version);
    params.fields = compose_fields(args.compose)?;
    let draft = ctx.options.drafts().update(params).await?;

    let text = format!("draft updated: {}", draft_line(&draft));
    ctx.output.emit(&text, &draft)
}

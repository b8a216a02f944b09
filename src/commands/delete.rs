use crate::api::models::DeleteDraft;
use crate::cli::DeleteArgs;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext, args: DeleteArgs) -> AppResult<()> {
    let params = DeleteDraft::new(args.id.clone(), args.version);
    let result = ctx.options.drafts().delete(params).await?;

    let text = format!("draft {} deleted", args.id);
    ctx.output.emit(&text, &result)
}

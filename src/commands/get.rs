use crate::cli::GetArgs;
use crate::commands::draft_line;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext, args: GetArgs) -> AppResult<()> {
    let draft = ctx.options.drafts().get(&args.id, None).await?;
    ctx.output.emit(&draft_line(&draft), &draft)
}

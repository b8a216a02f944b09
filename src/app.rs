use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose: _,
        access_token,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(profile, json, access_token)?;
    tracing::debug!(profile = %ctx.profile, "context ready");

    match command {
        Command::List(args) => commands::list::run(&ctx, args).await,
        Command::Get(args) => commands::get::run(&ctx, args).await,
        Command::Add(args) => commands::add::run(&ctx, args).await,
        Command::Update(args) => commands::update::run(&ctx, args).await,
        Command::Delete(args) => commands::delete::run(&ctx, args).await,
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}

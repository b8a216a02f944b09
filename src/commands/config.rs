use serde::Serialize;

use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct SettingsView {
    profile: String,
    settings_file: String,
    access_token: Option<String>,
    api_base_url: String,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set(args) => set(ctx, args),
    }
}

fn show(ctx: &AppContext) -> AppResult<()> {
    let view = SettingsView {
        profile: ctx.profile.clone(),
        settings_file: ctx.paths.settings_file(&ctx.profile).display().to_string(),
        access_token: ctx.settings.masked_token(),
        api_base_url: ctx.settings.api_base_url(),
    };

    let text = format!(
        "profile: {}\nsettings: {}\naccess token: {}\napi base url: {}",
        view.profile,
        view.settings_file,
        view.access_token.as_deref().unwrap_or("(not set)"),
        view.api_base_url
    );
    ctx.output.emit(&text, &view)
}

fn set(ctx: &AppContext, args: ConfigSetArgs) -> AppResult<()> {
    if args.token.is_none() && args.api_base_url.is_none() {
        return Err(AppError::InvalidInput(
            "nothing to set. pass --token and/or --api-base-url".to_string(),
        ));
    }

    let mut settings = ctx.settings.clone();
    if let Some(token) = args.token {
        settings.access_token = Some(token.trim().to_string());
    }
    if let Some(base_url) = args.api_base_url {
        url::Url::parse(&base_url)?;
        settings.api_base_url = Some(base_url);
    }

    config::save_settings(&ctx.paths, &ctx.profile, &settings)?;
    tracing::info!(profile = %ctx.profile, "profile settings saved");

    let text = format!("settings saved for profile `{}`", ctx.profile);
    ctx.output.emit(&text, &settings.masked_token())
}

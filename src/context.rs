use crate::api::{HttpExecutor, Options};
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub options: Options,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        profile: String,
        json: bool,
        access_token: Option<String>,
    ) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let options = build_options(&settings, access_token);
        let output = Output::new(json);

        Ok(Self {
            profile,
            paths,
            settings,
            options,
            output,
        })
    }
}

/// The `--access-token` flag wins over the token stored in the profile.
pub fn build_options(settings: &Settings, access_token: Option<String>) -> Options {
    let access_token = access_token
        .filter(|token| !token.trim().is_empty())
        .or_else(|| settings.access_token().map(ToOwned::to_owned));
    let executor = HttpExecutor::with_base_url(settings.api_base_url());

    Options::with_executor(access_token, executor)
}

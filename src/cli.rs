use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::api::models::Recipient;

#[derive(Debug, Parser)]
#[command(
    name = "nylas-drafts",
    version,
    about = "Manage Nylas email drafts from the command line"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        long,
        global = true,
        help = "Access token to use instead of the profile's"
    )]
    pub access_token: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List(ListArgs),
    Get(GetArgs),
    Add(AddArgs),
    Update(UpdateArgs),
    Delete(DeleteArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, help = "Only drafts involving this address")]
    pub any_email: Option<String>,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(help = "Draft id")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ComposeArgs {
    #[arg(long, value_delimiter = ',', num_args = 1.., help = "Recipient addresses")]
    pub to: Vec<Recipient>,
    #[arg(long, value_delimiter = ',', num_args = 1.., help = "CC addresses")]
    pub cc: Vec<Recipient>,
    #[arg(long, value_delimiter = ',', num_args = 1.., help = "BCC addresses")]
    pub bcc: Vec<Recipient>,
    #[arg(long, value_delimiter = ',', num_args = 1.., help = "Sender addresses")]
    pub from: Vec<Recipient>,
    #[arg(long, value_delimiter = ',', num_args = 1.., help = "Reply-To addresses")]
    pub reply_to: Vec<Recipient>,
    #[arg(long = "file-id", action = ArgAction::Append, help = "Attach an uploaded file (repeatable)")]
    pub file_ids: Vec<String>,
    #[arg(long, visible_alias = "subj", help = "Draft subject")]
    pub subject: Option<String>,
    #[arg(long, conflicts_with = "body_file", help = "Inline body text")]
    pub body: Option<String>,
    #[arg(long, help = "Read body from file")]
    pub body_file: Option<PathBuf>,
    #[arg(long, help = "Read draft parameters from a JSON file")]
    pub params: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub compose: ComposeArgs,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(help = "Draft id")]
    pub id: String,
    #[arg(long, help = "Current draft version")]
    pub version: String,
    #[command(flatten)]
    pub compose: ComposeArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Draft id")]
    pub id: String,
    #[arg(long, help = "Current draft version")]
    pub version: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long = "token", help = "Default access token for this profile")]
    pub token: Option<String>,
    #[arg(long, help = "Override the Nylas API base url")]
    pub api_base_url: Option<String>,
}

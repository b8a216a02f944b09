use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = nylas_drafts::cli::Cli::parse();
    nylas_drafts::logging::init(cli.verbose);

    if let Err(err) = nylas_drafts::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

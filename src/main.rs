use anyhow::Result;
use clap::Parser;
use relfeed::commands::{self, PageOptions};
use std::path::PathBuf;

/// relfeed - release feed for the Reframer website
///
/// Fetch published releases and write them into the site's pages.
///
/// Pages mark the regions to update with comment slots:
///   <!-- relfeed:version --> ... <!-- /relfeed:version -->
///   <!-- relfeed:download --> ... <!-- /relfeed:download -->
///   <!-- relfeed:changelog --> ... <!-- /relfeed:changelog -->
#[derive(Parser, Debug)]
#[command(author, version = env!("RELFEED_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Show the error state instead of fallback data when the API fails
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Update the version label and download button of a page
    Widget(PageArgs),

    /// Update the changelog listing of a page
    Changelog(PageArgs),

    /// Update the home page and, optionally, the changelog page from one fetch
    Render(RenderArgs),

    /// Show the latest release
    Latest,

    /// Print the parsed release notes of a release
    Notes(NotesArgs),
}

#[derive(clap::Args, Debug)]
pub struct PageArgs {
    /// HTML page containing relfeed slots
    #[arg(value_name = "PAGE")]
    pub page: PathBuf,

    /// Write the result here instead of updating PAGE in place
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Home page with version and download slots
    #[arg(long, value_name = "PAGE")]
    pub home: PathBuf,

    /// Changelog page with a changelog slot
    #[arg(long, value_name = "PAGE")]
    pub changelog: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct NotesArgs {
    /// Release tag (defaults to the latest release)
    #[arg(value_name = "TAG")]
    pub tag: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = relfeed::runtime::RealRuntime;
    let options = PageOptions {
        api_url: cli.api_url.clone(),
        strict: cli.strict,
    };

    match cli.command {
        Commands::Widget(args) => {
            commands::widget(runtime, &args.page, args.output, options).await?
        }
        Commands::Changelog(args) => {
            commands::changelog(runtime, &args.page, args.output, options).await?
        }
        Commands::Render(args) => {
            commands::render(runtime, &args.home, args.changelog.as_deref(), options).await?
        }
        Commands::Latest => commands::latest(cli.api_url).await?,
        Commands::Notes(args) => commands::notes(args.tag.as_deref(), cli.api_url).await?,
    }
    Ok(())
}

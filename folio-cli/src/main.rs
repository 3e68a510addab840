//! folio CLI - build and preview the portfolio site
//!
//! - `build`: write every page (and static assets) to an output directory
//! - `serve`: local preview server
//! - `render`, `list`, `check`, `config`: inspection helpers

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;

use commands::GlobalOpts;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Static portfolio site: publications and projects rendered to HTML"
)]
struct Cli {
    /// Config file (default: $FOLIO_CONFIG, ./folio.toml, ~/.folio/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Content TOML replacing the built-in catalogue
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every page to an output directory
    Build(commands::build::BuildArgs),
    /// Run the local preview server
    Serve(commands::serve::ServeArgs),
    /// Print one rendered page to stdout
    Render(commands::render::RenderArgs),
    /// List the publications and projects in the catalogue
    List(commands::list::ListArgs),
    /// Validate configuration and content
    Check,
    /// Print the effective configuration as TOML
    Config,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let global = GlobalOpts {
        config: cli.config,
        content: cli.content,
    };

    match cli.command {
        Commands::Build(args) => commands::run_build(&global, args)?,
        Commands::Serve(args) => commands::run_serve(&global, args).await?,
        Commands::Render(args) => commands::run_render(&global, args)?,
        Commands::List(args) => commands::run_list(&global, args)?,
        Commands::Check => commands::run_check(&global)?,
        Commands::Config => commands::run_config(&global)?,
        Commands::Completions(args) => run_completions(args),
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

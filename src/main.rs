use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};

use version_saver::cli::orchestration::{self, FormArgs};
use version_saver::config;
use version_saver::runner::SystemRunner;
use version_saver::ui::{formatter, Terminal};

#[derive(clap::Parser)]
#[command(
    name = "version-saver",
    version,
    about = "Stage, commit, tag and push a new version of a git project"
)]
struct Args {
    #[arg(short, long, help = "Project folder (git working copy)")]
    repo: Option<PathBuf>,

    #[arg(short, long, help = "Version/tag to create, e.g. v1.4")]
    tag: Option<String>,

    #[arg(short, long, help = "Commit message")]
    message: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'y', long, help = "Publish without prompts")]
    yes: bool,

    #[arg(long, help = "Show the commands that would run without running them")]
    dry_run: bool,

    #[arg(long, help = "Print the suggested next version and exit")]
    suggest: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", formatter::error_line(&format!("Error loading config: {}", e)));
            std::process::exit(1);
        }
    };

    let runner = SystemRunner::new();
    let mut term = Terminal::stdio();

    if args.suggest {
        let repo = args.repo.unwrap_or_else(|| PathBuf::from("."));
        orchestration::print_suggestion(&repo, &config, &runner, &mut term)?;
        return Ok(());
    }

    let form_args = FormArgs {
        repo: args.repo,
        tag: args.tag,
        message: args.message,
        assume_yes: args.yes,
        dry_run: args.dry_run,
    };

    let result = if form_args.assume_yes {
        orchestration::run_unattended(&form_args, &config, &runner, &mut term)?
    } else {
        orchestration::run_form(&form_args, &config, &runner, &mut term)?
    };

    log::debug!("form finished: {:?}", result);

    if form_args.assume_yes && result.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}

//! degrees CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees_engine::commands::{run_degrees, CommandContext};
use degrees_engine::paths::resolve_data_dir;
use degrees_engine::prompt::open_prompt;
use degrees_engine::{load_dataset, Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> degrees_engine::Result<String> {
    let ctx = CommandContext::from_cli(cli);
    let dir = resolve_data_dir(cli.directory.as_deref())?;
    let chatty = ctx.format == OutputFormat::Text;

    if chatty {
        println!("Loading data...");
    }
    let index = load_dataset(&dir)?;
    if chatty {
        println!("Data loaded.");
    }

    let mut prompt = open_prompt();
    run_degrees(&index, prompt.as_mut(), &ctx)
}

fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "degrees_engine=debug"
    } else {
        "degrees_engine=warn"
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

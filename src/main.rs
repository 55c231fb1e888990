use RiboNet::Examples::translation_examples::translation_examples;
use RiboNet::Translation::model_assembler::generate;
use RiboNet::cli::cli_main::run_interactive_menu;
use RiboNet::library_manager::{CONFIG_FILE, ConfigManager};
use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::ExitCode;

/// Compiles protein sequences into a reaction network of bacterial translation.
#[derive(Debug, Parser)]
#[command(name = "ribonet", version, about)]
struct Args {
    /// configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,
    /// output model file, overrides the configuration
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
    /// protein table (CSV: name,length,sequence), overrides the configuration
    #[arg(short, long, value_name = "FILE")]
    proteins: Option<String>,
    /// write the default configuration to ribonet_config.json and exit
    #[arg(long)]
    template: bool,
    /// build and print a demonstration network (0 or 1)
    #[arg(long, value_name = "N")]
    demo: Option<usize>,
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.template {
        ConfigManager::write_template(CONFIG_FILE)?;
        info!("default configuration written to {}", CONFIG_FILE);
        return Ok(());
    }
    if let Some(task) = args.demo {
        translation_examples(task)?;
        return Ok(());
    }
    let manager = match &args.config {
        Some(path) => ConfigManager::from_existing_file(path)?,
        None => ConfigManager::new(),
    };
    let mut config = manager.get_config().clone();
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(proteins) = &args.proteins {
        config.protein_table = proteins.clone();
    }
    let model = generate(&config)?;
    model.pretty_print();
    Ok(())
}

/// Installs the terminal logger. Returns false when no logger could be set;
/// the reason goes to stderr since there is nothing to log it with.
fn init_logging(verbose: bool) -> bool {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("logger not initialized: {}", e);
            false
        }
    }
}

fn main() -> ExitCode {
    let interactive = std::env::args().len() <= 1;
    let args = Args::parse();
    let logging = init_logging(args.verbose);
    if interactive {
        run_interactive_menu();
        return ExitCode::SUCCESS;
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if logging {
                error!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

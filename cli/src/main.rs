use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rule_params_core::FieldPackage;
use rule_params_loader::{
    AssembleConfig, InputFormat, OutputFormat, assemble_package, format_output, load_package,
    read_package,
};
use tracing::debug;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "RULE_PARAMS_LOG";

#[derive(Debug, Parser)]
#[command(name = "rule-params")]
#[command(about = "Assemble dotted validation fields into nested parameter schemas")]
struct Cli {
    /// Only log errors.
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Log dropped fields and container coercions.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble a JSON or YAML field declarations file.
    Assemble(AssembleArgs),
    /// Assemble field declarations read from stdin.
    AssembleStdin(AssembleStdinArgs),
    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Configuration file (YAML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format (overrides the config file).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Emit dropped fields alongside the parameters.
    #[arg(long)]
    with_report: bool,
    /// Write compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Args)]
struct AssembleArgs {
    /// Path to the declarations file (.json, .yaml, .yml).
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct AssembleStdinArgs {
    /// Format of the document on stdin.
    #[arg(long, default_value = "json")]
    input_format: InputFormat,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Where to write the configuration.
    #[arg(long)]
    output: PathBuf,
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Command::Assemble(args) => run_assemble(args),
        Command::AssembleStdin(args) => run_assemble_stdin(args),
        Command::InitConfig(args) => run_init_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), String> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing subscriber: {err}"))
}

fn run_assemble(args: AssembleArgs) -> Result<(), String> {
    let package = load_package(&args.input)
        .map_err(|err| format!("Failed to load '{}': {err}", args.input.display()))?;
    emit(&package, &args.output)
}

fn run_assemble_stdin(args: AssembleStdinArgs) -> Result<(), String> {
    let package = read_package(std::io::stdin().lock(), args.input_format)
        .map_err(|err| format!("Failed to read declarations from stdin: {err}"))?;
    emit(&package, &args.output)
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "'{}' already exists (pass --force to overwrite)",
            args.output.display()
        ));
    }

    AssembleConfig::default()
        .save(&args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn emit(package: &FieldPackage, args: &OutputArgs) -> Result<(), String> {
    let config = resolve_config(args)?;
    let assembly = assemble_package(package, &config);
    let text = format_output(&assembly, &config.output)
        .map_err(|err| format!("Failed to render output: {err}"))?;
    println!("{}", text.trim_end());
    Ok(())
}

/// Loads the config file, if any, then applies command-line overrides.
fn resolve_config(args: &OutputArgs) -> Result<AssembleConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let config = AssembleConfig::load(path)
                .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?;
            debug!(path = %path.display(), "Loaded config");
            config
        }
        None => AssembleConfig::default(),
    };

    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.with_report {
        config.output.with_report = true;
    }
    if args.compact {
        config.output.pretty = false;
    }

    Ok(config)
}

//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use lessontable_core::pipeline::{self, ProgressReporter, SilentProgress};
use lessontable_core::table;
use lessontable_markdown::{OverviewParser, TemplateParser};
use lessontable_shared::{
    AppConfig, LessonOutcome, TableConfig, TableReport, init_config, init_config_at, load_config,
    load_config_from,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// lessontable — collect lesson overviews into a CSV table.
#[derive(Parser)]
#[command(
    name = "lessontable",
    version,
    about = "Collect lesson titles, questions and objectives into a CSV table.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Config file (defaults to ~/.lessontable/lessontable.toml).
    #[arg(long, global = true, env = "LESSONTABLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Overrides for the table build, layered over the config file.
#[derive(Args, Debug, Default)]
pub(crate) struct TableArgs {
    /// Day identifier: reads `<source-root>/<day>.rst`, writes `<day>.csv`.
    #[arg(short, long)]
    pub day: Option<String>,

    /// Directory holding the index and lesson documents.
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory to write the table into.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build the lesson table for a day.
    Build {
        #[command(flatten)]
        table: TableArgs,

        /// Print the table to stdout instead of writing `<day>.csv`.
        #[arg(long)]
        stdout: bool,
    },

    /// Report what each listed lesson would contribute, without writing.
    Check {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Parse a single lesson document and print its overview.
    Parse {
        /// Lesson Markdown file.
        file: PathBuf,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stdout, except when the table itself is printed there.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "lessontable=info",
        1 => "lessontable=debug",
        _ => "lessontable=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    let to_stderr = matches!(cli.command, Command::Build { stdout: true, .. });

    match (&cli.log_format, to_stderr) {
        (LogFormat::Text, false) => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        (LogFormat::Text, true) => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        (LogFormat::Json, false) => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
        (LogFormat::Json, true) => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Build { table, stdout } => cmd_build(config_path, &table, stdout),
        Command::Check { table } => cmd_check(config_path, &table),
        Command::Parse { file, json } => cmd_parse(&file, json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(config_path),
            ConfigAction::Show => cmd_config_show(config_path),
        },
    }
}

/// Load the config file named on the command line, or the default one.
fn load_app_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

/// Merge config file values with CLI overrides.
fn resolve_table_config(config_path: Option<&Path>, args: &TableArgs) -> Result<TableConfig> {
    let app = load_app_config(config_path)?;
    let mut table = TableConfig::from(&app);

    if let Some(day) = &args.day {
        table.day = day.clone();
    }
    if let Some(root) = &args.source_root {
        table.source_root = root.clone();
    }
    if let Some(out) = &args.output_dir {
        table.output_dir = out.clone();
    }

    table.validate()?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(config_path: Option<&Path>, args: &TableArgs, stdout: bool) -> Result<()> {
    let config = resolve_table_config(config_path, args)?;

    info!(
        day = %config.day,
        index = %config.index_path().display(),
        "building lesson table"
    );

    if stdout {
        let report = pipeline::inspect_lessons(&config, &TemplateParser, &SilentProgress)?;
        print!("{}", table::render_table(&report.records())?);
        return Ok(());
    }

    let reporter = CliProgress::new();
    let report = pipeline::build_table(&config, &TemplateParser, &reporter)?;

    print_summary(&report);
    Ok(())
}

fn cmd_check(config_path: Option<&Path>, args: &TableArgs) -> Result<()> {
    let config = resolve_table_config(config_path, args)?;
    let report = pipeline::inspect_lessons(&config, &TemplateParser, &SilentProgress)?;

    println!();
    for outcome in &report.outcomes {
        println!("  {:<12} {}", outcome.label(), outcome.lesson().path.display());
    }
    println!();
    println!(
        "  {} parsed, {} missing, {} without overview",
        report.written(),
        report.missing(),
        report.unmatched()
    );
    println!();

    if report.written() == 0 {
        return Err(eyre!(
            "no lesson in {} would produce a row",
            config.index_path().display()
        ));
    }
    Ok(())
}

fn cmd_parse(file: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("cannot read {}", file.display()))?;

    let overview = TemplateParser
        .parse(&content)
        .ok_or_else(|| eyre!("{} has no title or no overview block", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        println!("Title:\n{}\n", overview.title);
        println!("Questions:\n{}\n", overview.questions);
        println!("Objectives:\n{}", overview.objectives);
    }
    Ok(())
}

fn cmd_config_init(config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(path) => init_config_at(path)?,
        None => init_config()?,
    };
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_app_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

fn print_summary(report: &TableReport) {
    println!();
    println!("  Lesson table written!");
    if let Some(path) = &report.output_path {
        println!("  Path:     {}", path.display());
    }
    println!("  Rows:     {}", report.written());
    println!("  Missing:  {}", report.missing());
    println!("  Skipped:  {}", report.unmatched());
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif bar.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template("{spinner:.cyan} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressReporter for CliProgress {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message("Reading lessons");
    }

    fn lesson_done(&self, outcome: &LessonOutcome, current: usize, _total: usize) {
        self.bar.set_position(current as u64);
        self.bar
            .set_message(format!("{} ({})", outcome.lesson().id, outcome.label()));
    }

    fn done(&self, _report: &TableReport) {
        self.bar.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

//! CLI for the stencil template generator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use stencil::config::DEFAULT_SPEC_FILE;
use stencil::inspect::render_tree;
use stencil::prelude::*;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author, version, about = "Turn a working project into a Copier template", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a template from a source project
    Generate {
        /// Source project directory
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Output directory (replaced on every run)
        #[arg(short, long, default_value = "template-output")]
        output: PathBuf,

        /// Template description file (defaults to <source>/.stencil.yml)
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Append run results as key=value lines to this file
        #[arg(long)]
        github_output: Option<PathBuf>,

        /// Show diffs without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a template description and show its compiled rules
    Validate {
        /// Source project directory
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Template description file (defaults to <source>/.stencil.yml)
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the syntax tree of a file with node categories
    Inspect {
        /// File to parse
        file: PathBuf,

        /// Maximum tree depth to print
        #[arg(long, default_value_t = 5)]
        depth: usize,

        /// Only show nodes whose text contains this
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Show supported languages
    Languages,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            source,
            output,
            spec,
            github_output,
            dry_run,
        } => cmd_generate(source, output, spec, github_output, dry_run),
        Commands::Validate { source, spec, json } => cmd_validate(source, spec, json),
        Commands::Inspect {
            file,
            depth,
            pattern,
        } => cmd_inspect(file, depth, pattern),
        Commands::Languages => cmd_languages(),
        Commands::Version => {
            println!("stencil {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn spec_path(source: &Path, spec: Option<PathBuf>) -> PathBuf {
    spec.unwrap_or_else(|| source.join(DEFAULT_SPEC_FILE))
}

fn load_spec(path: &Path) -> Result<TemplateSpec> {
    let spec = TemplateSpec::load(path)
        .with_context(|| format!("Failed to load template description {}", path.display()))?;
    Ok(spec)
}

fn cmd_generate(
    source: PathBuf,
    output: PathBuf,
    spec: Option<PathBuf>,
    github_output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    if !source.is_dir() {
        bail!("Source directory {} does not exist", source.display());
    }

    let spec = load_spec(&spec_path(&source, spec))?;
    for warning in spec.validate().context("Invalid template description")? {
        println!("::warning::{warning}");
    }

    println!("Generating template '{}' v{}", spec.name, spec.version);

    let mut generator = Generator::new(&source, &output, spec);
    if dry_run {
        generator = generator.dry_run();
    }
    let report = generator.run().context("Template generation failed")?;

    if dry_run {
        let diff = report.diff(io::stdout().is_terminal());
        if !diff.is_empty() {
            println!("{diff}");
        }
        println!("\n{}", report.summary);
    }

    println!("Files processed: {}", report.files_processed);
    println!("Files transformed: {}", report.files_transformed);
    if !dry_run {
        println!("Template written to {}", report.output_dir.display());
    }
    for warning in &report.warnings {
        println!("::warning::{warning}");
    }

    if let Some(path) = github_output {
        report
            .write_github_output(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

fn cmd_validate(source: PathBuf, spec: Option<PathBuf>, json: bool) -> Result<()> {
    let spec = load_spec(&spec_path(&source, spec))?;
    let report = spec.check().context("Invalid template description")?;

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "Template '{}' v{}: {} variable(s), {} rule(s)",
        report.name,
        report.version,
        report.variables.len(),
        report.rules.len()
    );
    for (index, rule) in report.rules.iter().enumerate() {
        println!("  {:>3}. {}", index + 1, rule.describe());
    }
    for warning in &report.warnings {
        println!("::warning::{warning}");
    }
    Ok(())
}

fn cmd_inspect(file: PathBuf, depth: usize, pattern: Option<String>) -> Result<()> {
    let registry = LanguageRegistry::new();
    let Some(lang) = registry.resolve(&file) else {
        bail!("No language profile for {}", file.display());
    };

    let source = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let tree = render_tree(lang, &source, depth, pattern.as_deref())
        .with_context(|| format!("Cannot inspect {} as {}", file.display(), lang.name()))?;

    print!("{tree}");
    Ok(())
}

fn cmd_languages() -> Result<()> {
    let registry = LanguageRegistry::new();
    println!("Supported languages:");
    for lang in registry.all() {
        let mut selectors: Vec<String> = lang.extensions().iter().map(|e| format!(".{e}")).collect();
        selectors.extend(lang.filenames().iter().map(|f| f.to_string()));
        println!(
            "  {} ({}) [{}]",
            lang.name(),
            selectors.join(", "),
            if lang.grammar().is_some() { "syntax" } else { "plaintext" }
        );
    }
    Ok(())
}

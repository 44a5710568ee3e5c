//! resumd CLI - markdown resume to HTML sync tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use resumd::{JsonFormat, Resume, Resumd};

#[derive(Parser)]
#[command(name = "resumd")]
#[command(version)]
#[command(about = "Sync a tabular markdown resume into a static HTML page", long_about = None)]
struct Cli {
    /// Input markdown resume
    #[arg(value_name = "RESUME")]
    resume: Option<PathBuf>,

    /// Target HTML file to rewrite in place
    #[arg(value_name = "TARGET")]
    target: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the resume and rewrite the target's marked region in place
    Sync {
        /// Input markdown resume
        #[arg(value_name = "RESUME")]
        resume: PathBuf,

        /// Target HTML file
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Skip the parsed-data summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse the resume and print the parsed-data summary
    Show {
        /// Input markdown resume
        #[arg(value_name = "RESUME")]
        resume: PathBuf,
    },

    /// Render the HTML fragment
    #[command(alias = "html")]
    Render {
        /// Input markdown resume
        #[arg(value_name = "RESUME")]
        resume: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Base indentation depth in tabs
        #[arg(long, default_value = "4")]
        indent: usize,
    },

    /// Render the parsed model as JSON
    Json {
        /// Input markdown resume
        #[arg(value_name = "RESUME")]
        resume: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Dry run: verify the resume parses and the target region resolves
    Check {
        /// Input markdown resume
        #[arg(value_name = "RESUME")]
        resume: PathBuf,

        /// Target HTML file
        #[arg(value_name = "TARGET")]
        target: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Sync {
            resume,
            target,
            quiet,
        }) => cmd_sync(&resume, &target, quiet),
        Some(Commands::Show { resume }) => cmd_show(&resume),
        Some(Commands::Render {
            resume,
            output,
            indent,
        }) => cmd_render(&resume, output.as_deref(), indent),
        Some(Commands::Json {
            resume,
            output,
            compact,
        }) => cmd_json(&resume, output.as_deref(), compact),
        Some(Commands::Check { resume, target }) => cmd_check(&resume, &target),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: sync if both paths are provided
            match (cli.resume, cli.target) {
                (Some(resume), Some(target)) => cmd_sync(&resume, &target, false),
                _ => {
                    println!("{}", "Usage: resumd <RESUME> <TARGET>".yellow());
                    println!("       resumd --help for more information");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_sync(resume: &Path, target: &Path, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Syncing {} into {}", resume.display(), target.display());
    let parsed = resumd::sync_file(resume, target)?;
    log::info!(
        "Synced {} entries and {} skills",
        parsed.entry_count(),
        parsed.skills.len()
    );

    if !quiet {
        print_summary(&parsed);
        println!();
    }

    println!(
        "{} {}",
        "Successfully updated".green().bold(),
        target.display()
    );

    Ok(())
}

fn cmd_show(resume: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = resumd::parse_file(resume)?;
    print_summary(&parsed);
    Ok(())
}

fn cmd_render(
    resume: &Path,
    output: Option<&Path>,
    indent: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = Resumd::new()
        .with_indent_level(indent)
        .parse(resume)?
        .to_html()?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_json(
    resume: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = resumd::parse_file(resume)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = resumd::render::to_json(&parsed, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_check(resume: &Path, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Checking {} against {}", resume.display(), target.display());
    let result = Resumd::new().parse(resume)?;
    let target_text = fs::read_to_string(target)?;

    // Splice in memory only; nothing is written.
    result.splice_into(&target_text)?;

    println!(
        "{} {} parses ({} entries, {} skills)",
        "OK".green().bold(),
        resume.display(),
        result.resume().entry_count(),
        result.resume().skills.len()
    );
    println!(
        "{} {} has exactly one resume region",
        "OK".green().bold(),
        target.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumd".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown resume to HTML sync tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/resumd/resumd".dimmed()
    );
    println!("License: MIT");
}

fn print_summary(resume: &Resume) {
    println!("{}", "Parsed Resume Data".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("\n{} ({}):", "Skills".bold(), resume.skills.len());
    for skill in &resume.skills {
        println!("  {} {}", "-".dimmed(), skill);
    }

    println!("\n{}: {}", "Activities".bold(), resume.activities);
    println!("\n{}: {}", "Morning".bold(), resume.morning_motivation);

    println!(
        "\n{} ({} entries):",
        "Education".bold(),
        resume.education.len()
    );
    for entry in &resume.education {
        print_entry(entry);
    }

    println!(
        "\n{} ({} entries):",
        "Experience".bold(),
        resume.experience.len()
    );
    for entry in &resume.experience {
        print_entry(entry);
    }
}

fn print_entry(entry: &resumd::Entry) {
    println!("  [{}] — [{}]", entry.title.bold(), entry.subtitle);
    let body: String = entry.body.chars().take(100).collect();
    let ellipsis = if entry.body.chars().count() > 100 {
        "..."
    } else {
        ""
    };
    println!("    Body: {}{}", body, ellipsis);
}

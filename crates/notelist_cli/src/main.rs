//! Command-line front end for the notes list.
//!
//! # Responsibility
//! - Read a sidebar JSON file and print the projected list.
//! - Map every failure to a stderr line and a non-zero exit code.

use clap::Parser;
use notelist_core::{
    init_logging, load_config, JsonFileSidebarSource, NoteListService, NoteSummary,
    NotesListResult, ProjectionConfig, EMPTY_STATE_MESSAGE,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Print every note from a docs sidebar, newest first.
#[derive(Debug, Parser)]
#[command(name = "notelist", version)]
struct Cli {
    /// Sidebar JSON file (an item array or an object with `items`).
    sidebar: PathBuf,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra note title to hide; repeatable.
    #[arg(long = "exclude", value_name = "LABEL")]
    exclude: Vec<String>,

    /// Print summaries as a JSON array.
    #[arg(long)]
    json: bool,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level used with `--log-dir`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => ProjectionConfig::default(),
    };
    config.excluded_labels.extend(cli.exclude);
    config.validate()?;

    if let Some(dir) = cli.log_dir.or_else(|| config.logging.dir.clone()) {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| config.logging.effective_level());
        init_logging(level, dir.as_path())?;
    }

    let service = NoteListService::new(
        JsonFileSidebarSource::new(cli.sidebar),
        config.projection_options(),
    );
    let result = service.all_notes()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.items)?);
    } else {
        print!("{}", render_text(&result));
    }
    Ok(())
}

fn render_text(result: &NotesListResult) -> String {
    if result.is_empty_state() {
        return format!("{EMPTY_STATE_MESSAGE}\n");
    }
    result.items.iter().map(render_line).collect()
}

fn render_line(note: &NoteSummary) -> String {
    format!(
        "{}  [{}]  {}  {}\n",
        note.date.as_deref().unwrap_or("no date"),
        note.category,
        note.label,
        note.href
    )
}

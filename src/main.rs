//! CLI entry point for foldercat

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use foldercat::output::{Status, print_catalog, print_json, print_status};
use foldercat::settings::{self, Overrides, Settings};
use foldercat::{
    CatalogError, CatalogWriter, ColorMode, FileCatalogWriter, FileTypeSelector, OutputConfig,
    ProgressBar, spawn_build,
};

#[derive(Parser, Debug)]
#[command(name = "foldercat")]
#[command(about = "Walk a folder and write an indented catalog of its files")]
#[command(version)]
struct Args {
    /// Folder to catalog
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden files and folders (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Only list one file type: All, .txt, .pdf, .doc, .docx or any other extension
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    file_type: Option<FileTypeSelector>,

    /// Do not write the catalog file into the folder
    #[arg(long = "no-save")]
    no_save: bool,

    /// Print a JSON report instead of the catalog text
    #[arg(long)]
    json: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Read defaults from FILE instead of ~/.config/foldercat/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log more (-v for info, -vv for debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("foldercat: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<i32> {
    let settings = Settings::load(args.config.as_deref())?;
    let options = settings::resolve(
        settings,
        Overrides {
            include_hidden: args.all,
            file_type: args.file_type.clone(),
            no_save: args.no_save,
            color: args.color,
        },
    );
    let output = OutputConfig {
        use_color: options.color.should_use_color(),
        show_progress: !args.quiet && !args.json && std::io::stderr().is_terminal(),
    };
    log::debug!("resolved options: {:?}", options);

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };

    let started = Instant::now();
    let handle = spawn_build(root.clone(), options.filter.clone())?;
    let result = if output.show_progress {
        let mut bar = ProgressBar::stderr(output.use_color);
        let result = handle.wait_with(&mut bar);
        bar.finish();
        result
    } else {
        handle.wait()
    };

    let catalog = match result {
        Ok(catalog) => catalog,
        Err(CatalogError::Path { source, .. }) => {
            let reason = source.map_or_else(|| "Not a directory".to_string(), |e| e.to_string());
            print_status(
                Status::Error,
                &format!("cannot access '{}': {}", args.path.display(), reason),
                output.use_color,
            )?;
            return Ok(1);
        }
        Err(e) if e.is_filesystem() => {
            print_status(Status::Error, &e.to_string(), output.use_color)?;
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };
    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);

    for dir in &catalog.skipped {
        print_status(
            Status::Warning,
            &format!("skipped unreadable folder {}", dir.display()),
            output.use_color,
        )?;
    }

    if args.json {
        print_json(&catalog)?;
    }

    if catalog.is_empty() {
        print_status(
            Status::Warning,
            "No files found in the selected folder.",
            output.use_color,
        )?;
        return Ok(0);
    }

    if !args.json {
        print_catalog(&catalog.text)?;
    }

    if !options.save {
        print_status(
            Status::Success,
            &format!("Catalog generated in {}", humantime::format_duration(elapsed)),
            output.use_color,
        )?;
        return Ok(0);
    }

    let mut writer = FileCatalogWriter::with_file_name(options.file_name);
    match writer.write_catalog(&root, &catalog.text) {
        Ok(path) => {
            print_status(
                Status::Success,
                &format!(
                    "Catalog generated in {} and saved to {}",
                    humantime::format_duration(elapsed),
                    path.display()
                ),
                output.use_color,
            )?;
            Ok(0)
        }
        Err(e) => {
            print_status(
                Status::Error,
                &format!("Failed to save catalog: {}", e),
                output.use_color,
            )?;
            Ok(1)
        }
    }
}

use clap::{Parser, ValueEnum};
use filetree_core::export;
use filetree_core::scanner::scan_dir;
use filetree_core::{read_file_map, Config, FileMap, FileTreeStore, HiddenRule, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "filetree", about = "Print a project's file tree as an explorer would show it")]
struct Args {
    /// Directory to scan, or a JSON file map
    source: PathBuf,
    /// Absolute path a scanned directory is shown under
    #[arg(long)]
    mount: Option<String>,
    /// Visible root folder
    #[arg(long)]
    root_folder: Option<String>,
    /// Show only the root folder's children
    #[arg(long)]
    hide_root: bool,
    /// Hide files with this exact name
    #[arg(long = "hide", value_name = "NAME")]
    hide: Vec<String>,
    /// Hide paths matching this regular expression
    #[arg(long = "hide-pattern", value_name = "REGEX")]
    hide_pattern: Vec<String>,
    /// Collapse this folder before printing
    #[arg(long = "collapse", value_name = "PATH")]
    collapse: Vec<String>,
    /// Collapse every folder
    #[arg(long)]
    collapse_all: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filetree: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let files = load_files(&args.source, args.mount.as_deref())?;

    let mut options = config.tree_options();
    if let Some(root) = args.root_folder {
        options.root_folder = root;
    }
    options.hide_root |= args.hide_root;
    options.extra_hidden_rules = args.hide.iter().map(HiddenRule::exact).collect();
    for pattern in &args.hide_pattern {
        options.extra_hidden_rules.push(HiddenRule::pattern(pattern)?);
    }

    let mut store = FileTreeStore::with_hidden_rules(config.hidden_rules()?);
    store.set_files(&files, &options);
    if args.collapse_all {
        store.collapse_all();
    }
    for path in &args.collapse {
        store.collapse_folder(path);
    }

    let visible = store.filtered_file_list();
    let rendered = match args.format {
        Format::Text => export::render_text(&visible, store.collapsed_folders()),
        Format::Json => serde_json_pretty(&export::to_json(&visible))?,
        Format::Csv => {
            let mut buf = Vec::new();
            export::to_csv(&visible, &mut buf)?;
            String::from_utf8_lossy(&buf).into_owned()
        }
    };

    match args.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn load_files(source: &Path, mount: Option<&str>) -> Result<FileMap> {
    if source.is_file() {
        return read_file_map(source);
    }
    let mount = match mount {
        Some(mount) => mount.to_string(),
        None => default_mount(source)?,
    };
    scan_dir(source, &mount)
}

/// The directory's own absolute path, with `/` separators.
fn default_mount(dir: &Path) -> Result<String> {
    let absolute = std::fs::canonicalize(dir)?;
    Ok(absolute.to_string_lossy().replace('\\', "/"))
}

fn serde_json_pretty(value: &serde_json::Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

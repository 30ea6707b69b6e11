use clap::{Parser, Subcommand};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vitae::photo::mime_from_extension;
use vitae::{
    CliError, DirectorySink, FileStore, LopdfEngine, MemoryStore, PreviewOutcome, Shell,
    ShellError, StateStore, VitaeConfig, builtin_registry,
};

#[derive(Parser, Debug)]
#[command(version, about = "Render a CV document with a theme, to PDF, JSON or HTML.", long_about = None)]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available themes
    Themes,
    /// Check that a file has the structure of a CV document
    Validate { file: PathBuf },
    /// Export a CV to PDF
    Pdf {
        file: PathBuf,
        #[arg(long)]
        theme: Option<String>,
        /// Photo to place in the header (png, jpeg or gif)
        #[arg(long)]
        photo: Option<PathBuf>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Re-export a CV as normalized JSON
    Json {
        file: PathBuf,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Write the HTML preview of a CV
    Preview {
        file: PathBuf,
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_logging(debug: bool) {
    if env::var("RUST_LOG").is_err() {
        let level = if debug { "vitae=debug" } else { "vitae=info" };
        unsafe {
            env::set_var("RUST_LOG", level);
        }
    }
    env_logger::init();
}

fn open_shell(config: VitaeConfig, file: &Path) -> Result<Shell<LopdfEngine>, CliError> {
    let store: Arc<dyn StateStore> = match &config.state_dir {
        Some(dir) => Arc::new(FileStore::open(dir).map_err(ShellError::from)?),
        None => Arc::new(MemoryStore::new()),
    };
    let engine = LopdfEngine::new(config.layout);
    let mut shell = Shell::restore(config, Arc::new(builtin_registry()), store, engine)?;
    shell.import_json_path(file)?;
    Ok(shell)
}

fn validate(file: &Path) -> Result<(), CliError> {
    let text = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| CliError::NotJson {
            path: file.to_path_buf(),
            source,
        })?;
    vitae_model::validate_report(&value).map_err(|source| CliError::Invalid {
        path: file.to_path_buf(),
        source,
    })?;
    println!("{}: valid CV document", file.display());
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => VitaeConfig::load(path)?,
        None => VitaeConfig::default(),
    };

    match cli.command {
        Command::Themes => {
            for theme in builtin_registry().all() {
                println!("{:<12} {}", theme.id(), theme.name());
            }
        }
        Command::Validate { file } => validate(&file)?,
        Command::Pdf {
            file,
            theme,
            photo,
            out,
        } => {
            let mut shell = open_shell(config, &file)?;
            if let Some(id) = theme {
                shell.select_theme(&id)?;
            }
            if let Some(path) = photo {
                let bytes = fs::read(&path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                let mime = mime_from_extension(&path).unwrap_or("application/octet-stream");
                shell.import_photo(&bytes, mime)?;
            }
            let mut sink = DirectorySink::new(out);
            shell.export_pdf(&mut sink).await?;
            for path in sink.written() {
                println!("{}", path.display());
            }
        }
        Command::Json { file, out } => {
            let shell = open_shell(config, &file)?;
            let mut sink = DirectorySink::new(out);
            shell.export_json(&mut sink)?;
            for path in sink.written() {
                println!("{}", path.display());
            }
        }
        Command::Preview { file, theme, out } => {
            let mut shell = open_shell(config, &file)?;
            if let Some(id) = theme {
                shell.select_theme(&id)?;
            }
            let preview = shell.preview();
            if let PreviewOutcome::MissingTheme { id } = &preview {
                return Err(ShellError::MissingTheme(id.clone()).into());
            }
            let html = preview.to_html();
            match out {
                Some(path) => {
                    fs::write(&path, html).map_err(|source| CliError::Write {
                        path: path.clone(),
                        source,
                    })?;
                    println!("{}", path.display());
                }
                None => println!("{}", html),
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);
    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

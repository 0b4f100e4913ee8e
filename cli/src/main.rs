mod fs_store;
mod http;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use vidchat::preference::{set_display_mode, toggle_display_mode};
use vidchat::protocol::DEFAULT_BACKEND_URL;
use vidchat::{ChatController, DisplayMode, PanelView, SessionStore};

use crate::fs_store::DirBackend;
use crate::http::HttpBackend;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not a YouTube video: {0}")]
    Unsupported(String),
    #[error("question is empty")]
    EmptyQuestion,
    #[error("storage failed: {0}")]
    Store(#[from] vidchat::StoreError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "vidchat", about = "Ask questions about a YouTube video")]
struct Cli {
    #[arg(long, env = "VIDCHAT_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[arg(long, env = "VIDCHAT_DATA_DIR", default_value = ".vidchat")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask one question and print the answer.
    Ask {
        url: String,
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Request a summary of the video.
    Summarize { url: String },
    /// Print the stored conversation.
    History { url: String },
    /// Forget the stored conversation.
    Clear { url: String },
    /// Interactive session. `/summary`, `/clear` and `/quit` are commands.
    Chat { url: String },
    /// Show or change the display mode.
    Theme { mode: Option<ThemeArg> },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

type Controller = ChatController<DirBackend>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();

    let cli = Cli::parse();
    let store = SessionStore::new(DirBackend::new(&cli.data_dir));
    let backend = HttpBackend::new(&cli.backend_url);
    tracing::debug!(endpoint = backend.endpoint(), data_dir = %cli.data_dir.display(), "vidchat starting");

    match cli.command {
        Command::Ask { url, question } => run_ask(&backend, open(store, &url)?, &question.join(" ")).await,
        Command::Summarize { url } => run_summarize(&backend, open(store, &url)?).await,
        Command::History { url } => {
            print_view(&open(store, &url)?);
            Ok(())
        }
        Command::Clear { url } => {
            let mut ctrl = open(store, &url)?;
            ctrl.clear();
            println!("cleared");
            Ok(())
        }
        Command::Chat { url } => run_chat(&backend, open(store, &url)?).await,
        Command::Theme { mode } => run_theme(store, mode),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn open(store: SessionStore<DirBackend>, url: &str) -> Result<Controller, CliError> {
    let ctrl = ChatController::open(Some(url), store);
    if !ctrl.is_enabled() {
        return Err(CliError::Unsupported(url.to_owned()));
    }
    Ok(ctrl)
}

async fn run_ask(backend: &HttpBackend, mut ctrl: Controller, question: &str) -> Result<(), CliError> {
    let pending = ctrl.submit_question(question).ok_or(CliError::EmptyQuestion)?;
    ctrl.exchange(backend, pending).await;
    print_latest(&ctrl);
    Ok(())
}

async fn run_summarize(backend: &HttpBackend, mut ctrl: Controller) -> Result<(), CliError> {
    if let Some(pending) = ctrl.request_summary() {
        ctrl.exchange(backend, pending).await;
    }
    print_latest(&ctrl);
    Ok(())
}

async fn run_chat(backend: &HttpBackend, mut ctrl: Controller) -> Result<(), CliError> {
    print_view(&ctrl);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let pending = match line.trim() {
            "/quit" | "/exit" => break,
            "/summary" => ctrl.request_summary(),
            "/clear" => {
                if ctrl.clear() {
                    println!("cleared");
                }
                continue;
            }
            text => ctrl.submit_question(text),
        };
        let Some(pending) = pending else {
            continue;
        };

        print_latest(&ctrl);
        ctrl.exchange(backend, pending).await;
        print_latest(&ctrl);
    }
    Ok(())
}

fn run_theme(mut store: SessionStore<DirBackend>, mode: Option<ThemeArg>) -> Result<(), CliError> {
    let current = match mode {
        None => store.preference(),
        Some(ThemeArg::Toggle) => toggle_display_mode(&mut store),
        Some(ThemeArg::Light) => {
            set_display_mode(&mut store, DisplayMode::Light)?;
            DisplayMode::Light
        }
        Some(ThemeArg::Dark) => {
            set_display_mode(&mut store, DisplayMode::Dark)?;
            DisplayMode::Dark
        }
    };
    println!("{}", current.as_str());
    Ok(())
}

fn print_view(ctrl: &Controller) {
    println!("{}", render::format_view(&PanelView::project(ctrl)));
}

fn print_latest(ctrl: &Controller) {
    if let Some(entry) = PanelView::project(ctrl).entries.last() {
        println!("{}", render::format_entry(entry));
    }
}

//! mdclip - extract web page content as Markdown

mod host;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdclip::host::{menu, Action, ActionDispatcher, ActionRequest, ActionResponse, PageContext};
use mdclip::{parse_document, parse_html, ConverterOptions, DEFAULT_MAX_DEPTH};

use crate::host::CliHost;

#[derive(Parser)]
#[command(name = "mdclip")]
#[command(version, about = "Extract web page content as Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdclip copy page.html --url https://example.com/post
    mdclip download page.html --url https://example.com/post --out-dir notes
    mdclip chatgpt page.html --selection '<p>Just <b>this</b></p>'
    mdclip request '{\"action\":\"copyMarkdown\"}' page.html")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the Markdown, as if copied to the clipboard
    Copy(PageArgs),

    /// Save the Markdown as <domain>.md
    Download(PageArgs),

    /// Print the chat URL for the Markdown prompt
    Chatgpt(PageArgs),

    /// Store the Markdown for the preview and print its location
    Preview(PageArgs),

    /// Handle a JSON action request and print the JSON response
    Request {
        /// Request such as {"action":"copyMarkdown","selectedText":null}
        #[arg(value_name = "JSON")]
        request: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the context menu entries as JSON
    Menu,
}

#[derive(Args)]
struct PageArgs {
    /// HTML file of the page, `-` for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Page URL, used for relative links and the download name
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// HTML of the selected range
    #[arg(long, value_name = "HTML")]
    selection: Option<String>,

    /// Plain text of the selection; defaults to the text of --selection
    #[arg(long, value_name = "TEXT")]
    selected_text: Option<String>,

    /// Directory for downloads and preview storage
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Deepest nesting level converted before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Copy(page) => run_action(Action::CopyMarkdown, &page),
        Command::Download(page) => run_action(Action::DownloadMarkdown, &page),
        Command::Chatgpt(page) => run_action(Action::OpenChatGpt, &page),
        Command::Preview(page) => run_action(Action::PreviewMarkdown, &page),
        Command::Request { request, page } => run_request(&request, &page),
        Command::Menu => print_menu(),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .map_err(|e| format!("stdin: {e}"))?;
        return Ok(html);
    }
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
}

/// Load the page and hand the request to a dispatcher.
fn dispatch(request: &ActionRequest, page: &PageArgs) -> Result<ActionResponse, String> {
    let html = read_input(&page.input)?;
    let document = parse_document(&html);
    let range = page.selection.as_deref().map(parse_html);
    let url = page.url.as_deref().unwrap_or("");

    let mut request = request.clone();
    if request.selected_text.is_none() {
        request.selected_text = page
            .selected_text
            .clone()
            .or_else(|| range.as_ref().map(|range| range.rendered_text()));
    }

    let mut context = PageContext::new(url, &document);
    if let Some(range) = &range {
        context = context.with_selection_range(range);
    }

    let options = ConverterOptions {
        max_depth: page.max_depth,
        ..Default::default()
    };
    let mut dispatcher = ActionDispatcher::with_options(CliHost::new(&page.out_dir), options);
    Ok(dispatcher.handle(&request, &context))
}

fn run_action(action: Action, page: &PageArgs) -> Result<bool, String> {
    let response = dispatch(&ActionRequest::new(action, None), page)?;
    if let Some(error) = &response.error {
        eprintln!("error: {error}");
    }
    Ok(response.success)
}

fn run_request(json: &str, page: &PageArgs) -> Result<bool, String> {
    let request: ActionRequest =
        serde_json::from_str(json).map_err(|e| format!("invalid request: {e}"))?;
    let response = dispatch(&request, page)?;

    let out = serde_json::to_string(&response).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(response.success)
}

fn print_menu() -> Result<bool, String> {
    let out = serde_json::to_string_pretty(&menu()).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(true)
}

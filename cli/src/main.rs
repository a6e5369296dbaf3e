//! Quill CLI binary: draft an academic document from a writing prompt.
//!
//! Reads config from the environment (`.env` supported), runs the
//! plan → write → edit pipeline, then writes the document and, when DOIs
//! resolve, a BibTeX bibliography next to it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use quill::{bibliography, output, prompts, Completer, DraftRunner, OpenAiClient, QuillConfig};

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Quill — draft an academic document from a writing prompt")]
struct Args {
    /// Writing prompt (or pass as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional words of the prompt when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Directory for the generated document and bibliography
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Prompt templates directory (default: PROMPTS_DIR env or ./prompts)
    #[arg(long, value_name = "DIR")]
    prompts_dir: Option<PathBuf>,

    /// Skip DOI lookup and the bibliography file
    #[arg(long)]
    no_bib: bool,

    /// Verbose: log node enter/exit and retry activity
    #[arg(short, long)]
    verbose: bool,
}

/// The prompt from `-m/--message`, falling back to the joined positional words.
fn resolve_prompt(message: Option<&str>, rest: &[String]) -> Option<String> {
    if let Some(m) = message {
        return Some(m.to_string());
    }
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "quill=debug" } else { "quill=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = resolve_prompt(args.message.as_deref(), &args.rest)
        .ok_or("no prompt given; pass text or use -m/--message")?;

    let mut config = QuillConfig::from_env()?;
    if args.prompts_dir.is_some() {
        config.prompts_dir = args.prompts_dir.clone();
    }

    let templates = prompts::load_or_default(config.prompts_dir.as_deref());
    let client = OpenAiClient::new(&config)?;
    let completer = Completer::new(Arc::new(client), config.max_tries);
    let runner = DraftRunner::new(completer, templates)?;

    tracing::info!(model = %config.model, "drafting started");
    let mut state = runner.invoke(&prompt).await?;

    if !args.no_bib {
        let citation_client = bibliography::citation_client()?;
        state.references =
            bibliography::collect_references(&citation_client, state.final_text()).await;
    }

    let doc_path = output::save_document(&state, &args.out_dir)?;
    println!("\nFinal text saved to: {}", doc_path.display());
    if let Some(bib_path) = output::save_bibliography(&state, &args.out_dir)? {
        println!("References saved to: {}", bib_path.display());
    }

    println!("\nFirst few lines of text:\n");
    for line in state.final_text().lines().take(10) {
        println!("{line}");
    }
    Ok(())
}

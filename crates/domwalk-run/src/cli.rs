use clap::{Parser, ValueEnum};
use domwalk_fetch::{FetchOptions, Fetcher};
use miette::IntoDiagnostic;
use std::io::{self, Write};
use tokio::sync::oneshot;
use url::Url;

use crate::outline::{Outline, OutlineOptions};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fetches an HTML page and prints the outline of its elements.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// The page to fetch.
    #[clap(required = true)]
    pub url: Url,
    /// Tag whose children are left out of the outline. Can be repeated.
    #[clap(short, long, value_name = "TAG")]
    pub prune: Vec<String>,
    /// Do not descend below this depth (the <html> element is depth 0).
    #[clap(short = 'd', long)]
    pub max_depth: Option<usize>,
    /// Output format.
    #[clap(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// User-Agent header sent with the request.
    #[clap(short = 'A', long)]
    pub user_agent: Option<String>,
}

impl CliArgs {
    fn fetch_options(&self) -> FetchOptions {
        match &self.user_agent {
            Some(user_agent) => FetchOptions::default().with_user_agent(user_agent.clone()),
            None => FetchOptions::default(),
        }
    }

    fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            prune: self.prune.clone(),
            max_depth: self.max_depth,
        }
    }
}

pub async fn run(args: CliArgs) -> miette::Result<()> {
    let fetcher = Fetcher::new(&args.fetch_options())?;
    tracing::info!("Fetching {}", args.url);

    let (tx, rx) = oneshot::channel();
    fetcher.get_async(args.url.clone(), move |result| {
        let _ = tx.send(result);
    });
    let body = rx.await.into_diagnostic()??;

    let outline = Outline::from_html(&body, &args.outline_options());
    tracing::info!("Collected {} elements from {}", outline.len(), args.url);

    let rendered = match args.format {
        OutputFormat::Text => outline.render_text(),
        OutputFormat::Json => outline.render_json().into_diagnostic()?,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", rendered).into_diagnostic()?;
    handle.flush().into_diagnostic()?;
    Ok(())
}

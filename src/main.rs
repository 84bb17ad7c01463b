use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use snipr::calculator::CalculatorPad;
use snipr::currency::parse_currency_query;
use snipr::items::Card;
use snipr::stopwatch::{Stopwatch, run_stopwatch};
use snipr::timer::{TimerState, parse_timer_query, run_countdown};
use snipr::translate::{AUTO, DEFAULT_TARGET, language_code};
use snipr::ui::{render_card, render_results, render_suggestions};
use snipr::widgets::{self, SearchResults, TranslatePanel};
use snipr::{ApiClient, Config, Dispatch, RequestSequencer};

#[derive(Parser, Debug)]
#[command(name = "snipr", version, about = "One query box, many answers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to <config dir>/snipr/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the search/currency/translate host
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Override the infobox host
    #[arg(long, global = true)]
    infobox_base: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a full query round: widgets and web results
    Query {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Web search results only
    Search {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Autocomplete suggestions
    Suggest {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show which widgets a query mounts, without touching the network
    Classify {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Count down, e.g. `snipr timer 5 minute`
    Timer {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Run a stopwatch until Ctrl-C
    Stopwatch,
    /// Translate text
    Translate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Source language (name or code)
        #[arg(long, default_value = AUTO)]
        from: String,

        /// Target language (name or code)
        #[arg(long, default_value = DEFAULT_TARGET)]
        to: String,
    },
    /// Text to speech: print the audio URL, or save the audio
    Tts {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate an expression
    Calc {
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },
    /// Read queries line by line from stdin
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snipr=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load config")?
        .with_overrides(cli.api_base, cli.infobox_base);
    debug!("Using {:?}", config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(run(cli.command, config))
}

async fn run(command: Commands, config: Config) -> Result<()> {
    let client = || ApiClient::new(&config).context("Failed to create HTTP client");

    match command {
        Commands::Query { text } => {
            let client = client()?;
            let query = text.join(" ");
            let dispatch = Dispatch::for_query(&query);
            let (cards, search) = tokio::join!(
                widgets::run_round(&client, &dispatch),
                SearchResults::load(&client, &query)
            );
            print_round(&cards, &search, &query);
        }
        Commands::Search { text } => {
            let client = client()?;
            let query = text.join(" ");
            let search = SearchResults::load(&client, &query).await;
            print!("{}", render_results(&search, &query));
        }
        Commands::Suggest { text } => {
            let suggestions = widgets::suggestions(&client()?, &text.join(" ")).await;
            print!("{}", render_suggestions(&suggestions));
        }
        Commands::Classify { text } => classify(&text.join(" ")),
        Commands::Timer { text } => timer(&text.join(" ")).await,
        Commands::Stopwatch => stopwatch().await?,
        Commands::Translate { text, from, to } => {
            let client = client()?;
            let mut panel = TranslatePanel {
                from: resolve_language(&from),
                to: resolve_language(&to),
                text: text.join(" "),
                result: None,
            };
            panel.translate(&client).await;
            println!("{}", render_card(&Card::from(panel.clone())));
            if let Some(url) = panel.speech_url(&client) {
                println!("Listen: {url}");
            }
        }
        Commands::Tts { text, output } => {
            let client = client()?;
            let text = text.join(" ");
            match output {
                Some(path) => {
                    let audio = client.tts_audio(&text).await?;
                    tokio::fs::write(&path, &audio)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Saved {} bytes of audio to {}", audio.len(), path.display());
                }
                None => println!("{}", client.tts_url(&text)),
            }
        }
        Commands::Calc { expression } => {
            let mut pad = CalculatorPad::default();
            pad.set_input(expression.join(" "));
            pad.submit();
            println!("{}", pad.display());
        }
        Commands::Repl => repl(client()?).await?,
    }
    Ok(())
}

fn resolve_language(language: &str) -> String {
    if language.eq_ignore_ascii_case(AUTO) {
        return AUTO.to_string();
    }
    language_code(language)
        .map(str::to_string)
        .unwrap_or_else(|| language.to_string())
}

fn classify(query: &str) {
    let dispatch = Dispatch::for_query(query);
    println!("widgets: {}", dispatch.mounted().join(", "));
    if let Some(seconds) = dispatch.timer {
        println!("timer: {seconds}s");
    }
    if let Some(currency) = parse_currency_query(query) {
        println!(
            "currency: {} {} -> {}",
            currency.amount, currency.from, currency.to
        );
    }
}

async fn timer(text: &str) {
    let query = if text.to_lowercase().contains("timer") {
        text.to_string()
    } else {
        format!("{text} timer")
    };
    let seconds = parse_timer_query(Some(&query)).unwrap_or(snipr::dispatch::DEFAULT_TIMER_SECONDS);
    info!("Starting {}s timer", seconds);

    let countdown = run_countdown(TimerState::new(seconds), |timer| {
        print!("\r{}", timer.display());
        std::io::stdout().flush().ok();
    });

    tokio::select! {
        timer = countdown => {
            println!();
            if timer.is_alarm() {
                println!("Time's up!");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            info!("Timer cancelled");
        }
    }
}

async fn stopwatch() -> Result<()> {
    let mut watch = Stopwatch::new();

    tokio::select! {
        _ = run_stopwatch(&mut watch, |watch| {
            print!("\r{}", watch.display());
            std::io::stdout().flush().ok();
        }) => {}
        result = tokio::signal::ctrl_c() => result.context("Failed to listen for Ctrl-C")?,
    }

    watch.stop();
    println!("\r{}", watch.display());
    Ok(())
}

async fn repl(client: ApiClient) -> Result<()> {
    let client = Arc::new(client);
    let sequencer = RequestSequencer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut latest: Option<JoinHandle<()>> = None;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let query = line.trim().to_string();
        if query.is_empty() {
            continue;
        }

        let token = sequencer.next();
        let client = Arc::clone(&client);
        let sequencer = sequencer.clone();
        latest = Some(tokio::spawn(async move {
            let dispatch = Dispatch::for_query(&query);
            let (cards, search) = tokio::join!(
                widgets::run_round_if_current(&client, &dispatch, &sequencer, token),
                SearchResults::load(&client, &query)
            );
            if let Some(cards) = cards
                && sequencer.is_current(token)
            {
                print_round(&cards, &search, &query);
            }
        }));
    }

    // Let the last round finish when stdin closes.
    if let Some(handle) = latest {
        handle.await.ok();
    }
    Ok(())
}

fn print_round(cards: &[Card], search: &SearchResults, query: &str) {
    for card in cards {
        println!("{}", render_card(card));
    }
    print!("{}", render_results(search, query));
}

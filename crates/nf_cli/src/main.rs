use anyhow::Context;
use clap::Parser;
use nf_core::logging::init_logging;
use nf_core::{articles_from_json, Article, FeedConfig, FeedService, FeedStats, Placement};
use nf_storage::{create_source, SourceKind};
use nf_web::AppState;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, Level};

#[derive(Debug, Clone, Copy, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    /// Accepts `90`, `30s`, `5m`, `1h15m30s` or `2d`. A bare number is seconds.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total: u64 = 0;
        let mut pending: Option<u64> = None;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if let Some(digit) = c.to_digit(10) {
                let value = pending
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(digit)))
                    .ok_or("duration too large")?;
                pending = Some(value);
                continue;
            }

            let unit = match c {
                's' => 1,
                'm' => 60,
                'h' => 3600,
                'd' => 86400,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            let value = pending
                .take()
                .ok_or_else(|| format!("Missing number before '{}'", c))?;
            total = value
                .checked_mul(unit)
                .and_then(|secs| total.checked_add(secs))
                .ok_or("duration too large")?;
        }

        match pending {
            Some(secs) => total = total.checked_add(secs).ok_or("duration too large")?,
            None if s.trim().is_empty() => return Err("Duration must include a number".to_string()),
            None => {}
        }

        Ok(HumanDuration(Duration::from_secs(total)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Lagos news feed assembler", long_about = None)]
pub struct Cli {
    /// Where news rows come from: memory, file or rest
    #[arg(long, default_value = "file")]
    source: String,
    /// JSON rows file for the file source
    #[arg(long, env = "NF_NEWS_FILE")]
    file: Option<PathBuf>,
    #[arg(long, env = "NF_BACKEND_URL")]
    backend_url: Option<String>,
    #[arg(long, env = "NF_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "NF_TABLE", default_value = nf_core::config::DEFAULT_TABLE)]
    table: String,
    /// Minimum word overlap for two headlines to count as the same story
    #[arg(long, default_value_t = nf_core::title::DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: f64,
    /// Backend request timeout (e.g. 10s, 1m)
    #[arg(long, default_value = "10s")]
    timeout: HumanDuration,
    #[arg(long, short)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the assembler over a JSON rows file ordered newest first
    Assemble {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long)]
        json: bool,
    },
    /// Fetch and print the feed for a placement (home or news)
    Fetch {
        placement: Placement,
        /// Refetch periodically with the given interval (e.g. 5m, 1h15m)
        #[arg(long)]
        interval: Option<HumanDuration>,
        #[arg(long)]
        json: bool,
    },
    /// Serve the feeds over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
    /// List placements with their fetch and display sizes
    Placements,
}

impl Cli {
    fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            backend_url: self.backend_url.clone(),
            api_key: self.api_key.clone(),
            table: self.table.clone(),
            similarity_threshold: self.threshold,
            request_timeout: self.timeout.0,
            ..Default::default()
        }
    }

    async fn feed_service(&self, config: &FeedConfig) -> anyhow::Result<FeedService> {
        let kind: SourceKind = self.source.parse()?;
        let source = create_source(kind, config, self.file.as_deref()).await?;
        Ok(FeedService::new(source).with_assembler(config.assembler()))
    }
}

fn print_feed(articles: &[Article], as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(articles)?);
        return Ok(());
    }
    for (i, article) in articles.iter().enumerate() {
        let image = if article.has_image() { "🖼️ " } else { "" };
        println!(
            "{:>2}. {}{} ({}) - {}",
            i + 1,
            image,
            article.title,
            article.publish_date.format("%Y-%m-%d %H:%M"),
            article.external_url.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}

fn print_stats(stats: &FeedStats) {
    info!(
        "📰 {} fetched, {} with valid links, {} unique, {} shown",
        stats.fetched, stats.valid_urls, stats.unique, stats.returned
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });

    let config = cli.feed_config();
    config.validate()?;

    match &cli.command {
        Commands::Assemble { input, count, json } => {
            let raw = tokio::fs::read_to_string(input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let value = serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
            let articles = articles_from_json(value)?;

            let (feed, stats) = config.assembler().assemble_with_stats(articles, *count);
            print_feed(&feed, *json)?;
            print_stats(&stats);
        }
        Commands::Fetch { placement, interval, json } => {
            let service = cli.feed_service(&config).await?;
            loop {
                let (feed, stats) = service.feed_with_stats(*placement).await;
                print_feed(&feed, *json)?;
                print_stats(&stats);

                let Some(interval) = interval else {
                    break;
                };
                info!("Waiting {}s before next fetch", interval.0.as_secs());
                tokio::time::sleep(interval.0).await;
            }
        }
        Commands::Serve { addr } => {
            let feeds = cli.feed_service(&config).await?;
            nf_web::serve(AppState { feeds }, addr).await?;
        }
        Commands::Placements => {
            for placement in Placement::all() {
                println!(
                    "{:<6} fetch {:>2}, show {:>2}",
                    placement.as_str(),
                    placement.fetch_limit(),
                    placement.display_count()
                );
            }
        }
    }

    Ok(())
}

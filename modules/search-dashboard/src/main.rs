use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use search_dashboard::{ids, DashboardClient, DashboardConfig, MemoryPage};
use search_engine_client::{ContentFilter, ContentId, SearchEngineClient};

#[derive(Parser)]
#[command(name = "dashboard", about = "Search engine dashboard client")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides DASHBOARD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show content statistics and popular content
    Overview,

    /// Search content and print one page of results
    Search {
        query: String,

        /// all, video or text
        #[arg(long = "type", default_value = "all")]
        content_type: ContentFilter,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show a content record with its score breakdown
    Detail { id: ContentId },

    /// Ask the backend to re-fetch its providers
    Refresh,

    /// Check backend health
    Health,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("search_dashboard=info,search_engine_client=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_section(page: &MemoryPage, title: &str, id: &str) {
    println!("== {title} ==");
    println!("{}", page.inner_html(id));
}

fn print_alerts(page: &mut MemoryPage) {
    for alert in page.take_alerts() {
        println!("! {alert}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = DashboardConfig::from_env().context("Invalid dashboard configuration")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    config.log_summary();

    let api = SearchEngineClient::new(&config.api_url, config.request_timeout)
        .with_context(|| format!("Cannot use API URL {}", config.api_url))?;
    let dashboard = DashboardClient::new(api, MemoryPage::new(), config.options());

    match cli.command {
        Commands::Overview => {
            dashboard.init().await;
            let page = dashboard.page();
            println!("== Statistics ==");
            for (label, id) in [
                ("Total", ids::TOTAL_CONTENT),
                ("Video", ids::VIDEO_COUNT),
                ("Text", ids::TEXT_COUNT),
                ("Providers", ids::PROVIDER_COUNT),
            ] {
                println!("{label}: {}", page.text(id).unwrap_or("-"));
            }
            print_section(&page, "Popular", ids::POPULAR_CONTENT);
        }
        Commands::Search {
            query,
            content_type,
            page: page_number,
        } => {
            {
                let mut page = dashboard.page_mut();
                page.set_input_value(ids::SEARCH_INPUT, &query);
                page.set_input_value(ids::CONTENT_TYPE, content_type.as_str());
            }
            dashboard.search_from_page(page_number).await;
            let mut page = dashboard.page_mut();
            print_alerts(&mut page);
            print_section(&page, "Results", ids::SEARCH_RESULTS);
            print_section(&page, "Pagination", ids::PAGINATION);
        }
        Commands::Detail { id } => {
            dashboard.show_content_detail(id).await;
            let mut page = dashboard.page_mut();
            print_alerts(&mut page);
            if !page.opened_modals().is_empty() {
                println!("== {} ==", page.text(ids::MODAL_TITLE).unwrap_or_default());
                println!("{}", page.href(ids::MODAL_LINK).unwrap_or("#"));
                println!("{}", page.inner_html(ids::MODAL_BODY));
            }
        }
        Commands::Refresh => {
            dashboard.refresh_content().await;
            let mut page = dashboard.page_mut();
            print_alerts(&mut page);
            print_section(&page, "Popular", ids::POPULAR_CONTENT);
        }
        Commands::Health => {
            let health = dashboard.api().health().await.context("Health check failed")?;
            info!(status = %health.status, "Health check complete");
            println!("{}", health.status);
            if health.status != "ok" {
                bail!("backend reports status '{}'", health.status);
            }
        }
    }

    Ok(())
}

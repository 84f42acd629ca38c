//! Command-line consumer for the civic platform API client
//!
//! Every subcommand maps to one client operation and prints the result as
//! pretty JSON on stdout. Logs go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use civic_api::{
    ApiConfig, ApiDispatcher, ArticleFilters, CivicClient, DebateFilters, EventFilters, Evidence,
    Governorate, GovernorateFilter, IntegrityReport, MockContext, PostFilters, PostKind,
    UserFilters, UserRole,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "civic")]
#[command(about = "Query the civic platform API (falls back to mock data)")]
struct Cli {
    /// Backend base URL; overrides CIVIC_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Talk to the backend instead of serving mock data
    #[arg(long, global = true)]
    no_mocks: bool,

    /// Surface backend failures instead of falling back to mock data
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users
    Users {
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long, default_value = "All")]
        governorate: GovernorateFilter,
    },

    /// List feed posts and reels
    Posts {
        #[arg(long)]
        kind: Option<PostKind>,
        #[arg(long, default_value = "All")]
        governorate: GovernorateFilter,
        #[arg(long)]
        author_id: Option<String>,
    },

    /// List events
    Events {
        #[arg(long, default_value = "All")]
        governorate: GovernorateFilter,
    },

    /// List debates
    Debates {
        #[arg(long, default_value = "All")]
        governorate: GovernorateFilter,
        #[arg(long = "participant-id")]
        participant_ids: Vec<String>,
    },

    /// List articles
    Articles {
        #[arg(long, default_value = "All")]
        governorate: GovernorateFilter,
    },

    /// Log in as the first user holding a role
    Login {
        #[arg(long)]
        role: UserRole,
    },

    /// Candidates, news and local statistics for one governorate
    Governorate { name: String },

    /// Party profile and its candidates
    Party { id: String },

    /// Draft a post about a topic with the writing assistant
    Suggest { topic: String },

    /// National dashboard statistics
    Stats,

    /// Estimated turnout per governorate
    Participation,

    /// Submit an election-integrity report
    Report {
        #[arg(long)]
        governorate: Governorate,
        #[arg(long)]
        violation_type: String,
        #[arg(long)]
        description: String,
        /// File attached as evidence
        #[arg(long)]
        evidence: Option<PathBuf>,
    },
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,civic_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli);

    run(&client, cli.command).await
}

fn build_client(cli: &Cli) -> CivicClient {
    let mut config = ApiConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if cli.no_mocks {
        config = config.with_use_mocks(false);
    }

    tracing::info!(
        base_url = config.base_url().unwrap_or("<unset>"),
        use_mocks = config.use_mocks(),
        strict = cli.strict,
        "Client configured"
    );

    let mut dispatcher = ApiDispatcher::with_reqwest(config);
    if cli.strict {
        dispatcher = dispatcher.strict();
    }
    CivicClient::new(dispatcher, MockContext::default())
}

async fn run(client: &CivicClient, command: Commands) -> Result<()> {
    let social = client.social();
    let civic = client.civic();

    match command {
        Commands::Users { role, governorate } => {
            let filters = UserFilters { role, governorate };
            print_json(&social.get_users(&filters).await.context("Failed to fetch users")?)
        }
        Commands::Posts {
            kind,
            governorate,
            author_id,
        } => {
            let filters = PostFilters {
                kind,
                governorate,
                author_id,
            };
            print_json(&social.get_posts(&filters).await.context("Failed to fetch posts")?)
        }
        Commands::Events { governorate } => {
            let filters = EventFilters { governorate };
            print_json(&social.get_events(&filters).await.context("Failed to fetch events")?)
        }
        Commands::Debates {
            governorate,
            participant_ids,
        } => {
            let filters = DebateFilters {
                governorate,
                participant_ids,
            };
            print_json(&social.get_debates(&filters).await.context("Failed to fetch debates")?)
        }
        Commands::Articles { governorate } => {
            let filters = ArticleFilters { governorate };
            print_json(
                &social
                    .get_articles(&filters)
                    .await
                    .context("Failed to fetch articles")?,
            )
        }
        Commands::Login { role } => {
            let user = social.login(role).await.context("Login failed")?;
            if user.is_none() {
                tracing::info!(role = %role, "No user holds this role");
            }
            print_json(&user)
        }
        Commands::Governorate { name } => {
            let data = civic
                .get_governorate_data(&name.trim().to_lowercase())
                .await
                .with_context(|| format!("Failed to load governorate '{}'", name))?;
            print_json(&data)
        }
        Commands::Party { id } => {
            let data = civic
                .get_party_data(&id)
                .await
                .with_context(|| format!("Failed to load party '{}'", id))?;
            print_json(&data)
        }
        Commands::Suggest { topic } => {
            let suggestion = social.generate_post_suggestion(&topic).await;
            print_json(&serde_json::json!({ "suggestion": suggestion }))
        }
        Commands::Stats => print_json(
            &civic
                .get_dashboard_stats()
                .await
                .context("Failed to fetch dashboard stats")?,
        ),
        Commands::Participation => print_json(
            &civic
                .get_governorate_participation()
                .await
                .context("Failed to fetch participation")?,
        ),
        Commands::Report {
            governorate,
            violation_type,
            description,
            evidence,
        } => {
            let evidence = match evidence {
                Some(path) => Some(read_evidence(&path).await?),
                None => None,
            };
            let report = IntegrityReport {
                governorate,
                violation_type,
                description,
                evidence,
            };
            let receipt = civic
                .submit_integrity_report(&report)
                .await
                .context("Failed to submit integrity report")?;
            tracing::info!(tracking_id = %receipt.tracking_id, "Report submitted");
            print_json(&receipt)
        }
    }
}

async fn read_evidence(path: &Path) -> Result<Evidence> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read evidence file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "evidence".to_string());
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Ok(Evidence {
        file_name,
        content_type,
        bytes,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

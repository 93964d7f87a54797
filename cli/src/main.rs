//! CLI entrypoint for Janus Forge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use janus_application::{
    ChatSession, DebateLogger, NoDebateLogger, NoProgress, SubmitDebateInput,
    SubmitDebateUseCase, SubmitProgress,
};
use janus_domain::{PlatformCatalog, PlatformSelection, Tier};
use janus_infrastructure::config::to_profiles;
use janus_infrastructure::{
    ConfigLoader, FileConfig, HttpDialecticGateway, InMemoryProfileRepository, JsonlDebateLogger,
    Severity,
};
use janus_presentation::server::{self, AppState};
use janus_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Held until exit so buffered file logs are flushed.
    let _log_guard = init_tracing(&cli);

    info!("Starting Janus Forge");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config);

    // === Dependency Injection ===
    let catalog = Arc::new(config.platform_catalog());
    let submit_config = config.submit_config(&catalog);
    let settings = config.backend.to_settings();
    info!(
        backend = %settings.base_url,
        variant = %submit_config.variant,
        degraded_mode = submit_config.degraded_mode,
        "Backend configured"
    );

    let gateway = Arc::new(HttpDialecticGateway::new(settings)?);
    let (profiles, _) = to_profiles(&config.profiles, &catalog);
    let profiles = Arc::new(InMemoryProfileRepository::from_profiles(profiles));
    let use_case = Arc::new(
        SubmitDebateUseCase::new(gateway, catalog.clone(), submit_config)
            .with_profiles(profiles)
            .with_logger(debate_logger(&config)),
    );

    // Serve mode
    if cli.serve {
        let addr = match cli.bind {
            Some(addr) => addr,
            None => bind_address(&config)?,
        };
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let state = AppState::new(use_case)
            .with_suggested_topics(config.catalog.suggested_topics())
            .with_cors_origins(config.proxy.cors_origins.clone());
        server::serve(listener, Arc::new(state)).await?;
        return Ok(());
    }

    // Chat mode
    if cli.chat {
        let mut session = ChatSession::new(use_case)
            .with_tier(Tier::from_stored(cli.tier.as_deref()));
        if let Some(token) = &cli.token {
            session = session.with_token(token);
        }
        if !cli.platforms.is_empty() {
            session = session.with_selection(selection(&catalog, &cli.platforms)?);
        }

        let mut repl = ChatRepl::new(session, config.catalog.suggested_topics())
            .with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // Single topic mode - topic is required
    let topic = match cli.topic {
        Some(t) => t,
        None => bail!("Topic is required. Use --chat for interactive mode or --serve for the proxy."),
    };

    let mut input = SubmitDebateInput::new(topic);
    if !cli.platforms.is_empty() {
        input = input.with_platforms(cli.platforms.iter().cloned());
    }
    if let Some(token) = &cli.token {
        input = input.with_bearer(token);
    }

    let reporter;
    let progress: &dyn SubmitProgress = if cli.quiet || cli.output == OutputFormat::Json {
        &NoProgress
    } else {
        reporter = ProgressReporter::new(catalog.as_ref().clone());
        &reporter
    };

    let outcome = match use_case.execute_with_progress(input, progress).await {
        Ok(outcome) => outcome,
        Err(e) => bail!("{} (status {})", e, e.status()),
    };

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome, &catalog),
        OutputFormat::Plain => ConsoleFormatter::format_plain(&outcome, &catalog),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    Ok(())
}

/// Stderr logging filtered by `RUST_LOG` or `-v`, plus an optional rolling file.
fn init_tracing(cli: &Cli) -> Option<WorkerGuard> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "janus-forge.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = cli
        .log_json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!cli.log_json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .init();

    guard
}

fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("config: {}", issue.message()),
            Severity::Warning => warn!("config: {}", issue.message()),
        }
    }
}

fn debate_logger(config: &FileConfig) -> Arc<dyn DebateLogger> {
    let Some(path) = config.logging.debate_log_path() else {
        return Arc::new(NoDebateLogger);
    };
    match JsonlDebateLogger::open(&path) {
        Ok(logger) => {
            info!("Debate log: {}", path.display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open debate log {}: {}", path.display(), e);
            Arc::new(NoDebateLogger)
        }
    }
}

fn bind_address(config: &FileConfig) -> Result<SocketAddr> {
    config
        .proxy
        .parse_bind()
        .0
        .ok_or_else(|| anyhow!("Invalid proxy.bind '{}'", config.proxy.bind))
}

fn selection(catalog: &PlatformCatalog, ids: &[String]) -> Result<PlatformSelection> {
    let resolved = ids
        .iter()
        .map(|id| catalog.resolve(id).map(|p| p.id.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PlatformSelection::new(resolved))
}

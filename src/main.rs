use std::{process, sync::Arc};

use mandato::{
    application::{
        composer,
        error::AppError,
        resolver,
        site::SiteService,
    },
    config,
    domain::{error::DomainError, site::SiteDefaults, slug::derive_slug},
    infra::{
        error::InfraError,
        http::{HttpState, build_router},
        store::FileSiteStore,
        telemetry,
    },
};
use serde_json::{Value, json};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::CheckSite(args) => run_check(args).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = FileSiteStore::new(&settings.sites.directory)
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    let sites = Arc::new(SiteService::new(Arc::new(store)));

    let router = build_router(HttpState { sites });

    let listener = tokio::net::TcpListener::bind(settings.server.public_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        addr = %settings.server.public_addr,
        sites_dir = %settings.sites.directory.display(),
        "public server listening"
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

/// Resolve a raw configuration file offline and print the derived public
/// slug, the resolved document, and its render plan.
async fn run_check(args: config::CheckArgs) -> Result<(), AppError> {
    let contents = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(|err| {
            AppError::unexpected(format!("failed to read `{}`: {err}", args.file.display()))
        })?;

    let report = check_report(&args.name, &contents)?;
    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|err| AppError::unexpected(format!("failed to serialize report: {err}")))?;
    println!("{rendered}");

    Ok(())
}

fn check_report(name: &str, contents: &str) -> Result<Value, AppError> {
    let slug = derive_slug(name).map_err(DomainError::from)?;

    let raw: Option<Value> = match serde_json::from_str(contents) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                error = %err,
                "input is not valid JSON, resolving against defaults"
            );
            None
        }
    };

    let defaults = SiteDefaults::for_tenant(name);
    let resolved = resolver::resolve_site_config(raw.as_ref(), &defaults);
    let plan = composer::compose(&resolved);

    Ok(json!({
        "slug": slug.as_str(),
        "config": resolved,
        "plan": plan.kinds(),
    }))
}

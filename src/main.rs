//! algorithmat-mailer

use algorithmat_mailer::{
    app_state::AppStateBuilder,
    docs::ApiDoc,
    middleware::{request_ulid::MakeRequestUlid, runtime},
    router::setup_app_router,
    settings::Settings,
    setups::prod::{MailgunEmailSender, ProdSetup},
};
use anyhow::Result;
use axum::{headers::HeaderName, Router};
use axum_server::Handle;
use clap::Parser;
use http::header;
use std::{
    io,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    process::exit,
    time::Duration,
};
use tokio::signal::{
    self,
    unix::{signal, SignalKind},
};
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, sensitive_headers::SetSensitiveHeadersLayer,
    timeout::TimeoutLayer, trace::TraceLayer, ServiceBuilderExt,
};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Request identifier field.
const REQUEST_ID: &str = "request_id";

#[derive(Debug, Parser)]
#[command(name = "algorithmat-mailer", about = "AlgorithMat verification email service")]
struct Args {
    /// Path to the settings file (defaults to config/settings.toml)
    #[arg(long)]
    config_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(io::stdout());
    setup_tracing(stdout_writer);

    let settings = Settings::load(args.config_path)?;

    info!(
        subject = "app_settings",
        category = "init",
        "starting with settings: {:?}",
        settings,
    );

    let cancellation_token = CancellationToken::new();

    let app_server = tokio::spawn(serve_app(settings, cancellation_token.clone()));

    tokio::spawn(async move {
        capture_sigterm().await;

        cancellation_token.cancel();
        println!("\nCtrl+C received, shutting down. Press Ctrl+C again to force shutdown.");

        capture_sigterm().await;

        exit(130)
    });

    app_server.await??;

    Ok(())
}

async fn serve_app(settings: Settings, token: CancellationToken) -> Result<()> {
    let req_id = HeaderName::from_static(REQUEST_ID);

    let app_state = AppStateBuilder::<ProdSetup>::default()
        .with_mailgun_settings(settings.mailgun.clone())
        .with_verification_email_sender(MailgunEmailSender::new(settings.mailgun.clone()))
        .finalize()?;

    let router = setup_app_router(app_state)
        // Request/response logging.
        .layer(TraceLayer::new_for_http())
        // Set and propagate "request_id" (as a ulid) per request.
        .layer(
            ServiceBuilder::new()
                .set_request_id(req_id.clone(), MakeRequestUlid)
                .propagate_request_id(req_id),
        )
        // Applies the `tower_http::timeout::Timeout` middleware which
        // applies a timeout to requests.
        .layer(TimeoutLayer::new(Duration::from_millis(
            settings.server.timeout_ms,
        )))
        // Catches runtime panics and converts them into
        // `500 Internal Server` responses.
        .layer(CatchPanicLayer::custom(runtime::catch_panic))
        // Mark headers as sensitive on both requests and responses.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION]))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    let server = serve("Application", router, settings.server.port);

    token.cancelled().await;
    server.graceful_shutdown(Some(Duration::from_secs(5)));

    Ok(())
}

fn serve(name: &str, app: Router, port: u16) -> Handle {
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    let handle = Handle::new();

    info!(
        subject = "app_start",
        category = "init",
        "{name} server listening on {addr}"
    );

    tokio::spawn(
        axum_server::bind(addr)
            .handle(handle.clone())
            .serve(app.into_make_service()),
    );

    handle
}

fn setup_tracing(writer: tracing_appender::non_blocking::NonBlocking) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_filter(env_filter),
        )
        .init();
}

async fn capture_sigterm() {
    let mut sigterm = signal(SignalKind::terminate()).expect("Unable to register SIGTERM handler");

    tokio::select! {
        _ = signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

//! Parasol Market storefront binary.
//!
//! Boots the whole mock shop in one process: reads configuration from the
//! environment, wires Sentry and tracing, seeds the in-memory catalog and
//! serves the Axum app until Ctrl+C or SIGTERM.

#![cfg_attr(not(test), forbid(unsafe_code))]

use parasol_storefront::config::StorefrontConfig;
use parasol_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, registry};

/// Start Sentry if a DSN is configured. The returned guard flushes pending
/// events on drop, so it has to outlive the server.
fn sentry_guard(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.sentry_environment.clone().into()),
                attach_stacktrace: true,
                ..sentry::ClientOptions::default()
            },
        ))
    })
}

/// Install the tracing subscriber: env-filtered fmt output plus a Sentry
/// layer that turns warnings and errors into events and keeps info and
/// debug lines as breadcrumbs.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "parasol_storefront=info,tower_http=info".into());

    let sentry_layer = sentry_tracing::layer().event_filter(|metadata| match *metadata.level() {
        Level::ERROR | Level::WARN => sentry_tracing::EventFilter::Event,
        Level::INFO | Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    });

    registry().with(env_filter).with(fmt::layer()).with(sentry_layer).init();
}

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("invalid storefront configuration");

    // Sentry hooks the panic handler, so it comes up before anything else.
    let _guard = sentry_guard(&config);
    init_tracing();

    let state = AppState::new(config.clone());
    tracing::info!(
        products = state.catalog().products_snapshot().len(),
        categories = state.catalog().category_count(),
        latency = config.catalog_latency,
        "catalog seeded"
    );

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("could not bind address");
    tracing::info!(%addr, "storefront listening");

    axum::serve(listener, parasol_storefront::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server exited with an error");
}

/// Resolves when the process is asked to stop, via Ctrl+C everywhere and
/// additionally SIGTERM on unix.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("could not install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("could not install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}

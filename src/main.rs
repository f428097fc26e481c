use crate::config::Config;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod pipeline;
mod responses;
mod router;
mod scraper;
mod session;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,housetracker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the HTTP client, cache and session store
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "HTTP client initialization failed");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = state.config.addr;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(state.config.workers);

    // 4️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => html_error_response(err),
        };

        tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}

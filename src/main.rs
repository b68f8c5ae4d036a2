use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use aeddi_login::app::{App, shell};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

/// `PORT` overrides the Leptos `site-addr`; a malformed value aborts startup.
fn listen_addr(port: Option<String>, fallback: SocketAddr) -> SocketAddr {
    match port {
        Some(port) => {
            let port: u16 = port.parse().expect("invalid PORT");
            SocketAddr::from(([0, 0, 0, 0], port))
        }
        None => fallback,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = listen_addr(std::env::var("PORT").ok(), leptos_options.site_addr);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");
    tracing::info!(%addr, "aeddi-login listening");
    axum::serve(listener, app.into_make_service()).await.expect("server failed");
}

#[cfg(feature = "ssr")]
mod server {
    use std::net::SocketAddr;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use thiserror::Error;
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    #[derive(Error, Debug)]
    pub enum ServerError {
        #[error("couldn't load leptos configuration: {0}")]
        Config(String),
        #[error("couldn't bind {addr}: {source}")]
        Bind {
            addr: SocketAddr,
            #[source]
            source: std::io::Error,
        },
        #[error("server stopped: {0}")]
        Serve(#[from] std::io::Error),
    }

    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    pub async fn run() -> Result<(), ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        let addr = conf.leptos_options.site_addr;
        let leptos_options = conf.leptos_options;
        // Generate the list of routes in your Leptos App
        let routes = generate_route_list(App);

        let app = Router::new()
            .leptos_routes(&leptos_options, routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(leptos_options);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("listening on http://{}", &addr);
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    server::init_tracing();
    match server::run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(e) = wxmp_console::logging::init() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = serve().await {
        tracing::error!("Console server stopped: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> wxmp_console::error::Result<()> {
    use tracing::info;
    use wxmp_console::footer::SYSTEM_NAME;

    let leptos_options = wxmp_console::config::load_leptos_options()?;
    let addr = leptos_options.site_addr;
    let app = build_router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on http://{}", SYSTEM_NAME, &addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(feature = "ssr")]
fn build_router(leptos_options: leptos::prelude::LeptosOptions) -> axum::Router {
    use axum::Router;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use wxmp_console::*;

    let routes = generate_route_list(App);

    let pkg_dir = format!("{}/pkg", leptos_options.site_root);
    let static_routes = Router::new().nest_service("/pkg", ServeDir::new(pkg_dir));

    // The fallback catches everything not matched above, so static routes go first
    let leptos_app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    static_routes.merge(leptos_app)
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

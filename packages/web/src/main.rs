use dioxus::prelude::*;

use views::Items;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Items {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use std::sync::Arc;

    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::cors::CorsLayer;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Connect the pool and bring the schema up to date before anything
    // can touch the store.
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // One store handle, constructed here and injected into the routes.
    let item_store: Arc<dyn store::ItemStore> = Arc::new(api::PgItemStore::new(pool.clone()));

    let router = axum::Router::new()
        .merge(api::item_router(item_store))
        .layer(CorsLayer::permissive())
        .serve_dioxus_application(ServeConfig::new(), App);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");
    tracing::info!("listening on {addr}");

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server failed");
}

fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

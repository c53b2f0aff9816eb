// src/test_support.rs
// DOCUMENTATION: Shared setup for handler tests

/// Build the full App (admission, rate limit, routes) around an `Arc<InMemoryStore>`
macro_rules! init_test_app {
    ($store:expr) => {
        init_test_app!(
            $store,
            $crate::middleware::OriginPolicy::new(vec!["https://studio.example.com".into()], true),
            $crate::middleware::ClientRateLimiter::new(100, std::time::Duration::from_secs(900))
        )
    };
    ($store:expr, $policy:expr, $limiter:expr) => {{
        let store: std::sync::Arc<dyn $crate::db::DataStore> = $store;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::from(store))
                .app_data(actix_web::web::Data::new($policy))
                .app_data(actix_web::web::Data::new($limiter))
                .wrap(actix_web::middleware::from_fn($crate::middleware::admission))
                .configure($crate::handlers::routes),
        )
        .await
    }};
}

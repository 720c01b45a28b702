//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let user_routes = Router::new().route("/me", get(handlers::auth::me));

    let carga_routes = Router::new()
        .route(
            "/",
            post(handlers::cargas::create_carga).get(handlers::cargas::get_cargas),
        )
        .route(
            "/em-andamento",
            get(handlers::cargas::get_cargas_em_andamento),
        )
        .route(
            "/{id}",
            get(handlers::cargas::get_carga)
                .put(handlers::cargas::update_carga)
                .delete(handlers::cargas::delete_carga),
        )
        .route("/{id}/status", put(handlers::cargas::update_status))
        .route("/{id}/entregar", post(handlers::cargas::marcar_entregue));

    let cliente_routes = Router::new()
        .route(
            "/",
            post(handlers::cadastros::create_cliente).get(handlers::cadastros::get_clientes),
        )
        .route(
            "/{id}",
            put(handlers::cadastros::update_cliente).delete(handlers::cadastros::delete_cliente),
        );

    let motorista_routes = Router::new()
        .route(
            "/",
            post(handlers::cadastros::create_motorista).get(handlers::cadastros::get_motoristas),
        )
        .route(
            "/{id}",
            put(handlers::cadastros::update_motorista)
                .delete(handlers::cadastros::delete_motorista),
        );

    let veiculo_routes = Router::new()
        .route(
            "/",
            post(handlers::cadastros::create_veiculo).get(handlers::cadastros::get_veiculos),
        )
        .route(
            "/{id}",
            put(handlers::cadastros::update_veiculo).delete(handlers::cadastros::delete_veiculo),
        );

    let pagamento_routes = Router::new()
        .route("/", get(handlers::pagamentos::get_pagamentos))
        .route(
            "/pendentes",
            get(handlers::pagamentos::get_pagamentos_pendentes),
        )
        .route("/{id}", put(handlers::pagamentos::update_pagamento))
        .route(
            "/{id}/canhoto",
            post(handlers::pagamentos::confirmar_canhoto),
        )
        .route("/{id}/quitar", post(handlers::pagamentos::quitar_saldo));

    let dashboard_routes = Router::new()
        .route("/resumo", get(handlers::dashboard::get_resumo))
        .route("/faturamento", get(handlers::dashboard::get_faturamento));

    let relatorio_routes = Router::new()
        .route("/faturamento", get(handlers::relatorios::get_relatorio_faturamento))
        .route("/resumo", get(handlers::relatorios::get_resumo_financeiro))
        .route("/por-cliente", get(handlers::relatorios::get_por_cliente));

    // Tudo que mexe com dados do negócio passa pelo guard de JWT
    let protected_routes = Router::new()
        .nest("/api/users", user_routes)
        .nest("/api/cargas", carga_routes)
        .nest("/api/clientes", cliente_routes)
        .nest("/api/motoristas", motorista_routes)
        .nest("/api/veiculos", veiculo_routes)
        .nest("/api/pagamentos", pagamento_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/relatorios", relatorio_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}

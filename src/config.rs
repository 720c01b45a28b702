// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CadastroRepository, CargaRepository, DashboardRepository, PagamentoRepository,
        RelatorioRepository, UserRepository,
    },
    services::{
        auth::AuthService, cadastro_service::CadastroService, carga_service::CargaService,
        dashboard_service::DashboardService, pagamento_service::PagamentoService,
        relatorio_service::RelatorioService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub carga_service: CargaService,
    pub cadastro_service: CadastroService,
    pub pagamento_service: PagamentoService,
    pub dashboard_service: DashboardService,
    pub relatorio_service: RelatorioService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let carga_repo = CargaRepository::new(db_pool.clone());
        let cadastro_repo = CadastroRepository::new(db_pool.clone());
        let pagamento_repo = PagamentoRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());
        let relatorio_repo = RelatorioRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let carga_service = CargaService::new(carga_repo, pagamento_repo.clone());
        let cadastro_service = CadastroService::new(cadastro_repo);
        let pagamento_service = PagamentoService::new(pagamento_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);
        let relatorio_service = RelatorioService::new(relatorio_repo);

        Ok(Self {
            db_pool,
            auth_service,
            carga_service,
            cadastro_service,
            pagamento_service,
            dashboard_service,
            relatorio_service,
        })
    }
}

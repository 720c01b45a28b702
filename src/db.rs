pub mod user_repo;
pub use user_repo::UserRepository;
pub mod cadastro_repo;
pub use cadastro_repo::CadastroRepository;
pub mod carga_repo;
pub use carga_repo::CargaRepository;
pub mod pagamento_repo;
pub use pagamento_repo::PagamentoRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod relatorio_repo;
pub use relatorio_repo::RelatorioRepository;

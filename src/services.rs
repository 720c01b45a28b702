pub mod auth;
pub mod cadastro_service;
pub mod carga_service;
pub mod dashboard_service;
pub mod financeiro;
pub mod pagamento_service;
pub mod relatorio_service;

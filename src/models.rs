pub mod auth;
pub mod cadastro;
pub mod carga;
pub mod dashboard;
pub mod pagamento;
pub mod relatorio;

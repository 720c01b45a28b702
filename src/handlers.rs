pub mod auth;
pub mod cadastros;
pub mod cargas;
pub mod dashboard;
pub mod pagamentos;
pub mod relatorios;

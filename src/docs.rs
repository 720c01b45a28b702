// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::me,

        // --- Cargas ---
        handlers::cargas::create_carga,
        handlers::cargas::get_cargas,
        handlers::cargas::get_cargas_em_andamento,
        handlers::cargas::get_carga,
        handlers::cargas::update_carga,
        handlers::cargas::update_status,
        handlers::cargas::marcar_entregue,
        handlers::cargas::delete_carga,

        // --- Cadastros ---
        handlers::cadastros::create_cliente,
        handlers::cadastros::get_clientes,
        handlers::cadastros::update_cliente,
        handlers::cadastros::delete_cliente,
        handlers::cadastros::create_motorista,
        handlers::cadastros::get_motoristas,
        handlers::cadastros::update_motorista,
        handlers::cadastros::delete_motorista,
        handlers::cadastros::create_veiculo,
        handlers::cadastros::get_veiculos,
        handlers::cadastros::update_veiculo,
        handlers::cadastros::delete_veiculo,

        // --- Pagamentos ---
        handlers::pagamentos::get_pagamentos,
        handlers::pagamentos::get_pagamentos_pendentes,
        handlers::pagamentos::update_pagamento,
        handlers::pagamentos::confirmar_canhoto,
        handlers::pagamentos::quitar_saldo,

        // --- Dashboard ---
        handlers::dashboard::get_resumo,
        handlers::dashboard::get_faturamento,

        // --- Relatórios ---
        handlers::relatorios::get_relatorio_faturamento,
        handlers::relatorios::get_resumo_financeiro,
        handlers::relatorios::get_por_cliente,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Cargas ---
            models::carga::Carga,
            models::carga::CargaStatus,
            models::carga::FinanceiroCarga,
            models::carga::CargaCompleta,
            handlers::cargas::FinanceiroPayload,
            handlers::cargas::CreateCargaPayload,
            handlers::cargas::UpdateCargaPayload,
            handlers::cargas::TransicaoStatusPayload,

            // --- Cadastros ---
            models::cadastro::Cliente,
            models::cadastro::Motorista,
            models::cadastro::Veiculo,
            handlers::cadastros::ClientePayload,
            handlers::cadastros::MotoristaPayload,
            handlers::cadastros::VeiculoPayload,

            // --- Pagamentos ---
            models::pagamento::PagamentoStatus,
            models::pagamento::PagamentoMotorista,
            models::pagamento::PagamentoDetalhado,
            handlers::pagamentos::UpdatePagamentoPayload,

            // --- Dashboard ---
            models::dashboard::Periodo,
            models::dashboard::DashboardResumo,
            handlers::dashboard::FaturamentoResumo,

            // --- Relatórios ---
            models::relatorio::Granularidade,
            models::relatorio::DadoFaturamento,
            models::relatorio::ResumoFinanceiro,
            models::relatorio::FaturamentoPorCliente,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Cargas", description = "Ciclo de vida das cargas e financeiro"),
        (name = "Cadastros", description = "Clientes, Motoristas e Veículos"),
        (name = "Pagamentos", description = "Acerto com motoristas"),
        (name = "Dashboard", description = "Indicadores do painel"),
        (name = "Relatórios", description = "Séries e resumos financeiros")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::relatorio::{
    DadoFaturamento, FaturamentoPorCliente, Granularidade, ResumoFinanceiro,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GranularidadeQuery {
    /// Tamanho do bucket da série; o padrão é mensal.
    pub granularidade: Option<Granularidade>,
}

/// Série de faturamento, lucro e despesas nos últimos períodos.
#[utoipa::path(
    get,
    path = "/api/relatorios/faturamento",
    params(GranularidadeQuery),
    responses(
        (status = 200, description = "Série por período", body = Vec<DadoFaturamento>)
    ),
    security(("api_jwt" = [])),
    tag = "Relatórios"
)]
pub async fn get_relatorio_faturamento(
    State(app_state): State<AppState>,
    Query(query): Query<GranularidadeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let granularidade = query.granularidade.unwrap_or(Granularidade::Mensal);
    let serie = app_state
        .relatorio_service
        .relatorio_faturamento(granularidade)
        .await?;
    Ok(Json(serie))
}

/// Totais e margem da janela coberta pela série.
#[utoipa::path(
    get,
    path = "/api/relatorios/resumo",
    params(GranularidadeQuery),
    responses(
        (status = 200, description = "Resumo financeiro", body = ResumoFinanceiro)
    ),
    security(("api_jwt" = [])),
    tag = "Relatórios"
)]
pub async fn get_resumo_financeiro(
    State(app_state): State<AppState>,
    Query(query): Query<GranularidadeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let granularidade = query.granularidade.unwrap_or(Granularidade::Mensal);
    let resumo = app_state
        .relatorio_service
        .resumo_financeiro(granularidade)
        .await?;
    Ok(Json(resumo))
}

/// Maiores clientes por faturamento.
#[utoipa::path(
    get,
    path = "/api/relatorios/por-cliente",
    responses(
        (status = 200, description = "Top clientes", body = Vec<FaturamentoPorCliente>)
    ),
    security(("api_jwt" = [])),
    tag = "Relatórios"
)]
pub async fn get_por_cliente(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.relatorio_service.faturamento_por_cliente().await?;
    Ok(Json(clientes))
}

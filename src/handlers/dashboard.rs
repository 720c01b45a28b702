use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::dashboard::{DashboardResumo, Periodo};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PeriodoQuery {
    /// Janela do resumo; o padrão é o mês corrente.
    pub periodo: Option<Periodo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FaturamentoResumo {
    pub periodo: Periodo,
    pub faturamento: rust_decimal::Decimal,
}

/// Contadores e faturamento da janela pedida.
#[utoipa::path(
    get,
    path = "/api/dashboard/resumo",
    params(PeriodoQuery),
    responses(
        (status = 200, description = "Resumo do painel", body = DashboardResumo)
    ),
    security(("api_jwt" = [])),
    tag = "Dashboard"
)]
pub async fn get_resumo(
    State(app_state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let periodo = query.periodo.unwrap_or(Periodo::Mes);
    let resumo = app_state.dashboard_service.get_resumo(periodo).await?;
    Ok(Json(resumo))
}

/// Só o faturamento da janela, para o cartão de destaque.
#[utoipa::path(
    get,
    path = "/api/dashboard/faturamento",
    params(PeriodoQuery),
    responses(
        (status = 200, description = "Faturamento do período", body = FaturamentoResumo)
    ),
    security(("api_jwt" = [])),
    tag = "Dashboard"
)]
pub async fn get_faturamento(
    State(app_state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let periodo = query.periodo.unwrap_or(Periodo::Mes);
    let faturamento = app_state.dashboard_service.get_faturamento(periodo).await?;
    Ok(Json(FaturamentoResumo {
        periodo,
        faturamento,
    }))
}

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::pagamento::{PagamentoDetalhado, PagamentoMotorista};

/// Ajustes do acerto com o motorista. Os adicionais entram somados ao total
/// devido; o valor pago, quando ausente, fica como está.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePagamentoPayload {
    pub valor_pago: Option<Decimal>,
    pub diarias: Option<Decimal>,
    pub chapas: Option<Decimal>,
    pub adicionais_diversos: Option<Decimal>,
}

impl UpdatePagamentoPayload {
    fn adicionais(&self) -> Decimal {
        self.diarias.unwrap_or_default()
            + self.chapas.unwrap_or_default()
            + self.adicionais_diversos.unwrap_or_default()
    }
}

/// Lista todos os pagamentos com carga e motorista.
#[utoipa::path(
    get,
    path = "/api/pagamentos",
    responses(
        (status = 200, description = "Lista de pagamentos", body = Vec<PagamentoDetalhado>)
    ),
    security(("api_jwt" = [])),
    tag = "Pagamentos"
)]
pub async fn get_pagamentos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pagamentos = app_state.pagamento_service.list_pagamentos().await?;
    Ok(Json(pagamentos))
}

/// Somente pagamentos com saldo em aberto.
#[utoipa::path(
    get,
    path = "/api/pagamentos/pendentes",
    responses(
        (status = 200, description = "Pagamentos pendentes", body = Vec<PagamentoDetalhado>)
    ),
    security(("api_jwt" = [])),
    tag = "Pagamentos"
)]
pub async fn get_pagamentos_pendentes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pagamentos = app_state.pagamento_service.list_pendentes().await?;
    Ok(Json(pagamentos))
}

#[utoipa::path(
    put,
    path = "/api/pagamentos/{id}",
    params(("id" = Uuid, Path, description = "ID do pagamento")),
    request_body = UpdatePagamentoPayload,
    responses(
        (status = 200, description = "Pagamento atualizado", body = PagamentoMotorista),
        (status = 404, description = "Pagamento não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Pagamentos"
)]
pub async fn update_pagamento(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePagamentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let adicionais = payload.adicionais();
    let pagamento = app_state
        .pagamento_service
        .atualizar_pagamento(id, payload.valor_pago, adicionais)
        .await?;
    Ok(Json(pagamento))
}

/// Registra o recebimento do canhoto assinado.
#[utoipa::path(
    post,
    path = "/api/pagamentos/{id}/canhoto",
    params(("id" = Uuid, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Canhoto confirmado", body = PagamentoMotorista),
        (status = 404, description = "Pagamento não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Pagamentos"
)]
pub async fn confirmar_canhoto(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let pagamento = app_state.pagamento_service.confirmar_canhoto(id).await?;
    Ok(Json(pagamento))
}

/// Quita o saldo restante. Exige canhoto recebido.
#[utoipa::path(
    post,
    path = "/api/pagamentos/{id}/quitar",
    params(("id" = Uuid, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Saldo quitado", body = PagamentoMotorista),
        (status = 404, description = "Pagamento não encontrado"),
        (status = 422, description = "Canhoto ainda não recebido")
    ),
    security(("api_jwt" = [])),
    tag = "Pagamentos"
)]
pub async fn quitar_saldo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let pagamento = app_state.pagamento_service.quitar_saldo(id).await?;
    Ok(Json(pagamento))
}

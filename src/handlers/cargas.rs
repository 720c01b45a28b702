use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::carga::CargaCompleta;
use crate::services::carga_service::{AtualizaCargaInput, FinanceiroInput, NovaCargaInput};
use crate::services::financeiro;

fn valida_aliquota_icms(pct: &Decimal) -> Result<(), ValidationError> {
    if financeiro::aliquota_icms_valida(*pct) {
        Ok(())
    } else {
        let mut err = ValidationError::new("aliquota_icms");
        err.message = Some("Alíquota de ICMS fora da tabela conhecida.".into());
        Err(err)
    }
}

/// Campos financeiros do formulário. Tudo opcional: campo vazio vira zero,
/// percentuais vazios caem nos padrões da operação.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceiroPayload {
    pub faturamento: Option<Decimal>,
    pub valor_mercadoria: Option<Decimal>,
    pub frete_terceiro: Option<Decimal>,
    pub custos_extras: Option<Decimal>,
    pub adicionais_motorista: Option<Decimal>,
    pub percentual_seguro: Option<Decimal>,
    pub percentual_federal: Option<Decimal>,
    #[validate(custom(function = "valida_aliquota_icms"))]
    pub percentual_icms: Option<Decimal>,
    pub percentual_adiantamento: Option<Decimal>,
    pub acrescimo_saldo: Option<Decimal>,
}

impl FinanceiroPayload {
    fn into_input(self) -> FinanceiroInput {
        FinanceiroInput {
            faturamento: self.faturamento.unwrap_or_default(),
            valor_mercadoria: self.valor_mercadoria.unwrap_or_default(),
            frete_terceiro: self.frete_terceiro.unwrap_or_default(),
            custos_extras: self.custos_extras.unwrap_or_default(),
            adicionais_motorista: self.adicionais_motorista.unwrap_or_default(),
            percentual_seguro: self
                .percentual_seguro
                .unwrap_or_else(financeiro::percentual_seguro_padrao),
            percentual_federal: self
                .percentual_federal
                .unwrap_or_else(financeiro::percentual_federal_padrao),
            percentual_icms: self.percentual_icms.unwrap_or_default(),
            percentual_adiantamento: self
                .percentual_adiantamento
                .unwrap_or_else(financeiro::percentual_adiantamento_padrao),
            acrescimo_saldo: self.acrescimo_saldo.unwrap_or_default(),
        }
    }
}

fn tipo_frete_padrao() -> String {
    "dedicado".to_string()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCargaPayload {
    #[validate(length(min = 1, message = "O nome da carga é obrigatório."))]
    pub nome: String,
    pub data_carregamento: NaiveDate,
    pub cliente_id: Option<Uuid>,
    pub percurso: Option<String>,
    #[serde(default = "tipo_frete_padrao")]
    pub tipo_frete: String,
    pub motorista_id: Option<Uuid>,
    pub veiculo_id: Option<Uuid>,
    #[validate(nested)]
    pub financeiro: FinanceiroPayload,
}

// Na edição a alíquota é livre: cargas antigas podem carregar valores fora
// da tabela e ainda precisam ser salvas.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCargaPayload {
    #[validate(length(min = 1, message = "O nome da carga é obrigatório."))]
    pub nome: String,
    pub data_carregamento: NaiveDate,
    pub cliente_id: Option<Uuid>,
    pub percurso: Option<String>,
    pub status: Option<String>,
    pub motorista_id: Option<Uuid>,
    pub veiculo_id: Option<Uuid>,
    pub financeiro: Option<FinanceiroPayload>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransicaoStatusPayload {
    pub status: String,
}

/// Cria uma carga com financeiro e, se houver motorista, o pagamento inicial.
#[utoipa::path(
    post,
    path = "/api/cargas",
    request_body = CreateCargaPayload,
    responses(
        (status = 201, description = "Carga criada", body = CargaCompleta),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn create_carga(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCargaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let input = NovaCargaInput {
        nome: payload.nome,
        data_carregamento: payload.data_carregamento,
        cliente_id: payload.cliente_id,
        percurso: payload.percurso,
        tipo_frete: payload.tipo_frete,
        motorista_id: payload.motorista_id,
        veiculo_id: payload.veiculo_id,
        financeiro: payload.financeiro.into_input(),
    };

    let carga = app_state.carga_service.create_carga(input).await?;

    Ok((StatusCode::CREATED, Json(carga)))
}

/// Lista todas as cargas com cliente, financeiro e vínculo.
#[utoipa::path(
    get,
    path = "/api/cargas",
    responses(
        (status = 200, description = "Lista de cargas", body = Vec<CargaCompleta>)
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn get_cargas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cargas = app_state.carga_service.list_cargas().await?;
    Ok(Json(cargas))
}

/// Só cargas planejadas ou em trânsito.
#[utoipa::path(
    get,
    path = "/api/cargas/em-andamento",
    responses(
        (status = 200, description = "Cargas em andamento", body = Vec<CargaCompleta>)
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn get_cargas_em_andamento(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cargas = app_state.carga_service.list_em_andamento().await?;
    Ok(Json(cargas))
}

#[utoipa::path(
    get,
    path = "/api/cargas/{id}",
    params(("id" = Uuid, Path, description = "ID da carga")),
    responses(
        (status = 200, description = "Carga encontrada", body = CargaCompleta),
        (status = 404, description = "Carga não encontrada")
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn get_carga(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let carga = app_state.carga_service.get_carga(id).await?;
    Ok(Json(carga))
}

/// Edita a carga; se vierem campos financeiros, o snapshot é recalculado.
#[utoipa::path(
    put,
    path = "/api/cargas/{id}",
    params(("id" = Uuid, Path, description = "ID da carga")),
    request_body = UpdateCargaPayload,
    responses(
        (status = 200, description = "Carga atualizada", body = CargaCompleta),
        (status = 404, description = "Carga não encontrada"),
        (status = 422, description = "Transição de status inválida")
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn update_carga(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCargaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let input = AtualizaCargaInput {
        nome: payload.nome,
        data_carregamento: payload.data_carregamento,
        cliente_id: payload.cliente_id,
        percurso: payload.percurso,
        status: payload.status,
        motorista_id: payload.motorista_id,
        veiculo_id: payload.veiculo_id,
        financeiro: payload.financeiro.map(FinanceiroPayload::into_input),
    };

    let carga = app_state.carga_service.update_carga(id, input).await?;

    Ok(Json(carga))
}

/// Avança o status respeitando o fluxo planejada → em trânsito → entregue.
#[utoipa::path(
    put,
    path = "/api/cargas/{id}/status",
    params(("id" = Uuid, Path, description = "ID da carga")),
    request_body = TransicaoStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = CargaCompleta),
        (status = 404, description = "Carga não encontrada"),
        (status = 422, description = "Transição inválida")
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransicaoStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let carga = app_state
        .carga_service
        .transicionar_status(id, &payload.status)
        .await?;
    Ok(Json(carga))
}

/// Atalho do painel: marca a carga como entregue.
#[utoipa::path(
    post,
    path = "/api/cargas/{id}/entregar",
    params(("id" = Uuid, Path, description = "ID da carga")),
    responses(
        (status = 200, description = "Carga entregue", body = CargaCompleta),
        (status = 404, description = "Carga não encontrada"),
        (status = 422, description = "Carga já entregue")
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn marcar_entregue(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let carga = app_state.carga_service.marcar_entregue(id).await?;
    Ok(Json(carga))
}

#[utoipa::path(
    delete,
    path = "/api/cargas/{id}",
    params(("id" = Uuid, Path, description = "ID da carga")),
    responses(
        (status = 204, description = "Carga removida"),
        (status = 404, description = "Carga não encontrada")
    ),
    security(("api_jwt" = [])),
    tag = "Cargas"
)]
pub async fn delete_carga(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.carga_service.delete_carga(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

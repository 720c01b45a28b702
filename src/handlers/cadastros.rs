use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::cadastro::{Cliente, Motorista, Veiculo};

// ============================================================================
// CLIENTES
// ============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    pub cnpj_cpf: Option<String>,
    #[validate(email(message = "E-mail inválido."))]
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/clientes",
    request_body = ClientePayload,
    responses(
        (status = 201, description = "Cliente criado", body = Cliente),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn create_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .cadastro_service
        .create_cliente(
            &payload.nome,
            payload.cnpj_cpf.as_deref(),
            payload.email.as_deref(),
            payload.telefone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

#[utoipa::path(
    get,
    path = "/api/clientes",
    responses((status = 200, description = "Lista de clientes", body = Vec<Cliente>)),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn get_clientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.cadastro_service.list_clientes().await?;
    Ok(Json(clientes))
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Cliente),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn update_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .cadastro_service
        .update_cliente(
            id,
            &payload.nome,
            payload.cnpj_cpf.as_deref(),
            payload.email.as_deref(),
            payload.telefone.as_deref(),
        )
        .await?;

    Ok(Json(cliente))
}

#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn delete_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_cliente(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// MOTORISTAS
// ============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotoristaPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub dono_antt: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/motoristas",
    request_body = MotoristaPayload,
    responses(
        (status = 201, description = "Motorista criado", body = Motorista),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn create_motorista(
    State(app_state): State<AppState>,
    Json(payload): Json<MotoristaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let motorista = app_state
        .cadastro_service
        .create_motorista(
            &payload.nome,
            payload.cpf.as_deref(),
            payload.telefone.as_deref(),
            payload.dono_antt.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(motorista)))
}

#[utoipa::path(
    get,
    path = "/api/motoristas",
    responses((status = 200, description = "Lista de motoristas", body = Vec<Motorista>)),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn get_motoristas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let motoristas = app_state.cadastro_service.list_motoristas().await?;
    Ok(Json(motoristas))
}

#[utoipa::path(
    put,
    path = "/api/motoristas/{id}",
    params(("id" = Uuid, Path, description = "ID do motorista")),
    request_body = MotoristaPayload,
    responses(
        (status = 200, description = "Motorista atualizado", body = Motorista),
        (status = 404, description = "Motorista não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn update_motorista(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MotoristaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let motorista = app_state
        .cadastro_service
        .update_motorista(
            id,
            &payload.nome,
            payload.cpf.as_deref(),
            payload.telefone.as_deref(),
            payload.dono_antt.as_deref(),
        )
        .await?;

    Ok(Json(motorista))
}

#[utoipa::path(
    delete,
    path = "/api/motoristas/{id}",
    params(("id" = Uuid, Path, description = "ID do motorista")),
    responses(
        (status = 204, description = "Motorista removido"),
        (status = 404, description = "Motorista não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn delete_motorista(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_motorista(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// VEÍCULOS
// ============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VeiculoPayload {
    #[validate(length(min = 1, message = "O tipo é obrigatório."))]
    pub tipo: String,
    #[validate(length(min = 1, message = "A placa do veículo é obrigatória."))]
    pub placa_veiculo: String,
    pub placa_carreta_1: Option<String>,
    pub placa_carreta_2: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/veiculos",
    request_body = VeiculoPayload,
    responses(
        (status = 201, description = "Veículo criado", body = Veiculo),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn create_veiculo(
    State(app_state): State<AppState>,
    Json(payload): Json<VeiculoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let veiculo = app_state
        .cadastro_service
        .create_veiculo(
            &payload.tipo,
            &payload.placa_veiculo,
            payload.placa_carreta_1.as_deref(),
            payload.placa_carreta_2.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(veiculo)))
}

#[utoipa::path(
    get,
    path = "/api/veiculos",
    responses((status = 200, description = "Lista de veículos", body = Vec<Veiculo>)),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn get_veiculos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let veiculos = app_state.cadastro_service.list_veiculos().await?;
    Ok(Json(veiculos))
}

#[utoipa::path(
    put,
    path = "/api/veiculos/{id}",
    params(("id" = Uuid, Path, description = "ID do veículo")),
    request_body = VeiculoPayload,
    responses(
        (status = 200, description = "Veículo atualizado", body = Veiculo),
        (status = 404, description = "Veículo não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn update_veiculo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VeiculoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let veiculo = app_state
        .cadastro_service
        .update_veiculo(
            id,
            &payload.tipo,
            &payload.placa_veiculo,
            payload.placa_carreta_1.as_deref(),
            payload.placa_carreta_2.as_deref(),
        )
        .await?;

    Ok(Json(veiculo))
}

#[utoipa::path(
    delete,
    path = "/api/veiculos/{id}",
    params(("id" = Uuid, Path, description = "ID do veículo")),
    responses(
        (status = 204, description = "Veículo removido"),
        (status = 404, description = "Veículo não encontrado")
    ),
    security(("api_jwt" = [])),
    tag = "Cadastros"
)]
pub async fn delete_veiculo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_veiculo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

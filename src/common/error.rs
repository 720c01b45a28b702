use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Carga não encontrada")]
    CargaNotFound,

    #[error("Cadastro não encontrado")]
    CadastroNotFound,

    #[error("Pagamento não encontrado")]
    PagamentoNotFound,

    // Transição fora da máquina planejada -> em_transito -> entregue
    #[error("Transição de status inválida: {0} -> {1}")]
    TransicaoStatusInvalida(String, String),

    #[error("Status de carga desconhecido: {0}")]
    StatusDesconhecido(String),

    // Quitação de saldo exige o canhoto assinado em mãos
    #[error("Canhoto ainda não recebido")]
    CanhotoPendente,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::UserNotFound => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }
            AppError::CargaNotFound => {
                (StatusCode::NOT_FOUND, "Carga não encontrada.".to_string())
            }
            AppError::CadastroNotFound => {
                (StatusCode::NOT_FOUND, "Cadastro não encontrado.".to_string())
            }
            AppError::PagamentoNotFound => {
                (StatusCode::NOT_FOUND, "Pagamento não encontrado.".to_string())
            }
            AppError::TransicaoStatusInvalida(de, para) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("A carga não pode ir de '{}' para '{}'.", de, para),
            ),
            AppError::StatusDesconhecido(s) => (
                StatusCode::BAD_REQUEST,
                format!("Status de carga desconhecido: '{}'.", s),
            ),
            AppError::CanhotoPendente => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "O saldo só pode ser quitado após o recebimento do canhoto.".to_string(),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

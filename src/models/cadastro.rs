// src/models/cadastro.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: Uuid,

    #[schema(example = "Agroexport Ltda")]
    pub nome: String,

    #[schema(example = "12.345.678/0001-00")]
    pub cnpj_cpf: Option<String>,

    #[schema(example = "contato@agroexport.com.br")]
    pub email: Option<String>,

    pub telefone: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Motorista {
    pub id: Uuid,

    #[schema(example = "José Carlos")]
    pub nome: String,

    #[schema(example = "123.456.789-00")]
    pub cpf: Option<String>,

    pub telefone: Option<String>,

    // Proprietário do registro ANTT, quando o motorista roda no cavalo de outro
    pub dono_antt: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Veiculo {
    pub id: Uuid,

    #[schema(example = "carreta")]
    pub tipo: String,

    #[schema(example = "ABC1D23")]
    pub placa_veiculo: String,

    pub placa_carreta_1: Option<String>,
    pub placa_carreta_2: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}

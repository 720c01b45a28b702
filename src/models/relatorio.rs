// src/models/relatorio.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Granularidade {
    Diario,
    Semanal,
    Mensal,
}

/// Linha crua do financeiro usada pela bucketização dos relatórios.
#[derive(Debug, Clone, FromRow)]
pub struct FinanceiroResumoRow {
    pub faturamento: Decimal,
    pub lucro: Decimal,
    pub total_despesas: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}

// Um ponto da série do gráfico (um bucket do período)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadoFaturamento {
    #[schema(example = "ago/26")]
    pub periodo: String,
    pub faturamento: Decimal,
    pub lucro: Decimal,
    pub despesas: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoFinanceiro {
    pub total_faturamento: Decimal,
    pub total_lucro: Decimal,
    pub total_despesas: Decimal,
    /// 0 quando não houve faturamento no período (mesma guarda do núcleo).
    pub margem_lucro: Decimal,
    pub quantidade_cargas: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaturamentoPorCliente {
    #[schema(example = "Agroexport Ltda")]
    pub nome: String,
    pub faturamento: Decimal,
    pub lucro: Decimal,
    pub cargas: i64,
}

// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Janela dos cards de faturamento. Semana começa na segunda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Periodo {
    Dia,
    Semana,
    Mes,
}

// Os cards do topo do painel
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResumo {
    pub cargas_ativas: i64,
    pub em_transito: i64,
    pub entregues: i64,
    pub faturamento: Decimal,
}

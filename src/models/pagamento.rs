// src/models/pagamento.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PagamentoStatus {
    PagoParcial,
    Pago,
}

impl PagamentoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PagamentoStatus::PagoParcial => "pago_parcial",
            PagamentoStatus::Pago => "pago",
        }
    }

    /// Saldo zerado (ou negativo, após acerto manual) significa quitado.
    pub fn para_saldo(saldo_restante: Decimal) -> Self {
        if saldo_restante <= Decimal::ZERO {
            PagamentoStatus::Pago
        } else {
            PagamentoStatus::PagoParcial
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoMotorista {
    pub id: Uuid,
    pub carga_id: Uuid,
    pub motorista_id: Uuid,

    #[schema(example = "6000.00")]
    pub valor_total: Decimal,
    #[schema(example = "4800.00")]
    pub valor_pago: Decimal,
    #[schema(example = "80")]
    pub percentual_pago: Decimal,
    #[schema(example = "1200.00")]
    pub saldo_restante: Decimal,

    #[schema(example = "pago_parcial")]
    pub status: String,

    // O canhoto assinado destrava a quitação do saldo
    pub canhoto_recebido: bool,

    pub created_at: Option<DateTime<Utc>>,
}

/// Pagamento com o nome da carga e do motorista já resolvidos pelo JOIN,
/// para a listagem de saldos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoDetalhado {
    pub id: Uuid,
    pub carga_id: Uuid,
    pub motorista_id: Uuid,
    pub valor_total: Decimal,
    pub valor_pago: Decimal,
    pub percentual_pago: Decimal,
    pub saldo_restante: Decimal,
    pub status: String,
    pub canhoto_recebido: bool,
    pub created_at: Option<DateTime<Utc>>,

    #[schema(example = "Carga 1042 - Soja")]
    pub carga_nome: String,
    #[schema(example = "José Carlos")]
    pub motorista_nome: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_segue_o_saldo() {
        assert_eq!(
            PagamentoStatus::para_saldo(dec!(0.01)),
            PagamentoStatus::PagoParcial
        );
        assert_eq!(PagamentoStatus::para_saldo(Decimal::ZERO), PagamentoStatus::Pago);
        assert_eq!(PagamentoStatus::para_saldo(dec!(-50)), PagamentoStatus::Pago);
    }
}

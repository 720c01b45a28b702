// src/models/carga.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::cadastro::{Cliente, Motorista, Veiculo};

// --- Status (máquina linear planejada -> em_transito -> entregue) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CargaStatus {
    Planejada,
    EmTransito,
    Entregue,
}

impl CargaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CargaStatus::Planejada => "planejada",
            CargaStatus::EmTransito => "em_transito",
            CargaStatus::Entregue => "entregue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planejada" => Some(CargaStatus::Planejada),
            "em_transito" => Some(CargaStatus::EmTransito),
            "entregue" => Some(CargaStatus::Entregue),
            _ => None,
        }
    }

    /// Transições permitidas: o fluxo normal avança um passo por vez, e o
    /// atalho manual "marcar entregue" pula de qualquer estado aberto direto
    /// para entregue. Não há volta.
    pub fn pode_transicionar(&self, novo: CargaStatus) -> bool {
        match (self, novo) {
            (CargaStatus::Planejada, CargaStatus::EmTransito) => true,
            (CargaStatus::Planejada, CargaStatus::Entregue) => true,
            (CargaStatus::EmTransito, CargaStatus::Entregue) => true,
            _ => false,
        }
    }
}

// --- Structs (mapeando o Postgres) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Carga {
    pub id: Uuid,

    #[schema(example = "Carga 1042 - Soja")]
    pub nome: String,

    #[schema(value_type = String, format = Date, example = "2026-08-15")]
    pub data_carregamento: NaiveDate,

    pub cliente_id: Option<Uuid>,

    #[schema(example = "Uberlândia - MG → Santos - SP")]
    pub percurso: Option<String>,

    #[schema(example = "dedicado")]
    pub tipo_frete: String,

    #[schema(example = "docs")]
    pub etapa: String,

    pub classificada: bool,

    #[schema(example = "em_transito")]
    pub status: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Financeiro da carga (1:1). `valor_seguro`, `impostos`, `total_despesas` e
/// `lucro` são snapshot do momento do save, re-derivados a cada edição.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceiroCarga {
    pub id: Uuid,
    pub carga_id: Uuid,

    #[schema(example = "10000.00")]
    pub faturamento: Decimal,
    #[schema(example = "50000.00")]
    pub valor_mercadoria: Decimal,
    #[schema(example = "6000.00")]
    pub frete_terceiro: Decimal,
    #[schema(example = "200.00")]
    pub custos_extras: Decimal,
    #[schema(example = "0.065")]
    pub percentual_seguro: Decimal,

    pub valor_seguro: Decimal,
    pub impostos: Decimal,
    pub total_despesas: Decimal,
    pub lucro: Decimal,

    pub created_at: Option<DateTime<Utc>>,
}

// --- Resposta combinada da listagem ---

/// Linha achatada do LEFT JOIN de cargas com cliente, financeiro e vínculo
/// motorista/veículo. Montada pelo repositório, convertida em `CargaCompleta`
/// antes de sair pela API.
#[derive(Debug, Clone, FromRow)]
pub struct CargaDetalheRow {
    pub id: Uuid,
    pub nome: String,
    pub data_carregamento: NaiveDate,
    pub cliente_id: Option<Uuid>,
    pub percurso: Option<String>,
    pub tipo_frete: String,
    pub etapa: String,
    pub classificada: bool,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    pub cliente_nome: Option<String>,
    pub cliente_cnpj_cpf: Option<String>,
    pub cliente_email: Option<String>,
    pub cliente_telefone: Option<String>,
    pub cliente_created_at: Option<DateTime<Utc>>,

    pub financeiro_id: Option<Uuid>,
    pub faturamento: Option<Decimal>,
    pub valor_mercadoria: Option<Decimal>,
    pub frete_terceiro: Option<Decimal>,
    pub custos_extras: Option<Decimal>,
    pub percentual_seguro: Option<Decimal>,
    pub valor_seguro: Option<Decimal>,
    pub impostos: Option<Decimal>,
    pub total_despesas: Option<Decimal>,
    pub lucro: Option<Decimal>,
    pub financeiro_created_at: Option<DateTime<Utc>>,

    pub motorista_id: Option<Uuid>,
    pub motorista_nome: Option<String>,
    pub motorista_cpf: Option<String>,
    pub motorista_telefone: Option<String>,
    pub motorista_dono_antt: Option<String>,
    pub motorista_created_at: Option<DateTime<Utc>>,

    pub veiculo_id: Option<Uuid>,
    pub veiculo_tipo: Option<String>,
    pub veiculo_placa: Option<String>,
    pub veiculo_placa_carreta_1: Option<String>,
    pub veiculo_placa_carreta_2: Option<String>,
    pub veiculo_created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CargaCompleta {
    #[serde(flatten)]
    pub carga: Carga,
    pub financeiro: Option<FinanceiroCarga>,
    pub cliente: Option<Cliente>,
    pub motorista: Option<Motorista>,
    pub veiculo: Option<Veiculo>,
}

impl From<CargaDetalheRow> for CargaCompleta {
    fn from(r: CargaDetalheRow) -> Self {
        let carga = Carga {
            id: r.id,
            nome: r.nome,
            data_carregamento: r.data_carregamento,
            cliente_id: r.cliente_id,
            percurso: r.percurso,
            tipo_frete: r.tipo_frete,
            etapa: r.etapa,
            classificada: r.classificada,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        };

        let cliente = match (r.cliente_id, r.cliente_nome) {
            (Some(id), Some(nome)) => Some(Cliente {
                id,
                nome,
                cnpj_cpf: r.cliente_cnpj_cpf,
                email: r.cliente_email,
                telefone: r.cliente_telefone,
                created_at: r.cliente_created_at,
            }),
            _ => None,
        };

        let financeiro = match (r.financeiro_id, r.faturamento) {
            (Some(id), Some(faturamento)) => Some(FinanceiroCarga {
                id,
                carga_id: carga.id,
                faturamento,
                valor_mercadoria: r.valor_mercadoria.unwrap_or_default(),
                frete_terceiro: r.frete_terceiro.unwrap_or_default(),
                custos_extras: r.custos_extras.unwrap_or_default(),
                percentual_seguro: r.percentual_seguro.unwrap_or_default(),
                valor_seguro: r.valor_seguro.unwrap_or_default(),
                impostos: r.impostos.unwrap_or_default(),
                total_despesas: r.total_despesas.unwrap_or_default(),
                lucro: r.lucro.unwrap_or_default(),
                created_at: r.financeiro_created_at,
            }),
            _ => None,
        };

        let motorista = match (r.motorista_id, r.motorista_nome) {
            (Some(id), Some(nome)) => Some(Motorista {
                id,
                nome,
                cpf: r.motorista_cpf,
                telefone: r.motorista_telefone,
                dono_antt: r.motorista_dono_antt,
                created_at: r.motorista_created_at,
            }),
            _ => None,
        };

        let veiculo = match (r.veiculo_id, r.veiculo_tipo, r.veiculo_placa) {
            (Some(id), Some(tipo), Some(placa_veiculo)) => Some(Veiculo {
                id,
                tipo,
                placa_veiculo,
                placa_carreta_1: r.veiculo_placa_carreta_1,
                placa_carreta_2: r.veiculo_placa_carreta_2,
                created_at: r.veiculo_created_at,
            }),
            _ => None,
        };

        CargaCompleta {
            carga,
            financeiro,
            cliente,
            motorista,
            veiculo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluxo_normal_avanca() {
        assert!(CargaStatus::Planejada.pode_transicionar(CargaStatus::EmTransito));
        assert!(CargaStatus::EmTransito.pode_transicionar(CargaStatus::Entregue));
    }

    #[test]
    fn atalho_entrega_manual() {
        assert!(CargaStatus::Planejada.pode_transicionar(CargaStatus::Entregue));
    }

    #[test]
    fn sem_volta_nem_reentrada() {
        assert!(!CargaStatus::Entregue.pode_transicionar(CargaStatus::EmTransito));
        assert!(!CargaStatus::Entregue.pode_transicionar(CargaStatus::Planejada));
        assert!(!CargaStatus::Entregue.pode_transicionar(CargaStatus::Entregue));
        assert!(!CargaStatus::EmTransito.pode_transicionar(CargaStatus::Planejada));
        assert!(!CargaStatus::Planejada.pode_transicionar(CargaStatus::Planejada));
    }

    #[test]
    fn parse_e_as_str_sao_inversos() {
        for s in ["planejada", "em_transito", "entregue"] {
            assert_eq!(CargaStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(CargaStatus::parse("em-aberto").is_none());
    }
}

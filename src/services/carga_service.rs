// src/services/carga_service.rs

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CargaRepository, PagamentoRepository},
    models::{
        carga::{CargaCompleta, CargaStatus},
        pagamento::PagamentoStatus,
    },
    services::financeiro::{self, ParametrosFinanceiros},
};

// Etapa operacional com que toda carga nasce, par do status planejada
const ETAPA_INICIAL: &str = "docs";

/// Inputs financeiros como chegam do formulário, já coagidos para zero pelo
/// handler quando o campo veio vazio. A fonte de verdade são estes campos;
/// os derivados persistidos são só snapshot.
#[derive(Debug, Clone)]
pub struct FinanceiroInput {
    pub faturamento: Decimal,
    pub valor_mercadoria: Decimal,
    pub frete_terceiro: Decimal,
    pub custos_extras: Decimal,
    pub adicionais_motorista: Decimal,
    pub percentual_seguro: Decimal,
    pub percentual_federal: Decimal,
    pub percentual_icms: Decimal,
    pub percentual_adiantamento: Decimal,
    pub acrescimo_saldo: Decimal,
}

impl FinanceiroInput {
    pub fn parametros(&self) -> ParametrosFinanceiros {
        ParametrosFinanceiros {
            faturamento: self.faturamento,
            valor_mercadoria: self.valor_mercadoria,
            frete_motorista: self.frete_terceiro,
            custos_extras: self.custos_extras,
            adicionais_motorista: self.adicionais_motorista,
            percentual_seguro: self.percentual_seguro,
            percentual_federal: self.percentual_federal,
            percentual_icms: self.percentual_icms,
            percentual_adiantamento: self.percentual_adiantamento,
            acrescimo_saldo: self.acrescimo_saldo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NovaCargaInput {
    pub nome: String,
    pub data_carregamento: NaiveDate,
    pub cliente_id: Option<Uuid>,
    pub percurso: Option<String>,
    pub tipo_frete: String,
    pub financeiro: FinanceiroInput,
    pub motorista_id: Option<Uuid>,
    pub veiculo_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct AtualizaCargaInput {
    pub nome: String,
    pub data_carregamento: NaiveDate,
    pub cliente_id: Option<Uuid>,
    pub percurso: Option<String>,
    pub status: Option<String>,
    pub financeiro: Option<FinanceiroInput>,
    pub motorista_id: Option<Uuid>,
    pub veiculo_id: Option<Uuid>,
}

#[derive(Clone)]
pub struct CargaService {
    repo: CargaRepository,
    pagamento_repo: PagamentoRepository,
}

impl CargaService {
    pub fn new(repo: CargaRepository, pagamento_repo: PagamentoRepository) -> Self {
        Self {
            repo,
            pagamento_repo,
        }
    }

    /// Cria a carga, o financeiro e, se veio motorista, o vínculo e o
    /// pagamento inicial (adiantamento pago, saldo em aberto) numa transação
    /// só: ou entra tudo, ou nada.
    pub async fn create_carga(&self, input: NovaCargaInput) -> Result<CargaCompleta, AppError> {
        let resultado = financeiro::calcular(&input.financeiro.parametros());

        let mut tx = self.repo.pool().begin().await?;

        let carga = self
            .repo
            .create(
                &mut *tx,
                &input.nome,
                input.data_carregamento,
                input.cliente_id,
                input.percurso.as_deref(),
                &input.tipo_frete,
                ETAPA_INICIAL,
                CargaStatus::Planejada.as_str(),
            )
            .await?;

        self.repo
            .create_financeiro(
                &mut *tx,
                carga.id,
                input.financeiro.faturamento,
                input.financeiro.valor_mercadoria,
                input.financeiro.frete_terceiro,
                input.financeiro.custos_extras,
                input.financeiro.percentual_seguro,
                &resultado,
            )
            .await?;

        if let Some(motorista_id) = input.motorista_id {
            self.repo
                .upsert_vinculo(&mut *tx, carga.id, motorista_id, input.veiculo_id)
                .await?;

            let status = PagamentoStatus::para_saldo(resultado.saldo);
            let percentual_pago = input
                .financeiro
                .percentual_adiantamento
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

            self.pagamento_repo
                .create(
                    &mut *tx,
                    carga.id,
                    motorista_id,
                    input.financeiro.frete_terceiro,
                    resultado.valor_adiantamento,
                    percentual_pago,
                    resultado.saldo,
                    status.as_str(),
                )
                .await?;
        }

        tx.commit().await?;

        tracing::info!("Carga criada: {} ({})", carga.nome, carga.id);

        self.get_carga(carga.id).await
    }

    pub async fn list_cargas(&self) -> Result<Vec<CargaCompleta>, AppError> {
        let rows = self.repo.get_all(self.repo.pool()).await?;
        Ok(rows.into_iter().map(CargaCompleta::from).collect())
    }

    pub async fn list_em_andamento(&self) -> Result<Vec<CargaCompleta>, AppError> {
        let rows = self.repo.get_em_andamento(self.repo.pool()).await?;
        Ok(rows.into_iter().map(CargaCompleta::from).collect())
    }

    pub async fn get_carga(&self, id: Uuid) -> Result<CargaCompleta, AppError> {
        let row = self
            .repo
            .get_by_id(self.repo.pool(), id)
            .await?
            .ok_or(AppError::CargaNotFound)?;
        Ok(CargaCompleta::from(row))
    }

    /// Edita a carga e, se vieram inputs financeiros, re-deriva o snapshot a
    /// partir deles; o snapshot antigo é descartado, nunca corrigido no lugar.
    pub async fn update_carga(
        &self,
        id: Uuid,
        input: AtualizaCargaInput,
    ) -> Result<CargaCompleta, AppError> {
        let atual = self
            .repo
            .get_carga(self.repo.pool(), id)
            .await?
            .ok_or(AppError::CargaNotFound)?;

        let novo_status = match &input.status {
            Some(s) => {
                let novo = CargaStatus::parse(s)
                    .ok_or_else(|| AppError::StatusDesconhecido(s.clone()))?;
                let de = CargaStatus::parse(&atual.status)
                    .ok_or_else(|| AppError::StatusDesconhecido(atual.status.clone()))?;
                if novo != de && !de.pode_transicionar(novo) {
                    return Err(AppError::TransicaoStatusInvalida(
                        de.as_str().to_string(),
                        novo.as_str().to_string(),
                    ));
                }
                novo.as_str().to_string()
            }
            None => atual.status.clone(),
        };

        let mut tx = self.repo.pool().begin().await?;

        self.repo
            .update(
                &mut *tx,
                id,
                &input.nome,
                input.data_carregamento,
                input.cliente_id,
                input.percurso.as_deref(),
                &novo_status,
            )
            .await?;

        if let Some(fin) = &input.financeiro {
            let resultado = financeiro::calcular(&fin.parametros());
            self.repo
                .update_financeiro(
                    &mut *tx,
                    id,
                    fin.faturamento,
                    fin.valor_mercadoria,
                    fin.frete_terceiro,
                    fin.custos_extras,
                    fin.percentual_seguro,
                    &resultado,
                )
                .await?;
        }

        if let Some(motorista_id) = input.motorista_id {
            self.repo
                .upsert_vinculo(&mut *tx, id, motorista_id, input.veiculo_id)
                .await?;
        }

        tx.commit().await?;

        self.get_carga(id).await
    }

    pub async fn transicionar_status(
        &self,
        id: Uuid,
        novo_status: &str,
    ) -> Result<CargaCompleta, AppError> {
        let novo = CargaStatus::parse(novo_status)
            .ok_or_else(|| AppError::StatusDesconhecido(novo_status.to_string()))?;
        self.aplicar_transicao(id, novo).await
    }

    // Atalho manual do painel: pula direto para entregue de qualquer estado aberto
    pub async fn marcar_entregue(&self, id: Uuid) -> Result<CargaCompleta, AppError> {
        self.aplicar_transicao(id, CargaStatus::Entregue).await
    }

    async fn aplicar_transicao(
        &self,
        id: Uuid,
        novo: CargaStatus,
    ) -> Result<CargaCompleta, AppError> {
        let atual = self
            .repo
            .get_carga(self.repo.pool(), id)
            .await?
            .ok_or(AppError::CargaNotFound)?;

        let de = CargaStatus::parse(&atual.status)
            .ok_or_else(|| AppError::StatusDesconhecido(atual.status.clone()))?;

        if !de.pode_transicionar(novo) {
            return Err(AppError::TransicaoStatusInvalida(
                de.as_str().to_string(),
                novo.as_str().to_string(),
            ));
        }

        // Se a carga mudou de estado entre a leitura e o UPDATE, a troca não
        // casa com o estado esperado e é recusada em vez de atropelar.
        self.repo
            .update_status(self.repo.pool(), id, de.as_str(), novo.as_str())
            .await?
            .ok_or_else(|| {
                AppError::TransicaoStatusInvalida(
                    de.as_str().to_string(),
                    novo.as_str().to_string(),
                )
            })?;

        tracing::info!("Carga {} foi de {} para {}", id, de.as_str(), novo.as_str());

        self.get_carga(id).await
    }

    pub async fn delete_carga(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(self.repo.pool(), id).await
    }
}

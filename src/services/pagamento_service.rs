// src/services/pagamento_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PagamentoRepository,
    models::pagamento::{PagamentoDetalhado, PagamentoMotorista, PagamentoStatus},
    services::financeiro::{self, RecalculoPagamento},
};

/// Quitação do saldo em uma tacada: o total vira pago e o saldo zera.
/// O canhoto assinado é pré-condição; sem ele a quitação é recusada.
pub fn quitacao(pagamento: &PagamentoMotorista) -> Result<RecalculoPagamento, AppError> {
    if !pagamento.canhoto_recebido {
        return Err(AppError::CanhotoPendente);
    }

    Ok(RecalculoPagamento {
        novo_total: pagamento.valor_total,
        saldo_restante: Decimal::ZERO,
        percentual_pago: Decimal::ONE_HUNDRED,
    })
}

#[derive(Clone)]
pub struct PagamentoService {
    repo: PagamentoRepository,
}

impl PagamentoService {
    pub fn new(repo: PagamentoRepository) -> Self {
        Self { repo }
    }

    pub async fn list_pagamentos(&self) -> Result<Vec<PagamentoDetalhado>, AppError> {
        self.repo.get_all(self.repo.pool()).await
    }

    pub async fn list_pendentes(&self) -> Result<Vec<PagamentoDetalhado>, AppError> {
        self.repo
            .get_by_status(self.repo.pool(), PagamentoStatus::PagoParcial.as_str())
            .await
    }

    /// Ajusta o pagamento: adicionais (diárias, chapas, diversos) aumentam o
    /// total devido e o saldo é re-derivado; o status acompanha o saldo.
    pub async fn atualizar_pagamento(
        &self,
        id: Uuid,
        valor_pago: Option<Decimal>,
        adicionais: Decimal,
    ) -> Result<PagamentoMotorista, AppError> {
        let atual = self
            .repo
            .get_by_id(self.repo.pool(), id)
            .await?
            .ok_or(AppError::PagamentoNotFound)?;

        let valor_pago = valor_pago.unwrap_or(atual.valor_pago);
        let recalculo = financeiro::recalcular_pagamento(atual.valor_total, valor_pago, adicionais);
        let status = PagamentoStatus::para_saldo(recalculo.saldo_restante);

        self.repo
            .update_valores(
                self.repo.pool(),
                id,
                recalculo.novo_total,
                valor_pago,
                recalculo.percentual_pago,
                recalculo.saldo_restante,
                status.as_str(),
            )
            .await
    }

    pub async fn confirmar_canhoto(&self, id: Uuid) -> Result<PagamentoMotorista, AppError> {
        let pagamento = self.repo.confirmar_canhoto(self.repo.pool(), id).await?;
        tracing::info!("Canhoto recebido para o pagamento {}", id);
        Ok(pagamento)
    }

    /// Quita o saldo restante de uma vez, via [`quitacao`].
    pub async fn quitar_saldo(&self, id: Uuid) -> Result<PagamentoMotorista, AppError> {
        let atual = self
            .repo
            .get_by_id(self.repo.pool(), id)
            .await?
            .ok_or(AppError::PagamentoNotFound)?;

        let quit = quitacao(&atual)?;

        self.repo
            .update_valores(
                self.repo.pool(),
                id,
                quit.novo_total,
                quit.novo_total,
                quit.percentual_pago,
                quit.saldo_restante,
                PagamentoStatus::Pago.as_str(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pagamento(canhoto_recebido: bool) -> PagamentoMotorista {
        PagamentoMotorista {
            id: Uuid::new_v4(),
            carga_id: Uuid::new_v4(),
            motorista_id: Uuid::new_v4(),
            valor_total: dec!(6000),
            valor_pago: dec!(4800),
            percentual_pago: dec!(80),
            saldo_restante: dec!(1200),
            status: PagamentoStatus::PagoParcial.as_str().to_string(),
            canhoto_recebido,
            created_at: None,
        }
    }

    #[test]
    fn quitacao_sem_canhoto_e_recusada() {
        let resultado = quitacao(&pagamento(false));
        assert!(matches!(resultado, Err(AppError::CanhotoPendente)));
    }

    #[test]
    fn quitacao_com_canhoto_zera_o_saldo() {
        let quit = quitacao(&pagamento(true)).unwrap();

        assert_eq!(quit.novo_total, dec!(6000));
        assert_eq!(quit.saldo_restante, Decimal::ZERO);
        assert_eq!(quit.percentual_pago, Decimal::ONE_HUNDRED);
    }
}

// src/db/pagamento_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pagamento::{PagamentoDetalhado, PagamentoMotorista},
};

const SELECT_DETALHADO: &str = r#"
    SELECT
        p.id, p.carga_id, p.motorista_id, p.valor_total, p.valor_pago,
        p.percentual_pago, p.saldo_restante, p.status, p.canhoto_recebido,
        p.created_at,
        c.nome AS carga_nome, m.nome AS motorista_nome
    FROM pagamentos_motoristas p
    JOIN cargas c ON c.id = p.carga_id
    JOIN motoristas m ON m.id = p.motorista_id
"#;

#[derive(Clone)]
pub struct PagamentoRepository {
    pool: PgPool,
}

impl PagamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        carga_id: Uuid,
        motorista_id: Uuid,
        valor_total: Decimal,
        valor_pago: Decimal,
        percentual_pago: Decimal,
        saldo_restante: Decimal,
        status: &str,
    ) -> Result<PagamentoMotorista, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, PagamentoMotorista>(
            r#"
            INSERT INTO pagamentos_motoristas (
                carga_id, motorista_id, valor_total, valor_pago,
                percentual_pago, saldo_restante, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, carga_id, motorista_id, valor_total, valor_pago,
                      percentual_pago, saldo_restante, status, canhoto_recebido, created_at
            "#,
        )
        .bind(carga_id)
        .bind(motorista_id)
        .bind(valor_total)
        .bind(valor_pago)
        .bind(percentual_pago)
        .bind(saldo_restante)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn get_all<'e, E>(&self, executor: E) -> Result<Vec<PagamentoDetalhado>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{} ORDER BY p.created_at DESC", SELECT_DETALHADO);
        let pagamentos = sqlx::query_as::<_, PagamentoDetalhado>(&sql)
            .fetch_all(executor)
            .await?;

        Ok(pagamentos)
    }

    pub async fn get_by_status<'e, E>(
        &self,
        executor: E,
        status: &str,
    ) -> Result<Vec<PagamentoDetalhado>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "{} WHERE p.status = $1 ORDER BY p.created_at DESC",
            SELECT_DETALHADO
        );
        let pagamentos = sqlx::query_as::<_, PagamentoDetalhado>(&sql)
            .bind(status)
            .fetch_all(executor)
            .await?;

        Ok(pagamentos)
    }

    pub async fn get_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<PagamentoMotorista>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, PagamentoMotorista>(
            r#"
            SELECT id, carga_id, motorista_id, valor_total, valor_pago,
                   percentual_pago, saldo_restante, status, canhoto_recebido, created_at
            FROM pagamentos_motoristas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn update_valores<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        valor_total: Decimal,
        valor_pago: Decimal,
        percentual_pago: Decimal,
        saldo_restante: Decimal,
        status: &str,
    ) -> Result<PagamentoMotorista, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, PagamentoMotorista>(
            r#"
            UPDATE pagamentos_motoristas
            SET valor_total = $2, valor_pago = $3, percentual_pago = $4,
                saldo_restante = $5, status = $6
            WHERE id = $1
            RETURNING id, carga_id, motorista_id, valor_total, valor_pago,
                      percentual_pago, saldo_restante, status, canhoto_recebido, created_at
            "#,
        )
        .bind(id)
        .bind(valor_total)
        .bind(valor_pago)
        .bind(percentual_pago)
        .bind(saldo_restante)
        .bind(status)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::PagamentoNotFound)?;

        Ok(pagamento)
    }

    pub async fn confirmar_canhoto<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<PagamentoMotorista, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, PagamentoMotorista>(
            r#"
            UPDATE pagamentos_motoristas
            SET canhoto_recebido = true
            WHERE id = $1
            RETURNING id, carga_id, motorista_id, valor_total, valor_pago,
                      percentual_pago, saldo_restante, status, canhoto_recebido, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::PagamentoNotFound)?;

        Ok(pagamento)
    }
}

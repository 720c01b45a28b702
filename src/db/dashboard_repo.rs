// src/db/dashboard_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, PgPool, Postgres};

use crate::{common::error::AppError, models::dashboard::DashboardResumo};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // Resumo dos cards do painel. Roda tudo numa transação para o snapshot
    // sair consistente entre as contagens e a soma.
    pub async fn get_resumo<'e, A>(
        &self,
        conn: A,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<DashboardResumo, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let em_transito: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cargas WHERE status = 'em_transito'")
                .fetch_one(&mut *tx)
                .await?;

        let entregues: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cargas WHERE status = 'entregue'")
                .fetch_one(&mut *tx)
                .await?;

        let faturamento: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(faturamento), 0)
            FROM financeiro_cargas
            WHERE created_at >= $1 AND created_at < $2
            "#,
        )
        .bind(inicio)
        .bind(fim)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DashboardResumo {
            // No painel original "ativas" são as cargas rodando agora
            cargas_ativas: em_transito,
            em_transito,
            entregues,
            faturamento,
        })
    }

    pub async fn soma_faturamento<'e, A>(
        &self,
        conn: A,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<Decimal, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(faturamento), 0)
            FROM financeiro_cargas
            WHERE created_at >= $1 AND created_at < $2
            "#,
        )
        .bind(inicio)
        .bind(fim)
        .fetch_one(&mut *conn)
        .await?;

        Ok(total)
    }
}

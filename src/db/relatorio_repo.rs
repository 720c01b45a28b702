// src/db/relatorio_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::relatorio::{FaturamentoPorCliente, FinanceiroResumoRow},
};

#[derive(Clone)]
pub struct RelatorioRepository {
    pool: PgPool,
}

impl RelatorioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // Linhas cruas do financeiro desde `inicio`; a bucketização por período
    // acontece no serviço, onde dá para testar sem banco.
    pub async fn financeiro_desde<'e, E>(
        &self,
        executor: E,
        inicio: DateTime<Utc>,
    ) -> Result<Vec<FinanceiroResumoRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, FinanceiroResumoRow>(
            r#"
            SELECT faturamento, lucro, total_despesas, created_at
            FROM financeiro_cargas
            WHERE created_at >= $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(inicio)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Ranking de clientes por faturamento (cargas sem cliente entram agrupadas)
    pub async fn faturamento_por_cliente<'e, E>(
        &self,
        executor: E,
        limite: i64,
    ) -> Result<Vec<FaturamentoPorCliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ranking = sqlx::query_as::<_, FaturamentoPorCliente>(
            r#"
            SELECT
                COALESCE(cl.nome, 'Sem cliente') AS nome,
                COALESCE(SUM(f.faturamento), 0) AS faturamento,
                COALESCE(SUM(f.lucro), 0) AS lucro,
                COUNT(c.id) AS cargas
            FROM cargas c
            LEFT JOIN clientes cl ON cl.id = c.cliente_id
            LEFT JOIN financeiro_cargas f ON f.carga_id = c.id
            GROUP BY cl.nome
            ORDER BY faturamento DESC
            LIMIT $1
            "#,
        )
        .bind(limite)
        .fetch_all(executor)
        .await?;

        Ok(ranking)
    }
}

// src/db/carga_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::carga::{Carga, CargaDetalheRow, FinanceiroCarga},
    services::financeiro::ResultadoFinanceiro,
};

// SELECT achatado da carga com cliente, financeiro e motorista/veículo.
// Cada listagem reaproveita este bloco e só muda o WHERE.
const SELECT_DETALHE: &str = r#"
    SELECT
        c.id, c.nome, c.data_carregamento, c.cliente_id, c.percurso, c.tipo_frete,
        c.etapa, c.classificada, c.status, c.created_at, c.updated_at,
        cl.nome AS cliente_nome, cl.cnpj_cpf AS cliente_cnpj_cpf,
        cl.email AS cliente_email, cl.telefone AS cliente_telefone,
        cl.created_at AS cliente_created_at,
        f.id AS financeiro_id, f.faturamento, f.valor_mercadoria, f.frete_terceiro,
        f.custos_extras, f.percentual_seguro, f.valor_seguro, f.impostos,
        f.total_despesas, f.lucro, f.created_at AS financeiro_created_at,
        mv.motorista_id, m.nome AS motorista_nome, m.cpf AS motorista_cpf,
        m.telefone AS motorista_telefone, m.dono_antt AS motorista_dono_antt,
        m.created_at AS motorista_created_at,
        mv.veiculo_id, v.tipo AS veiculo_tipo, v.placa_veiculo AS veiculo_placa,
        v.placa_carreta_1 AS veiculo_placa_carreta_1,
        v.placa_carreta_2 AS veiculo_placa_carreta_2,
        v.created_at AS veiculo_created_at
    FROM cargas c
    LEFT JOIN clientes cl ON cl.id = c.cliente_id
    LEFT JOIN financeiro_cargas f ON f.carga_id = c.id
    LEFT JOIN carga_motorista_veiculo mv ON mv.carga_id = c.id
    LEFT JOIN motoristas m ON m.id = mv.motorista_id
    LEFT JOIN veiculos v ON v.id = mv.veiculo_id
"#;

#[derive(Clone)]
pub struct CargaRepository {
    pool: PgPool,
}

impl CargaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    //  CARGAS
    // =========================================================================

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        data_carregamento: NaiveDate,
        cliente_id: Option<Uuid>,
        percurso: Option<&str>,
        tipo_frete: &str,
        etapa: &str,
        status: &str,
    ) -> Result<Carga, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let carga = sqlx::query_as::<_, Carga>(
            r#"
            INSERT INTO cargas (nome, data_carregamento, cliente_id, percurso, tipo_frete, etapa, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, nome, data_carregamento, cliente_id, percurso, tipo_frete,
                      etapa, classificada, status, created_at, updated_at
            "#,
        )
        .bind(nome)
        .bind(data_carregamento)
        .bind(cliente_id)
        .bind(percurso)
        .bind(tipo_frete)
        .bind(etapa)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(carga)
    }

    pub async fn get_all<'e, E>(&self, executor: E) -> Result<Vec<CargaDetalheRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{} ORDER BY c.data_carregamento DESC", SELECT_DETALHE);
        let rows = sqlx::query_as::<_, CargaDetalheRow>(&sql)
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    // Cargas em andamento = planejadas ou em trânsito
    pub async fn get_em_andamento<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<CargaDetalheRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "{} WHERE c.status IN ('planejada', 'em_transito') ORDER BY c.data_carregamento DESC",
            SELECT_DETALHE
        );
        let rows = sqlx::query_as::<_, CargaDetalheRow>(&sql)
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    pub async fn get_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<CargaDetalheRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{} WHERE c.id = $1", SELECT_DETALHE);
        let row = sqlx::query_as::<_, CargaDetalheRow>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(row)
    }

    // Versão enxuta, sem JOINs, para checagens de status
    pub async fn get_carga<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Carga>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let carga = sqlx::query_as::<_, Carga>(
            r#"
            SELECT id, nome, data_carregamento, cliente_id, percurso, tipo_frete,
                   etapa, classificada, status, created_at, updated_at
            FROM cargas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(carga)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        data_carregamento: NaiveDate,
        cliente_id: Option<Uuid>,
        percurso: Option<&str>,
        status: &str,
    ) -> Result<Carga, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let carga = sqlx::query_as::<_, Carga>(
            r#"
            UPDATE cargas
            SET nome = $2, data_carregamento = $3, cliente_id = $4, percurso = $5,
                status = $6, updated_at = now()
            WHERE id = $1
            RETURNING id, nome, data_carregamento, cliente_id, percurso, tipo_frete,
                      etapa, classificada, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(data_carregamento)
        .bind(cliente_id)
        .bind(percurso)
        .bind(status)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CargaNotFound)?;

        Ok(carga)
    }

    /// Troca de status condicionada ao estado esperado: se outra transição
    /// passou na frente, nenhuma linha casa e devolvemos `None`.
    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        de: &str,
        para: &str,
    ) -> Result<Option<Carga>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let carga = sqlx::query_as::<_, Carga>(
            r#"
            UPDATE cargas
            SET status = $3, updated_at = now()
            WHERE id = $1 AND status = $2
            RETURNING id, nome, data_carregamento, cliente_id, percurso, tipo_frete,
                      etapa, classificada, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(de)
        .bind(para)
        .fetch_optional(executor)
        .await?;

        Ok(carga)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM cargas WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::CargaNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  FINANCEIRO (inputs + snapshot calculado)
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn create_financeiro<'e, E>(
        &self,
        executor: E,
        carga_id: Uuid,
        faturamento: Decimal,
        valor_mercadoria: Decimal,
        frete_terceiro: Decimal,
        custos_extras: Decimal,
        percentual_seguro: Decimal,
        resultado: &ResultadoFinanceiro,
    ) -> Result<FinanceiroCarga, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let financeiro = sqlx::query_as::<_, FinanceiroCarga>(
            r#"
            INSERT INTO financeiro_cargas (
                carga_id, faturamento, valor_mercadoria, frete_terceiro, custos_extras,
                percentual_seguro, valor_seguro, impostos, total_despesas, lucro
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, carga_id, faturamento, valor_mercadoria, frete_terceiro,
                      custos_extras, percentual_seguro, valor_seguro, impostos,
                      total_despesas, lucro, created_at
            "#,
        )
        .bind(carga_id)
        .bind(faturamento)
        .bind(valor_mercadoria)
        .bind(frete_terceiro)
        .bind(custos_extras)
        .bind(percentual_seguro)
        .bind(resultado.valor_seguro)
        .bind(resultado.total_impostos)
        .bind(resultado.total_despesas)
        .bind(resultado.lucro)
        .fetch_one(executor)
        .await?;

        Ok(financeiro)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_financeiro<'e, E>(
        &self,
        executor: E,
        carga_id: Uuid,
        faturamento: Decimal,
        valor_mercadoria: Decimal,
        frete_terceiro: Decimal,
        custos_extras: Decimal,
        percentual_seguro: Decimal,
        resultado: &ResultadoFinanceiro,
    ) -> Result<FinanceiroCarga, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let financeiro = sqlx::query_as::<_, FinanceiroCarga>(
            r#"
            UPDATE financeiro_cargas
            SET faturamento = $2, valor_mercadoria = $3, frete_terceiro = $4,
                custos_extras = $5, percentual_seguro = $6, valor_seguro = $7,
                impostos = $8, total_despesas = $9, lucro = $10
            WHERE carga_id = $1
            RETURNING id, carga_id, faturamento, valor_mercadoria, frete_terceiro,
                      custos_extras, percentual_seguro, valor_seguro, impostos,
                      total_despesas, lucro, created_at
            "#,
        )
        .bind(carga_id)
        .bind(faturamento)
        .bind(valor_mercadoria)
        .bind(frete_terceiro)
        .bind(custos_extras)
        .bind(percentual_seguro)
        .bind(resultado.valor_seguro)
        .bind(resultado.total_impostos)
        .bind(resultado.total_despesas)
        .bind(resultado.lucro)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CargaNotFound)?;

        Ok(financeiro)
    }

    // =========================================================================
    //  VÍNCULO MOTORISTA / VEÍCULO
    // =========================================================================

    pub async fn upsert_vinculo<'e, E>(
        &self,
        executor: E,
        carga_id: Uuid,
        motorista_id: Uuid,
        veiculo_id: Option<Uuid>,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO carga_motorista_veiculo (carga_id, motorista_id, veiculo_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (carga_id)
            DO UPDATE SET motorista_id = EXCLUDED.motorista_id, veiculo_id = EXCLUDED.veiculo_id
            "#,
        )
        .bind(carga_id)
        .bind(motorista_id)
        .bind(veiculo_id)
        .execute(executor)
        .await?;

        Ok(())
    }
}

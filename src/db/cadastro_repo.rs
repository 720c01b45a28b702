// src/db/cadastro_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cadastro::{Cliente, Motorista, Veiculo},
};

#[derive(Clone)]
pub struct CadastroRepository {
    pool: PgPool,
}

impl CadastroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn create_cliente<'e, E>(
        &self,
        executor: E,
        nome: &str,
        cnpj_cpf: Option<&str>,
        email: Option<&str>,
        telefone: Option<&str>,
    ) -> Result<Cliente, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nome, cnpj_cpf, email, telefone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, cnpj_cpf, email, telefone, created_at
            "#,
        )
        .bind(nome)
        .bind(cnpj_cpf)
        .bind(email)
        .bind(telefone)
        .fetch_one(executor)
        .await?;

        Ok(cliente)
    }

    pub async fn get_all_clientes<'e, E>(&self, executor: E) -> Result<Vec<Cliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, cnpj_cpf, email, telefone, created_at FROM clientes ORDER BY nome ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(clientes)
    }

    pub async fn update_cliente<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        cnpj_cpf: Option<&str>,
        email: Option<&str>,
        telefone: Option<&str>,
    ) -> Result<Cliente, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome = $2, cnpj_cpf = $3, email = $4, telefone = $5
            WHERE id = $1
            RETURNING id, nome, cnpj_cpf, email, telefone, created_at
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(cnpj_cpf)
        .bind(email)
        .bind(telefone)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CadastroNotFound)?;

        Ok(cliente)
    }

    pub async fn delete_cliente<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::CadastroNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  MOTORISTAS
    // =========================================================================

    pub async fn create_motorista<'e, E>(
        &self,
        executor: E,
        nome: &str,
        cpf: Option<&str>,
        telefone: Option<&str>,
        dono_antt: Option<&str>,
    ) -> Result<Motorista, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            INSERT INTO motoristas (nome, cpf, telefone, dono_antt)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, cpf, telefone, dono_antt, created_at
            "#,
        )
        .bind(nome)
        .bind(cpf)
        .bind(telefone)
        .bind(dono_antt)
        .fetch_one(executor)
        .await?;

        Ok(motorista)
    }

    pub async fn get_all_motoristas<'e, E>(&self, executor: E) -> Result<Vec<Motorista>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let motoristas = sqlx::query_as::<_, Motorista>(
            "SELECT id, nome, cpf, telefone, dono_antt, created_at FROM motoristas ORDER BY nome ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(motoristas)
    }

    pub async fn update_motorista<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        cpf: Option<&str>,
        telefone: Option<&str>,
        dono_antt: Option<&str>,
    ) -> Result<Motorista, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            UPDATE motoristas
            SET nome = $2, cpf = $3, telefone = $4, dono_antt = $5
            WHERE id = $1
            RETURNING id, nome, cpf, telefone, dono_antt, created_at
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(cpf)
        .bind(telefone)
        .bind(dono_antt)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CadastroNotFound)?;

        Ok(motorista)
    }

    pub async fn delete_motorista<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM motoristas WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::CadastroNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  VEÍCULOS
    // =========================================================================

    pub async fn create_veiculo<'e, E>(
        &self,
        executor: E,
        tipo: &str,
        placa_veiculo: &str,
        placa_carreta_1: Option<&str>,
        placa_carreta_2: Option<&str>,
    ) -> Result<Veiculo, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            INSERT INTO veiculos (tipo, placa_veiculo, placa_carreta_1, placa_carreta_2)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tipo, placa_veiculo, placa_carreta_1, placa_carreta_2, created_at
            "#,
        )
        .bind(tipo)
        .bind(placa_veiculo)
        .bind(placa_carreta_1)
        .bind(placa_carreta_2)
        .fetch_one(executor)
        .await?;

        Ok(veiculo)
    }

    pub async fn get_all_veiculos<'e, E>(&self, executor: E) -> Result<Vec<Veiculo>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let veiculos = sqlx::query_as::<_, Veiculo>(
            r#"
            SELECT id, tipo, placa_veiculo, placa_carreta_1, placa_carreta_2, created_at
            FROM veiculos
            ORDER BY placa_veiculo ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(veiculos)
    }

    pub async fn update_veiculo<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        tipo: &str,
        placa_veiculo: &str,
        placa_carreta_1: Option<&str>,
        placa_carreta_2: Option<&str>,
    ) -> Result<Veiculo, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            UPDATE veiculos
            SET tipo = $2, placa_veiculo = $3, placa_carreta_1 = $4, placa_carreta_2 = $5
            WHERE id = $1
            RETURNING id, tipo, placa_veiculo, placa_carreta_1, placa_carreta_2, created_at
            "#,
        )
        .bind(id)
        .bind(tipo)
        .bind(placa_veiculo)
        .bind(placa_carreta_1)
        .bind(placa_carreta_2)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CadastroNotFound)?;

        Ok(veiculo)
    }

    pub async fn delete_veiculo<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::CadastroNotFound);
        }
        Ok(())
    }
}

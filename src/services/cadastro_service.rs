// src/services/cadastro_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CadastroRepository,
    models::cadastro::{Cliente, Motorista, Veiculo},
};

// CRUD fino sobre os cadastros; a regra de negócio mora nas cargas.
#[derive(Clone)]
pub struct CadastroService {
    repo: CadastroRepository,
}

impl CadastroService {
    pub fn new(repo: CadastroRepository) -> Self {
        Self { repo }
    }

    // --- Clientes ---

    pub async fn create_cliente(
        &self,
        nome: &str,
        cnpj_cpf: Option<&str>,
        email: Option<&str>,
        telefone: Option<&str>,
    ) -> Result<Cliente, AppError> {
        self.repo
            .create_cliente(self.repo.pool(), nome, cnpj_cpf, email, telefone)
            .await
    }

    pub async fn list_clientes(&self) -> Result<Vec<Cliente>, AppError> {
        self.repo.get_all_clientes(self.repo.pool()).await
    }

    pub async fn update_cliente(
        &self,
        id: Uuid,
        nome: &str,
        cnpj_cpf: Option<&str>,
        email: Option<&str>,
        telefone: Option<&str>,
    ) -> Result<Cliente, AppError> {
        self.repo
            .update_cliente(self.repo.pool(), id, nome, cnpj_cpf, email, telefone)
            .await
    }

    pub async fn delete_cliente(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_cliente(self.repo.pool(), id).await
    }

    // --- Motoristas ---

    pub async fn create_motorista(
        &self,
        nome: &str,
        cpf: Option<&str>,
        telefone: Option<&str>,
        dono_antt: Option<&str>,
    ) -> Result<Motorista, AppError> {
        self.repo
            .create_motorista(self.repo.pool(), nome, cpf, telefone, dono_antt)
            .await
    }

    pub async fn list_motoristas(&self) -> Result<Vec<Motorista>, AppError> {
        self.repo.get_all_motoristas(self.repo.pool()).await
    }

    pub async fn update_motorista(
        &self,
        id: Uuid,
        nome: &str,
        cpf: Option<&str>,
        telefone: Option<&str>,
        dono_antt: Option<&str>,
    ) -> Result<Motorista, AppError> {
        self.repo
            .update_motorista(self.repo.pool(), id, nome, cpf, telefone, dono_antt)
            .await
    }

    pub async fn delete_motorista(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_motorista(self.repo.pool(), id).await
    }

    // --- Veículos ---

    pub async fn create_veiculo(
        &self,
        tipo: &str,
        placa_veiculo: &str,
        placa_carreta_1: Option<&str>,
        placa_carreta_2: Option<&str>,
    ) -> Result<Veiculo, AppError> {
        self.repo
            .create_veiculo(
                self.repo.pool(),
                tipo,
                placa_veiculo,
                placa_carreta_1,
                placa_carreta_2,
            )
            .await
    }

    pub async fn list_veiculos(&self) -> Result<Vec<Veiculo>, AppError> {
        self.repo.get_all_veiculos(self.repo.pool()).await
    }

    pub async fn update_veiculo(
        &self,
        id: Uuid,
        tipo: &str,
        placa_veiculo: &str,
        placa_carreta_1: Option<&str>,
        placa_carreta_2: Option<&str>,
    ) -> Result<Veiculo, AppError> {
        self.repo
            .update_veiculo(
                self.repo.pool(),
                id,
                tipo,
                placa_veiculo,
                placa_carreta_1,
                placa_carreta_2,
            )
            .await
    }

    pub async fn delete_veiculo(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_veiculo(self.repo.pool(), id).await
    }
}

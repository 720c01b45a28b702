// src/services/dashboard_service.rs

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{DashboardResumo, Periodo},
};

fn inicio_do_dia(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

/// Janela [inicio, fim) do período, relativa a `agora`. Dia corrente, semana
/// corrente começando na segunda, ou mês corrente.
pub fn intervalo_do_periodo(periodo: Periodo, agora: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let hoje = agora.date_naive();
    match periodo {
        Periodo::Dia => (
            inicio_do_dia(hoje),
            inicio_do_dia(hoje + Duration::days(1)),
        ),
        Periodo::Semana => {
            let segunda = hoje - Duration::days(hoje.weekday().num_days_from_monday() as i64);
            (
                inicio_do_dia(segunda),
                inicio_do_dia(segunda + Duration::days(7)),
            )
        }
        Periodo::Mes => {
            let primeiro = NaiveDate::from_ymd_opt(hoje.year(), hoje.month(), 1).unwrap();
            let proximo = if hoje.month() == 12 {
                NaiveDate::from_ymd_opt(hoje.year() + 1, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(hoje.year(), hoje.month() + 1, 1).unwrap()
            };
            (inicio_do_dia(primeiro), inicio_do_dia(proximo))
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn get_resumo(&self, periodo: Periodo) -> Result<DashboardResumo, AppError> {
        let (inicio, fim) = intervalo_do_periodo(periodo, Utc::now());
        self.repo.get_resumo(self.repo.pool(), inicio, fim).await
    }

    pub async fn get_faturamento(&self, periodo: Periodo) -> Result<Decimal, AppError> {
        let (inicio, fim) = intervalo_do_periodo(periodo, Utc::now());
        self.repo
            .soma_faturamento(self.repo.pool(), inicio, fim)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn em(ano: i32, mes: u32, dia: u32, hora: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(ano, mes, dia, hora, 30, 0).unwrap()
    }

    #[test]
    fn dia_cobre_o_dia_corrente() {
        let (inicio, fim) = intervalo_do_periodo(Periodo::Dia, em(2026, 8, 28, 15));
        assert_eq!(inicio.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
        assert_eq!(inicio.time(), NaiveTime::MIN);
        assert_eq!(fim - inicio, Duration::days(1));
    }

    #[test]
    fn semana_comeca_na_segunda() {
        // 2026-08-28 é uma sexta; a segunda daquela semana é dia 24
        let (inicio, fim) = intervalo_do_periodo(Periodo::Semana, em(2026, 8, 28, 10));
        assert_eq!(inicio.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        assert_eq!(fim - inicio, Duration::days(7));

        // Numa segunda, a semana começa no próprio dia
        let (inicio, _) = intervalo_do_periodo(Periodo::Semana, em(2026, 8, 24, 0));
        assert_eq!(inicio.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
    }

    #[test]
    fn mes_vai_do_dia_1_ao_proximo_mes() {
        let (inicio, fim) = intervalo_do_periodo(Periodo::Mes, em(2026, 8, 28, 10));
        assert_eq!(inicio.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(fim.date_naive(), NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
    }

    #[test]
    fn mes_de_dezembro_vira_o_ano() {
        let (inicio, fim) = intervalo_do_periodo(Periodo::Mes, em(2026, 12, 15, 10));
        assert_eq!(inicio.date_naive(), NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(fim.date_naive(), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }
}

// src/services/relatorio_service.rs

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::RelatorioRepository,
    models::relatorio::{
        DadoFaturamento, FaturamentoPorCliente, FinanceiroResumoRow, Granularidade,
        ResumoFinanceiro,
    },
};

const MESES_ABREV: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

// Quantos buckets os gráficos mostram
const NUM_PERIODOS: usize = 6;
const TOP_CLIENTES: i64 = 5;

/// Um bucket [inicio, fim) da série do relatório, com o rótulo do eixo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub inicio: DateTime<Utc>,
    pub fim: DateTime<Utc>,
    pub rotulo: String,
}

fn inicio_do_dia(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

fn primeiro_do_mes(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

fn meses_atras(d: NaiveDate, n: u32) -> NaiveDate {
    let total = d.year() * 12 + d.month() as i32 - 1 - n as i32;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1).unwrap()
}

fn proximo_mes(d: NaiveDate) -> NaiveDate {
    if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1).unwrap()
    }
}

/// Os últimos `n` buckets da granularidade escolhida, do mais antigo para o
/// mais recente, sempre incluindo o período corrente.
pub fn montar_buckets(granularidade: Granularidade, agora: DateTime<Utc>, n: usize) -> Vec<Bucket> {
    let hoje = agora.date_naive();
    let mut buckets = Vec::with_capacity(n);

    for i in (0..n).rev() {
        match granularidade {
            Granularidade::Diario => {
                let dia = hoje - Duration::days(i as i64);
                buckets.push(Bucket {
                    inicio: inicio_do_dia(dia),
                    fim: inicio_do_dia(dia + Duration::days(1)),
                    rotulo: format!("{:02}/{:02}", dia.day(), dia.month()),
                });
            }
            Granularidade::Semanal => {
                let nesta_semana = hoje - Duration::weeks(i as i64);
                let segunda = nesta_semana
                    - Duration::days(nesta_semana.weekday().num_days_from_monday() as i64);
                buckets.push(Bucket {
                    inicio: inicio_do_dia(segunda),
                    fim: inicio_do_dia(segunda + Duration::days(7)),
                    rotulo: format!("{:02}/{:02}", segunda.day(), segunda.month()),
                });
            }
            Granularidade::Mensal => {
                let primeiro = meses_atras(primeiro_do_mes(hoje), i as u32);
                buckets.push(Bucket {
                    inicio: inicio_do_dia(primeiro),
                    fim: inicio_do_dia(proximo_mes(primeiro)),
                    rotulo: format!(
                        "{}/{:02}",
                        MESES_ABREV[primeiro.month0() as usize],
                        primeiro.year() % 100
                    ),
                });
            }
        }
    }

    buckets
}

/// Soma faturamento/lucro/despesas por bucket. Linhas sem `created_at` ou
/// fora da janela ficam de fora, como no painel original.
pub fn bucketizar(rows: &[FinanceiroResumoRow], buckets: &[Bucket]) -> Vec<DadoFaturamento> {
    buckets
        .iter()
        .map(|b| {
            let mut dado = DadoFaturamento {
                periodo: b.rotulo.clone(),
                faturamento: Decimal::ZERO,
                lucro: Decimal::ZERO,
                despesas: Decimal::ZERO,
            };
            for row in rows {
                if let Some(criado) = row.created_at {
                    if criado >= b.inicio && criado < b.fim {
                        dado.faturamento += row.faturamento;
                        dado.lucro += row.lucro;
                        dado.despesas += row.total_despesas;
                    }
                }
            }
            dado
        })
        .collect()
}

/// Totais da janela inteira, com a mesma guarda de faturamento zero do
/// cálculo por carga.
pub fn resumir(
    rows: &[FinanceiroResumoRow],
    inicio: DateTime<Utc>,
    fim: DateTime<Utc>,
) -> ResumoFinanceiro {
    let mut total_faturamento = Decimal::ZERO;
    let mut total_lucro = Decimal::ZERO;
    let mut total_despesas = Decimal::ZERO;
    let mut quantidade_cargas = 0i64;

    for row in rows {
        if let Some(criado) = row.created_at {
            if criado >= inicio && criado < fim {
                total_faturamento += row.faturamento;
                total_lucro += row.lucro;
                total_despesas += row.total_despesas;
                quantidade_cargas += 1;
            }
        }
    }

    let margem_lucro = if total_faturamento > Decimal::ZERO {
        (total_lucro / total_faturamento) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    ResumoFinanceiro {
        total_faturamento,
        total_lucro,
        total_despesas,
        margem_lucro,
        quantidade_cargas,
    }
}

#[derive(Clone)]
pub struct RelatorioService {
    repo: RelatorioRepository,
}

impl RelatorioService {
    pub fn new(repo: RelatorioRepository) -> Self {
        Self { repo }
    }

    pub async fn relatorio_faturamento(
        &self,
        granularidade: Granularidade,
    ) -> Result<Vec<DadoFaturamento>, AppError> {
        let buckets = montar_buckets(granularidade, Utc::now(), NUM_PERIODOS);
        let rows = self
            .repo
            .financeiro_desde(self.repo.pool(), buckets[0].inicio)
            .await?;
        Ok(bucketizar(&rows, &buckets))
    }

    pub async fn resumo_financeiro(
        &self,
        granularidade: Granularidade,
    ) -> Result<ResumoFinanceiro, AppError> {
        let buckets = montar_buckets(granularidade, Utc::now(), NUM_PERIODOS);
        let inicio = buckets[0].inicio;
        let fim = buckets[buckets.len() - 1].fim;
        let rows = self.repo.financeiro_desde(self.repo.pool(), inicio).await?;
        Ok(resumir(&rows, inicio, fim))
    }

    pub async fn faturamento_por_cliente(&self) -> Result<Vec<FaturamentoPorCliente>, AppError> {
        self.repo
            .faturamento_por_cliente(self.repo.pool(), TOP_CLIENTES)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn agora() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap()
    }

    fn linha(dia: DateTime<Utc>, faturamento: Decimal, lucro: Decimal) -> FinanceiroResumoRow {
        FinanceiroResumoRow {
            faturamento,
            lucro,
            total_despesas: faturamento - lucro,
            created_at: Some(dia),
        }
    }

    #[test]
    fn seis_buckets_diarios_terminam_hoje() {
        let buckets = montar_buckets(Granularidade::Diario, agora(), 6);
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].rotulo, "23/08");
        assert_eq!(buckets[5].rotulo, "28/08");
        // Contíguos, sem buraco
        for par in buckets.windows(2) {
            assert_eq!(par[0].fim, par[1].inicio);
        }
    }

    #[test]
    fn buckets_semanais_comecam_na_segunda() {
        let buckets = montar_buckets(Granularidade::Semanal, agora(), 2);
        // 2026-08-28 é sexta; as segundas são 17/08 e 24/08
        assert_eq!(buckets[0].rotulo, "17/08");
        assert_eq!(buckets[1].rotulo, "24/08");
    }

    #[test]
    fn buckets_mensais_viram_o_ano() {
        let janeiro = Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap();
        let buckets = montar_buckets(Granularidade::Mensal, janeiro, 4);
        assert_eq!(buckets[0].rotulo, "nov/25");
        assert_eq!(buckets[1].rotulo, "dez/25");
        assert_eq!(buckets[2].rotulo, "jan/26");
        assert_eq!(buckets[3].rotulo, "fev/26");
    }

    #[test]
    fn bucketizar_soma_no_bucket_certo() {
        let buckets = montar_buckets(Granularidade::Diario, agora(), 3);
        let rows = vec![
            linha(buckets[0].inicio, dec!(1000), dec!(100)),
            linha(buckets[0].inicio + Duration::hours(5), dec!(500), dec!(50)),
            linha(buckets[2].inicio, dec!(2000), dec!(300)),
            // Fora da janela: limite superior é exclusivo
            linha(buckets[2].fim, dec!(9999), dec!(999)),
        ];

        let serie = bucketizar(&rows, &buckets);
        assert_eq!(serie[0].faturamento, dec!(1500));
        assert_eq!(serie[0].lucro, dec!(150));
        assert_eq!(serie[1].faturamento, Decimal::ZERO);
        assert_eq!(serie[2].faturamento, dec!(2000));
        assert_eq!(serie[2].despesas, dec!(1700));
    }

    #[test]
    fn linhas_sem_data_ficam_de_fora() {
        let buckets = montar_buckets(Granularidade::Diario, agora(), 1);
        let rows = vec![FinanceiroResumoRow {
            faturamento: dec!(1000),
            lucro: dec!(100),
            total_despesas: dec!(900),
            created_at: None,
        }];

        let serie = bucketizar(&rows, &buckets);
        assert_eq!(serie[0].faturamento, Decimal::ZERO);
    }

    #[test]
    fn resumo_calcula_margem() {
        let buckets = montar_buckets(Granularidade::Mensal, agora(), 2);
        let inicio = buckets[0].inicio;
        let fim = buckets[1].fim;
        let rows = vec![
            linha(inicio, dec!(8000), dec!(1500)),
            linha(inicio + Duration::days(3), dec!(2000), dec!(500)),
        ];

        let resumo = resumir(&rows, inicio, fim);
        assert_eq!(resumo.total_faturamento, dec!(10000));
        assert_eq!(resumo.total_lucro, dec!(2000));
        assert_eq!(resumo.margem_lucro, dec!(20));
        assert_eq!(resumo.quantidade_cargas, 2);
    }

    #[test]
    fn resumo_sem_faturamento_tem_margem_zero() {
        let buckets = montar_buckets(Granularidade::Mensal, agora(), 1);
        let resumo = resumir(&[], buckets[0].inicio, buckets[0].fim);
        assert_eq!(resumo.margem_lucro, Decimal::ZERO);
        assert_eq!(resumo.quantidade_cargas, 0);
    }
}

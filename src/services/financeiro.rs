// src/services/financeiro.rs

use rust_decimal::{Decimal, RoundingStrategy};

// Percentuais padrão da planilha: imposto federal fixo em 7% e seguro em
// 0.065% do valor da mercadoria. O ICMS varia por percurso.
pub const ALIQUOTAS_ICMS: [u32; 7] = [7, 12, 17, 18, 19, 20, 22];

pub fn percentual_federal_padrao() -> Decimal {
    Decimal::new(7, 0)
}

pub fn percentual_seguro_padrao() -> Decimal {
    Decimal::new(65, 3) // 0.065
}

pub fn percentual_adiantamento_padrao() -> Decimal {
    Decimal::new(80, 0)
}

pub fn aliquota_icms_valida(percentual: Decimal) -> bool {
    ALIQUOTAS_ICMS
        .iter()
        .any(|a| Decimal::from(*a) == percentual)
}

/// Inputs financeiros de uma carga, já coagidos para zero pelo chamador
/// quando o campo veio vazio ou ilegível. Percentuais são "por cento":
/// `percentual_seguro = 0.065` significa 0.065%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParametrosFinanceiros {
    /// Valor do frete cobrado do cliente (faturamento).
    pub faturamento: Decimal,
    /// Valor declarado da mercadoria, base do seguro.
    pub valor_mercadoria: Decimal,
    /// Frete pago ao motorista ou ao terceiro subcontratado.
    pub frete_motorista: Decimal,
    /// Soma dos custos fixos/variáveis (RCV, GR, chapa, diversos, comissão).
    pub custos_extras: Decimal,
    /// Diárias + chapas + adicionais diversos pagos ao motorista.
    pub adicionais_motorista: Decimal,
    pub percentual_seguro: Decimal,
    pub percentual_federal: Decimal,
    pub percentual_icms: Decimal,
    /// Percentual do frete do motorista pago como adiantamento.
    pub percentual_adiantamento: Decimal,
    /// Correção manual (com sinal) aplicada ao saldo.
    pub acrescimo_saldo: Decimal,
}

/// Valores derivados. Nunca são fonte de verdade: o que vai para o banco é
/// snapshot do momento do save e é re-derivado a cada edição.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultadoFinanceiro {
    pub valor_seguro: Decimal,
    pub imposto_federal: Decimal,
    pub valor_icms: Decimal,
    /// Federal + ICMS + seguro. O seguro entra no agregado mas continua
    /// disponível como linha própria em `valor_seguro`.
    pub total_impostos: Decimal,
    pub total_adicionais_motorista: Decimal,
    pub total_despesas: Decimal,
    pub lucro: Decimal,
    /// 0 quando o faturamento é zero, nunca divisão por zero.
    pub percentual_lucro: Decimal,
    pub valor_adiantamento: Decimal,
    pub saldo: Decimal,
}

/// Função pura: sem I/O, sem estado, total sobre o domínio (zeros e
/// negativos produzem saída definida). Arredondamento é problema da camada
/// de exibição, aqui os valores saem em precisão cheia.
pub fn calcular(p: &ParametrosFinanceiros) -> ResultadoFinanceiro {
    let cem = Decimal::ONE_HUNDRED;

    let valor_seguro = p.valor_mercadoria * (p.percentual_seguro / cem);
    let imposto_federal = p.faturamento * (p.percentual_federal / cem);
    let valor_icms = p.faturamento * (p.percentual_icms / cem);
    let total_impostos = imposto_federal + valor_icms + valor_seguro;

    let total_adicionais_motorista = p.adicionais_motorista;

    let total_despesas =
        p.frete_motorista + total_impostos + p.custos_extras + total_adicionais_motorista;

    let lucro = p.faturamento - total_despesas;
    let percentual_lucro = if p.faturamento > Decimal::ZERO {
        (lucro / p.faturamento) * cem
    } else {
        Decimal::ZERO
    };

    let valor_adiantamento = p.frete_motorista * (p.percentual_adiantamento / cem);
    let saldo = p.frete_motorista - valor_adiantamento + p.acrescimo_saldo;

    ResultadoFinanceiro {
        valor_seguro,
        imposto_federal,
        valor_icms,
        total_impostos,
        total_adicionais_motorista,
        total_despesas,
        lucro,
        percentual_lucro,
        valor_adiantamento,
        saldo,
    }
}

/// Recálculo de um pagamento de motorista quando entram adicionais
/// (diárias, chapas, diversos) ou muda o valor pago.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecalculoPagamento {
    pub novo_total: Decimal,
    pub saldo_restante: Decimal,
    /// Inteiro 0..=100, arredondado como o `Math.round` da planilha.
    pub percentual_pago: Decimal,
}

pub fn recalcular_pagamento(
    valor_total: Decimal,
    valor_pago: Decimal,
    adicionais: Decimal,
) -> RecalculoPagamento {
    let novo_total = valor_total + adicionais;
    let saldo_restante = novo_total - valor_pago;
    let percentual_pago = if novo_total > Decimal::ZERO {
        ((valor_pago / novo_total) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    RecalculoPagamento {
        novo_total,
        saldo_restante,
        percentual_pago,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parametros_base() -> ParametrosFinanceiros {
        ParametrosFinanceiros {
            faturamento: dec!(10000),
            valor_mercadoria: dec!(50000),
            frete_motorista: dec!(6000),
            custos_extras: dec!(200),
            adicionais_motorista: Decimal::ZERO,
            percentual_seguro: dec!(0.065),
            percentual_federal: dec!(7),
            percentual_icms: dec!(12),
            percentual_adiantamento: Decimal::ZERO,
            acrescimo_saldo: Decimal::ZERO,
        }
    }

    #[test]
    fn cenario_planilha_completo() {
        let r = calcular(&parametros_base());

        assert_eq!(r.valor_seguro, dec!(32.5));
        assert_eq!(r.imposto_federal, dec!(700));
        assert_eq!(r.valor_icms, dec!(1200));
        assert_eq!(r.total_impostos, dec!(1932.5));
        assert_eq!(r.total_despesas, dec!(8132.5));
        assert_eq!(r.lucro, dec!(1867.5));
        assert_eq!(r.percentual_lucro, dec!(18.675));
    }

    #[test]
    fn faturamento_zero_nao_divide() {
        let p = ParametrosFinanceiros {
            faturamento: Decimal::ZERO,
            valor_mercadoria: dec!(1000),
            frete_motorista: Decimal::ZERO,
            custos_extras: Decimal::ZERO,
            ..parametros_base()
        };
        let r = calcular(&p);

        assert_eq!(r.percentual_lucro, Decimal::ZERO);
        // O resto da conta continua definido
        assert_eq!(r.valor_seguro, dec!(0.65));
        assert_eq!(r.lucro, -r.total_despesas);
    }

    #[test]
    fn adiantamento_e_saldo() {
        let p = ParametrosFinanceiros {
            frete_motorista: dec!(6000),
            percentual_adiantamento: dec!(80),
            acrescimo_saldo: dec!(100),
            ..ParametrosFinanceiros::default()
        };
        let r = calcular(&p);

        assert_eq!(r.valor_adiantamento, dec!(4800));
        assert_eq!(r.saldo, dec!(1300));
    }

    #[test]
    fn despesas_somam_todos_os_termos() {
        let p = ParametrosFinanceiros {
            adicionais_motorista: dec!(350),
            ..parametros_base()
        };
        let r = calcular(&p);

        assert_eq!(
            r.total_despesas,
            p.frete_motorista + r.total_impostos + p.custos_extras + dec!(350)
        );
        assert_eq!(r.lucro, p.faturamento - r.total_despesas);
    }

    #[test]
    fn lucro_pode_ser_negativo() {
        let p = ParametrosFinanceiros {
            faturamento: dec!(1000),
            frete_motorista: dec!(5000),
            ..parametros_base()
        };
        let r = calcular(&p);

        assert!(r.lucro < Decimal::ZERO);
        assert!(r.percentual_lucro < Decimal::ZERO);
    }

    #[test]
    fn recalculo_e_deterministico() {
        let p = parametros_base();
        assert_eq!(calcular(&p), calcular(&p));
    }

    #[test]
    fn seguro_proporcional_a_mercadoria() {
        let mut p = ParametrosFinanceiros::default();
        p.percentual_seguro = dec!(0.065);

        p.valor_mercadoria = dec!(10000);
        assert_eq!(calcular(&p).valor_seguro, dec!(6.5));

        p.valor_mercadoria = dec!(20000);
        assert_eq!(calcular(&p).valor_seguro, dec!(13.0));
    }

    #[test]
    fn aliquotas_icms_conhecidas() {
        assert!(aliquota_icms_valida(dec!(12)));
        assert!(aliquota_icms_valida(dec!(22)));
        assert!(!aliquota_icms_valida(dec!(13)));
        assert!(!aliquota_icms_valida(dec!(12.5)));
    }

    #[test]
    fn recalculo_pagamento_com_adicionais() {
        let r = recalcular_pagamento(dec!(6000), dec!(4800), dec!(400));

        assert_eq!(r.novo_total, dec!(6400));
        assert_eq!(r.saldo_restante, dec!(1600));
        assert_eq!(r.percentual_pago, dec!(75));
    }

    #[test]
    fn recalculo_pagamento_total_zero() {
        let r = recalcular_pagamento(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(r.percentual_pago, Decimal::ZERO);
        assert_eq!(r.saldo_restante, Decimal::ZERO);
    }

    #[test]
    fn recalculo_pagamento_arredonda_meio_para_cima() {
        // 1/3 pago: 33.33..% vira 33; 2/3 vira 67
        let r = recalcular_pagamento(dec!(3000), dec!(1000), Decimal::ZERO);
        assert_eq!(r.percentual_pago, dec!(33));

        let r = recalcular_pagamento(dec!(3000), dec!(2000), Decimal::ZERO);
        assert_eq!(r.percentual_pago, dec!(67));
    }
}

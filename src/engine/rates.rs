use crate::engine::CurrencyCode;

/// Value of 1 unit of each currency expressed in the reference currency
/// (EUR). Star topology: a new currency needs one entry here, not a full
/// pairwise matrix. Built once at startup and never mutated.
#[derive(Copy, Clone, Debug)]
pub struct RateTable {
    eur: f64,
    usd: f64,
    yen: f64,
}

impl RateTable {
    /// The fixed rates of the calculator. Invariant: the EUR entry is
    /// exactly 1.0, every other entry is positive and finite.
    pub fn fixed() -> Self {
        Self {
            eur: 1.0,
            usd: 0.751540658,
            yen: 0.00774763265,
        }
    }

    pub fn rate(&self, code: CurrencyCode) -> f64 {
        match code {
            CurrencyCode::Eur => self.eur,
            CurrencyCode::Usd => self.usd,
            CurrencyCode::Yen => self.yen,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_currency_is_unity() {
        let rates = RateTable::fixed();
        assert_eq!(rates.rate(CurrencyCode::Eur), 1.0);
    }

    #[test]
    fn all_rates_positive_finite() {
        let rates = RateTable::fixed();
        for code in CurrencyCode::ALL {
            let rate = rates.rate(code);
            assert!(rate.is_finite());
            assert!(rate > 0.0);
        }
    }
}

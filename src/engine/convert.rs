use crate::engine::{CurrencyCode, RateTable};
use crate::error::{Error, ErrorKind};

/// Stateless converter over an immutable rate table. Every call depends only
/// on its arguments and the table.
pub struct ConversionEngine {
    rates: RateTable,
}

impl ConversionEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Multiplier taking an amount in `source` to the equivalent amount in
    /// `destination`, always routed through the reference currency.
    /// Recomputed on every call, the table is tiny.
    pub fn factor(&self, source: CurrencyCode, destination: CurrencyCode) -> f64 {
        self.rates.rate(source) / self.rates.rate(destination)
    }

    pub fn convert(&self, amount: f64, source: CurrencyCode, destination: CurrencyCode) -> f64 {
        amount * self.factor(source, destination)
    }

    /// Interprets user text as a decimal amount. Empty strings, stray
    /// characters and locale separators like "12,34" are rejected; values the
    /// float grammar accepts (including inf/NaN) pass through unchanged.
    pub fn parse_amount(text: &str) -> Result<f64, Error> {
        text.parse::<f64>().map_err(|_| {
            Error::new(
                ErrorKind::Amount,
                format!("'{}' is not a valid amount", text),
            )
        })
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        ConversionEngine::new(RateTable::fixed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn factor_identity() {
        let engine = ConversionEngine::default();
        for code in CurrencyCode::ALL {
            assert_eq!(engine.factor(code, code), 1.0);
        }
    }

    #[test]
    fn factor_reciprocal() {
        let engine = ConversionEngine::default();
        for source in CurrencyCode::ALL {
            for destination in CurrencyCode::ALL {
                let product = engine.factor(source, destination) * engine.factor(destination, source);
                assert_float_absolute_eq!(product, 1.0, 1e-12);
            }
        }
    }

    #[test]
    fn convert_linear_in_amount() {
        let engine = ConversionEngine::default();
        for k in [0.0, 0.5, 2.0, -3.0, 1000.0] {
            assert_float_absolute_eq!(
                engine.convert(k * 12.5, CurrencyCode::Usd, CurrencyCode::Yen),
                k * engine.convert(12.5, CurrencyCode::Usd, CurrencyCode::Yen),
                1e-7
            );
        }
    }

    #[test]
    fn convert_round_trip() {
        let engine = ConversionEngine::default();
        for amount in [0.0, 1.0, 100.0, -50.5] {
            let there = engine.convert(amount, CurrencyCode::Eur, CurrencyCode::Usd);
            let back = engine.convert(there, CurrencyCode::Usd, CurrencyCode::Eur);
            assert_float_absolute_eq!(back, amount, 1e-9);
        }
    }

    #[test]
    fn convert_usd_to_eur() {
        let engine = ConversionEngine::default();
        assert_float_absolute_eq!(
            engine.convert(12.34, CurrencyCode::Usd, CurrencyCode::Eur),
            9.2740,
            1e-4
        );
    }

    #[test]
    fn convert_usd_to_yen() {
        let engine = ConversionEngine::default();
        let factor = engine.factor(CurrencyCode::Usd, CurrencyCode::Yen);
        assert_float_absolute_eq!(factor, 0.751540658 / 0.00774763265, 1e-12);
        assert_float_absolute_eq!(factor, 97.002619, 1e-5);
    }

    #[test]
    fn parse_amount_valid() {
        assert_float_absolute_eq!(ConversionEngine::parse_amount("12.34").unwrap(), 12.34, 1e-12);
        assert_float_absolute_eq!(ConversionEngine::parse_amount("-50.5").unwrap(), -50.5, 1e-12);
        assert_float_absolute_eq!(ConversionEngine::parse_amount("0").unwrap(), 0.0, 1e-12);
        assert_float_absolute_eq!(ConversionEngine::parse_amount("1e3").unwrap(), 1000.0, 1e-12);
    }

    #[test]
    fn parse_amount_invalid() {
        for text in ["", "abc", "12,34", "12x", "12.34 "] {
            let error = ConversionEngine::parse_amount(text).unwrap_err();
            assert!(error.is_amount(), "'{}' should not parse", text);
        }
    }
}

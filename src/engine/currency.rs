use std::str::FromStr;

/// Closed set of supported currencies. Adding one also needs a rate in
/// `RateTable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    Eur,
    Usd,
    Yen,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Eur, CurrencyCode::Usd, CurrencyCode::Yen];

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Yen => "YEN",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .iter()
            .find(|code| code.name().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| format!("'{}' is not a supported currency (EUR, USD, YEN)", value))
    }
}

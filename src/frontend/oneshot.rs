use log::warn;

use crate::engine::{ConversionEngine, CurrencyCode};
use crate::error::Error;
use crate::frontend::{evaluate, Frontend};

/// Runs a single conversion from command-line arguments and prints the
/// result. An unparsable amount is a recovered condition: the sentinel value
/// is printed and the process still exits successfully.
pub struct OneshotFrontend<'a> {
    engine: &'a ConversionEngine,
    empty_value: &'a str,
    amount: String,
    source: CurrencyCode,
    destination: CurrencyCode,
}

impl<'a> OneshotFrontend<'a> {
    pub fn new(
        engine: &'a ConversionEngine,
        empty_value: &'a str,
        amount: &str,
        source: CurrencyCode,
        destination: CurrencyCode,
    ) -> Self {
        Self {
            engine,
            empty_value,
            amount: amount.to_string(),
            source,
            destination,
        }
    }
}

impl Frontend for OneshotFrontend<'_> {
    fn run(&mut self) -> Result<(), Error> {
        let result = evaluate(
            self.engine,
            &self.amount,
            self.source,
            self.destination,
            self.empty_value,
        );
        if let Some(notification) = &result.notification {
            warn!("{}", notification);
        }
        println!("{} {}", result.display, self.destination);
        Ok(())
    }
}

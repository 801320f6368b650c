use dialoguer::{Input, Select};
use log::info;

use crate::engine::{ConversionEngine, CurrencyCode};
use crate::error::Error;
use crate::frontend::{evaluate, Frontend};

/// Terminal counterpart of the original window: two currency selections and
/// an amount line. Every submitted line triggers one full re-evaluation, and
/// changing a currency re-evaluates the last amount, like the combo-box
/// change events did.
pub struct InteractiveFrontend<'a> {
    engine: &'a ConversionEngine,
    app_name: &'a str,
    empty_value: &'a str,
    source: CurrencyCode,
    destination: CurrencyCode,
    last_amount: Option<String>,
}

impl<'a> InteractiveFrontend<'a> {
    pub fn new(
        engine: &'a ConversionEngine,
        app_name: &'a str,
        empty_value: &'a str,
        source: CurrencyCode,
        destination: CurrencyCode,
    ) -> Self {
        Self {
            engine,
            app_name,
            empty_value,
            source,
            destination,
            last_amount: None,
        }
    }

    fn select_currency(prompt: &str, current: CurrencyCode) -> Result<CurrencyCode, Error> {
        let default = CurrencyCode::ALL
            .iter()
            .position(|code| *code == current)
            .unwrap_or(0);
        let index = Select::new()
            .with_prompt(prompt)
            .items(&CurrencyCode::ALL)
            .default(default)
            .interact()?;
        Ok(CurrencyCode::ALL[index])
    }

    fn display(&self, text: &str) {
        let result = evaluate(
            self.engine,
            text,
            self.source,
            self.destination,
            self.empty_value,
        );
        if let Some(notification) = &result.notification {
            println!("invalid number entered: {}", notification);
        }
        println!(
            "{} {} -> {} {}",
            text, self.source, result.display, self.destination
        );
    }
}

impl Frontend for InteractiveFrontend<'_> {
    fn run(&mut self) -> Result<(), Error> {
        println!("{}", self.app_name);
        self.source = Self::select_currency("source currency", self.source)?;
        self.destination = Self::select_currency("destination currency", self.destination)?;
        loop {
            let entry: String = Input::new()
                .with_prompt("amount ('from'/'to' to change currency, 'quit' to exit)")
                .allow_empty(true)
                .interact_text()?;
            match entry.trim() {
                "quit" | "q" => break,
                "from" => {
                    self.source = Self::select_currency("source currency", self.source)?;
                    if let Some(text) = self.last_amount.clone() {
                        self.display(&text);
                    }
                }
                "to" => {
                    self.destination =
                        Self::select_currency("destination currency", self.destination)?;
                    if let Some(text) = self.last_amount.clone() {
                        self.display(&text);
                    }
                }
                text => {
                    self.display(text);
                    self.last_amount = Some(text.to_string());
                }
            }
        }
        info!("leaving {}", self.app_name);
        Ok(())
    }
}

use crate::engine::{ConversionEngine, CurrencyCode};
use crate::error::Error;

mod interactive;
mod oneshot;

pub use interactive::InteractiveFrontend;
pub use oneshot::OneshotFrontend;

pub trait Frontend {
    fn run(&mut self) -> Result<(), Error>;
}

/// Outcome of one edit: the string to display, plus a notification when the
/// amount text could not be parsed. The display falls back to the sentinel
/// value in that case.
pub struct Evaluation {
    pub display: String,
    pub notification: Option<String>,
}

/// One full pass of the original event handler: parse the amount text,
/// compute the factor, convert, format. A parse failure is recovered here and
/// never propagates further.
pub fn evaluate(
    engine: &ConversionEngine,
    text: &str,
    source: CurrencyCode,
    destination: CurrencyCode,
    empty_value: &str,
) -> Evaluation {
    match ConversionEngine::parse_amount(text) {
        Ok(amount) => Evaluation {
            display: format!("{:.2}", engine.convert(amount, source, destination)),
            notification: None,
        },
        Err(error) => Evaluation {
            display: empty_value.to_string(),
            notification: Some(error.message),
        },
    }
}

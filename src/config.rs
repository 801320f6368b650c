use crate::engine::RateTable;

/// Process-wide constants, built once in `main` and handed down instead of
/// living as globals.
pub struct AppConfig {
    pub app_name: &'static str,
    pub empty_value: &'static str,
    pub rates: RateTable,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            app_name: "currency calculator",
            empty_value: "0.00",
            rates: RateTable::fixed(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::new()
    }
}

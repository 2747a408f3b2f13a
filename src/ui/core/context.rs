use crate::config::{Config, DisplayConfig};
use crate::logger::Logger;

/// Services and settings shared by every component
#[derive(Clone)]
pub struct AppContext {
    pub display: DisplayConfig,
    pub sidebar_width: u16,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self {
            display: config.display.clone(),
            sidebar_width: config.ui.sidebar_width,
            logger,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(&Config::default(), Logger::new())
    }
}

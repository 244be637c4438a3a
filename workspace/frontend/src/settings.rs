use common::YearRange;
use compute::selection::SelectionState;
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Scope selected when the chart mounts
    pub default_scope: Option<String>,

    /// Year range selected when the chart mounts
    pub default_year_range: Option<YearRange>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            default_scope: None,
            default_year_range: None,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(log_level)) = storage.get_item("scopechart_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(scope)) = storage.get_item("scopechart_default_scope") {
                    if !scope.is_empty() {
                        settings.default_scope = Some(scope);
                    }
                }

                // Stored in the same "<start>-<end>" form the year select uses
                if let Ok(Some(years)) = storage.get_item("scopechart_default_years") {
                    settings.default_year_range = years.parse().ok();
                }
            }
        }

        settings
    }

    /// The selection the chart starts from.
    pub fn initial_selection(&self) -> SelectionState {
        let mut selection = SelectionState::default();
        if let Some(scope) = &self.default_scope {
            selection.set_scope(scope.clone());
        }
        if let Some(year_range) = self.default_year_range {
            selection.set_year_range_pair(year_range);
        }
        selection
    }
}

use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

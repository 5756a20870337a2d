//! Settings Controller
//!
//! Persists the backend connection settings and the UI language, and
//! pushes the updated configuration into the service layer.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::i18n::Locale;
use crate::services::{ServiceCommand, ServiceHub};

/// Settings page controller
pub struct SettingsController {
    entities: AppEntities,
}

impl SettingsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Probe the backend and TeddyCloud with the active configuration
    pub fn test_connection(&self, cx: &mut App) {
        self.entities.connection.update(cx, |conn, cx| {
            conn.checking = true;
            cx.notify();
        });
        cx.global::<ServiceHub>().send(ServiceCommand::CheckStatus);
    }

    /// Switch the UI language and persist it
    pub fn set_language(&self, locale: Locale, cx: &mut App) {
        self.entities.i18n.update(cx, |i18n, cx| {
            i18n.set_locale(locale);
            cx.notify();
        });
        let config = self.entities.config.update(cx, |state, cx| {
            state.config.ui.locale = Some(locale.code().to_string());
            cx.notify();
            state.config.clone()
        });
        if let Err(e) = config.save() {
            cx.global::<ServiceHub>()
                .log(AppEvent::warn(format!("Failed to save config: {e}")));
        }
    }

    /// Save the backend URL and token, then rebuild the client. An empty
    /// token clears the stored one.
    pub fn save_backend(&self, url: String, token: String, cx: &mut App) {
        self.entities.config.update(cx, |state, cx| {
            state.set_saving(true);
            cx.notify();
        });

        let result = self.entities.config.update(cx, |state, _| {
            state.config.backend.url = url.trim_end_matches('/').to_string();
            state
                .config
                .backend
                .set_token(token.trim())
                .and_then(|_| state.config.save())
                .map(|_| state.config.clone())
        });

        match result {
            Ok(config) => {
                cx.global::<ServiceHub>().update_config(config);
                cx.global::<ServiceHub>()
                    .log(AppEvent::info("Settings saved"));
            }
            Err(e) => {
                cx.global::<ServiceHub>()
                    .log(AppEvent::error(format!("Failed to save settings: {e}")));
            }
        }

        self.entities.config.update(cx, |state, cx| {
            state.set_saving(false);
            cx.notify();
        });
    }
}

//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::i18n::Locale;
use crate::services::{ServiceCommand, ServiceHub};

actions!(tch, [Quit]);

/// Run the TCH GUI application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load persisted configuration before anything else
        let config = AppConfig::load();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        entities.config.update(cx, |state, _| {
            state.update_config(config.clone());
        });
        // Configured locale wins; otherwise follow the system locale
        let locale = match &config.ui.locale {
            Some(code) => Locale::from_code(code),
            None => {
                let system = locale_config::Locale::user_default().to_string();
                Locale::from_code(system.split(',').next().unwrap_or_default())
            }
        };
        entities.i18n.update(cx, |i18n, _| i18n.set_locale(locale));
        let page_size = config.ui.effective_page_size();
        entities.library.update(cx, |library, _| {
            library.set_page_size(page_size);
            library.loading = true;
        });

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub
        let service_hub = ServiceHub::new(event_tx.clone(), config.clone());
        service_hub.send(ServiceCommand::CheckStatus);
        service_hub.send(ServiceCommand::LoadLibrary {
            page: 1,
            page_size,
            filter: Default::default(),
        });
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1280.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("TeddyCloud Custom Tag Helper")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .expect("Failed to open main window");

        cx.activate(true);
    });
}

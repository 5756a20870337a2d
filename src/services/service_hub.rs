//! ServiceHub - Backend Request Dispatch
//!
//! Owns the dedicated runtime thread. The UI sends `ServiceCommand`s over a
//! channel; each command becomes an async request against the backend and
//! its outcome comes back as an `AppEvent`.

use std::sync::Arc;

use gpui::Global;
use parking_lot::RwLock;

use crate::constants::COVER_SEARCH_LIMIT;
use crate::domain::batch::{BatchSelection, MetadataSearchItem};
use crate::domain::config::AppConfig;
use crate::domain::library::LinkFilter;
use crate::domain::tonie::TonieCreateRequest;
use crate::error::Error;
use crate::eventing::app_event::AppEvent;
use crate::services::BackendClient;
use crate::state::connection_state::ConnectionTarget;

/// Commands the UI can send to the service layer
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Probe backend and TeddyCloud health
    CheckStatus,
    /// Load one page of the TAF library
    LoadLibrary {
        page: usize,
        page_size: usize,
        filter: LinkFilter,
    },
    /// Parse only the TAF header of a library file
    ParseHeader { taf_path: String },
    /// Full metadata parse for the editor
    ParseMetadata { taf_path: String },
    /// Cover search for the editor
    SearchCovers { taf_path: String, search_term: String },
    /// Download a cover into the backend image store
    DownloadCover {
        taf_path: String,
        image_url: String,
        filename: String,
    },
    /// Create a custom tonie from the editor
    CreateTonie {
        taf_path: String,
        request: TonieCreateRequest,
    },
    /// Wizard step 1: match files against the catalog
    BatchAnalyze { taf_paths: Vec<String> },
    /// Wizard review: search external metadata for unmatched files
    SearchMetadata { items: Vec<MetadataSearchItem> },
    /// Wizard step 4: process confirmed selections
    BatchProcess { selections: Vec<BatchSelection> },
    /// Replace the active configuration and rebuild the client
    UpdateConfig(AppConfig),
}

/// ServiceHub dispatches backend requests from a dedicated thread
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the runtime thread
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its runtime thread
    pub fn new(event_tx: flume::Sender<AppEvent>, initial_config: AppConfig) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let config = Arc::new(RwLock::new(initial_config));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
        };

        hub.start_command_handler(command_rx, config, event_tx);

        let _ = hub.event_tx.send(AppEvent::info("Service hub initialized"));

        hub
    }

    /// Start the command handler on its own thread with a tokio runtime
    fn start_command_handler(
        &self,
        command_rx: flume::Receiver<ServiceCommand>,
        config: Arc<RwLock<AppConfig>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create Tokio runtime");

            rt.block_on(async move {
                let mut client = build_client(&config.read(), &event_tx);

                while let Ok(cmd) = command_rx.recv_async().await {
                    if let ServiceCommand::UpdateConfig(new_config) = cmd {
                        *config.write() = new_config.clone();
                        client = build_client(&new_config, &event_tx);
                        let _ = event_tx.send(AppEvent::info("Configuration updated"));
                        continue;
                    }

                    let Some(client) = client.clone() else {
                        let _ = event_tx.send(AppEvent::error(
                            "Backend client not configured, check settings",
                        ));
                        continue;
                    };

                    // Each request runs on its own task so a slow batch call
                    // does not block status probes or library paging.
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        handle_command(cmd, client, event_tx).await;
                    });
                }
            });
        });
    }

    /// Send a command to the service layer
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Replace the active configuration
    pub fn update_config(&self, config: AppConfig) {
        self.send(ServiceCommand::UpdateConfig(config));
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

fn build_client(config: &AppConfig, event_tx: &flume::Sender<AppEvent>) -> Option<Arc<BackendClient>> {
    match BackendClient::new(config.backend.clone()) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            let _ = event_tx.send(AppEvent::error(format!("Failed to build backend client: {e}")));
            None
        }
    }
}

async fn handle_command(cmd: ServiceCommand, client: Arc<BackendClient>, event_tx: flume::Sender<AppEvent>) {
    match cmd {
        ServiceCommand::CheckStatus => match client.status().await {
            Ok(status) => {
                let _ = event_tx.send(AppEvent::ConnectionChanged {
                    target: ConnectionTarget::Backend,
                    connected: true,
                    detail: Some(status.status.clone()),
                });
                let _ = event_tx.send(AppEvent::ConnectionChanged {
                    target: ConnectionTarget::TeddyCloud,
                    connected: status.teddycloud_connected,
                    detail: None,
                });
                let _ = event_tx.send(AppEvent::StatusChecked { status });
            }
            Err(e) => {
                let connected = !BackendClient::is_connection_error(&e);
                let _ = event_tx.send(AppEvent::ConnectionChanged {
                    target: ConnectionTarget::Backend,
                    connected,
                    detail: Some(e.to_string()),
                });
                let _ = event_tx.send(AppEvent::ConnectionChanged {
                    target: ConnectionTarget::TeddyCloud,
                    connected: false,
                    detail: None,
                });
                fail(&event_tx, "status", e);
            }
        },
        ServiceCommand::LoadLibrary { page, page_size, filter } => {
            match client.taf_library(page, page_size, filter).await {
                Ok(response) => {
                    let _ = event_tx.send(AppEvent::debug(format!(
                        "Library page {} loaded, {} files",
                        response.page,
                        response.taf_files.len()
                    )));
                    let _ = event_tx.send(AppEvent::LibraryLoaded { response });
                }
                Err(e) => fail(&event_tx, "library", e),
            }
        }
        ServiceCommand::ParseHeader { taf_path } => match client.parse_taf(&taf_path).await {
            Ok(response) => {
                let _ = event_tx.send(AppEvent::HeaderParsed { taf_path, response });
            }
            Err(e) => fail(&event_tx, "parse-header", e),
        },
        ServiceCommand::ParseMetadata { taf_path } => match client.taf_metadata(&taf_path).await {
            Ok(metadata) => {
                let _ = event_tx.send(AppEvent::TafParsed { taf_path, metadata });
            }
            Err(e) => fail(&event_tx, "parse-metadata", e),
        },
        ServiceCommand::SearchCovers { taf_path, search_term } => {
            match client.search_covers(&search_term, COVER_SEARCH_LIMIT).await {
                Ok(response) => {
                    let _ = event_tx.send(AppEvent::info(format!(
                        "Found {} covers for '{search_term}'",
                        response.covers.len()
                    )));
                    let _ = event_tx.send(AppEvent::CoversFound {
                        taf_path,
                        covers: response.covers,
                    });
                }
                Err(e) => fail(&event_tx, "cover-search", e),
            }
        }
        ServiceCommand::DownloadCover { taf_path, image_url, filename } => {
            match client.download_cover(&image_url, &filename).await {
                Ok(response) => {
                    let _ = event_tx.send(AppEvent::CoverDownloaded { taf_path, response });
                }
                Err(e) => fail(&event_tx, "cover-download", e),
            }
        }
        ServiceCommand::CreateTonie { taf_path, request } => {
            match client.create_tonie(&request).await {
                Ok(tonie) => {
                    let _ = event_tx.send(AppEvent::info(format!(
                        "Created custom tag {} for {}",
                        tonie.model, taf_path
                    )));
                    let _ = event_tx.send(AppEvent::TonieCreated { taf_path, tonie });
                }
                Err(e) => fail(&event_tx, "create-tonie", e),
            }
        }
        ServiceCommand::BatchAnalyze { taf_paths } => {
            let count = taf_paths.len();
            let _ = event_tx.send(AppEvent::info(format!("Analyzing {count} files")));
            match client.batch_analyze(taf_paths).await {
                Ok(response) => {
                    let _ = event_tx.send(AppEvent::info(format!(
                        "Analysis done: {} auto-matched, {} need review, {} unmatched",
                        response.auto_matched, response.needs_review, response.unmatched
                    )));
                    let _ = event_tx.send(AppEvent::BatchAnalyzed { response });
                }
                Err(e) => fail(&event_tx, "batch-analyze", e),
            }
        }
        ServiceCommand::SearchMetadata { items } => match client.search_metadata(items).await {
            Ok(response) => {
                let _ = event_tx.send(AppEvent::MetadataSearched { response });
            }
            Err(e) => fail(&event_tx, "metadata-search", e),
        },
        ServiceCommand::BatchProcess { selections } => {
            let _ = event_tx.send(AppEvent::info(format!(
                "Processing {} selections",
                selections.len()
            )));
            match client.batch_process(selections).await {
                Ok(response) => {
                    let _ = event_tx.send(AppEvent::info(format!(
                        "Batch done: {} succeeded, {} failed",
                        response.successful, response.failed
                    )));
                    let _ = event_tx.send(AppEvent::BatchProcessed { response });
                }
                Err(e) => fail(&event_tx, "batch-process", e),
            }
        }
        // Handled in the command loop before dispatch
        ServiceCommand::UpdateConfig(_) => {}
    }
}

fn fail(event_tx: &flume::Sender<AppEvent>, context: &str, error: Error) {
    let message = error.to_string();
    let _ = event_tx.send(AppEvent::error(format!("[{context}] {message}")));
    let _ = event_tx.send(AppEvent::RequestFailed {
        context: context.to_string(),
        message,
    });
}

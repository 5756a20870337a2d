//! Service Layer
//!
//! Handles all communication with the management backend on a dedicated
//! runtime thread, decoupled from the UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                             │
//! │  ┌────────────────────┐   ┌─────────────────────────────┐  │
//! │  │   BackendClient    │   │  Command loop (tokio)       │  │
//! │  │   (reqwest/REST)   │   │  ServiceCommand -> request  │  │
//! │  └────────────────────┘   └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AppEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                            │
//! │              (LibraryState, WizardState, ...)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod backend_client;
mod service_hub;

pub use backend_client::*;
pub use service_hub::*;

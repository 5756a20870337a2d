//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::batch::{BatchAnalyzeResponse, BatchProcessResponse, MetadataSearchResponse};
use crate::domain::library::TafLibraryResponse;
use crate::domain::metadata::{
    CoverDownloadResponse, CoverImage, ParseTafResponse, StatusResponse, TafMetadataResponse,
};
use crate::domain::tonie::TonieModel;
use crate::state::connection_state::ConnectionTarget;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Connection status changed
    ConnectionChanged {
        target: ConnectionTarget,
        connected: bool,
        detail: Option<String>,
    },

    /// Backend status probe completed
    StatusChecked {
        status: StatusResponse,
    },

    /// A library page finished loading
    LibraryLoaded {
        response: TafLibraryResponse,
    },

    /// A TAF header was parsed for a library row
    HeaderParsed {
        taf_path: String,
        response: ParseTafResponse,
    },

    /// Metadata for a single TAF file was parsed
    TafParsed {
        taf_path: String,
        metadata: TafMetadataResponse,
    },

    /// Cover search finished
    CoversFound {
        taf_path: String,
        covers: Vec<CoverImage>,
    },

    /// Cover download finished
    CoverDownloaded {
        taf_path: String,
        response: CoverDownloadResponse,
    },

    /// A custom tonie was created
    TonieCreated {
        taf_path: String,
        tonie: TonieModel,
    },

    /// Batch analyze step finished
    BatchAnalyzed {
        response: BatchAnalyzeResponse,
    },

    /// Batch metadata search finished
    MetadataSearched {
        response: MetadataSearchResponse,
    },

    /// Batch processing finished
    BatchProcessed {
        response: BatchProcessResponse,
    },

    /// A service request failed
    RequestFailed {
        context: String,
        message: String,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}

//! # Courier - converted document delivery
//!
//! This is a facade crate that re-exports all public APIs from the courier components.
//! Use this crate to get access to the whole delivery stage in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! courier = { path = "../courier" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Job`, `NotificationPayload`, `ApiResponse`, `SendError`
//! - **Port traits**: `MailTransport`, `Blacklist`, `Cleanup`, `ProgressSink`, `AlertSink`
//! - **Use cases**: `Dispatcher`, `PayloadBuilder`, `SideEffectRouter`, `interpret`
//! - **Adapters**: `PostmarkEmailClient`, `StreamingEncoder`, `HashSetBlacklist`, `RedisBlacklist`, etc.
//! - **Service**: `NotificationService` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use courier_core::*;
}

// Re-export most commonly used core types at the root level
pub use courier_core::{
    ApiResponse, Attachment, ClientError, FailureKind, Job, NotificationPayload, ResponseClass,
    SendError, messages,
};

// ============================================================================
// Port Traits
// ============================================================================

pub use courier_core::{
    AlertSink, Blacklist, BlacklistError, Cleanup, CleanupError, MailTransport, ProgressSink,
    TransportError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use courier_application::*;
}

pub use courier_application::{
    DispatchConfig, Dispatcher, MAX_ATTACHMENT_SIZE, PayloadBuilder, SideEffectRouter, interpret,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Email API client and body encoding
    pub mod email {
        pub use courier_adapters::email::*;
    }

    /// Blacklist implementations
    pub mod persistence {
        pub use courier_adapters::persistence::*;
    }

    /// Cleanup implementations
    pub mod cleanup {
        pub use courier_adapters::cleanup::*;
    }

    /// Progress and alert sinks
    pub mod notify {
        pub use courier_adapters::notify::*;
    }

    /// Configuration
    pub mod config {
        pub use courier_adapters::config::*;
    }

    /// Tracing setup
    pub mod telemetry {
        pub use courier_adapters::telemetry::*;
    }
}

// Re-export commonly used adapters at root level
pub use courier_adapters::{
    cleanup::FsCleanup,
    config::CourierSettings,
    email::{PostmarkEmailClient, StreamingEncoder},
    notify::{TracingAlertSink, TracingProgressSink},
    persistence::{HashSetBlacklist, RedisBlacklist},
    telemetry::init_tracing,
};

// ============================================================================
// Notification Service (Main Entry Point)
// ============================================================================

/// Main notification service
pub use courier_service::{NotificationService, ServiceError, configure_redis_blacklist};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use url::Url;

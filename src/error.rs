//! Host startup errors.

/// Failure while configuring or starting the dashboard host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable held an unusable value.
    #[error("invalid config {var}: {reason}")]
    Config { var: &'static str, reason: String },

    /// `[package.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the listener failed.
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bindery workspace
#[derive(Error, Debug)]
pub enum Error {
    /// A binding key was requested that was never registered
    #[error("binding not found: {key}")]
    BindingNotFound {
        /// The key that was looked up
        key: String,
    },

    /// A server name was requested that was never registered
    #[error("server not found: {name}")]
    ServerNotFound {
        /// The name that was looked up
        name: String,
    },

    /// A binding was resolved before any value source was attached
    #[error("binding '{key}' has no value source")]
    Unbound {
        /// The key of the incomplete binding
        key: String,
    },

    /// A bound value did not hold the requested type
    #[error("binding '{key}' does not hold a value of type {expected}")]
    TypeMismatch {
        /// The key of the offending binding
        key: String,
        /// The type the caller asked for
        expected: &'static str,
    },

    /// A provider failed while computing its value
    #[error("provider error: {message}")]
    Provider {
        /// Description of the provider failure
        message: String,
    },

    /// Generic string-based error, for artifact implementations outside
    /// this workspace
    #[error("{0}")]
    Message(String),

    /// An artifact factory failed during construction
    #[error("failed to construct '{name}': {message}")]
    Construction {
        /// Name of the artifact being constructed
        name: String,
        /// Description of the construction failure
        message: String,
    },

    /// One or more servers failed during a lifecycle transition
    ///
    /// Every server is attempted independently; this variant carries the
    /// full set of per-server failures so a single bad server never masks
    /// its siblings.
    #[error("{operation} failed for {} server(s): {}", .failures.len(), lifecycle_summary(.failures))]
    Lifecycle {
        /// The transition that failed ("start" or "stop")
        operation: &'static str,
        /// Failed server names paired with their causes
        failures: Vec<(String, Error)>,
    },
}

fn lifecycle_summary(failures: &[(String, Error)]) -> String {
    failures
        .iter()
        .map(|(name, cause)| format!("{name} ({cause})"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_error_names_each_failed_server() {
        let err = Error::Lifecycle {
            operation: "start",
            failures: vec![
                (
                    "alpha".to_string(),
                    Error::Provider {
                        message: "socket refused".to_string(),
                    },
                ),
                (
                    "beta".to_string(),
                    Error::ServerNotFound {
                        name: "beta".to_string(),
                    },
                ),
            ],
        };

        let rendered = err.to_string();
        assert!(rendered.contains("start failed for 2 server(s)"), "{rendered}");
        assert!(rendered.contains("alpha"), "{rendered}");
        assert!(rendered.contains("beta"), "{rendered}");
    }

    #[test]
    fn type_mismatch_reports_key_and_expected_type() {
        let err = Error::TypeMismatch {
            key: "servers.web".to_string(),
            expected: "server",
        };
        assert_eq!(
            err.to_string(),
            "binding 'servers.web' does not hold a value of type server"
        );
    }
}

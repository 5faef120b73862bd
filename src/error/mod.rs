//! Error types for rook-ceph

use thiserror::Error;

/// Main error type for rook-ceph
#[derive(Debug, Error)]
pub enum RcError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Resource not found: {kind}/{name}")]
    NotFound { kind: String, name: String },

    #[error("Missing mon or osd deployment name {name}: {source}")]
    DeploymentMissing {
        name: String,
        #[source]
        source: Box<RcError>,
    },

    #[error("Deployment {name} cannot be debugged: {reason}")]
    InvalidDeployment { name: String, reason: String },

    #[error("failed to update scale of deployment {name}: {source}")]
    Scale {
        name: String,
        #[source]
        source: Box<RcError>,
    },

    #[error("Error creating deployment {name}: {source}")]
    CreateDeployment {
        name: String,
        #[source]
        source: Box<RcError>,
    },

    #[error("Timeout waiting for {0}")]
    Timeout(String),

    #[error("Mon endpoints error: {0}")]
    MonEndpoints(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RcError {
    /// Whether this error means the requested object does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            RcError::Kube(kube::Error::Api(e)) => e.code == 404,
            RcError::NotFound { .. } => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for RcError {
    fn from(e: serde_json::Error) -> Self {
        RcError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for RcError {
    fn from(e: serde_yaml::Error) -> Self {
        RcError::Serialization(e.to_string())
    }
}

/// Result type alias for rook-ceph
pub type Result<T> = std::result::Result<T, RcError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VfdtError>;

#[derive(Debug, Error)]
pub enum VfdtError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{operation}: {source}")]
    Domain {
        operation: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("malformed model (line {line}): {message}")]
    Format { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Ways an example or a tree operation can fall outside the declared feature domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("expected {expected} attribute values, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("feature {feature} has value {value}, domain size is {cardinality}")]
    ValueOutOfRange {
        feature: usize,
        value: usize,
        cardinality: usize,
    },

    #[error("class label {label} is not 0 or 1")]
    LabelOutOfRange { label: usize },

    #[error("node {node} is not a leaf")]
    NotALeaf { node: usize },

    #[error("feature {feature} is not eligible for splitting here")]
    FeatureNotEligible { feature: usize },

    #[error("example counts exceed {}", u64::MAX)]
    CountOverflow,
}

impl VfdtError {
    pub fn domain(operation: &'static str, source: DomainError) -> Self {
        Self::Domain { operation, source }
    }

    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

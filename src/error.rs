use thiserror::Error;
use xc::XcError;

pub type Result<T> = std::result::Result<T, FunctionalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionalError {
    #[error("Duplicate specification of exchange (XC + X) in functional {0}")]
    DuplicateExchangeSpec(String),

    #[error("Duplicate specification of correlation (XC + C) in functional {0}")]
    DuplicateCorrelationSpec(String),

    #[error("No exchange specified in functional {0}")]
    MissingExchangeSpec(String),

    #[error("No correlation specified in functional {0}")]
    MissingCorrelationSpec(String),

    #[error("Duplicate request for libxc exchange parameters in functional {0}")]
    DuplicateHybridRequest(String),

    #[error("Inconsistent definition of exchange in functional {0}")]
    InconsistentExchangeSpec(String),

    #[error("Libxc parameters requested for exchange component {component}, which is not part of functional {name}")]
    UnresolvedHybridReference { name: String, component: String },

    #[error("Unknown functional {0}")]
    UnknownFunctional(String),

    #[error("Malformed input data: {0}")]
    MalformedInputData(String),

    #[error(transparent)]
    Component(#[from] XcError),
}

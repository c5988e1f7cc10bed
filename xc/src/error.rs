use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum XcError {
    #[error("unknown functional component '{0}'")]
    UnknownComponent(String),

    #[error("unknown libxc query '{query}' for component {component}")]
    UnknownQuery { component: String, query: String },

    #[error("component {0} does not carry hybrid exchange coefficients")]
    NotHybrid(String),

    #[error("component {component} takes {expected} tweak parameters, got {found}")]
    InvalidTweak {
        component: String,
        expected: usize,
        found: usize,
    },

    #[error("cannot allocate functional {0} with zero grid points")]
    EmptyGrid(String),

    #[error("derivative order {deriv} is not supported by functional {name} (maximum 2)")]
    UnsupportedDerivative { name: String, deriv: usize },
}

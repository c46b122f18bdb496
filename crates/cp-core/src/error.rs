use glam::DVec3;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate camera placement: eye {eye} coincides with target {target}")]
    DegenerateInput { eye: DVec3, target: DVec3 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Host error: {0}")]
    Host(String),

    #[error("Parent transform is not invertible: {0}")]
    SingularParent(String),

    #[error("Options parse error: {0}")]
    OptionsParse(#[from] serde_json::Error),
}

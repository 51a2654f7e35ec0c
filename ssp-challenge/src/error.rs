use crate::Label;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("number of suppliers must be at least 1, got {0}")]
    InvalidArgument(usize),
    #[error("supplier {supplier} references unknown label {label}")]
    InvalidState { supplier: Label, label: Label },
}

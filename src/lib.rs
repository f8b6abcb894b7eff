#![forbid(unsafe_code)]

pub mod result;
pub mod status;

pub use result::{
    MaybeEmpty, OperationResult, OperationResult1, OperationResult2, OperationResult3, Outcome,
};
pub use status::StatusCode;

pub mod empty;
pub mod outcome;
pub mod payload;

pub use empty::MaybeEmpty;
pub use outcome::{OperationResult, Outcome};
pub use payload::{OperationResult1, OperationResult2, OperationResult3};

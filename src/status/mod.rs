pub mod code;

pub use code::StatusCode;

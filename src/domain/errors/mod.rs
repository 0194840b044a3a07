mod client_errors;
mod fs_errors;
mod validation_errors;

pub use client_errors::*;
pub use fs_errors::*;
pub use validation_errors::*;

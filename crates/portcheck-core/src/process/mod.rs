pub mod invoke;

pub use invoke::{Exit, Invocation};

pub mod mode;
pub mod target;

pub use mode::Mode;
pub use target::{Outcome, Verifier};

pub mod catalog;
pub mod enumerate;
pub mod model;

pub use model::Platform;

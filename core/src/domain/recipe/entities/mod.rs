pub mod completion;
pub mod errors;
pub mod recipe;

pub use completion::*;
pub use errors::*;
pub use recipe::*;

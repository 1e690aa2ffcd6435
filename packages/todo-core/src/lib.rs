mod error;
mod filter;
mod service;
mod store;
mod todo;
mod validation;

pub use error::*;
pub use filter::*;
pub use service::*;
pub use store::*;
pub use todo::*;
pub use validation::*;

mod api_error;
mod api_types;
mod api_utils;

pub use api_error::*;
pub use api_types::*;
pub use api_utils::*;

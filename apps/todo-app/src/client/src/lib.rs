mod api;
mod controller;
mod form;
mod state;

pub use api::*;
pub use controller::*;
pub use form::*;
pub use state::*;

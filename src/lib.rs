mod checkout_dialog;
mod components;
mod config;
mod request;
mod state;
mod transport;

pub use checkout_dialog::*;
pub use components::*;
pub use config::*;
pub use request::*;
pub use state::*;
pub use transport::*;

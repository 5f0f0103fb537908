//! The application state controller: canonical copies of every collection,
//! kept in step with the API by refetching after each write.

mod controller;
mod state;
mod toast;

pub use controller::DashboardController;
pub use state::AppState;
pub use toast::{Toast, ToastKind};

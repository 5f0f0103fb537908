pub mod user;
pub mod package;
pub mod booking;
pub mod notification;

pub use user::*;
pub use package::*;
pub use booking::*;
pub use notification::*;

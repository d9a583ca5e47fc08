pub mod appointment;
pub mod auth;
pub mod center;
pub mod error;
pub mod queue;

pub use appointment::*;
pub use auth::*;
pub use center::*;
pub use error::*;
pub use queue::*;

pub mod controller;
pub mod eligibility;
pub mod models;
pub mod reconciler;

pub use controller::QueueViewController;
pub use models::{QueueSnapshot, ViewState};
pub use reconciler::reconcile;

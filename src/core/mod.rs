pub mod auth;
pub mod http;
pub mod orders;
pub mod session;

pub use crate::domain::model::{OrderConfirmation, OrderDraft, OrderRequest};
pub use crate::domain::ports::FormSource;
pub use crate::utils::error::Result;

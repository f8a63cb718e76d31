pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::core::auth::AuthApi;
pub use crate::core::http::ApiClient;
pub use crate::core::orders::OrdersApi;
pub use crate::core::session::SessionStore;
pub use domain::model::{OrderConfirmation, OrderDraft, OrderRequest, SessionUser};
pub use utils::error::{ClientError, Result};

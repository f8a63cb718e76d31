use crate::core::http::{self, ApiClient};
use crate::domain::model::{
    OrderConfirmation, OrderDraft, OrderRequest, OrderSummary, TrackingInfo,
};
use crate::domain::ports::FormSource;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation;

pub const ORDERS_PATH: &str = "/api/customer/orders";

/// Customer-facing order operations: validation, submission, listing and
/// tracking, all through the authenticated request wrapper.
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Validates a raw draft and submits it, returning the server's
    /// confirmation. Validation failures propagate untouched.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<OrderConfirmation> {
        let order = validation::validate_order(draft)?;
        self.submit(&order).await
    }

    /// Submits an already validated order.
    ///
    /// Fails fast with [`ClientError::AuthenticationRequired`] when no
    /// credential is stored, before any network activity; the wrapper's own
    /// 401 handling still covers tokens the server rejects.
    pub async fn submit(&self, order: &OrderRequest) -> Result<OrderConfirmation> {
        if !self.client.session().is_authenticated() {
            return Err(ClientError::AuthenticationRequired);
        }

        tracing::info!(
            "Submitting order: {} -> {}, {} kg of {}",
            order.pickup_address,
            order.drop_address,
            order.weight_kg,
            order.material_type
        );

        let confirmation: OrderConfirmation = self
            .client
            .post(ORDERS_PATH, order)
            .await
            .map_err(refine_http)?;

        tracing::info!(
            "Order {} created, fare {}",
            confirmation.order_id,
            confirmation.fare_total
        );
        Ok(confirmation)
    }

    /// Reads each order field by name from a form-like source and submits.
    /// Absent fields stay unset and are reported by the validator; only the
    /// description is allowed to remain absent.
    pub async fn create_order_from_form<F: FormSource>(
        &self,
        form: &F,
    ) -> Result<OrderConfirmation> {
        let draft = OrderDraft {
            pickup_lat: form.value("pickup_lat"),
            pickup_lng: form.value("pickup_lng"),
            drop_lat: form.value("drop_lat"),
            drop_lng: form.value("drop_lng"),
            pickup_address: form.value("pickup_address"),
            drop_address: form.value("drop_address"),
            material_type: form.value("material_type"),
            weight_kg: form.value("weight_kg"),
            material_description: form.value("material_description"),
        };
        self.create_order(&draft).await
    }

    /// Lists the customer's own orders.
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>> {
        self.client.get(ORDERS_PATH).await.map_err(refine_http)
    }

    /// Live tracking state for one order.
    pub async fn track_order(&self, order_id: i64) -> Result<TrackingInfo> {
        let path = format!("{}/{}/track", ORDERS_PATH, order_id);
        self.client.get(&path).await.map_err(refine_http)
    }
}

/// Replaces a raw HTTP error body with the server's structured message when
/// one can be extracted, so callers always receive a displayable message.
fn refine_http(err: ClientError) -> ClientError {
    match err {
        ClientError::Http { status, message } => ClientError::Http {
            status,
            message: http::error_message(status, &message),
        },
        other => other,
    }
}

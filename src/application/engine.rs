use crate::domain::amount::Amount;
use crate::domain::order::{Order, OrderItem, OrderRequest, OrderStatus, PaymentMethod};
use crate::domain::ports::{OrderStoreBox, ProductCatalogBox};
use crate::error::{NiagaError, Result};
use crate::qris::QrisEncoder;
use chrono::Utc;

/// The main entry point for order processing.
///
/// `OrderEngine` prices order requests against the catalog, attaches a
/// dynamic QRIS payload to QRIS-paid orders, and enforces the status
/// lifecycle. The encoder is optional: a deployment without a configured
/// static template can still take cash orders, and a QRIS request then fails
/// with a configuration error instead of producing a payload-less order.
pub struct OrderEngine {
    catalog: ProductCatalogBox,
    orders: OrderStoreBox,
    encoder: Option<QrisEncoder>,
}

impl OrderEngine {
    pub fn new(
        catalog: ProductCatalogBox,
        orders: OrderStoreBox,
        encoder: Option<QrisEncoder>,
    ) -> Self {
        Self {
            catalog,
            orders,
            encoder,
        }
    }

    /// Prices and persists a new order in `Pending` state.
    ///
    /// Rejects duplicate order ids, empty item lists, zero quantities and
    /// unknown products. The order total must be a valid transaction amount
    /// even for cash orders, so a catalog full of zero-priced items cannot
    /// produce a free order.
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order> {
        if request.items.is_empty() {
            return Err(NiagaError::Order(format!(
                "order {} has no items",
                request.id
            )));
        }
        if self.orders.exists(&request.id).await? {
            return Err(NiagaError::Order(format!(
                "duplicate order id {}",
                request.id
            )));
        }

        let mut items = Vec::with_capacity(request.items.len());
        let mut total: u64 = 0;
        for item in &request.items {
            if item.quantity == 0 {
                return Err(NiagaError::Order(format!(
                    "order {}: quantity for product {} must be at least 1",
                    request.id, item.product_id
                )));
            }
            let product = self.catalog.get(&item.product_id).await?.ok_or_else(|| {
                NiagaError::Order(format!(
                    "order {}: unknown product {}",
                    request.id, item.product_id
                ))
            })?;
            let subtotal = product
                .price
                .checked_mul(u64::from(item.quantity))
                .ok_or_else(|| {
                    NiagaError::Amount(format!("order {} total overflows", request.id))
                })?;
            total = total.checked_add(subtotal).ok_or_else(|| {
                NiagaError::Amount(format!("order {} total overflows", request.id))
            })?;
            items.push(OrderItem {
                product_id: product.id,
                quantity: item.quantity,
                subtotal,
            });
        }
        let total = Amount::new(total)?;

        let qris_payload = match request.payment {
            PaymentMethod::Qris => {
                let encoder = self.encoder.as_ref().ok_or_else(|| {
                    NiagaError::Configuration("static QRIS template missing".to_string())
                })?;
                Some(encoder.payload(total))
            }
            PaymentMethod::Cash => None,
        };

        let order = Order {
            id: request.id,
            customer: request.customer,
            payment: request.payment,
            status: OrderStatus::Pending,
            items,
            total,
            qris_payload,
            created_at: Utc::now(),
        };
        self.orders.store(order.clone()).await?;
        Ok(order)
    }

    /// Moves an order to a new status.
    ///
    /// Terminal statuses never transition again: a paid order cannot be
    /// cancelled and a cancelled order cannot be paid.
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order> {
        let mut order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| NiagaError::Order(format!("unknown order {order_id}")))?;

        if order.status.is_terminal() {
            return Err(NiagaError::Order(format!(
                "order {order_id} is already {}",
                order.status
            )));
        }

        order.status = status;
        self.orders.store(order.clone()).await?;
        Ok(order)
    }

    /// Consumes the engine and returns all orders in insertion order.
    pub async fn into_results(self) -> Result<Vec<Order>> {
        self.orders.all_orders().await
    }
}

use crate::domain::amount::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Qris,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Qris => "qris",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order lifecycle. A new order starts `Pending`; `Paid` and `Cancelled` are
/// terminal (a QRIS order whose payment window expired stays cancelled even
/// if a late status update arrives).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced order line. `subtotal` is the catalog price at order time
/// multiplied by the quantity.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub subtotal: u64,
}

/// A processed order. `qris_payload` is present exactly when the payment
/// method is QRIS: the dynamic payload the customer scans to pay `total`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub payment: PaymentMethod,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total: Amount,
    pub qris_payload: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An unpriced order request as submitted by a customer or staff member.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OrderRequest {
    pub id: String,
    pub customer: String,
    pub payment: PaymentMethod,
    pub items: Vec<ItemRequest>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

use super::order::Order;
use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

pub type ProductCatalogBox = Box<dyn ProductCatalog>;
pub type OrderStoreBox = Box<dyn OrderStore>;

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get(&self, product_id: &str) -> Result<Option<Product>>;
    async fn all(&self) -> Result<Vec<Product>>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts a new order or replaces an existing one with the same id.
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: &str) -> Result<Option<Order>>;
    async fn exists(&self, order_id: &str) -> Result<bool>;
    /// All orders in insertion order.
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

pub mod amount;
pub mod order;
pub mod ports;
pub mod product;

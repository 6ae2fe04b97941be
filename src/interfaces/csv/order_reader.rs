use crate::domain::order::{ItemRequest, OrderRequest, PaymentMethod};
use crate::error::{NiagaError, Result};
use serde::Deserialize;
use std::io::Read;

/// One order line as it appears in the input CSV. Rows sharing an `order`
/// value belong to the same multi-item order.
#[derive(Debug, Deserialize)]
struct OrderRow {
    order: String,
    customer: String,
    payment: PaymentMethod,
    product: String,
    quantity: u32,
}

/// Reads order requests from a CSV source with an
/// `order,customer,payment,product,quantity` header.
///
/// Rows are grouped by the `order` column; the group's customer and payment
/// method come from its first row, and later rows that disagree are an
/// error rather than a silent overwrite.
pub struct OrderRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderRequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Reads all rows and groups them into order requests, preserving the
    /// order in which each order id first appears.
    pub fn read_all(self) -> Result<Vec<OrderRequest>> {
        let mut requests: Vec<OrderRequest> = Vec::new();
        for row in self.reader.into_deserialize::<OrderRow>() {
            let row = row?;
            let item = ItemRequest {
                product_id: row.product,
                quantity: row.quantity,
            };
            match requests.iter_mut().find(|r| r.id == row.order) {
                Some(request) => {
                    if request.customer != row.customer || request.payment != row.payment {
                        return Err(NiagaError::Order(format!(
                            "conflicting customer or payment method for order {}",
                            row.order
                        )));
                    }
                    request.items.push(item);
                }
                None => requests.push(OrderRequest {
                    id: row.order,
                    customer: row.customer,
                    payment: row.payment,
                    items: vec![item],
                }),
            }
        }
        Ok(requests)
    }
}

use crate::domain::order::Order;
use crate::error::Result;
use std::io::Write;

/// Writes processed orders as CSV with an
/// `order,customer,payment,status,total,qris_payload` header.
///
/// Line items are intentionally not flattened into the output; this is the
/// per-order summary the dashboard export shows. Cash orders leave the
/// payload column empty.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_orders(&mut self, orders: Vec<Order>) -> Result<()> {
        self.writer.write_record([
            "order",
            "customer",
            "payment",
            "status",
            "total",
            "qris_payload",
        ])?;
        for order in orders {
            self.writer.write_record([
                order.id.as_str(),
                order.customer.as_str(),
                order.payment.as_str(),
                order.status.as_str(),
                &order.total.to_string(),
                order.qris_payload.as_deref().unwrap_or(""),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use crate::domain::order::{OrderStatus, PaymentMethod};
    use chrono::Utc;

    fn order(id: &str, payment: PaymentMethod, payload: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            customer: "Budi".to_string(),
            payment,
            status: OrderStatus::Pending,
            items: vec![],
            total: Amount::new(25000).unwrap(),
            qris_payload: payload.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_write_orders() {
        let mut buffer = Vec::new();
        {
            let mut writer = OrderWriter::new(&mut buffer);
            writer
                .write_orders(vec![
                    order("ORD-1", PaymentMethod::Cash, None),
                    order("ORD-2", PaymentMethod::Qris, Some("000201...6304ABCD")),
                ])
                .unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("order,customer,payment,status,total,qris_payload")
        );
        assert_eq!(lines.next(), Some("ORD-1,Budi,cash,pending,25000,"));
        assert_eq!(
            lines.next(),
            Some("ORD-2,Budi,qris,pending,25000,000201...6304ABCD")
        );
        assert_eq!(lines.next(), None);
    }
}

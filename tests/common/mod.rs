#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

/// A structurally valid static template for tests: static point of
/// initiation, one country-code field, 4 junk checksum characters (the
/// template's own checksum is discarded during encoding, so it does not
/// need to verify).
pub const TEMPLATE: &str =
    "00020101021129320014ID.CO.QRIS.WWW0210NIAGA1234553033605802ID5905NIAGA6007JAKARTA6304ABCD";

pub fn write_catalog_csv(
    path: &Path,
    products: &[(&str, &str, u64, &str)],
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["id", "name", "price", "category"])?;
    for (id, name, price, category) in products {
        wtr.write_record([
            id.to_string(),
            name.to_string(),
            price.to_string(),
            category.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_orders_csv(
    path: &Path,
    rows: &[(&str, &str, &str, &str, u32)],
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["order", "customer", "payment", "product", "quantity"])?;
    for (order, customer, payment, product, quantity) in rows {
        wtr.write_record([
            order.to_string(),
            customer.to_string(),
            payment.to_string(),
            product.to_string(),
            quantity.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

use serde::{Deserialize, Serialize};

/// A catalog entry customers order against. Products are grouped under a
/// named category (Makanan, Minuman, Snack, ...); price is in whole Rupiah.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_csv_deserialization() {
        let csv = "id, name, price, category\nP-01, Nasi Goreng Spesial, 25000, Makanan";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let product: Product = iter.next().unwrap().expect("Failed to deserialize product");
        assert_eq!(product.id, "P-01");
        assert_eq!(product.name, "Nasi Goreng Spesial");
        assert_eq!(product.price, 25000);
        assert_eq!(product.category, "Makanan");
    }

    #[test]
    fn test_product_row_without_category_is_error() {
        let csv = "id, name, price\nP-01, Nasi Goreng Spesial, 25000";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let result = reader.deserialize::<Product>().next().unwrap();
        assert!(result.is_err());
    }
}

use crate::domain::product::Product;
use crate::error::{NiagaError, Result};
use std::io::Read;

/// Reads the product catalog from a CSV source with an
/// `id,name,price,category` header. Wraps `csv::Reader` with whitespace
/// trimming.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes products.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(NiagaError::from))
    }
}

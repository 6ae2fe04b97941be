use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use niaga::application::engine::OrderEngine;
use niaga::domain::amount::Amount;
use niaga::domain::ports::{OrderStoreBox, ProductCatalogBox};
use niaga::infrastructure::in_memory::{InMemoryOrderStore, InMemoryProductCatalog};
use niaga::interfaces::csv::catalog_reader::CatalogReader;
use niaga::interfaces::csv::order_reader::OrderRequestReader;
use niaga::interfaces::csv::order_writer::OrderWriter;
use niaga::qris::{QrisEncoder, StaticTemplate, tlv};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Static merchant QRIS template (EMV-QR payload with trailing CRC16)
    #[arg(long, env = "NIAGA_QRIS_STATIC", global = true, hide_env_values = true)]
    template: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a dynamic QRIS payload for a single amount
    Payload {
        /// Transaction amount in whole Rupiah
        #[arg(long)]
        amount: u64,
    },
    /// Parse an EMV-QR payload and verify its checksum
    Decode {
        payload: String,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Process order request rows against a product catalog
    Orders {
        /// Input order requests CSV file
        input: PathBuf,

        /// Product catalog CSV file
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Payload { amount } => {
            let encoder = required_encoder(cli.template.as_deref())?;
            let amount = Amount::new(amount).into_diagnostic()?;
            println!("{}", encoder.payload(amount));
        }
        Command::Decode { payload, json } => {
            let summary = tlv::summarize(&payload).into_diagnostic()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).into_diagnostic()?
                );
            } else {
                let field = |value: Option<&str>| value.unwrap_or("-").to_string();
                println!("point of initiation: {}", field(summary.point_of_initiation.as_deref()));
                println!("merchant name:       {}", field(summary.merchant_name.as_deref()));
                println!("amount:              {}", field(summary.amount.as_deref()));
                println!("country code:        {}", field(summary.country_code.as_deref()));
                println!("crc:                 {}", field(summary.crc.as_deref()));
                println!("crc valid:           {}", summary.crc_valid);
            }
        }
        Command::Orders { input, catalog } => {
            // A missing template only matters once a QRIS order shows up;
            // cash-only batches run without one.
            let encoder = match cli.template.as_deref() {
                Some(template) => Some(QrisEncoder::new(
                    StaticTemplate::parse(template).into_diagnostic()?,
                )),
                None => None,
            };

            let catalog_file = File::open(catalog).into_diagnostic()?;
            let mut products = Vec::new();
            for product in CatalogReader::new(catalog_file).products() {
                products.push(product.into_diagnostic()?);
            }
            let catalog: ProductCatalogBox =
                Box::new(InMemoryProductCatalog::with_products(products));
            let orders: OrderStoreBox = Box::new(InMemoryOrderStore::new());
            let engine = OrderEngine::new(catalog, orders, encoder);

            let input_file = File::open(input).into_diagnostic()?;
            let requests = OrderRequestReader::new(input_file)
                .read_all()
                .into_diagnostic()?;
            for request in requests {
                if let Err(e) = engine.create_order(request).await {
                    eprintln!("Error processing order: {e}");
                }
            }

            let orders = engine.into_results().await.into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = OrderWriter::new(stdout.lock());
            writer.write_orders(orders).into_diagnostic()?;
        }
    }

    Ok(())
}

fn required_encoder(template: Option<&str>) -> Result<QrisEncoder> {
    let template = template.unwrap_or_default();
    let template = StaticTemplate::parse(template).into_diagnostic()?;
    Ok(QrisEncoder::new(template))
}

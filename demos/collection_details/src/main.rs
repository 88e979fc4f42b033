use std::error::Error;

use aliasauto_catalog::{CollectionDetails, Locale};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let details = CollectionDetails::fetch("AA-2024-0117").await?;
    println!("{}", details.title(Locale::En));
    for row in details.spec_rows(Locale::En) {
        println!("{}: {}", row.label, row.value);
    }
    for option in details.options(Locale::En) {
        println!("+ {option}");
    }
    Ok(())
}

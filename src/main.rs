use aliasauto_catalog::CollectionList;
use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let listing = CollectionList::fetch(1, 20).await?;
    println!("{:#?}", listing);
    Ok(())
}

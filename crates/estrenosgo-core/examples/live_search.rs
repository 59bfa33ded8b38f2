use estrenosgo_core::{EstrenosScraper, SearchRequest, SiteConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = EstrenosScraper::new()?;

    let title = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "La casa de papel S05E01".to_string());

    println!("🔍 Buscando '{}'...\n", title);

    let requests = SearchRequest::for_entry(&title, &[]);
    let entries = scraper.search(&requests, SiteConfig::enabled()).await;

    println!("Encontradas {} entradas:", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        println!("  {}. {} [{}]", i + 1, entry.title, entry.quality);
        println!("     {}", entry.url);
    }

    Ok(())
}

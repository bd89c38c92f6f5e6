use anyhow::{Context, Result};
use housing_browser::compare::{self, ComparisonView};
use housing_browser::config::Config;
use housing_browser::format::listing_price;
use housing_browser::models::find_by_id;
use housing_browser::routes::Route;
use housing_browser::search::{decorate, RouteQuery, SearchOutcome, SearchSession};
use housing_browser::sources::{JsonFileListings, ListingSource, SampleListings};
use housing_browser::storage;
use housing_browser::stores::{AuthStore, Comparison, ComparisonStore, Favorites, FavoritesStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Housing Browser");

    let config = Config::load()?;

    let source: Box<dyn ListingSource> = match &config.listings {
        Some(path) => Box::new(JsonFileListings::new(path)),
        None => Box::new(SampleListings),
    };
    info!("Loading listings from {} source...", source.source_name());
    let records = source.load().await?;

    let favorites = FavoritesStore::open(storage::open(&config.storage)?).context("Failed to restore favorites")?;
    let comparison =
        ComparisonStore::open(storage::open(&config.storage)?).context("Failed to restore comparison list")?;
    let auth = AuthStore::open(storage::open(&config.storage)?).context("Failed to restore session")?;

    // First argument is a path such as `/search?q=loft&sort=price-low`
    let path = std::env::args().nth(1).unwrap_or_else(|| "/search".to_string());
    let route = Route::parse(&path).resolve(auth.is_authenticated());
    info!("Navigating to {}", route);

    match route {
        Route::Search(query) => {
            let query = RouteQuery::parse(&query)?;
            let mut session = SearchSession::with_page_size(records, config.page_size);
            session.apply_route(&query);

            match session.results() {
                SearchOutcome::NoResults => {
                    println!("No properties found. Try adjusting your search filters.");
                }
                SearchOutcome::Page(page) => {
                    println!(
                        "Showing {} properties (page {} of {})\n",
                        page.total_count, page.page, page.total_pages
                    );
                    for view in decorate(&page.items, &favorites, &comparison) {
                        let property = view.record;
                        let mut marks = String::new();
                        if view.is_favorite {
                            marks.push_str(" ♥");
                        }
                        if view.in_comparison {
                            marks.push_str(" ⇄");
                        }
                        println!("{}. {} ({}){}", property.id, property.title, listing_price(property), marks);
                        println!(
                            "   {} bd, {} ba, {} sqft, {}",
                            property.bedrooms, property.bathrooms, property.area, property.property_type
                        );
                        println!("   {}", property.location);
                        println!();
                    }
                }
            }
        }
        Route::Property(id) => match find_by_id(&records, id) {
            Some(property) => println!("{}", serde_json::to_string_pretty(property)?),
            None => println!("Property {} not found", id),
        },
        Route::Favorites => {
            println!("{} saved properties", favorites.favorites().len());
            for property in favorites.favorites() {
                println!("  {} ({})", property.title, listing_price(property));
            }
        }
        Route::Compare => {
            if let ComparisonView::Table(table) = compare::build(comparison.properties()) {
                for row in &table.features {
                    println!("{:<16}{}", row.label, row.cells.join(" | "));
                }
            } else {
                println!("No properties to compare");
            }
        }
        other => println!("Nothing to show for {} in the terminal", other),
    }

    Ok(())
}

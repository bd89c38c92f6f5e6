pub mod auth;
pub mod comparison;
pub mod favorites;
pub mod filters;
mod record_set;

pub use auth::{AuthStore, User};
pub use comparison::{AddOutcome, Comparison, ComparisonStore, MAX_COMPARISON_ITEMS};
pub use favorites::{Favorites, FavoritesStore};
pub use filters::FilterStore;

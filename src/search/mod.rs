pub mod criteria;
pub mod pagination;
pub mod pipeline;
pub mod query;
pub mod session;

pub use criteria::{FilterCriteria, FilterPatch, LocationFilter, Range, SortOption, StatusFilter, ViewMode};
pub use pagination::{PageControls, PageLink, DEFAULT_PAGE_SIZE};
pub use pipeline::{decorate, filter_and_sort, search, ListingView, ResultPage, SearchOutcome, SearchRequest};
pub use query::RouteQuery;
pub use session::SearchSession;

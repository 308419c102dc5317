pub mod category;
pub mod feed;
pub mod listing;
pub mod product;

pub use category::{CategoryStub, EnrichedCategory};
pub use feed::{CategoryEntry, CategoryFeed, NormalizedCategory};
pub use listing::{FilterCriteria, PageItem, PageWindow};
pub use product::ProductRecord;

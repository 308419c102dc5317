//! Ядро каталога витрины автозапчастей.
//!
//! Чистый синхронный конвейер без ввода-вывода:
//! заготовки → обогащение → фильтр → сортировка → страница.
//! Каждый вызов получает свои входы и возвращает новый результат,
//! аргументы не мутируются.

pub mod enrich;
pub mod feed;
pub mod listing;
pub mod paginate;
pub mod query;
pub mod sections;
pub mod synthesis;

pub use enrich::enrich;
pub use feed::{categories_from_body, normalize_feed, parse_feed, slugify};
pub use listing::ListingState;
pub use paginate::{page_window, paginate, MAX_VISIBLE_PAGES};
pub use query::{query, CatalogItem};
pub use sections::{section_by_tag, CatalogSection, SECTIONS};
pub use synthesis::synthesize;

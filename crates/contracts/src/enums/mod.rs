pub mod origin;
pub mod sort_key;

pub use origin::Origin;
pub use sort_key::SortKey;

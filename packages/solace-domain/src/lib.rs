pub mod advocate;
pub mod list;
pub mod pagination;
pub mod phone;
pub mod search;

pub use advocate::Advocate;
pub use list::{ListMeta, ListRequest, ListResponse};
pub use pagination::PageRequest;
pub use search::SearchTerm;

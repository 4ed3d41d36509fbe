//! Domain layer - Item models, listing queries and path helpers

pub mod item;
pub mod path;
pub mod query;

pub use item::{find_item, short_id, Folder, Note, Titled};
pub use path::Platform;
pub use query::{ItemTypes, ListQuery, SortField, SortOrder, TitlePattern};

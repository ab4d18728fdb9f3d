pub mod html;
pub mod list;
pub mod table;

pub use html::{Document, ListItem, RawTable};

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{ListItem, ListKind};
pub use rule::Rule;
pub use table::Table;

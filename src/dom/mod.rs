pub mod node;
pub mod page;

pub use node::{Element, Node};
pub use page::{Page, Slot, StyleSink};

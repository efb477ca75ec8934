//! Document model shared by every filter.
//!
//! - `block`: [`TextBlock`], its builder and the boundary sentinels
//! - `text_document`: [`TextDocument`], the owned block sequence
//! - `statistics`: [`TextDocumentStatistics`]

pub mod block;
pub mod statistics;
pub mod text_document;

pub use block::{RawTextBlock, TextBlock, TextBlockBuilder, EMPTY_END, EMPTY_START};
pub use statistics::TextDocumentStatistics;
pub use text_document::TextDocument;

pub mod client;
pub mod source;
pub mod types;

pub use client::{GhostClient, PAGE_SIZE};
pub use source::{GhostError, PostSource};
pub use types::{Author, PostDetail, PostSummary};

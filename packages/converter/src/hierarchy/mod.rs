//! Reconstruction of the legal-code hierarchy from content blocks.
//!
//! Structure in the source is not tagged, so headings are recognized by
//! keyword ([`classify_block`]) and the tree is grown by a small state
//! machine ([`HierarchyBuilder`]).

mod builder;
mod classify;

pub use builder::{
    build_hierarchy, parse_article_heading, ArticleHeading, BlockFlow, HierarchyBuilder, Level,
    PendingName,
};
pub use classify::{classify_block, BlockKind};

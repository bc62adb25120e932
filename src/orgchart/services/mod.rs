pub mod name_catalog;
pub mod tree_builder;

pub use name_catalog::NameCatalog;
pub use tree_builder::TreeBuilder;

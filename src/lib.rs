pub mod analyzers;
pub mod loader;
pub mod ordered_map;
pub mod output;

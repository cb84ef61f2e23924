pub mod collector;
pub mod cpp;
pub mod signature;

pub use collector::collect_classes;
pub use cpp::{CppParser, SourceUnit};

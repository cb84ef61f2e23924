mod interface;
mod method;

pub use interface::Interface;
pub use method::{MethodDecl, MethodDescriptor};

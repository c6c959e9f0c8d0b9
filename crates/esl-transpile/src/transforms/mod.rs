//! Lowering transforms.

mod stub_elimination;
mod super_call_rewrite;
pub mod super_constructor_calls;
pub mod super_site;
pub mod superclass_resolver;

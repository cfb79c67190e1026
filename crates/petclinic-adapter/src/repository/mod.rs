//! Persistence Adapters - Repository implementations
//!
//! These implement the repository trait from petclinic-domain.

pub mod in_memory;
pub mod json_file;

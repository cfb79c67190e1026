//! Domain Models
//!
//! Reference data and the identifiers of the external resources it is
//! loaded from.

pub mod blob;
pub mod key;
pub mod pet_type;

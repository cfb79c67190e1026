//! PetType - A named category of pet ("Cat", "Dog", ...)
//!
//! A PetType carries only its name. Identity is assigned by whichever
//! repository persists it, so an unsaved PetType has no id.

/// Identifier assigned by a [`PetTypeRepository`](crate::PetTypeRepository)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PetTypeId(u64);

impl PetTypeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for PetTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet type record, as read from one line of the init blob
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PetType {
    name: String,
}

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl core::fmt::Display for PetType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

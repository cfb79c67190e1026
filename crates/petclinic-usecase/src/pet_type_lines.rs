//! Line format of the pet type blob
//!
//! One pet type per line. Lines end in `\n`, `\r` or `\r\n`; a trailing line
//! ending does not produce an extra record. Empty lines are skipped and
//! nothing is trimmed.

use petclinic_domain::PetType;

/// Split decoded blob text into pet type records, in line order
pub fn parse_pet_types(text: &str) -> Vec<PetType> {
    text.split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .map(PetType::new)
        .collect()
}

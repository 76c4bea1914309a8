use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier shared by columns and tasks.
///
/// Ids are unique across both kinds of board item, which lets a drop target be
/// resolved from the id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(Uuid);

impl Id {
    /// Draws random ids until `taken` reports one as free.
    pub fn generate(taken: impl Fn(Id) -> bool) -> Self {
        loop {
            let id = Id(Uuid::new_v4());
            if !taken(id) {
                return id;
            }
        }
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Id(uuid)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps log lines readable
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn generate_skips_taken_ids() {
        let attempts = Cell::new(0);
        let id = Id::generate(|_| {
            attempts.set(attempts.get() + 1);
            attempts.get() < 3
        });
        assert_eq!(attempts.get(), 3);
        assert_ne!(id, Id::generate(|candidate| candidate == id));
    }

    #[test]
    fn display_is_short_hex() {
        let id = Id::from(Uuid::from_u128(0xabcdef01_2345_6789_abcd_ef0123456789));
        assert_eq!(id.to_string(), "abcdef01");
    }
}

use thiserror::Error;

use gridrep_serde::SerdeErr;

use crate::types::EntityId;

/// Errors that can occur while reading sections into a world
///
/// Sections are validated against the input before any of their entries is
/// applied, so a section that fails with `Serde` or `Malformed` leaves the
/// world untouched. Sections read before the failing one stay applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The world was destroyed; nothing can be done with it anymore
    #[error("World has been destroyed")]
    WorldInvalid,

    /// A header or payload reaches past the end of the input
    #[error("Truncated section: {0}")]
    Serde(#[from] SerdeErr),

    /// A section header that does not describe its contents
    #[error("Malformed section at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: &'static str },

    /// Bytes left after the last section, too few to hold another header
    #[error("{remaining} trailing bytes after the last section")]
    TrailingBytes { remaining: usize },

    /// A read handler stopped processing
    #[error("Read handler aborted on entity {entity_id} with code {code}")]
    Aborted { entity_id: EntityId, code: i32 },
}

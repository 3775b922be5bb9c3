use utx_wire::WireError;

use crate::schema::SchemaVersion;

/// Errors that can occur at the storage boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record failed to transcode to or from its stored bytes.
    ///
    /// On the read path this means the database content is corrupt or
    /// was written by an incompatible format.
    #[error("transcoding error: {0}")]
    Wire(#[from] WireError),

    /// The database was written by a newer schema than this binary
    /// supports. Upgrades are monotonic only; this is fatal.
    #[error("schema downgrade refused: stored {stored}, binary supports up to {supported}")]
    SchemaDowngrade {
        stored: SchemaVersion,
        supported: SchemaVersion,
    },

    /// A stored record did not consume its value bytes exactly.
    #[error("corrupt record under key {key_hex}: {extra} trailing bytes")]
    CorruptRecord { key_hex: String, extra: usize },
}

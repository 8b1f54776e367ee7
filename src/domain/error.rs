use thiserror::Error;

use super::blocks::BlockKind;

/// Failure to build a block from a recognised entry.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("invalid `{kind}` payload: {source}")]
    InvalidData {
        kind: BlockKind,
        #[source]
        source: serde_json::Error,
    },
}

impl BlockError {
    pub fn invalid_data(kind: BlockKind, source: serde_json::Error) -> Self {
        Self::InvalidData { kind, source }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::InvalidData { kind, .. } => *kind,
        }
    }
}

use chrono::{DateTime, Utc};
use rarelink_random::RandomError;
use rarelink_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    #[error("invalid selection window: start {start} is not before end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("no eligible entries in the selection window")]
    EmptyPool,

    #[error("slot {slot} is outside the entry pool of {total} entries")]
    SlotOutOfRange { slot: u64, total: u64 },

    #[error("entry pool total overflows u64")]
    Overflow,

    #[error("random source failed: {0}")]
    Random(#[from] RandomError),

    #[error(transparent)]
    Types(TypesError),
}

impl SelectionError {
    /// Whether the caller supplied bad input (as opposed to the window simply
    /// having no entries, or an internal failure).
    pub fn is_bad_input(&self) -> bool {
        matches!(self, Self::InvalidWindow { .. } | Self::Types(_))
    }

    /// Message suitable for showing to an end user. "Bad input" and
    /// "nothing to draw from" call for different corrective actions, so they
    /// never share wording.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidWindow { .. } | Self::Types(_) => {
                "invalid selection window: start must be before end"
            }
            Self::EmptyPool => "no eligible entries in the selected window",
            Self::SlotOutOfRange { .. } | Self::Overflow | Self::Random(_) => {
                "the raffle draw failed; no winner was selected"
            }
        }
    }
}

impl From<TypesError> for SelectionError {
    fn from(e: TypesError) -> Self {
        match e {
            TypesError::InvalidWindow { start, end } => Self::InvalidWindow { start, end },
            other => Self::Types(other),
        }
    }
}

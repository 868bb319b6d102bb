//! Prize-winner selection for RareLink submissions.
//!
//! Every player prop in a submission is one raffle entry. A draw runs as a
//! linear, stateless pipeline:
//! 1. **Aggregate** — keep submissions inside the half-open window, one
//!    [`WeightedEntry`] per submission, weight = prop count.
//! 2. **Build pool** — prefix sums over the entries; slot `i` of
//!    `[0, total_weight)` maps to exactly one entry by binary search.
//! 3. **Select** — one uniform draw from an injected [`RandomSource`].
//! 4. **Report** — assemble the [`WinnerResult`].
//!
//! Nothing is cached between calls; each raffle supplies its own randomness.
//!
//! [`RandomSource`]: rarelink_random::RandomSource

pub mod aggregator;
pub mod error;
pub mod pipeline;
pub mod pool;
pub mod reporter;
pub mod selector;
pub mod stats;

pub use aggregator::{aggregate, WeightedEntry};
pub use error::SelectionError;
pub use pipeline::{run_raffle, RaffleOutcome};
pub use pool::{build_pool, EntryPool};
pub use reporter::{build_result, WinnerResult};
pub use selector::{draw_slot, select_winner};
pub use stats::{
    participant_totals, recent_submissions, top_participants, win_probability, ParticipantTotal,
};

//! Fundamental types for the RareLink prize raffle.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! participant identifiers, submissions and their player props, and the
//! half-open selection window a raffle is drawn over.

pub mod error;
pub mod submission;
pub mod user;
pub mod window;

pub use error::TypesError;
pub use submission::{PlayerProp, Submission, SubmissionId};
pub use user::UserId;
pub use window::SelectionWindow;

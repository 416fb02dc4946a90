pub mod roster;
pub mod simulate;

pub use crate::domain::model::{Student, StudentSummary};
pub use crate::domain::ports::{OutputFormat, RosterProvider};
pub use crate::utils::error::Result;

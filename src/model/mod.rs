//! Data models for gitmon
//!
//! This module contains UI-independent data structures representing
//! commits, the row filter, and user notifications.

mod commit;
pub mod filter;
mod notification;

pub use commit::CommitRecord;
pub use filter::{CommitFilter, NO_FILTER_LABEL};
pub use notification::{Notification, NotificationKind};

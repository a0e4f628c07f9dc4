//! Outreach composition and simulated delivery.
//!
//! Drafts are built from a scored user, edited by the caller, then recorded in
//! an [`OutreachOutbox`]. No message ever leaves the process.

mod message;
pub mod repository;
pub mod router;
pub mod service;


pub use message::{compose_message, OutreachDraft, DEFAULT_SUBJECT};
pub use repository::{OutboxError, OutreachId, OutreachOutbox, OutreachRecord};
pub use router::outreach_router;
pub use service::{OutreachRequest, OutreachService, OutreachServiceError};

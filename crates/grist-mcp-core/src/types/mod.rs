//! Core types for Grist tool calls

mod entity;
mod outcome;
pub mod record;

pub use entity::{Column, Document, Organization, Record, Table, Workspace};
pub use outcome::{DeleteOutcome, QueryOutcome, QueryRows, Rejection};
pub use record::{normalize_new_records, normalize_record_updates, payload_ids, RecordInput};

//! Datastore collaborator abstraction.
//!
//! Submissions are written through the [`SubmissionStore`] trait: insert one
//! row into a named table, get back the assigned identifier and creation
//! timestamp. The shipped backend speaks the hosted-Postgres REST contract;
//! this system never reads, updates, or deletes.

mod postgrest;
mod store;

pub use postgrest::PostgrestStore;
pub use store::{DbError, DbResult, InsertedRecord, SubmissionStore};

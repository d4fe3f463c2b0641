//! Qna Core Library
//!
//! Core domain logic for the qna question tracking system: the record
//! model, the SQLite-backed record store, and the relevance query engine
//! that filters records by tag and ranks them against free text.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod query;
pub mod record;
pub mod records;
pub mod search;
pub mod store;
pub mod text;

//! Command implementations for qna

pub mod create;
pub mod delete;
pub mod dispatch;
pub mod init;
pub mod list;
pub mod output;
pub mod show;
pub mod update;

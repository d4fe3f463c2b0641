mod create;
mod delete;
mod init;
mod logging;
mod show;

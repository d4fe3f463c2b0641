//! Command enum dispatch

use super::command::{Command, CommandContext};
use super::handlers;
use crate::cli::Commands;
use qna_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => handlers::handle_init(ctx),
            Commands::Create(args) => handlers::handle_create(ctx, args),
            Commands::Show { id } => handlers::handle_show(ctx, id),
            Commands::List(args) => handlers::handle_list(ctx, args),
            Commands::Update(args) => handlers::handle_update(ctx, args),
            Commands::Delete { id } => handlers::handle_delete(ctx, id),
        }
    }
}

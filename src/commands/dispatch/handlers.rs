//! Handlers for question commands

use super::command::{resolve_store_path, CommandContext};
use super::trace_command;
use crate::cli::{CreateArgs, ListArgs, UpdateArgs};
use crate::commands;
use qna_core::error::Result;
use qna_core::query::ListQuery;
use qna_core::record::{NewRecord, RecordPatch};

pub(super) fn handle_init(ctx: &CommandContext) -> Result<()> {
    let store_path = resolve_store_path(ctx.cli, ctx.root);
    commands::init::execute(ctx.cli, ctx.root, store_path.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_create(ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    trace_command!(ctx.cli, ctx.start, "discover_store");

    let mut new = NewRecord::new(&args.question, &args.created_by);
    if let Some(description) = &args.description {
        new = new.with_description(description);
    }
    if let Some(answer) = &args.answer {
        new = new.with_answer(answer);
    }
    if let Some(properties) = &args.properties {
        new = new.with_properties(properties);
    }
    if let Some(updated_by) = &args.updated_by {
        new = new.with_updated_by(updated_by);
    }
    if let Some(assigned_to) = &args.assigned_to {
        new = new.with_assignee(assigned_to);
    }

    commands::create::execute(ctx.cli, &store, new)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_show(ctx: &CommandContext, id: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    trace_command!(ctx.cli, ctx.start, "discover_store");
    commands::show::execute(ctx.cli, &store, id)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    trace_command!(ctx.cli, ctx.start, "discover_store");

    let query = ListQuery::new()
        .with_tags(args.properties.as_deref())
        .with_text(args.query.as_deref());
    commands::list::execute(ctx.cli, &store, &query, args.scores)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_update(ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    trace_command!(ctx.cli, ctx.start, "discover_store");

    let patch = RecordPatch {
        question: args.question.clone(),
        question_description: args.description.clone(),
        created_by: args.created_by.clone(),
        updated_by: args.updated_by.clone(),
        answer: args.answer.clone(),
        assigned_to: args.assigned_to.clone(),
        properties: args.properties.clone(),
    };
    commands::update::execute(ctx.cli, &store, &args.id, &patch)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_delete(ctx: &CommandContext, id: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    trace_command!(ctx.cli, ctx.start, "discover_store");
    commands::delete::execute(ctx.cli, &store, id)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

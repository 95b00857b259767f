use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;
use super::utils::execute_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(ctx.store);

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute_and_print(&schema, &query, variables)
}

use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;
use super::utils::execute_and_print;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.store);
    execute_and_print(&schema, &query, variables)
}

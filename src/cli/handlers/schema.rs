use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    let schema = build_schema(ctx.store);
    print!("{}", schema.sdl());
    Ok(())
}

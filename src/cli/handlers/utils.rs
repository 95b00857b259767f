use crate::graphql::BookshelfSchema;
use anyhow::{Context, Result};

/// Execute a GraphQL request against the local store and print the JSON
/// response. Fails when the response carries errors.
pub fn execute_and_print(
    schema: &BookshelfSchema,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.errors.is_empty() {
        anyhow::bail!("GraphQL request failed with {} error(s)", response.errors.len());
    }
    Ok(())
}

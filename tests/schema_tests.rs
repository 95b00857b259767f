use std::sync::Arc;

use async_graphql::{Request, Variables};
use bookshelf::config::StoreSettings;
use bookshelf::graphql::{BookshelfSchema, build_schema};
use bookshelf::storage::DocumentStore;
use serde_json::{Value, json};
use tempfile::TempDir;

fn setup_schema() -> (BookshelfSchema, Arc<DocumentStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(
        DocumentStore::open_at(temp_dir.path().join("data"), &StoreSettings::default()).unwrap(),
    );
    (build_schema(store.clone()), store, temp_dir)
}

/// Execute a request that is expected to succeed and return its data.
async fn run(schema: &BookshelfSchema, query: &str) -> Value {
    run_with(schema, query, json!({})).await
}

async fn run_with(schema: &BookshelfSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

async fn add_author(schema: &BookshelfSchema, name: &str, age: i32) -> String {
    let data = run_with(
        schema,
        "mutation($name: String!, $age: Int!) { addAuthor(name: $name, age: $age) { id } }",
        json!({ "name": name, "age": age }),
    )
    .await;
    data["addAuthor"]["id"].as_str().unwrap().to_string()
}

async fn add_book(schema: &BookshelfSchema, name: &str, author_id: &str) -> String {
    let data = run_with(
        schema,
        "mutation($name: String!, $authorId: ID!) {
            addBook(name: $name, genre: \"Fantasy\", authorId: $authorId) { id }
        }",
        json!({ "name": name, "authorId": author_id }),
    )
    .await;
    data["addBook"]["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_add_author_returns_assigned_id() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(
        &schema,
        r#"mutation { addAuthor(name: "Ursula K. Le Guin", age: 88) { id name age } }"#,
    )
    .await;

    let author = &data["addAuthor"];
    assert!(!author["id"].as_str().unwrap().is_empty());
    assert_eq!(author["name"], "Ursula K. Le Guin");
    assert_eq!(author["age"], 88);
}

#[tokio::test]
async fn test_unknown_book_id_is_null() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(&schema, r#"{ book(id: "never-issued") { id name } }"#).await;
    assert_eq!(data["book"], Value::Null);
}

#[tokio::test]
async fn test_missing_id_argument_is_null() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(&schema, "{ book { id } author { id } note { id } }").await;
    assert_eq!(data["book"], Value::Null);
    assert_eq!(data["author"], Value::Null);
    assert_eq!(data["note"], Value::Null);
}

#[tokio::test]
async fn test_path_like_id_is_null() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(&schema, r#"{ note(id: "../authors/x") { id } }"#).await;
    assert_eq!(data["note"], Value::Null);
}

#[tokio::test]
async fn test_list_queries() {
    let (schema, _store, _temp_dir) = setup_schema();

    let empty = run(&schema, "{ books { id } authors { id } notes { id } }").await;
    assert_eq!(empty["books"], json!([]));
    assert_eq!(empty["authors"], json!([]));
    assert_eq!(empty["notes"], json!([]));

    let author_id = add_author(&schema, "Pratchett", 66).await;
    add_book(&schema, "Mort", &author_id).await;
    run(
        &schema,
        r#"mutation { addNote(title: "Reading list", description: "Discworld") { id } }"#,
    )
    .await;

    let data = run(
        &schema,
        "{ books { name genre authorId } authors { name age } notes { title description } }",
    )
    .await;
    assert_eq!(
        data["books"],
        json!([{ "name": "Mort", "genre": "Fantasy", "authorId": author_id }])
    );
    assert_eq!(data["authors"], json!([{ "name": "Pratchett", "age": 66 }]));
    assert_eq!(
        data["notes"],
        json!([{ "title": "Reading list", "description": "Discworld" }])
    );
}

#[tokio::test]
async fn test_fetch_by_id() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(
        &schema,
        r#"mutation { addNote(title: "Groceries", description: "milk") { id } }"#,
    )
    .await;
    let note_id = data["addNote"]["id"].as_str().unwrap().to_string();

    let data = run_with(
        &schema,
        "query($id: ID) { note(id: $id) { id title description } }",
        json!({ "id": note_id }),
    )
    .await;
    assert_eq!(
        data["note"],
        json!({ "id": note_id, "title": "Groceries", "description": "milk" })
    );
}

// =============================================================================
// Relationships
// =============================================================================

#[tokio::test]
async fn test_tolkien_hobbit_scenario() {
    let (schema, _store, _temp_dir) = setup_schema();

    let a1 = add_author(&schema, "Tolkien", 81).await;
    add_book(&schema, "The Hobbit", &a1).await;

    let data = run_with(
        &schema,
        "query($id: ID) { author(id: $id) { name books { name } } }",
        json!({ "id": a1 }),
    )
    .await;
    assert_eq!(data["author"]["name"], "Tolkien");
    assert_eq!(data["author"]["books"], json!([{ "name": "The Hobbit" }]));
}

#[tokio::test]
async fn test_book_resolves_author() {
    let (schema, _store, _temp_dir) = setup_schema();

    let author_id = add_author(&schema, "Tolkien", 81).await;
    let book_id = add_book(&schema, "The Hobbit", &author_id).await;

    let data = run_with(
        &schema,
        "query($id: ID) { book(id: $id) { name author { id name } } }",
        json!({ "id": book_id }),
    )
    .await;
    assert_eq!(
        data["book"]["author"],
        json!({ "id": author_id, "name": "Tolkien" })
    );
}

#[tokio::test]
async fn test_author_books_only_lists_own_books() {
    let (schema, _store, _temp_dir) = setup_schema();

    let tolkien = add_author(&schema, "Tolkien", 81).await;
    let pratchett = add_author(&schema, "Pratchett", 66).await;
    add_book(&schema, "The Hobbit", &tolkien).await;
    add_book(&schema, "Mort", &pratchett).await;
    add_book(&schema, "The Silmarillion", &tolkien).await;

    let data = run_with(
        &schema,
        "query($id: ID) { author(id: $id) { books { name } } }",
        json!({ "id": tolkien }),
    )
    .await;
    let mut names: Vec<_> = data["author"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, ["The Hobbit", "The Silmarillion"]);
}

#[tokio::test]
async fn test_remove_author_orphans_books() {
    let (schema, _store, _temp_dir) = setup_schema();

    let author_id = add_author(&schema, "Tolkien", 81).await;
    let book_id = add_book(&schema, "The Hobbit", &author_id).await;

    let data = run(
        &schema,
        r#"mutation { removeAuthor(name: "Tolkien") { id name } }"#,
    )
    .await;
    assert_eq!(
        data["removeAuthor"],
        json!({ "id": author_id, "name": "Tolkien" })
    );

    let data = run_with(
        &schema,
        "query($id: ID) { book(id: $id) { name authorId author { name } } }",
        json!({ "id": book_id }),
    )
    .await;
    assert_eq!(data["book"]["name"], "The Hobbit");
    assert_eq!(data["book"]["authorId"], author_id);
    assert_eq!(data["book"]["author"], Value::Null);
}

#[tokio::test]
async fn test_book_with_unknown_author_id() {
    let (schema, _store, _temp_dir) = setup_schema();

    add_book(&schema, "Anonymous", "nobody").await;

    let data = run(&schema, "{ books { name author { name } } }").await;
    assert_eq!(
        data["books"],
        json!([{ "name": "Anonymous", "author": null }])
    );
}

// =============================================================================
// Remove / Update
// =============================================================================

#[tokio::test]
async fn test_remove_deletes_every_match() {
    let (schema, _store, _temp_dir) = setup_schema();

    for description in ["one", "two"] {
        run_with(
            &schema,
            "mutation($d: String!) { addNote(title: \"dup\", description: $d) { id } }",
            json!({ "d": description }),
        )
        .await;
    }
    run(
        &schema,
        r#"mutation { addNote(title: "keep", description: "three") { id } }"#,
    )
    .await;

    let data = run(&schema, r#"mutation { removeNote(title: "dup") { title } }"#).await;
    assert_eq!(data["removeNote"]["title"], "dup");

    let data = run(&schema, "{ notes { title } }").await;
    assert_eq!(data["notes"], json!([{ "title": "keep" }]));
}

#[tokio::test]
async fn test_remove_without_match_is_null() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(&schema, r#"mutation { removeBook(name: "Ghost") { id } }"#).await;
    assert_eq!(data["removeBook"], Value::Null);
}

#[tokio::test]
async fn test_update_note_by_title() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(
        &schema,
        r#"mutation { addNote(title: "A", description: "old") { id } }"#,
    )
    .await;
    let note_id = data["addNote"]["id"].as_str().unwrap().to_string();

    let data = run(
        &schema,
        r#"mutation { updateNote(currentTitle: "A", newTitle: "B", description: "d") { id title description } }"#,
    )
    .await;
    assert_eq!(
        data["updateNote"],
        json!({ "id": note_id, "title": "B", "description": "d" })
    );

    let data = run(&schema, "{ notes { title description } }").await;
    let notes = data["notes"].as_array().unwrap();
    assert!(notes.iter().all(|n| n["title"] != "A"));
    assert_eq!(
        notes.iter().filter(|n| n["title"] == "B").collect::<Vec<_>>(),
        [&json!({ "title": "B", "description": "d" })]
    );
}

#[tokio::test]
async fn test_update_author_and_book() {
    let (schema, _store, _temp_dir) = setup_schema();

    let old_author = add_author(&schema, "Tolkein", 80).await;
    let new_author = add_author(&schema, "Lewis", 64).await;
    let book_id = add_book(&schema, "Hobbit", &old_author).await;

    let data = run(
        &schema,
        r#"mutation { updateAuthor(currentName: "Tolkein", newName: "Tolkien", age: 81) { id name age } }"#,
    )
    .await;
    assert_eq!(
        data["updateAuthor"],
        json!({ "id": old_author, "name": "Tolkien", "age": 81 })
    );

    let data = run_with(
        &schema,
        "mutation($authorId: ID!) {
            updateBook(currentName: \"Hobbit\", newName: \"The Hobbit\", genre: \"Fantasy\", authorId: $authorId) {
                id name author { name }
            }
        }",
        json!({ "authorId": new_author }),
    )
    .await;
    assert_eq!(
        data["updateBook"],
        json!({ "id": book_id, "name": "The Hobbit", "author": { "name": "Lewis" } })
    );
}

#[tokio::test]
async fn test_update_only_first_match() {
    let (schema, _store, _temp_dir) = setup_schema();

    let first = add_author(&schema, "Anon", 30).await;
    // Distinct creation times so collection order does not fall back to the
    // random IDs.
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let second = add_author(&schema, "Anon", 40).await;

    let data = run(
        &schema,
        r#"mutation { updateAuthor(currentName: "Anon", newName: "Named", age: 31) { id } }"#,
    )
    .await;
    assert_eq!(data["updateAuthor"]["id"], first.as_str());

    let data = run_with(
        &schema,
        "query($id: ID) { author(id: $id) { name age } }",
        json!({ "id": second }),
    )
    .await;
    assert_eq!(data["author"], json!({ "name": "Anon", "age": 40 }));

    let data = run(&schema, "{ authors { name } }").await;
    let names: Vec<_> = data["authors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Named", "Anon"]);
}

#[tokio::test]
async fn test_update_without_match_is_null() {
    let (schema, _store, _temp_dir) = setup_schema();

    let data = run(
        &schema,
        r#"mutation { updateNote(currentTitle: "nope", newTitle: "x", description: "y") { id } }"#,
    )
    .await;
    assert_eq!(data["updateNote"], Value::Null);
}

// =============================================================================
// Request validation
// =============================================================================

#[tokio::test]
async fn test_missing_required_argument_is_rejected() {
    let (schema, store, _temp_dir) = setup_schema();

    let response = schema
        .execute(r#"mutation { addAuthor(name: "X") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("age"));

    assert!(!store.root().join("authors").exists());
}

#[tokio::test]
async fn test_every_mutation_requires_its_arguments() {
    let (schema, store, _temp_dir) = setup_schema();

    let incomplete = [
        r#"mutation { addBook(name: "b", genre: "g") { id } }"#,
        r#"mutation { addNote(title: "t") { id } }"#,
        r#"mutation { removeBook { id } }"#,
        r#"mutation { removeAuthor { id } }"#,
        r#"mutation { removeNote { id } }"#,
        r#"mutation { updateBook(currentName: "a", newName: "b", genre: "g") { id } }"#,
        r#"mutation { updateAuthor(currentName: "a", newName: "b") { id } }"#,
        r#"mutation { updateNote(currentTitle: "a", description: "d") { id } }"#,
    ];

    for query in incomplete {
        let response = schema.execute(query).await;
        assert!(!response.errors.is_empty(), "accepted: {}", query);
    }

    for collection in ["authors", "books", "notes"] {
        assert!(!store.root().join(collection).exists());
    }
}

#[tokio::test]
async fn test_unknown_field_is_rejected() {
    let (schema, _store, _temp_dir) = setup_schema();

    let response = schema.execute("{ books { isbn } }").await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_null_for_required_argument_is_rejected() {
    let (schema, store, _temp_dir) = setup_schema();

    let request = Request::new(
        "mutation($age: Int!) { addAuthor(name: \"X\", age: $age) { id } }",
    )
    .variables(Variables::from_json(json!({ "age": null })));
    let response = schema.execute(request).await;
    assert!(!response.errors.is_empty());
    assert!(!store.root().join("authors").exists());
}

#[tokio::test]
async fn test_sdl_declares_operation_surface() {
    let (schema, _store, _temp_dir) = setup_schema();
    let sdl = schema.sdl();

    for field in [
        "book(id: ID): Book",
        "books: [Book!]!",
        "author(id: ID): Author",
        "notes: [Note!]!",
        "addAuthor(name: String!, age: Int!): Author!",
        "addBook(name: String!, genre: String!, authorId: ID!): Book!",
        "removeNote(title: String!): Note",
        "updateNote(currentTitle: String!, newTitle: String!, description: String!): Note",
    ] {
        assert!(sdl.contains(field), "missing `{}` in SDL:\n{}", field, sdl);
    }
}

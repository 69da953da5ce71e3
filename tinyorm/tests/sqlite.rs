use assert_matches::assert_matches;
use tinyorm::contract::person::{COLUMN_AGE, COLUMN_EMAIL, COLUMN_ID, COLUMN_NAME};
use tinyorm::export::{query, query_as, Connection, SqliteConnection};
use tinyorm::Person;

static CREATE_TABLE_SQL: &str =
    "CREATE TABLE person (_id INTEGER PRIMARY KEY, name TEXT, email TEXT, age INTEGER)";

async fn setup() -> SqliteConnection {
    let mut db = SqliteConnection::connect(":memory:").await.unwrap();
    query(CREATE_TABLE_SQL).execute(&mut db).await.unwrap();
    db
}

async fn insert(db: &mut SqliteConnection, id: i64, name: Option<&str>, email: &str, age: Option<i32>) {
    query("INSERT INTO person (_id, name, email, age) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(age)
        .execute(db)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_binds_rows_by_column_name() {
    let mut db = setup().await;
    insert(&mut db, 1, Some("Ada"), "ada@example.com", Some(36)).await;
    insert(&mut db, 2, Some("Grace"), "grace@example.com", None).await;

    // Column order in the result set differs from field order on purpose.
    let people = query_as::<_, Person>("SELECT age, email, name, _id FROM person ORDER BY _id")
        .fetch_all(&mut db)
        .await
        .unwrap();

    assert_eq!(
        people,
        vec![
            Person {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                age: Some(36),
            },
            Person {
                id: 2,
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                age: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_null_in_required_column_is_a_decode_error() {
    let mut db = setup().await;
    insert(&mut db, 1, None, "nobody@example.com", None).await;

    let err = query_as::<_, Person>("SELECT * FROM person")
        .fetch_one(&mut db)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Decode(e) => {
        assert!(e.to_string().contains(COLUMN_NAME));
    });
}

#[tokio::test]
async fn test_missing_column_is_reported() {
    let mut db = setup().await;
    insert(&mut db, 1, Some("Ada"), "ada@example.com", None).await;

    let sql = format!("SELECT {COLUMN_ID}, {COLUMN_NAME}, {COLUMN_AGE} FROM person");
    let err = query_as::<_, Person>(&sql).fetch_one(&mut db).await.unwrap_err();
    assert_matches!(err, sqlx::Error::ColumnNotFound(c) if c == COLUMN_EMAIL);
}

#[tokio::test]
async fn test_unselected_age_binds_to_none() {
    let mut db = setup().await;
    insert(&mut db, 1, Some("Ada"), "ada@example.com", Some(36)).await;

    let sql = format!("SELECT {COLUMN_ID}, {COLUMN_NAME}, {COLUMN_EMAIL} FROM person");
    let person = query_as::<_, Person>(&sql).fetch_one(&mut db).await.unwrap();
    assert_eq!(person.age, None);
    assert_eq!(person.name, "Ada");
}

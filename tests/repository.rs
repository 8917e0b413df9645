use std::time::{Duration, Instant};

use diesel::RunQueryDsl;
use pushkind_senders::domain::sender::NewSender;
use pushkind_senders::domain::types::SenderId;
use pushkind_senders::repository::errors::RepositoryError;
use pushkind_senders::repository::{
    DieselRepository, SenderReader, SenderSearchQuery, SenderWriter,
};

mod common;

fn new_sender(name: &str, email: Option<&str>, phone: Option<&str>) -> NewSender {
    NewSender::try_new(name, email.map(str::to_string), phone.map(str::to_string))
        .expect("valid sender")
}

async fn seed(repo: &DieselRepository) {
    let senders = vec![
        new_sender("Alice", Some("alice@example.com"), Some("111")),
        new_sender("Bob", Some("bob@example.com"), Some("222")),
        new_sender("Carol", None, Some("333")),
        new_sender("Alicia", Some("alicia@corp.test"), None),
    ];
    assert_eq!(repo.create_senders(&senders).await.unwrap(), 4);
}

fn names(senders: &[pushkind_senders::domain::sender::Sender]) -> Vec<&str> {
    senders.iter().map(|s| s.name.as_str()).collect()
}

#[tokio::test]
async fn test_sender_repository_search() {
    let test_db = common::TestDb::new("test_sender_repository_search.db");
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo).await;

    let all = repo.search_senders(SenderSearchQuery::new()).await.unwrap();
    assert_eq!(names(&all), vec!["Alice", "Bob", "Carol", "Alicia"]);

    let by_name = repo
        .search_senders(SenderSearchQuery::new().search("ali"))
        .await
        .unwrap();
    assert_eq!(names(&by_name), vec!["Alice", "Alicia"]);

    let by_email = repo
        .search_senders(SenderSearchQuery::new().search("corp.test"))
        .await
        .unwrap();
    assert_eq!(names(&by_email), vec!["Alicia"]);

    let by_phone = repo
        .search_senders(SenderSearchQuery::new().search("333"))
        .await
        .unwrap();
    assert_eq!(names(&by_phone), vec!["Carol"]);

    let blank = repo
        .search_senders(SenderSearchQuery::new().search("   "))
        .await
        .unwrap();
    assert_eq!(blank.len(), 4);

    let none = repo
        .search_senders(SenderSearchQuery::new().search("nobody"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_sender_repository_pagination() {
    let test_db = common::TestDb::new("test_sender_repository_pagination.db");
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo).await;

    let first = repo
        .search_senders(SenderSearchQuery::new().paginate(1, 3))
        .await
        .unwrap();
    assert_eq!(names(&first), vec!["Alice", "Bob", "Carol"]);

    let second = repo
        .search_senders(SenderSearchQuery::new().paginate(2, 3))
        .await
        .unwrap();
    assert_eq!(names(&second), vec!["Alicia"]);

    let past_end = repo
        .search_senders(SenderSearchQuery::new().paginate(5, 3))
        .await
        .unwrap();
    assert!(past_end.is_empty());

    let zero_page = repo
        .search_senders(SenderSearchQuery::new().paginate(0, 2))
        .await
        .unwrap();
    assert_eq!(names(&zero_page), vec!["Alice", "Bob"]);

    let empty_page_size = repo
        .search_senders(SenderSearchQuery::new().paginate(1, -1))
        .await
        .unwrap();
    assert!(empty_page_size.is_empty());
}

#[tokio::test]
async fn test_sender_repository_get_by_id() {
    let test_db = common::TestDb::new("test_sender_repository_get_by_id.db");
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo).await;

    let all = repo.search_senders(SenderSearchQuery::new()).await.unwrap();
    let bob = all.iter().find(|s| s.name.as_str() == "Bob").unwrap();

    let found = repo.get_sender_by_id(bob.id).await.unwrap().unwrap();
    assert_eq!(&found, bob);
    assert_eq!(found.email.unwrap().as_str(), "bob@example.com");

    let missing = repo
        .get_sender_by_id(SenderId::new(999).unwrap())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_sender_repository_search_treats_wildcards_literally() {
    let test_db = common::TestDb::new("test_sender_repository_wildcards.db");
    let repo = DieselRepository::new(test_db.pool());
    let senders = vec![
        new_sender("Sender 11", Some("sender11@example.com"), None),
        new_sender("Bob", None, None),
        new_sender("100% Cotton", None, None),
        new_sender("snake_case Ltd", None, None),
    ];
    repo.create_senders(&senders).await.unwrap();

    let underscore_as_any_char = repo
        .search_senders(SenderSearchQuery::new().search("sender_1"))
        .await
        .unwrap();
    assert!(underscore_as_any_char.is_empty());

    let percent = repo
        .search_senders(SenderSearchQuery::new().search("%"))
        .await
        .unwrap();
    assert_eq!(names(&percent), vec!["100% Cotton"]);

    let underscore = repo
        .search_senders(SenderSearchQuery::new().search("_"))
        .await
        .unwrap();
    assert_eq!(names(&underscore), vec!["snake_case Ltd"]);

    let backslash = repo
        .search_senders(SenderSearchQuery::new().search("\\"))
        .await
        .unwrap();
    assert!(backslash.is_empty());
}

#[tokio::test]
async fn test_sender_repository_rejects_corrupt_rows() {
    let test_db = common::TestDb::new("test_sender_repository_corrupt_rows.db");
    let repo = DieselRepository::new(test_db.pool());

    {
        let pool = test_db.pool();
        let mut conn = pool.get().unwrap();
        diesel::sql_query("INSERT INTO senders (id, name) VALUES (1, '   ')")
            .execute(&mut conn)
            .unwrap();
        diesel::sql_query("INSERT INTO senders (id, name, email) VALUES (2, 'Eve', 'broken')")
            .execute(&mut conn)
            .unwrap();
    }

    let search = repo.search_senders(SenderSearchQuery::new()).await;
    assert!(matches!(search, Err(RepositoryError::ValidationError(_))));

    let blank_name = repo.get_sender_by_id(SenderId::new(1).unwrap()).await;
    assert!(matches!(
        blank_name,
        Err(RepositoryError::ValidationError(ref msg)) if msg == "value cannot be empty"
    ));

    let bad_email = repo.get_sender_by_id(SenderId::new(2).unwrap()).await;
    assert!(matches!(
        bad_email,
        Err(RepositoryError::ValidationError(ref msg)) if msg == "invalid email address"
    ));
}

/// A caller's timeout fires while the repository waits for a free connection.
#[tokio::test]
async fn test_sender_repository_yields_while_waiting_for_connection() {
    let test_db = common::TestDb::new("test_sender_repository_yields.db");
    let pool = test_db.pool();
    let repo = DieselRepository::new(pool.clone());

    let held: Vec<_> = (0..pool.max_size()).map(|_| pool.get().unwrap()).collect();

    let started = Instant::now();
    let result = tokio::time::timeout(
        Duration::from_millis(200),
        repo.search_senders(SenderSearchQuery::new()),
    )
    .await;

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(5));

    drop(held);
}

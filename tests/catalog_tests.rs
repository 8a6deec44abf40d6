//! Read-side filtering and history tests

use tempfile::TempDir;

use libris_server::{
    config::LendingConfig,
    error::AppError,
    models::{
        book::{BookQuery, CreateBook, UpdateBook},
        member::{CreateMember, MemberQuery, UpdateMember},
    },
    repository::Repository,
    services::Services,
    store::JsonStore,
};

fn setup() -> (TempDir, Services) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).unwrap();
    let services = Services::new(
        Repository::new(&store),
        &LendingConfig {
            loan_period_days: 30,
        },
    );
    (dir, services)
}

fn book(title: &str, author: &str, genre: &str) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        isbn: None,
        published_year: None,
    }
}

fn member(name: &str, membership_type: Option<&str>) -> CreateMember {
    CreateMember {
        name: name.to_string(),
        email: format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
        phone: None,
        membership_type: membership_type.map(str::to_string),
    }
}

async fn seed_catalog(services: &Services) {
    for b in [
        book("Dune", "Frank Herbert", "Science Fiction"),
        book("Dune Messiah", "Frank Herbert", "Science Fiction"),
        book("The Dispossessed", "Ursula K. Le Guin", "Science Fiction"),
        book("A Wizard of Earthsea", "Ursula K. Le Guin", "Fantasy"),
    ] {
        services.catalog.create_book(b).await.unwrap();
    }
}

#[tokio::test]
async fn search_matches_title_and_author_case_insensitively() {
    let (_dir, services) = setup();
    seed_catalog(&services).await;

    let hits = services
        .catalog
        .list_books(&BookQuery {
            search: Some("dune".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 2);

    let hits = services
        .catalog
        .list_books(&BookQuery {
            search: Some("LE GUIN".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn genre_filter_is_exact_and_case_insensitive() {
    let (_dir, services) = setup();
    seed_catalog(&services).await;

    let hits = services
        .catalog
        .list_books(&BookQuery {
            genre: Some("fantasy".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "A Wizard of Earthsea");

    // "Science" alone is not a genre match
    let hits = services
        .catalog
        .list_books(&BookQuery {
            genre: Some("Science".to_string()),
            ..Default::default()
        })
        .await;
    assert!(hits.is_empty());
}

#[tokio::test]
async fn availability_filter_tracks_lending() {
    let (_dir, services) = setup();
    seed_catalog(&services).await;
    let m = services
        .members
        .create_member(member("Ada Lovelace", None))
        .await
        .unwrap();

    services.lending.borrow(Some(m.id), Some(1)).await.unwrap();

    let available = services
        .catalog
        .list_books(&BookQuery {
            available: Some(true),
            ..Default::default()
        })
        .await;
    let borrowed = services
        .catalog
        .list_books(&BookQuery {
            available: Some(false),
            ..Default::default()
        })
        .await;

    assert_eq!(available.len(), 3);
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].id, 1);
}

#[tokio::test]
async fn member_filters_match_name_type_and_activity() {
    let (_dir, services) = setup();
    services
        .members
        .create_member(member("Ada Lovelace", Some("premium")))
        .await
        .unwrap();
    services
        .members
        .create_member(member("Grace Hopper", None))
        .await
        .unwrap();

    let hits = services
        .members
        .list_members(&MemberQuery {
            name: Some("ada".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 1);

    let hits = services
        .members
        .list_members(&MemberQuery {
            membership_type: Some("PREMIUM".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ada Lovelace");

    // Defaulted membership type is "standard"
    let hits = services
        .members
        .list_members(&MemberQuery {
            membership_type: Some("standard".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Grace Hopper");

    let hits = services
        .members
        .list_members(&MemberQuery {
            active: Some(true),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn member_history_joins_ledger_records() {
    let (_dir, services) = setup();
    seed_catalog(&services).await;
    let m = services
        .members
        .create_member(member("Ada Lovelace", None))
        .await
        .unwrap();
    let other = services
        .members
        .create_member(member("Grace Hopper", None))
        .await
        .unwrap();

    services.lending.borrow(Some(m.id), Some(1)).await.unwrap();
    services.lending.return_book(Some(m.id), Some(1)).await.unwrap();
    services.lending.borrow(Some(m.id), Some(2)).await.unwrap();
    services.lending.borrow(Some(other.id), Some(3)).await.unwrap();

    let history = services.members.member_history(m.id).await.unwrap();
    assert_eq!(history.user.id, m.id);
    assert_eq!(history.borrowing_history.len(), 2);
    assert!(history.borrowing_history.iter().all(|r| r.user_id == m.id));

    let err = services.members.member_history(999).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound(999)));
}

#[tokio::test]
async fn book_update_leaves_availability_alone() {
    let (_dir, services) = setup();
    seed_catalog(&services).await;
    let m = services
        .members
        .create_member(member("Ada Lovelace", None))
        .await
        .unwrap();
    services.lending.borrow(Some(m.id), Some(1)).await.unwrap();

    let updated = services
        .catalog
        .update_book(
            1,
            UpdateBook {
                title: Some("Dune (1965)".to_string()),
                author: None,
                genre: None,
                isbn: None,
                published_year: Some(1965),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Dune (1965)");
    assert!(!updated.available, "update must not resurrect availability");
}

#[tokio::test]
async fn join_date_is_immutable() {
    let (_dir, services) = setup();
    let m = services
        .members
        .create_member(member("Ada Lovelace", None))
        .await
        .unwrap();

    let updated = services
        .members
        .update_member(
            m.id,
            UpdateMember {
                name: Some("Ada King".to_string()),
                email: None,
                phone: None,
                membership_type: Some("premium".to_string()),
                active: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ada King");
    assert_eq!(updated.join_date, m.join_date);
}

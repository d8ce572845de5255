//! Repository integration tests against in-memory SQLite
//!
//! Tables are created from the entity definitions, so foreign keys and
//! cascade rules match what the migrations declare.

use chrono::NaiveDate;
use labarchive_common::db::models::*;
use labarchive_common::db::{
    DbPool, NewPaper, NewProject, NewUser, PaperChanges, PaperSearch, PaperSort, Repository,
};
use labarchive_common::errors::AppError;
use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

async fn test_repo() -> Repository {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    let schema = Schema::new(DbBackend::Sqlite);
    let stmts = vec![
        schema.create_table_from_entity(UserEntity),
        schema.create_table_from_entity(TagEntity),
        schema.create_table_from_entity(PaperEntity),
        schema.create_table_from_entity(ProjectEntity),
        schema.create_table_from_entity(PaperAuthorEntity),
        schema.create_table_from_entity(PaperTagEntity),
        schema.create_table_from_entity(ProjectTagEntity),
        schema.create_table_from_entity(FileEntity),
        schema.create_table_from_entity(MediaEntity),
        schema.create_table_from_entity(EventEntity),
    ];
    for stmt in stmts {
        let backend = conn.get_database_backend();
        conn.execute(backend.build(&stmt)).await.expect("create table");
    }

    Repository::new(DbPool::from_connection(conn))
}

fn user(email: &str, name: &str) -> NewUser {
    NewUser {
        name: Some(name.to_string()),
        email: email.to_string(),
        password_hash: None,
        role: "USER".to_string(),
        position: None,
        department: None,
    }
}

fn paper(title: &str, abstract_text: &str, year: i32) -> NewPaper {
    NewPaper {
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        date: NaiveDate::from_ymd_opt(year, 1, 1),
        status: Some("published".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn creates_user_and_rejects_duplicate_email() {
    let repo = test_repo().await;

    let created = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();
    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.role, "USER");

    let err = repo
        .create_user(user("alice@example.com", "Other Alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateEmail { .. }));
}

#[tokio::test]
async fn creates_paper_with_author_roles_and_tags() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();
    let bob = repo.create_user(user("bob@example.com", "Bob")).await.unwrap();

    let created = repo
        .create_paper(NewPaper {
            author_ids: vec![alice.id, bob.id],
            tag_names: vec!["Quantum".to_string(), "Algorithms".to_string()],
            ..paper("A Study on Quantum Algorithms", "Quantum computing...", 2024)
        })
        .await
        .unwrap();

    assert_eq!(created.authors.len(), 2);
    assert_eq!(created.authors[0].role, "corresponding");
    assert_eq!(created.authors[0].user.id, alice.id);
    assert_eq!(created.authors[1].role, "co-author");
    assert_eq!(created.authors[1].user.id, bob.id);

    let mut tag_names: Vec<_> = created.tags.iter().map(|t| t.name.clone()).collect();
    tag_names.sort();
    assert_eq!(tag_names, vec!["Algorithms", "Quantum"]);
}

#[tokio::test]
async fn reuses_existing_tags_by_name() {
    let repo = test_repo().await;

    repo.create_paper(NewPaper {
        tag_names: vec!["AI".to_string()],
        ..paper("First", "a", 2023)
    })
    .await
    .unwrap();
    repo.create_paper(NewPaper {
        tag_names: vec!["AI".to_string(), "NLP".to_string()],
        ..paper("Second", "b", 2024)
    })
    .await
    .unwrap();

    let tags = repo.list_tags().await.unwrap();
    assert_eq!(tags.len(), 2);
}

#[tokio::test]
async fn lists_papers_in_id_order() {
    let repo = test_repo().await;

    repo.create_paper(paper("B", "b", 2023)).await.unwrap();
    repo.create_paper(paper("A", "a", 2024)).await.unwrap();

    let papers = repo.list_papers().await.unwrap();
    let ids: Vec<_> = papers.iter().map(|p| p.paper.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn next_paper_id_starts_at_one_and_follows_max() {
    let repo = test_repo().await;

    assert_eq!(repo.next_paper_id().await.unwrap(), 1);

    let created = repo.create_paper(paper("A", "a", 2024)).await.unwrap();
    assert_eq!(repo.next_paper_id().await.unwrap(), created.paper.id + 1);
}

#[tokio::test]
async fn distinct_years_in_first_seen_order() {
    let repo = test_repo().await;

    repo.create_paper(paper("A", "a", 2024)).await.unwrap();
    repo.create_paper(paper("B", "b", 2023)).await.unwrap();
    repo.create_paper(paper("C", "c", 2024)).await.unwrap();

    assert_eq!(repo.distinct_years().await.unwrap(), vec![2024, 2023]);
}

#[tokio::test]
async fn search_matches_title_abstract_and_tag() {
    let repo = test_repo().await;

    repo.create_paper(NewPaper {
        tag_names: vec!["Healthcare".to_string()],
        ..paper("Machine Learning in Healthcare", "An overview of ML...", 2023)
    })
    .await
    .unwrap();
    repo.create_paper(NewPaper {
        tag_names: vec!["Security".to_string()],
        ..paper("Blockchain and Security", "Discusses blockchain...", 2025)
    })
    .await
    .unwrap();

    // Case-insensitive title match
    let found = repo
        .search_papers(&PaperSearch {
            query: Some("machine learning".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].paper.title, "Machine Learning in Healthcare");

    // Abstract match
    let found = repo
        .search_papers(&PaperSearch {
            query: Some("blockchain".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].paper.title, "Blockchain and Security");

    // Tag name match through the free-text query
    let found = repo
        .search_papers(&PaperSearch {
            query: Some("healthcare".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    // No match
    let found = repo
        .search_papers(&PaperSearch {
            query: Some("astrophysics".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn search_filters_by_year_range() {
    let repo = test_repo().await;

    repo.create_paper(paper("Old", "a", 2021)).await.unwrap();
    repo.create_paper(paper("New", "b", 2024)).await.unwrap();

    let found = repo
        .search_papers(&PaperSearch {
            year: Some(2024),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].paper.title, "New");
}

#[tokio::test]
async fn search_filters_by_author_name() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();
    let bob = repo.create_user(user("bob@example.com", "Bob")).await.unwrap();

    repo.create_paper(NewPaper {
        author_ids: vec![alice.id],
        ..paper("By Alice", "a", 2024)
    })
    .await
    .unwrap();
    repo.create_paper(NewPaper {
        author_ids: vec![bob.id],
        ..paper("By Bob", "b", 2024)
    })
    .await
    .unwrap();

    let found = repo
        .search_papers(&PaperSearch {
            author: Some("ali".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].paper.title, "By Alice");
}

#[tokio::test]
async fn search_combines_filters_with_and() {
    let repo = test_repo().await;

    repo.create_paper(NewPaper {
        tag_names: vec!["AI".to_string()],
        ..paper("NLP Trends", "language", 2024)
    })
    .await
    .unwrap();
    repo.create_paper(NewPaper {
        tag_names: vec!["AI".to_string()],
        ..paper("Vision Survey", "images", 2022)
    })
    .await
    .unwrap();

    let found = repo
        .search_papers(&PaperSearch {
            tag: Some("ai".to_string()),
            year: Some(2022),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].paper.title, "Vision Survey");
}

#[tokio::test]
async fn search_sort_modes() {
    let repo = test_repo().await;

    repo.create_paper(paper("Beta", "b", 2024)).await.unwrap();
    repo.create_paper(paper("Alpha", "a", 2021)).await.unwrap();

    let by_title = repo
        .search_papers(&PaperSearch {
            sort: PaperSort::TitleAsc,
            ..Default::default()
        })
        .await
        .unwrap();
    let titles: Vec<_> = by_title.iter().map(|p| p.paper.title.clone()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);

    let by_year_desc = repo
        .search_papers(&PaperSearch {
            sort: PaperSort::YearDesc,
            ..Default::default()
        })
        .await
        .unwrap();
    let titles: Vec<_> = by_year_desc.iter().map(|p| p.paper.title.clone()).collect();
    assert_eq!(titles, vec!["Beta", "Alpha"]);
}

#[tokio::test]
async fn update_paper_replaces_joins_and_keeps_untouched_fields() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();
    let bob = repo.create_user(user("bob@example.com", "Bob")).await.unwrap();

    let created = repo
        .create_paper(NewPaper {
            author_ids: vec![alice.id],
            tag_names: vec!["Old".to_string()],
            ..paper("Original Title", "Original abstract", 2023)
        })
        .await
        .unwrap();

    let updated = repo
        .update_paper(
            created.paper.id,
            PaperChanges {
                title: Some("New Title".to_string()),
                author_ids: Some(vec![bob.id, alice.id]),
                tag_names: Some(vec!["New".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.paper.title, "New Title");
    assert_eq!(updated.paper.abstract_text, "Original abstract");

    assert_eq!(updated.authors.len(), 2);
    assert_eq!(updated.authors[0].user.id, bob.id);
    assert_eq!(updated.authors[0].role, "corresponding");

    let tag_names: Vec<_> = updated.tags.iter().map(|t| t.name.clone()).collect();
    assert_eq!(tag_names, vec!["New"]);
}

#[tokio::test]
async fn update_missing_paper_returns_not_found() {
    let repo = test_repo().await;

    let err = repo
        .update_paper(999, PaperChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PaperNotFound { .. }));
}

#[tokio::test]
async fn delete_paper_cascades_to_joins_and_files() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();
    let created = repo
        .create_paper(NewPaper {
            author_ids: vec![alice.id],
            tag_names: vec!["AI".to_string()],
            ..paper("Doomed", "a", 2024)
        })
        .await
        .unwrap();
    repo.create_file(
        "doomed.pdf".to_string(),
        "/uploads/doomed.pdf".to_string(),
        "application/pdf".to_string(),
        1,
        Some(created.paper.id),
        None,
    )
    .await
    .unwrap();

    assert!(repo.delete_paper(created.paper.id).await.unwrap());
    assert!(!repo.delete_paper(created.paper.id).await.unwrap());

    assert!(repo.get_paper(created.paper.id).await.unwrap().is_none());

    // Join rows and files are gone; the user and tag survive
    assert_eq!(repo.list_tags().await.unwrap().len(), 1);
    assert!(repo.find_user_by_id(alice.id).await.unwrap().is_some());
}

#[tokio::test]
async fn user_detail_includes_authored_papers_and_owned_projects() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();

    repo.create_paper(NewPaper {
        author_ids: vec![alice.id],
        tag_names: vec!["AI".to_string()],
        ..paper("Her Paper", "a", 2024)
    })
    .await
    .unwrap();

    repo.create_project(NewProject {
        title: "Her Project".to_string(),
        summary: "Summary".to_string(),
        owner_id: Some(alice.id),
        tag_names: vec!["AI".to_string()],
        ..Default::default()
    })
    .await
    .unwrap();

    let detail = repo.user_detail(alice.id).await.unwrap().unwrap();

    assert_eq!(detail.papers.len(), 1);
    assert_eq!(detail.papers[0].role, "corresponding");
    assert_eq!(detail.papers[0].paper.title, "Her Paper");
    assert_eq!(detail.papers[0].tags.len(), 1);

    assert_eq!(detail.projects.len(), 1);
    assert_eq!(detail.projects[0].project.title, "Her Project");
    assert_eq!(
        detail.projects[0].owner.as_ref().map(|o| o.id),
        Some(alice.id)
    );

    assert!(repo.user_detail(999).await.unwrap().is_none());
}

#[tokio::test]
async fn project_graph_carries_owner_tags_media_and_events() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();

    let project = repo
        .create_project(NewProject {
            title: "AI for Social Good".to_string(),
            summary: "Research project".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            owner_id: Some(alice.id),
            tag_names: vec!["AI".to_string()],
        })
        .await
        .unwrap();

    repo.create_event(
        "Kickoff".to_string(),
        "First meeting".to_string(),
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        project.project.id,
    )
    .await
    .unwrap();
    repo.create_media(
        "Team Photo".to_string(),
        "/uploads/team.jpg".to_string(),
        "image/jpeg".to_string(),
        project.project.id,
    )
    .await
    .unwrap();

    let graph = repo.get_project(project.project.id).await.unwrap().unwrap();
    assert_eq!(graph.owner.as_ref().map(|o| o.id), Some(alice.id));
    assert_eq!(graph.tags.len(), 1);
    assert_eq!(graph.events.len(), 1);
    assert_eq!(graph.media.len(), 1);
}

#[tokio::test]
async fn clear_all_empties_every_table() {
    let repo = test_repo().await;

    let alice = repo.create_user(user("alice@example.com", "Alice")).await.unwrap();
    repo.create_paper(NewPaper {
        author_ids: vec![alice.id],
        tag_names: vec!["AI".to_string()],
        ..paper("P", "a", 2024)
    })
    .await
    .unwrap();
    repo.create_project(NewProject {
        title: "Proj".to_string(),
        summary: "s".to_string(),
        owner_id: Some(alice.id),
        ..Default::default()
    })
    .await
    .unwrap();

    repo.clear_all().await.unwrap();

    assert!(repo.list_users().await.unwrap().is_empty());
    assert!(repo.list_papers().await.unwrap().is_empty());
    assert!(repo.list_projects().await.unwrap().is_empty());
    assert!(repo.list_tags().await.unwrap().is_empty());
}

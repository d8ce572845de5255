//! LabArchive database seeder
//!
//! Resets the catalog and populates it with example data for local
//! development and demos. By default a built-in dataset is used;
//! pass `--file <path>` to load the same graph from a JSON fixture:
//!
//! ```json
//! {
//!   "papers": [
//!     {
//!       "title": "...",
//!       "authors": [{ "name": "Alice" }],
//!       "year": 2024,
//!       "tags": ["AI"],
//!       "abstract": "..."
//!     }
//!   ]
//! }
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use labarchive_common::{
    auth::hash_password,
    config::AppConfig,
    db::{DbPool, NewPaper, NewProject, NewUser, Repository},
    ADMIN_ROLE, DEFAULT_USER_ROLE,
};
use migration::{Migrator, MigratorTrait};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

/// Email the seeded admin logs in with
const ADMIN_EMAIL: &str = "admin@example.com";
/// Password of the seeded admin, for local use only
const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Deserialize)]
struct FixtureAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FixturePaper {
    title: String,
    authors: Vec<FixtureAuthor>,
    year: i32,
    tags: Vec<String>,
    #[serde(rename = "abstract")]
    abstract_text: String,
}

#[derive(Debug, Deserialize)]
struct Fixture {
    papers: Vec<FixturePaper>,
}

/// Built-in example dataset
fn example_papers() -> Vec<FixturePaper> {
    fn paper(title: &str, authors: &[&str], year: i32, tags: &[&str], abstract_text: &str) -> FixturePaper {
        FixturePaper {
            title: title.to_string(),
            authors: authors
                .iter()
                .map(|name| FixtureAuthor {
                    name: name.to_string(),
                })
                .collect(),
            year,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            abstract_text: abstract_text.to_string(),
        }
    }

    vec![
        paper(
            "A Study on Quantum Algorithms",
            &["Alice", "Bob"],
            2024,
            &["Quantum", "Algorithms", "Research"],
            "This paper explores the latest developments in quantum computing...",
        ),
        paper(
            "Machine Learning in Healthcare",
            &["Charlie"],
            2023,
            &["ML", "Healthcare", "AI"],
            "An overview of machine learning applications in modern healthcare...",
        ),
        paper(
            "Blockchain and Security",
            &["Dave", "Eve"],
            2025,
            &["Blockchain", "Security"],
            "Discusses blockchain technologies and their security implications...",
        ),
        paper(
            "Neural Networks for Image Recognition",
            &["Frank"],
            2022,
            &["AI", "Computer Vision"],
            "A detailed study on convolutional neural networks for image tasks...",
        ),
        paper(
            "Natural Language Processing Trends",
            &["Grace", "Heidi"],
            2024,
            &["NLP", "AI", "Linguistics"],
            "Covers emerging research in natural language understanding and generation...",
        ),
        paper(
            "Cybersecurity Threat Detection",
            &["Ivan"],
            2021,
            &["Cybersecurity", "Detection"],
            "Methods and models for early detection of cyber threats in networks...",
        ),
    ]
}

/// Position and department per example author
fn author_details(name: &str) -> (&'static str, &'static str) {
    match name {
        "Alice" => ("author", "Quantum Computing Lab"),
        "Bob" => ("researcher", "Computer Science Dept."),
        "Charlie" => ("author", "Healthcare AI Center"),
        "Dave" => ("author", "Blockchain Institute"),
        "Eve" => ("co-author", "Cybersecurity Research Lab"),
        "Frank" => ("author", "Computer Vision Group"),
        "Grace" => ("author", "NLP Research Unit"),
        "Heidi" => ("co-author", "AI Language Institute"),
        "Ivan" => ("author", "Cybersecurity Division"),
        _ => ("author", "Independent"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let fixture_path = parse_args()?;

    let config = AppConfig::load().context("Failed to load configuration")?;
    let pool = DbPool::new(&config.database).await?;

    info!("Running migrations...");
    Migrator::up(pool.write(), None).await?;

    let repo = Repository::new(pool);

    let papers = match fixture_path {
        Some(path) => {
            info!(path = %path, "Loading fixture file");
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read fixture file {}", path))?;
            let fixture: Fixture =
                serde_json::from_str(&raw).context("Failed to parse fixture JSON")?;
            fixture.papers
        }
        None => example_papers(),
    };

    info!("Clearing old data...");
    repo.clear_all().await?;

    // Create users for every distinct author name
    let mut author_ids: HashMap<String, i32> = HashMap::new();
    for paper in &papers {
        for author in &paper.authors {
            if author_ids.contains_key(&author.name) {
                continue;
            }
            let (position, department) = author_details(&author.name);
            let user = repo
                .create_user(NewUser {
                    name: Some(author.name.clone()),
                    email: format!("{}@example.com", author.name.to_lowercase()),
                    password_hash: None,
                    role: DEFAULT_USER_ROLE.to_string(),
                    position: Some(position.to_string()),
                    department: Some(department.to_string()),
                })
                .await?;
            author_ids.insert(author.name.clone(), user.id);
        }
    }
    info!(count = author_ids.len(), "Users created");

    // An admin with a known password so login works against seeded data
    let admin = repo
        .create_user(NewUser {
            name: Some("Admin".to_string()),
            email: ADMIN_EMAIL.to_string(),
            password_hash: Some(hash_password(ADMIN_PASSWORD)?),
            role: ADMIN_ROLE.to_string(),
            position: None,
            department: None,
        })
        .await?;
    info!(email = ADMIN_EMAIL, "Admin user created");

    // Papers with author/tag joins and one PDF file each
    for paper in &papers {
        let date = NaiveDate::from_ymd_opt(paper.year, 1, 1)
            .with_context(|| format!("Invalid year {} in fixture", paper.year))?;

        let created = repo
            .create_paper(NewPaper {
                title: paper.title.clone(),
                abstract_text: paper.abstract_text.clone(),
                date: Some(date),
                status: Some("published".to_string()),
                author_ids: paper
                    .authors
                    .iter()
                    .filter_map(|a| author_ids.get(&a.name).copied())
                    .collect(),
                tag_names: paper.tags.clone(),
                ..Default::default()
            })
            .await?;

        let slug = paper.title.split_whitespace().collect::<Vec<_>>().join("_");
        repo.create_file(
            format!("{}.pdf", slug),
            format!("/uploads/{}.pdf", slug),
            "application/pdf".to_string(),
            123_456,
            Some(created.paper.id),
            None,
        )
        .await?;
    }
    info!(count = papers.len(), "Papers created");

    // A sample project with events, media, a tag, and a file
    let owner_id = author_ids.values().min().copied().unwrap_or(admin.id);
    let project = repo
        .create_project(NewProject {
            title: "AI for Social Good".to_string(),
            summary: "Research project applying AI to solve societal challenges.".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            owner_id: Some(owner_id),
            tag_names: vec!["AI".to_string()],
        })
        .await?;

    repo.create_event(
        "Kickoff Meeting".to_string(),
        "Initial discussion of research goals and tasks".to_string(),
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        project.project.id,
    )
    .await?;
    repo.create_event(
        "Workshop on AI Ethics".to_string(),
        "Exploring ethical implications of AI applications".to_string(),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        project.project.id,
    )
    .await?;

    repo.create_media(
        "Team Photo".to_string(),
        "/uploads/team.jpg".to_string(),
        "image/jpeg".to_string(),
        project.project.id,
    )
    .await?;
    repo.create_media(
        "Whiteboard Session".to_string(),
        "/uploads/whiteboard.png".to_string(),
        "image/png".to_string(),
        project.project.id,
    )
    .await?;

    repo.create_file(
        "project_proposal.pdf".to_string(),
        "/uploads/project_proposal.pdf".to_string(),
        "application/pdf".to_string(),
        234_567,
        None,
        Some(project.project.id),
    )
    .await?;

    info!(project = %project.project.title, "Seeding complete");
    Ok(())
}

/// Parse the single optional `--file <path>` argument
fn parse_args() -> anyhow::Result<Option<String>> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => Ok(None),
        Some("--file") => args
            .next()
            .map(Some)
            .context("--file requires a path argument"),
        Some(other) => anyhow::bail!("Unknown argument: {}", other),
    }
}

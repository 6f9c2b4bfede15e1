//! End-to-end pipeline tests: store -> sort -> render -> write.

use chrono::{DateTime, Utc};
use repo_scorecard::{sort_records, write_report, RecordStore, RepoRecord, ReportRenderer};
use tempfile::TempDir;

fn fixed_now() -> DateTime<Utc> {
    "2024-06-01T00:00:00Z".parse().unwrap()
}

fn record(
    identifier: &str,
    stars: u64,
    issues: u64,
    license: Option<&str>,
    created_at: &str,
    last_commit: &str,
) -> RepoRecord {
    RepoRecord {
        identifier: identifier.to_string(),
        display_name: Some(identifier.to_string()),
        full_name: Some(identifier.to_string()),
        homepage_url: None,
        html_url: Some(format!("https://github.com/{identifier}")),
        description: None,
        created_at: Some(created_at.parse().unwrap()),
        updated_at: None,
        issues_count: Some(issues),
        stargazers_count: Some(stars),
        watchers_count: Some(stars),
        forks_count: None,
        language: None,
        license: license.map(str::to_string),
        last_commit_date: Some(last_commit.parse().unwrap()),
        dependencies: String::new(),
    }
}

#[test]
fn store_order_and_rendered_cells_match_contract() {
    let temp = TempDir::new().unwrap();
    let mut store = RecordStore::open(temp.path().join("store.json"));

    // A: 500 stars, 3 issues, no license, created 2 years ago, commit 10
    // days ago. B: same stars, 1 issue, MIT, created 1 year ago, commit
    // 400 days ago. Equal stars, so B wins on the issues tie-break.
    store
        .upsert(record(
            "a/a",
            500,
            3,
            None,
            "2022-06-01T00:00:00Z",
            "2024-05-22T00:00:00Z",
        ))
        .unwrap();
    store
        .upsert(record(
            "b/b",
            500,
            1,
            Some("MIT"),
            "2023-06-01T00:00:00Z",
            "2023-04-28T00:00:00Z",
        ))
        .unwrap();

    let records = store.list_all();
    let ids: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, vec!["b/b", "a/a"]);

    let renderer = ReportRenderer::new().unwrap();
    let html = renderer.render_html(&records, fixed_now()).unwrap();

    assert!(html.contains("<td>Unknown</td>"));
    assert!(html.contains("<td>MIT</td>"));

    // B's row (age 1) renders before A's row (age 2).
    let b_row = html.find(r#"<a href="https://github.com/b/b">"#).unwrap();
    let a_row = html.find(r#"<a href="https://github.com/a/a">"#).unwrap();
    assert!(b_row < a_row);

    let rows: Vec<&str> = html
        .lines()
        .filter(|line| line.starts_with("<tr><td>"))
        .collect();
    assert!(rows[0].contains("<td>1</td>"), "B's age should be 1: {}", rows[0]);
    assert!(rows[1].contains("<td>2</td>"), "A's age should be 2: {}", rows[1]);
}

#[test]
fn failed_fetch_still_produces_a_row_everywhere() {
    let mut records = vec![
        record(
            "a/a",
            900,
            2,
            Some("MIT"),
            "2020-06-01T00:00:00Z",
            "2024-05-01T00:00:00Z",
        ),
        record(
            "b/b",
            100,
            5,
            Some("Apache-2.0"),
            "2021-06-01T00:00:00Z",
            "2024-04-01T00:00:00Z",
        ),
        RepoRecord::sentinel("c/c", "c".to_string(), String::new()),
    ];
    sort_records(&mut records);

    let renderer = ReportRenderer::new().unwrap();
    let html = renderer.render_html(&records, fixed_now()).unwrap();
    let markdown = renderer.render_markdown(&records, fixed_now()).unwrap();

    assert_eq!(html.matches("<tr><td>").count(), 3);
    assert!(html.contains("<td>Error</td>"));

    // Header, separator and three data rows.
    let markdown_rows = markdown.lines().filter(|l| l.starts_with('|')).count();
    assert_eq!(markdown_rows, 5);
    assert!(markdown.contains("| Error |"));

    // The sentinel sorts last; the healthy repositories keep their order.
    let ids: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, vec!["a/a", "b/b", "c/c"]);
}

#[test]
fn reports_are_written_and_overwritten() {
    let temp = TempDir::new().unwrap();
    let html_path = temp.path().join("index.html");
    let markdown_path = temp.path().join("README.md");

    let records = vec![record(
        "a/a",
        10,
        1,
        Some("MIT"),
        "2022-06-01T00:00:00Z",
        "2024-05-22T00:00:00Z",
    )];
    let renderer = ReportRenderer::new().unwrap();

    let html = renderer.render_html(&records, fixed_now()).unwrap();
    let markdown = renderer.render_markdown(&records, fixed_now()).unwrap();
    write_report(&html_path, &html).unwrap();
    write_report(&markdown_path, &markdown).unwrap();

    assert_eq!(std::fs::read_to_string(&html_path).unwrap(), html);
    assert_eq!(std::fs::read_to_string(&markdown_path).unwrap(), markdown);

    // A later run fully replaces both documents.
    let later: DateTime<Utc> = "2025-06-01T00:00:00Z".parse().unwrap();
    let html_later = renderer.render_html(&records, later).unwrap();
    write_report(&html_path, &html_later).unwrap();

    let on_disk = std::fs::read_to_string(&html_path).unwrap();
    assert_eq!(on_disk, html_later);
    assert!(on_disk.contains("2025-06-01 00:00 UTC"));
}

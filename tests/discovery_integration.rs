//! End-to-end discovery tests against a mock HTTP server.
//!
//! Every request the library makes must match an expectation, so these tests
//! also pin down exactly which URLs are fetched.

mod helpers;

use helpers::{expect_get, expect_robots, expect_standard_probes};
use httptest::Server;
use sitemap_finder::{
    discover, process_target, run_batch, Config, DiscoveryContext, IterTargetSource,
    TargetOutcome,
};
use tempfile::TempDir;

fn context(config: Config) -> DiscoveryContext {
    DiscoveryContext::from_config(config).expect("client should build")
}

#[tokio::test]
async fn test_nothing_found_yields_empty_result() {
    let server = Server::run();
    expect_robots(&server, 404, "");
    expect_standard_probes(&server, &[]);

    let ctx = context(Config {
        collect_pages: true,
        ..Default::default()
    });
    let result = discover(&server.url_str("/"), &ctx).await.unwrap();

    assert_eq!(result.robots_sitemaps, None);
    assert!(result.standard_sitemaps.is_empty());
    assert!(result.sitemaps.is_empty());
    assert!(result.pages.is_empty());
}

#[tokio::test]
async fn test_both_strategies_are_unioned() {
    let server = Server::run();
    let base = server.url_str("/");
    expect_robots(
        &server,
        200,
        &format!("User-agent: *\nSitemap: {base}sitemap.xml\nSitemap: {base}news.xml\n"),
    );
    expect_standard_probes(&server, &["sitemap.xml", "sitemap_index"]);

    let ctx = context(Config::default());
    let result = discover(&base, &ctx).await.unwrap();

    assert_eq!(
        result.robots_sitemaps,
        Some(vec![format!("{base}sitemap.xml"), format!("{base}news.xml")])
    );
    assert_eq!(
        result.standard_sitemaps,
        vec![format!("{base}sitemap.xml"), format!("{base}sitemap_index")]
    );
    assert_eq!(
        result.sitemaps.into_iter().collect::<Vec<_>>(),
        vec![
            format!("{base}news.xml"),
            format!("{base}sitemap.xml"),
            format!("{base}sitemap_index"),
        ]
    );
    assert!(result.pages.is_empty());
}

#[tokio::test]
async fn test_pages_collected_from_every_sitemap() {
    let server = Server::run();
    let base = server.url_str("/");
    expect_robots(&server, 200, &format!("Sitemap: {base}posts.xml\n"));
    expect_standard_probes(&server, &["sitemap.xml"]);
    expect_get(
        &server,
        "/posts.xml",
        "<urlset><url><loc>https://x.com/post-1</loc></url>\
         <url><loc>https://x.com/shared</loc></url></urlset>"
            .to_string(),
    );
    expect_get(
        &server,
        "/sitemap.xml",
        "<urlset><url><loc>https://x.com/shared</loc></url>\
         <url><loc>https://x.com/other-sitemap.xml</loc></url></urlset>"
            .to_string(),
    );

    let ctx = context(Config {
        collect_pages: true,
        ..Default::default()
    });
    let result = discover(&base, &ctx).await.unwrap();

    // Sitemaps are expanded in lexicographic order; duplicates kept by default.
    assert_eq!(
        result.pages,
        vec![
            "https://x.com/post-1",
            "https://x.com/shared",
            "https://x.com/shared",
        ]
    );
}

#[tokio::test]
async fn test_pages_deduplicated_when_requested() {
    let server = Server::run();
    let base = server.url_str("/");
    expect_robots(&server, 200, "");
    expect_standard_probes(&server, &["sitemap.xml"]);
    expect_get(
        &server,
        "/sitemap.xml",
        "<urlset><url><loc>https://x.com/a</loc></url>\
         <url><loc>https://x.com/a</loc></url></urlset>"
            .to_string(),
    );

    let ctx = context(Config {
        collect_pages: true,
        dedupe_pages: true,
        ..Default::default()
    });
    let result = discover(&base, &ctx).await.unwrap();
    assert_eq!(result.robots_sitemaps, Some(vec![]));
    assert_eq!(result.pages, vec!["https://x.com/a"]);
}

#[tokio::test]
async fn test_process_target_writes_report_and_archives_pages() {
    let server = Server::run();
    let base = server.url_str("/");
    expect_robots(&server, 404, "");
    expect_standard_probes(&server, &["sitemap.xml"]);
    expect_get(
        &server,
        "/sitemap.xml",
        format!("<urlset><url><loc>{base}about</loc></url></urlset>"),
    );
    expect_get(
        &server,
        "/about",
        "<html><head><script>x()</script></head><body><p>About us</p></body></html>".to_string(),
    );

    let dir = TempDir::new().unwrap();
    let ctx = context(Config {
        collect_pages: true,
        archive_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    });
    let mut out = Vec::new();
    let outcome = process_target(&base, &ctx, &mut out).await.unwrap();

    assert!(matches!(
        outcome,
        TargetOutcome::Reported {
            sitemaps: 1,
            pages: 1,
            archived: 1
        }
    ));
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&format!("\nSearching for sitemaps on {base}...\n")));
    assert!(text.contains("robots.txt could not be retrieved.\n"));
    assert!(text.contains(&format!("\nFound 1 page(s):\n - {base}about\n")));
    assert!(text.ends_with(&format!("Page saved: {base}about\nDone saving 1 pages.\n")));

    let archived = std::fs::read_to_string(dir.path().join("about.html")).unwrap();
    assert!(archived.contains("About us"));
    assert!(!archived.contains("<script"));
}

#[tokio::test]
async fn test_batch_continues_past_invalid_target() {
    let server = Server::run();
    expect_robots(&server, 404, "");
    expect_standard_probes(&server, &[]);

    let ctx = context(Config::default());
    let mut source =
        IterTargetSource::new(vec!["http://".to_string(), server.url_str("/")]);
    let mut out = Vec::new();
    let summary = run_batch(&mut source, &ctx, &mut out).await.unwrap();

    assert_eq!(summary.targets, 2);
    assert_eq!(summary.invalid, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Invalid URL: http://"));
    assert!(text.contains("\nNo sitemaps found.\n"));
}

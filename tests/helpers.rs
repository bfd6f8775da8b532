// Shared test helpers for mock-server setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use httptest::{matchers::*, responders::*, Expectation, Server};
use sitemap_finder::config::STANDARD_SITEMAP_PATHS;

/// Expects one HEAD per standard path; `found` paths answer 200, the rest 404.
#[allow(dead_code)] // Used by other test files
pub fn expect_standard_probes(server: &Server, found: &[&str]) {
    for path in STANDARD_SITEMAP_PATHS {
        let status = if found.contains(&path) { 200 } else { 404 };
        server.expect(
            Expectation::matching(request::method_path("HEAD", format!("/{path}")))
                .respond_with(status_code(status)),
        );
    }
}

/// Expects a single robots.txt fetch with the given status and body.
#[allow(dead_code)] // Used by other test files
pub fn expect_robots(server: &Server, status: u16, body: &str) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/robots.txt"))
            .respond_with(status_code(status).body(body.to_string())),
    );
}

/// Expects a single GET of `path` answering 200 with `body`.
#[allow(dead_code)] // Used by other test files
pub fn expect_get(server: &Server, path: &str, body: String) {
    server.expect(
        Expectation::matching(request::method_path("GET", path.to_string()))
            .respond_with(status_code(200).body(body)),
    );
}

// End-to-end crawls against a local HTTP server

use breadth_crawler::crawl::{Crawler, StopReason};
use breadth_crawler::extract::{HtmlLinkExtractor, SelectorRecordExtractor};
use breadth_crawler::fetch::HttpFetcher;
use breadth_crawler::sink::{CollectingSink, StdoutSink};
use breadth_crawler::{CrawlLimits, FailureKind};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

fn site_crawler(
    seed: String,
    limits: CrawlLimits,
) -> Crawler<HttpFetcher, HtmlLinkExtractor, SelectorRecordExtractor> {
    Crawler::new(
        [seed],
        HttpFetcher::new("breadth-crawler-test", Duration::from_secs(5)).unwrap(),
        HtmlLinkExtractor::new().unwrap(),
        SelectorRecordExtractor::new(".titleColumn a").unwrap(),
        limits,
    )
}

fn no_delay(max_pages: Option<usize>, max_depth: Option<usize>) -> CrawlLimits {
    CrawlLimits {
        max_pages,
        max_depth,
        delay: Duration::ZERO,
    }
}

// ============================================================================
// Full site crawl
// ============================================================================

#[tokio::test]
async fn test_crawl_site_with_relative_links_and_broken_page() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>
            <div class="titleColumn"><a>Movie One</a></div>
            <a href="/list">List</a>
            <a href="/broken">Broken</a>
            <a href="mailto:someone@example.com">Mail</a>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/list",
        r#"<html><body>
            <div class="titleColumn"><a>Movie Two</a></div>
            <div class="titleColumn"><a>Movie Three</a></div>
            <a href="/">Home</a>
            <a href="deep">Deeper</a>
        </body></html>"#,
    )
    .await;
    mount_page(&server, "/deep", "<html><body>nothing</body></html>").await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let root = format!("{}/", server.uri());
    let mut crawler = site_crawler(root.clone(), no_delay(None, None));
    let mut sink = CollectingSink::new();
    let report = crawler.run(&mut sink).await;

    assert_eq!(
        report.visited,
        vec![
            root.clone(),
            format!("{}/list", server.uri()),
            format!("{}/broken", server.uri()),
            format!("{}/deep", server.uri()),
        ]
    );
    assert_eq!(report.pages_crawled, 3);
    assert_eq!(report.records_found, 3);
    assert_eq!(report.stop_reason, StopReason::FrontierExhausted);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Transport);
    assert!(report.failures[0].message.contains("500"));

    let titles: Vec<&str> = sink.records.iter().map(|(_, r)| r.text.as_str()).collect();
    assert_eq!(titles, vec!["Movie One", "Movie Two", "Movie Three"]);
    assert_eq!(sink.empty_pages, vec![format!("{}/deep", server.uri())]);
}

#[tokio::test]
async fn test_crawl_respects_depth_and_page_limits() {
    let server = MockServer::start().await;

    mount_page(&server, "/", r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#).await;
    mount_page(&server, "/a", r#"<a href="/a/deeper">Deeper</a>"#).await;
    mount_page(&server, "/b", "").await;
    mount_page(&server, "/c", "").await;

    let root = format!("{}/", server.uri());

    // depth 1: the children are visited but never expanded
    let mut crawler = site_crawler(root.clone(), no_delay(None, Some(1)));
    let report = crawler.run(&mut CollectingSink::new()).await;
    assert_eq!(report.pages_crawled, 4);
    assert!(!report.visited.iter().any(|u| u.ends_with("/a/deeper")));

    // page limit: root + first child only
    let mut crawler = site_crawler(root, no_delay(Some(2), None));
    let report = crawler.run(&mut CollectingSink::new()).await;
    assert_eq!(report.pages_crawled, 2);
    assert_eq!(report.stop_reason, StopReason::PageLimitReached);
    assert!(report.visited[1].ends_with("/a"));
}

#[tokio::test]
async fn test_stdout_sink_reports_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<div class="titleColumn"><a>Only Title</a></div><a href="/empty">E</a>"#,
    )
    .await;
    mount_page(&server, "/empty", "<p>none</p>").await;

    let root = format!("{}/", server.uri());
    let mut crawler = site_crawler(root.clone(), no_delay(None, None));
    let mut sink = StdoutSink::with_writer(Vec::new());
    crawler.run(&mut sink).await;

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        output,
        format!(
            "Records found on {}:\nOnly Title\n\nNo records found on {}/empty\n\n",
            root,
            server.uri()
        )
    );
}

//! HTTP page retrieval against a local mock server.

use jobscout::{
    CareerTools, HttpFetcher, JobExtractor, PageFetcher, SchemaCache, ScrapeError, ScraperOptions,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_HTML: &str = r#"<html><body><ul>
    <li><h3>Ops</h3><a href="/jobs/ops">Apply</a><span>Remote</span></li>
</ul></body></html>"#;

fn fetcher_with(timeout: Duration, user_agent: &str) -> HttpFetcher {
    let options = ScraperOptions::builder()
        .fetch_timeout(timeout)
        .user_agent(user_agent)
        .build();
    HttpFetcher::new(&options).expect("Failed to build HTTP client")
}

fn default_fetcher() -> HttpFetcher {
    HttpFetcher::new(&ScraperOptions::default()).expect("Failed to build HTTP client")
}

#[tokio::test]
async fn success_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/careers", server.uri());
    let body = default_fetcher().fetch_page(&url).await.unwrap();
    assert_eq!(body, PAGE_HTML);
}

#[tokio::test]
async fn non_success_status_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/careers", server.uri());
    let err = default_fetcher().fetch_page(&url).await.unwrap_err();
    match err {
        ScrapeError::Fetch { url: failed, message } => {
            assert_eq!(failed, url);
            assert!(message.contains("404"), "{}", message);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE_HTML)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher_with(Duration::from_millis(200), "Mozilla/5.0");
    let url = format!("{}/careers", server.uri());
    let err = fetcher.fetch_page(&url).await.unwrap_err();
    assert!(
        matches!(&err, ScrapeError::Fetch { message, .. } if message == "request timed out"),
        "{}",
        err
    );
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/careers"))
        .and(header("user-agent", "jobscout-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_with(Duration::from_secs(5), "jobscout-test/1.0");
    let url = format!("{}/careers", server.uri());
    assert_eq!(fetcher.fetch_page(&url).await.unwrap(), PAGE_HTML);
}

#[tokio::test]
async fn unreachable_host_is_fetch_error() {
    let url = "http://127.0.0.1:9/careers";

    let err = default_fetcher().fetch_page(url).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch { .. }), "{}", err);
}

#[tokio::test]
async fn unmatched_path_is_fetch_error() {
    let server = MockServer::start().await;
    let url = format!("{}/careers", server.uri());

    let err = default_fetcher().fetch_page(&url).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch { .. }), "{}", err);
}

#[tokio::test]
async fn tools_over_http_render_jobs_and_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_HTML))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let extractor = JobExtractor::new(
        ScraperOptions::default(),
        Arc::new(SchemaCache::in_memory()),
        |_: &str, _: &str| -> jobscout::Result<String> {
            Ok(r#"[{"title": "Ops", "link": "/jobs/ops", "location": "Remote"}]"#.to_string())
        },
    );
    let tools = CareerTools::new(default_fetcher(), extractor);

    let careers = format!("{}/careers", server.uri());
    assert_eq!(
        tools.get_jobs_from_url(&careers).await,
        format!(
            "Jobs at {}:\n\n- Ops (Remote) ({}/jobs/ops)",
            careers,
            server.uri()
        )
    );

    let gone = format!("{}/gone", server.uri());
    assert!(tools
        .get_jobs_from_url(&gone)
        .await
        .starts_with(&format!("Failed to fetch {}: ", gone)));
}

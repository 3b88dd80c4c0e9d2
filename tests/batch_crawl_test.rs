//! End-to-end batch crawl tests
//!
//! Drive the real HTTP client, title parser, and batch coordinator against
//! a mock title-page server and a CSV catalog on disk.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use movie_crawler::{
    AppConfig, BatchCoordinator, BatchParams, CrawlerConfig, CsvCatalogStore, PageExtractor,
};

fn title_page(poster: &str, genres: &[&str], votes: &str, cast: &[&str], director: &str) -> String {
    let genre_spans: String = genres
        .iter()
        .map(|g| format!(r#"<span class="ipc-chip__text">{g}</span>"#))
        .collect();
    let cast_links: String = cast
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(r#"<a data-testid="title-cast-item__actor" href="/name/nm{i}/">{name}</a>"#)
        })
        .collect();
    format!(
        r#"<html><body>
        <div data-testid="hero-media__poster"><img src="{poster}"></div>
        <span data-testid="rating-histogram-vote-count">{votes}</span>
        <div class="ipc-chip-list--baseAlt">{genre_spans}</div>
        <ul>
            <li data-testid="title-pc-principal-credit"><span>Director</span><a href="/name/d/">{director}</a></li>
            <li data-testid="title-pc-principal-credit"><span>Writers</span><a href="/name/w/">Someone Else</a></li>
        </ul>
        {cast_links}
        </body></html>"#
    )
}

fn test_config(server: &MockServer, concurrency: usize) -> AppConfig {
    AppConfig {
        crawler: CrawlerConfig {
            base_url: format!("{}/title", server.uri()),
            request_timeout_seconds: 5,
            max_concurrent_requests: concurrency,
            ..CrawlerConfig::default()
        },
        ..AppConfig::default()
    }
}

async fn run_batch(
    server: &MockServer,
    catalog_path: &std::path::Path,
    start_index: usize,
    count: usize,
) -> movie_crawler::BatchReport {
    let config = test_config(server, 4);
    let extractor = Arc::new(PageExtractor::from_config(&config).unwrap());
    let coordinator = BatchCoordinator::new(extractor, config.crawler.max_concurrent_requests);

    let mut catalog = CsvCatalogStore::load(catalog_path).unwrap();
    let report = coordinator
        .run(&mut catalog, &BatchParams::new(start_index, count))
        .await
        .unwrap();
    CsvCatalogStore::save(catalog_path, &catalog).unwrap();
    report
}

#[tokio::test]
async fn crawl_populates_metadata_columns_in_the_catalog_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/title/tt0111161"))
        .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
            "https://img.example/shawshank.jpg",
            &["Drama"],
            "2.9M",
            &["Tim Robbins", "Morgan Freeman"],
            "Frank Darabont",
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/title/tt0068646"))
        .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
            "/godfather.jpg",
            &["Crime", "Drama"],
            "12,345",
            &["Marlon Brando", "Al Pacino", "James Caan", "Richard Castellano", "Robert Duvall", "Sterling Hayden"],
            "Francis Ford Coppola",
        )))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("movie_data.csv");
    fs::write(
        &catalog_path,
        "title_id,title\ntt0111161,The Shawshank Redemption\ntt0068646,The Godfather\n",
    )
    .unwrap();

    let report = run_batch(&server, &catalog_path, 0, 2).await;
    assert_eq!(report.windowed, 2);
    assert_eq!(report.applied, 2);
    assert_eq!(report.failed, 0);

    let catalog = CsvCatalogStore::load(&catalog_path).unwrap();
    assert_eq!(catalog.cell(0, "genre"), Some("Drama"));
    assert_eq!(catalog.cell(0, "votes"), Some("2900000"));
    assert_eq!(catalog.cell(0, "director"), Some("Frank Darabont"));
    assert_eq!(
        catalog.cell(0, "poster_url"),
        Some("https://img.example/shawshank.jpg")
    );
    assert_eq!(catalog.cell(1, "genre"), Some("Crime, Drama"));
    assert_eq!(catalog.cell(1, "votes"), Some("12345"));
    // six candidates on the page, only the first five kept
    assert_eq!(
        catalog.cell(1, "top_cast"),
        Some("Marlon Brando, Al Pacino, James Caan, Richard Castellano, Robert Duvall")
    );
    // untouched original column
    assert_eq!(catalog.cell(1, "title"), Some("The Godfather"));
}

#[tokio::test]
async fn a_failing_fetch_clears_only_its_own_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/title/tt0000001"))
        .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
            "/ok.jpg",
            &["Action"],
            "100",
            &["Someone"],
            "A Director",
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/title/tt0000002"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("movie_data.csv");
    fs::write(&catalog_path, "title_id\ntt0000001\ntt0000002\n").unwrap();

    let report = run_batch(&server, &catalog_path, 0, 2).await;
    assert_eq!(report.applied, 2);
    assert_eq!(report.failed, 1);

    let catalog = CsvCatalogStore::load(&catalog_path).unwrap();
    assert_eq!(catalog.cell(0, "genre"), Some("Action"));
    assert_eq!(catalog.cell(1, "genre"), Some(""));
    assert_eq!(catalog.cell(1, "poster_url"), Some(""));
}

#[tokio::test]
async fn rows_outside_the_window_survive_on_disk_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/title/tt0000011"))
        .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
            "/new.jpg",
            &["Sci-Fi"],
            "5K",
            &["Lead Actor"],
            "New Director",
        )))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("movie_data.csv");
    fs::write(
        &catalog_path,
        "title_id,genre,votes,top_cast,director,poster_url\n\
         tt0000011,old-genre,1,old-cast,old-director,/old.jpg\n\
         tt0000012,keep-genre,2,keep-cast,keep-director,/keep.jpg\n",
    )
    .unwrap();

    run_batch(&server, &catalog_path, 0, 1).await;

    let catalog = CsvCatalogStore::load(&catalog_path).unwrap();
    assert_eq!(catalog.cell(0, "genre"), Some("Sci-Fi"));
    assert_eq!(catalog.cell(0, "votes"), Some("5000"));
    assert_eq!(catalog.cell(0, "poster_url"), Some("/new.jpg"));
    // row 1 was outside the window; every cell survives verbatim
    assert_eq!(catalog.cell(1, "genre"), Some("keep-genre"));
    assert_eq!(catalog.cell(1, "votes"), Some("2"));
    assert_eq!(catalog.cell(1, "top_cast"), Some("keep-cast"));
    assert_eq!(catalog.cell(1, "director"), Some("keep-director"));
    assert_eq!(catalog.cell(1, "poster_url"), Some("/keep.jpg"));
}

#[tokio::test]
async fn window_entirely_past_the_end_only_adds_columns() {
    let server = MockServer::start().await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("movie_data.csv");
    fs::write(&catalog_path, "title_id,title\ntt0000021,Some Movie\n").unwrap();

    let report = run_batch(&server, &catalog_path, 10, 5).await;
    assert_eq!(report.windowed, 0);

    let content = fs::read_to_string(&catalog_path).unwrap();
    assert_eq!(
        content,
        "title_id,title,genre,votes,top_cast,director,poster_url\ntt0000021,Some Movie,,,,,\n"
    );
}

//! Search pipeline tests
//!
//! Run on a paused clock: tokio advances time only when every task is idle,
//! so debounce windows and backend latencies are exact.

use std::sync::Arc;
use std::time::Duration;

use adoption_center::egui_app::search::{SearchMode, SearchPipeline};
use adoption_center::shared::Pet;
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use tokio::runtime::Handle;
use tokio::time::sleep;

use crate::common::{sample_pets, FakeSearch};

const DEBOUNCE: Duration = Duration::from_millis(300);

fn names(pets: &[Pet]) -> Vec<&str> {
    pets.iter().map(|pet| pet.name.as_str()).collect()
}

fn call(mode: SearchMode, term: &str) -> (SearchMode, String) {
    (mode, term.to_string())
}

#[tokio::test(start_paused = true)]
async fn test_fast_typing_issues_one_query() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("c");
    sleep(Duration::from_millis(100)).await;
    search.search("ca");
    sleep(Duration::from_millis(100)).await;
    search.search("cat");

    let pets = results.next().await.unwrap();
    assert_eq!(names(&pets), vec!["Catrina"]);
    assert_eq!(backend.calls(), vec![call(SearchMode::Name, "cat")]);
}

#[tokio::test(start_paused = true)]
async fn test_each_settled_term_is_queried() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("ca");
    sleep(Duration::from_millis(400)).await;
    search.search("cat");

    assert_eq!(names(&results.next().await.unwrap()), vec!["Catrina"]);
    assert_eq!(names(&results.next().await.unwrap()), vec!["Catrina"]);
    assert_eq!(
        backend.calls(),
        vec![call(SearchMode::Name, "ca"), call(SearchMode::Name, "cat")]
    );
}

#[tokio::test(start_paused = true)]
async fn test_unchanged_term_is_not_requeried() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("rex");
    results.next().await.unwrap();

    // Typed and erased again within one window: the settled term is the same.
    search.search("rexx");
    sleep(Duration::from_millis(50)).await;
    search.search("rex");
    sleep(Duration::from_secs(2)).await;

    assert!(results.try_next().is_none());
    assert_eq!(backend.calls(), vec![call(SearchMode::Name, "rex")]);
}

#[tokio::test(start_paused = true)]
async fn test_blank_term_clears_without_backend() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("   ");

    assert_eq!(results.next().await.unwrap(), Vec::<Pet>::new());
    assert!(backend.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_type_mode_routes_to_type_query() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    assert_eq!(search.toggle_mode(), SearchMode::Type);
    search.search("dog");

    assert_eq!(names(&results.next().await.unwrap()), vec!["Rex", "Max"]);
    assert_eq!(backend.calls(), vec![call(SearchMode::Type, "dog")]);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_does_not_reroute_issued_query() {
    let backend = Arc::new(
        FakeSearch::new(sample_pets()).with_delay("max", Duration::from_secs(1)),
    );
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("max");
    sleep(Duration::from_millis(400)).await;
    search.toggle_mode();

    assert_eq!(names(&results.next().await.unwrap()), vec!["Max"]);
    assert_eq!(backend.calls(), vec![call(SearchMode::Name, "max")]);
    assert_eq!(search.mode(), SearchMode::Type);
}

#[tokio::test(start_paused = true)]
async fn test_slow_older_query_never_overwrites_newer() {
    let backend = Arc::new(
        FakeSearch::new(sample_pets()).with_delay("t", Duration::from_secs(2)),
    );
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("t");
    sleep(Duration::from_millis(400)).await;
    search.search("tom");

    assert_eq!(names(&results.next().await.unwrap()), vec!["Tom"]);
    sleep(Duration::from_secs(5)).await;
    assert!(results.try_next().is_none());
    assert_eq!(
        backend.calls(),
        vec![call(SearchMode::Name, "t"), call(SearchMode::Name, "tom")]
    );
}

#[tokio::test(start_paused = true)]
async fn test_blank_term_supersedes_query_in_flight() {
    let backend = Arc::new(
        FakeSearch::new(sample_pets()).with_delay("rex", Duration::from_secs(2)),
    );
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("rex");
    sleep(Duration::from_millis(400)).await;
    search.search("");

    assert_eq!(results.next().await.unwrap(), Vec::<Pet>::new());
    sleep(Duration::from_secs(5)).await;
    assert!(results.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_closing_input_flushes_last_term() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, mut results) = SearchPipeline::spawn(&Handle::current(), backend.clone(), DEBOUNCE);

    search.search("tom");
    drop(search);

    assert_eq!(names(&results.next().await.unwrap()), vec!["Tom"]);
    assert!(results.next().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_results_as_stream() {
    let backend = Arc::new(FakeSearch::new(sample_pets()));
    let (search, results) = SearchPipeline::spawn(&Handle::current(), backend, DEBOUNCE);
    let mut stream = results.into_stream();

    search.search("cat");
    search.toggle_mode();
    sleep(Duration::from_millis(400)).await;
    search.search("dog");

    assert_eq!(names(&stream.next().await.unwrap()), vec!["Tom", "Catrina"]);
    assert_eq!(names(&stream.next().await.unwrap()), vec!["Rex", "Max"]);
}

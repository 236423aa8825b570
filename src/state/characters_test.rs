use super::*;
use httpmock::prelude::*;
use serde_json::json;

const FRESH: Duration = Duration::from_secs(300);

fn store_for(server: &MockServer, stale_after: Duration) -> CharacterStore {
    CharacterStore::new(
        CharactersApi::new(reqwest::Client::new(), server.base_url()),
        stale_after,
    )
}

fn listing(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/character");
        then.status(200).json_body(json!({"results": [{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "gender": "Male",
            "image": "https://example.test/rick.png"
        }]}));
    })
}

#[tokio::test]
async fn get_serves_the_cache_for_an_unchanged_filter_key() {
    let server = MockServer::start();
    let mock = listing(&server);
    let store = store_for(&server, FRESH);

    let first = store.get().await.expect("first read");
    let second = store.get().await.expect("second read");
    assert_eq!(first, second);
    mock.assert_hits(1);
}

#[tokio::test]
async fn changing_the_filters_refetches() {
    let server = MockServer::start();
    let mock = listing(&server);
    let store = store_for(&server, FRESH);

    store.get().await.expect("unfiltered read");
    store.set_filters(CharacterFilters {
        status: Some("alive".to_owned()),
        ..CharacterFilters::default()
    });
    store.get().await.expect("filtered read");
    mock.assert_hits(2);

    // Returning to a previously seen filter key hits the cache again.
    store.set_filters(CharacterFilters::default());
    store.get().await.expect("unfiltered read again");
    mock.assert_hits(2);
}

#[tokio::test]
async fn stale_entries_are_refetched() {
    let server = MockServer::start();
    let mock = listing(&server);
    let store = store_for(&server, Duration::ZERO);

    store.get().await.expect("first read");
    store.get().await.expect("second read");
    mock.assert_hits(2);
}

#[tokio::test]
async fn invalidate_drops_every_cached_listing() {
    let server = MockServer::start();
    let mock = listing(&server);
    let store = store_for(&server, FRESH);

    store.get().await.expect("first read");
    store.invalidate().await;
    store.get().await.expect("read after invalidation");
    mock.assert_hits(2);
}

#[tokio::test]
async fn set_filters_replaces_the_active_set() {
    let server = MockServer::start();
    let store = store_for(&server, FRESH);

    let filters = CharacterFilters { page: Some(3), ..CharacterFilters::default() };
    store.set_filters(filters.clone());
    assert_eq!(store.filters(), filters);
}

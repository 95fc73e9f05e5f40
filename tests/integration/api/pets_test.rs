//! Pet service tests

use adoption_center::egui_app::api::PetService;
use adoption_center::shared::Pet;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, sample_pets, unreachable_config};

async fn service() -> (MockServer, PetService) {
    let server = MockServer::start().await;
    let pets = PetService::new(client_for(&server));
    (server, pets)
}

#[tokio::test]
async fn test_list_pets() {
    let (server, pets) = service().await;
    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_pets()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(pets.list().await, sample_pets());
}

#[tokio::test]
async fn test_list_falls_back_to_empty_on_server_error() {
    let (server, pets) = service().await;
    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(pets.list().await.is_empty());
}

#[tokio::test]
async fn test_list_falls_back_on_malformed_body() {
    let (server, pets) = service().await;
    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(pets.list().await.is_empty());
}

#[tokio::test]
async fn test_get_pet() {
    let (server, pets) = service().await;
    Mock::given(method("GET"))
        .and(path("/pets/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Catrina",
            "animaltype": "cat"
        })))
        .mount(&server)
        .await;

    assert_eq!(pets.get(3).await, Some(Pet::new(3, "Catrina", "cat")));
    assert_eq!(pets.get(99).await, None);
}

#[tokio::test]
async fn test_search_paths() {
    let (server, pets) = service().await;
    Mock::given(method("GET"))
        .and(path("/pets/name/cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(3, "Catrina", "cat")]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pets/type/dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(1, "Rex", "dog")]))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(pets.search_by_name("cat").await, vec![Pet::new(3, "Catrina", "cat")]);
    assert_eq!(pets.search_by_type("dog").await, vec![Pet::new(1, "Rex", "dog")]);
}

#[tokio::test]
async fn test_search_term_is_path_encoded() {
    let (server, pets) = service().await;
    Mock::given(method("GET"))
        .and(path("/pets/type/guinea%20pig"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(5, "Fluff", "guinea pig")]))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(pets.search_by_type("guinea pig").await.len(), 1);
}

#[tokio::test]
async fn test_blank_search_sends_nothing() {
    let (server, pets) = service().await;

    assert!(pets.search_by_name("").await.is_empty());
    assert!(pets.search_by_type("  ").await.is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_add_pet_returns_stored_pet() {
    let (server, pets) = service().await;
    Mock::given(method("POST"))
        .and(path("/pets"))
        .and(body_json(json!({"id": 0, "name": "Rex", "animaltype": "dog"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(Pet::new(7, "Rex", "dog")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(pets.add(&Pet::draft("Rex", "dog")).await, Some(Pet::new(7, "Rex", "dog")));
}

#[tokio::test]
async fn test_add_conflict_is_none() {
    let (server, pets) = service().await;
    Mock::given(method("POST"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    assert_eq!(pets.add(&Pet::draft("Rex", "dog")).await, None);
}

#[tokio::test]
async fn test_update_and_delete() {
    let (server, pets) = service().await;
    Mock::given(method("PUT"))
        .and(path("/pets"))
        .and(body_json(json!({"id": 1, "name": "Rexy", "animaltype": "dog"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/pets/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert!(pets.update(&Pet::new(1, "Rexy", "dog")).await);
    assert!(pets.delete(1).await);
    assert!(!pets.delete(2).await);
}

#[tokio::test]
async fn test_unreachable_backend_uses_fallbacks() {
    let client = adoption_center::egui_app::api::ApiClient::new(&unreachable_config()).unwrap();
    let pets = PetService::new(client);

    assert!(pets.list().await.is_empty());
    assert_eq!(pets.get(1).await, None);
    assert!(!pets.update(&Pet::new(1, "Rex", "dog")).await);
}

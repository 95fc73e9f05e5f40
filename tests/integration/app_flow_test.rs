//! User flows through `AppState` against a mock backend

use std::time::Duration;

use adoption_center::egui_app::{AppState, AppView, Session};
use adoption_center::shared::{AppEvent, Pet, User};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::runtime::Handle;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{config_for, logged_in, next_matching, sample_pets, wait_for_requests};

fn is_login(event: &AppEvent) -> bool {
    matches!(event, AppEvent::LoginChecked { .. })
}

#[tokio::test]
async fn test_admin_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/admin/x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(User::new("admin", "x")))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.login.username_input = "admin".to_string();
    state.login.password_input = "x".to_string();
    state.submit_login();
    assert!(state.login.loading);

    let event = next_matching(&mut state, is_login).await;
    assert_matches!(event, AppEvent::LoginChecked { user: Some(_) });
    assert!(state.session.is_authorized());
    assert!(state.session.nav_visible());
    assert_eq!(state.current_view, AppView::Dashboard);
    assert_eq!(
        AppView::nav_items(&state.session),
        vec![AppView::Dashboard, AppView::Pets, AppView::Notifications, AppView::Account]
    );
}

#[tokio::test]
async fn test_wrong_password_leaves_session_untouched() {
    let server = MockServer::start().await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.login.username_input = "bob".to_string();
    state.login.password_input = "wrongpw".to_string();
    state.submit_login();

    let event = next_matching(&mut state, is_login).await;
    assert_matches!(event, AppEvent::LoginChecked { user: None });
    assert_eq!(state.login.message, "Username or password is incorrect");
    assert_eq!(state.session, Session::new());
    assert_eq!(state.current_view, AppView::Login);
}

#[tokio::test]
async fn test_blank_login_sends_nothing() {
    let server = MockServer::start().await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.login.username_input = "bob".to_string();
    state.submit_login();

    assert_eq!(state.login.message, "Required fields not filled in");
    assert!(!state.login.loading);
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_account_then_login_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(User::new("carol", "pw")))
        .respond_with(ResponseTemplate::new(201).set_body_json(User::new("carol", "pw")))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.navigate(AppView::CreateUser);
    state.create_user.username_input = " carol ".to_string();
    state.create_user.password_input = "pw".to_string();
    state.create_user.confirm_input = "pw".to_string();
    state.submit_create_user();

    next_matching(&mut state, |e| matches!(e, AppEvent::UserCreated(_))).await;
    assert_eq!(state.current_view, AppView::Login);
    assert_eq!(state.login.message, "Account created, please log in");
}

#[tokio::test]
async fn test_create_account_taken() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.navigate(AppView::CreateUser);
    state.create_user.username_input = "bob".to_string();
    state.create_user.password_input = "pw".to_string();
    state.create_user.confirm_input = "pw".to_string();
    state.submit_create_user();

    next_matching(&mut state, |e| matches!(e, AppEvent::UserCreated(_))).await;
    assert_eq!(state.current_view, AppView::CreateUser);
    assert_eq!(state.create_user.message, "Username taken");
}

#[tokio::test]
async fn test_reserved_username_sends_nothing() {
    let server = MockServer::start().await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.create_user.username_input = "admin".to_string();
    state.create_user.password_input = "pw".to_string();
    state.create_user.confirm_input = "pw".to_string();
    state.submit_create_user();

    assert_eq!(state.create_user.message, "Username is reserved");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_loads_basket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/baskets/username/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(2, "Tom", "cat")]))
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "bob").await;
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketLoaded(_))).await;

    assert_eq!(state.basket.pets, vec![Pet::new(2, "Tom", "cat")]);
    assert!(!state.session.is_authorized());
}

#[tokio::test]
async fn test_double_login_click_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/bob/pw"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(User::new("bob", "pw"))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let mut state = AppState::new(config_for(&server), Handle::current()).unwrap();
    state.login.username_input = "bob".to_string();
    state.login.password_input = "pw".to_string();
    state.submit_login();
    state.submit_login();
    next_matching(&mut state, |e| matches!(e, AppEvent::LoginChecked { .. })).await;

    let logins = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == "/users/bob/pw")
        .count();
    assert_eq!(logins, 1);
    assert_eq!(state.current_view, AppView::Dashboard);
}

#[tokio::test]
async fn test_late_basket_of_previous_user_is_not_shown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/baskets/username/alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vec![Pet::new(7, "Whiskers", "cat")])
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/baskets/username/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Pet>::new()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/bob/pw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(User::new("bob", "pw")))
        .mount(&server)
        .await;

    // Logging in as alice requests her basket, which answers slowly.
    let mut state = logged_in(&server, "alice").await;
    state.logout();

    state.login.username_input = "bob".to_string();
    state.login.password_input = "pw".to_string();
    state.submit_login();
    next_matching(&mut state, |e| matches!(e, AppEvent::LoginChecked { .. })).await;
    assert_eq!(state.session.current_user(), "bob");

    let mut saw_alices_basket = false;
    for _ in 0..2 {
        let event = next_matching(&mut state, |e| matches!(e, AppEvent::BasketLoaded(_))).await;
        if let AppEvent::BasketLoaded(pets) = event {
            saw_alices_basket |= !pets.is_empty();
        }
    }

    assert!(saw_alices_basket);
    assert!(state.basket.pets.is_empty());
    assert!(!state.basket.has_pets());
}

#[tokio::test]
async fn test_dashboard_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pets/name/cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(3, "Catrina", "cat")]))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "bob").await;
    for partial in ["c", "ca", "cat"] {
        state.dashboard.search_input = partial.to_string();
        state.search_changed();
    }

    let results = state.dashboard.next_results().await.unwrap().to_vec();
    assert_eq!(results, vec![Pet::new(3, "Catrina", "cat")]);
}

#[tokio::test]
async fn test_non_admin_cannot_add_pet() {
    let server = MockServer::start().await;

    let mut state = logged_in(&server, "bob").await;
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketLoaded(_))).await;
    let before = server.received_requests().await.unwrap().len();

    state.pets.name_input = "Rex".to_string();
    state.pets.type_input = "dog".to_string();
    state.add_pet();
    state.delete_pet(1);

    assert_eq!(state.pets.message, "Only the administrator can do that");
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_admin_adds_pet() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pets"))
        .and(body_json(json!({"id": 0, "name": "Rex", "animaltype": "dog"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(Pet::new(9, "Rex", "dog")))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "admin").await;
    state.pets.name_input = "  Rex ".to_string();
    state.pets.type_input = "dog".to_string();
    state.add_pet();

    next_matching(&mut state, |e| matches!(e, AppEvent::PetAdded(_))).await;
    assert_eq!(state.pets.pets, vec![Pet::new(9, "Rex", "dog")]);
    assert!(state.pets.name_input.is_empty());
}

#[tokio::test]
async fn test_add_to_basket_twice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/baskets"))
        .respond_with(ResponseTemplate::new(201).set_body_json(Pet::new(1, "Rex", "dog")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/baskets"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "bob").await;
    let rex = Pet::new(1, "Rex", "dog");

    state.add_to_basket(&rex);
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketAddResult { .. })).await;
    assert_eq!(state.pets.message, "Rex has been added to your basket!");

    state.add_to_basket(&rex);
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketAddResult { .. })).await;
    assert_eq!(state.pets.message, "Rex already exists in your basket!");
}

#[tokio::test]
async fn test_adopt_basket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/baskets/username/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&sample_pets()[..2]))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/baskets/adopt"))
        .and(body_json(json!(1)))
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

    let mut state = logged_in(&server, "bob").await;
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketLoaded(_))).await;
    assert_eq!(state.basket.pets.len(), 2);

    state.adopt();
    assert!(!state.basket.has_pets());
    assert!(state.basket.adopting);

    let event = next_matching(&mut state, |e| matches!(e, AppEvent::AdoptionFinished { .. })).await;
    assert_matches!(event, AppEvent::AdoptionFinished { ref adopted, ref failed }
        if adopted.len() == 1 && failed.len() == 1);
    // Tom's adoption was refused, so Tom stays in the basket.
    assert_eq!(state.basket.pets, vec![Pet::new(2, "Tom", "cat")]);
    assert_eq!(state.basket.message, "Some adoptions could not be completed");
}

#[tokio::test]
async fn test_remove_from_basket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/baskets/username/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(2, "Tom", "cat")]))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/baskets/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "bob").await;
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketLoaded(_))).await;

    state.remove_from_basket(&Pet::new(2, "Tom", "cat"));
    assert!(!state.basket.has_pets());
    assert_eq!(state.basket.message, "Tom has been removed from your basket");
    wait_for_requests(&server, 3).await;
}

#[tokio::test]
async fn test_donation_notifies_admin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/notifications"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "bob").await;
    next_matching(&mut state, |e| matches!(e, AppEvent::BasketLoaded(_))).await;
    state.navigate(AppView::Donate);

    state.donate.card_input = "1234567812345678".to_string();
    state.donate.amount_input = "25".to_string();
    state.donate.name_input = "Bob".to_string();
    state.donate.date_input = "01/30".to_string();
    state.donate();
    assert_eq!(state.donate.message, "Please enter a valid credit card number");
    assert!(!state.donate.donated);

    state.donate.card_input = "4532015112830366".to_string();
    state.donate();
    assert_eq!(state.donate.message, "Thank you for donating 25 dollars!");
    assert!(state.donate.donated);
    assert!(state.donate.card_input.is_empty());

    // login + basket + notification
    let requests = wait_for_requests(&server, 3).await;
    let notice = requests
        .iter()
        .find(|r| r.url.path() == "/users/notifications")
        .expect("notification request");
    assert_eq!(String::from_utf8_lossy(&notice.body), "bob has donated 25 dollars");
}

#[tokio::test]
async fn test_admin_dismisses_first_matching_notification() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/notifications/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec!["a", "b", "a"]))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/notifications/a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "admin").await;
    state.navigate(AppView::Notifications);
    next_matching(&mut state, |e| matches!(e, AppEvent::NotificationsLoaded(_))).await;

    state.delete_notification("a");
    assert_eq!(state.notifications.notifications, vec!["b".to_string(), "a".to_string()]);

    let requests = wait_for_requests(&server, 4).await;
    assert!(requests
        .iter()
        .any(|r| r.method.as_str() == "DELETE" && r.url.path() == "/users/notifications/a"));
}

#[tokio::test]
async fn test_pet_detail_save_returns_to_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pets/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Pet::new(1, "Rex", "dog")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/baskets/adopter/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![User::new("bob", "pw")]))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/pets"))
        .and(body_json(json!({"id": 1, "name": "Rexy", "animaltype": "dog"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "admin").await;
    state.navigate(AppView::PetDetail(1));
    // The pet and its adopters load concurrently.
    for _ in 0..2 {
        next_matching(&mut state, |e| {
            matches!(e, AppEvent::PetLoaded(_) | AppEvent::AdoptersLoaded(_))
        })
        .await;
    }
    assert_eq!(state.pet_detail.pet, Some(Pet::new(1, "Rex", "dog")));
    assert_eq!(state.pet_detail.adopters.len(), 1);

    if let Some(pet) = state.pet_detail.pet.as_mut() {
        pet.name = "Rexy".to_string();
    }
    state.save_pet();

    next_matching(&mut state, |e| matches!(e, AppEvent::PetSaved(_))).await;
    assert_eq!(state.current_view, AppView::Pets);
}

#[tokio::test]
async fn test_history_shows_adopted_pets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/baskets/adopted/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![Pet::new(1, "Rex", "dog")]))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = logged_in(&server, "bob").await;
    assert!(!state.history.has_pets());
    state.navigate(AppView::History);
    next_matching(&mut state, |e| matches!(e, AppEvent::HistoryLoaded(_))).await;

    assert_eq!(state.current_view, AppView::History);
    assert_eq!(state.history.pets, vec![Pet::new(1, "Rex", "dog")]);
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let server = MockServer::start().await;

    let mut state = logged_in(&server, "admin").await;
    state.navigate(AppView::Account);
    state.logout();

    assert_eq!(state.current_view, AppView::Login);
    assert_eq!(state.session, Session::new());
    assert!(AppView::nav_items(&state.session).is_empty());
    state.navigate(AppView::Pets);
    assert_eq!(state.current_view, AppView::Login);
}

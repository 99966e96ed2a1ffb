use cucumber::then;

use pos_lib::navigation;
use pos_lib::session::SessionStorage;
use pos_lib::{AuthState, PosError, Role};

use super::when_auth::open_page;
use crate::support::world::TestWorld;

#[then(expr = "I am authenticated as {string}")]
pub async fn authenticated_as(world: &mut TestWorld, role: String) {
    assert_eq!(world.guard.state().await, AuthState::Authenticated);
    let user = world.guard.check().await.expect("guard should let me in");
    assert_eq!(user.role, role.parse::<Role>().unwrap());
}

#[then("I am not authenticated")]
pub async fn not_authenticated(world: &mut TestWorld) {
    assert_eq!(world.guard.state().await, AuthState::Unauthenticated);
}

#[then("the stored session holds a token")]
pub async fn stored_session_has_token(world: &mut TestWorld) {
    let stored = world.storage.load().unwrap().expect("a stored session");
    assert!(!stored.token.is_empty());
}

#[then("the session storage is empty")]
pub async fn stored_session_empty(world: &mut TestWorld) {
    assert!(world.storage.load().unwrap().is_none());
}

#[then(expr = "opening the {string} page redirects to login")]
pub async fn page_redirects(world: &mut TestWorld, page: String) {
    world.begin();
    let err = open_page(world, &page)
        .await
        .expect_err("page should not open");
    assert!(err.is_redirect_to_login(), "expected redirect, got {err}");
    assert!(world.recent_calls().is_empty(), "no request should be sent");
}

#[then(expr = "my menu is {string}")]
pub async fn menu_is(world: &mut TestWorld, expected: String) {
    let user = world.guard.check().await.expect("guard should let me in");
    let labels: Vec<&str> = navigation::menu(user.role)
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels.join(", "), expected);
}

#[then("access is forbidden")]
pub async fn access_forbidden(world: &mut TestWorld) {
    assert!(
        matches!(world.error, Some(PosError::Forbidden { .. })),
        "expected forbidden, got {:?}",
        world.error
    );
    assert!(world.recent_calls().is_empty(), "no request should be sent");
}

#[then(expr = "I see the error {string}")]
pub async fn see_error(world: &mut TestWorld, message: String) {
    let err = world.error.as_ref().expect("an error should be shown");
    assert_eq!(err.to_string(), message);
}

use super::*;
use crate::state::first_time_modal::CloseMode;
use crate::state::identity::MemoryUserIdStore;

fn app() -> App {
    App::new(&Config::default(), Box::new(MemoryUserIdStore::default()), CloseMode::default())
}

#[tokio::test]
async fn login_resolves_the_identity() {
    let app = app();
    assert!(app.identity.current_user().is_none());

    let user = app.login("u1").await;
    assert_eq!(user.id, "u1");
    assert_eq!(app.identity.current_user(), Some(user));
}

#[tokio::test]
async fn logout_clears_the_identity() {
    let app = app();
    app.login("u1").await;
    app.logout().await;
    assert!(app.identity.current_user().is_none());
}

#[tokio::test]
async fn a_persisted_identifier_survives_construction() {
    use crate::state::identity::UserIdStore;

    let store = MemoryUserIdStore::default();
    store.set("u9");
    let app = App::new(&Config::default(), Box::new(store), CloseMode::OnlyShowOne);
    assert_eq!(app.identity.current_user().map(|user| user.id), Some("u9".to_owned()));
}

use super::*;

fn store_with(id: Option<&str>) -> Box<MemoryUserIdStore> {
    let store = MemoryUserIdStore::default();
    if let Some(id) = id {
        store.set(id);
    }
    Box::new(store)
}

// =============================================================
// MemoryUserIdStore
// =============================================================

#[test]
fn memory_store_round_trips_the_identifier() {
    let store = MemoryUserIdStore::default();
    assert!(store.get().is_none());

    store.set("u1");
    assert_eq!(store.get().as_deref(), Some("u1"));

    store.remove();
    assert!(store.get().is_none());
}

// =============================================================
// Identity
// =============================================================

#[test]
fn new_primes_the_cached_user_from_the_store() {
    let identity = Identity::new(store_with(Some("u9")));
    assert_eq!(identity.current_user(), Some(User { id: "u9".to_owned() }));
}

#[test]
fn absent_persisted_id_means_no_user() {
    let identity = Identity::new(store_with(None));
    assert!(identity.current_user().is_none());
}

#[test]
fn login_persists_and_caches_the_user() {
    let identity = Identity::new(store_with(None));
    let user = identity.login("u1");
    assert_eq!(user.id, "u1");
    assert_eq!(identity.current_user(), Some(user));
}

#[test]
fn logout_clears_the_persisted_and_cached_identity() {
    let identity = Identity::new(store_with(Some("u1")));
    identity.logout();
    assert!(identity.current_user().is_none());
    assert!(identity.required_user().is_err());
}

#[test]
fn required_user_fails_with_a_precondition_error() {
    let identity = Identity::new(store_with(None));
    let err = identity.required_user().expect_err("no user logged in");
    assert!(matches!(err, crate::error::Error::Precondition(_)));
}

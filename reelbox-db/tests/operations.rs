use reelbox_db::*;

fn store_with_user(name: &str) -> (Store, UserId) {
    let store = Store::open_memory().unwrap();
    let id = store.create_user(name).unwrap();
    (store, id)
}

#[test]
fn create_user_returns_distinct_ids() {
    let store = Store::open_memory().unwrap();
    let a = store.create_user("alice").unwrap();
    let b = store.create_user("bob").unwrap();
    assert_ne!(a, b);
}

#[test]
fn duplicate_user_is_rejected() {
    let store = Store::open_memory().unwrap();
    store.create_user("alice").unwrap();
    let err = store.create_user("alice").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUser(ref name) if name == "alice"));
    assert_eq!(store.list_users().unwrap().len(), 1);
}

#[test]
fn add_movie_round_trip() {
    let (store, user) = store_with_user("alice");
    store.add_movie(user, "Inception", 2010, 8.8).unwrap();

    let movies = store.list_movies(user).unwrap();
    assert_eq!(
        movies.get("Inception"),
        Some(&MovieEntry {
            year: 2010,
            rating: 8.8
        })
    );
}

#[test]
fn duplicate_movie_for_same_user_fails() {
    let (store, user) = store_with_user("alice");
    store.add_movie(user, "Avatar", 2009, 7.9).unwrap();

    let err = store.add_movie(user, "Avatar", 2009, 5.0).unwrap_err();
    assert!(matches!(
        err,
        StoreError::DuplicateMovie { user_id, ref title } if user_id == user && title == "Avatar"
    ));
    // The original row is untouched
    assert_eq!(store.list_movies(user).unwrap()["Avatar"].rating, 7.9);
}

#[test]
fn titles_are_case_sensitive() {
    let (store, user) = store_with_user("alice");
    store.add_movie(user, "Avatar", 2009, 7.9).unwrap();
    store.add_movie(user, "avatar", 2009, 7.0).unwrap();
    assert_eq!(store.list_movies(user).unwrap().len(), 2);
}

#[test]
fn same_title_for_different_users_is_independent() {
    let store = Store::open_memory().unwrap();
    let u1 = store.create_user("alice").unwrap();
    let u2 = store.create_user("bob").unwrap();

    store.add_movie(u1, "Avatar", 2009, 7.9).unwrap();
    store.add_movie(u2, "Avatar", 2009, 8.5).unwrap();

    assert_eq!(store.list_movies(u1).unwrap()["Avatar"].rating, 7.9);
    assert_eq!(store.list_movies(u2).unwrap()["Avatar"].rating, 8.5);

    assert!(store.update_movie(u1, "Avatar", 6.0).unwrap());
    assert_eq!(store.list_movies(u2).unwrap()["Avatar"].rating, 8.5);

    assert!(store.delete_movie(u1, "Avatar").unwrap());
    assert!(store.list_movies(u1).unwrap().is_empty());
    assert_eq!(store.list_movies(u2).unwrap().len(), 1);
}

#[test]
fn add_movie_for_unknown_user_is_an_error() {
    let store = Store::open_memory().unwrap();
    let err = store.add_movie(42, "Heat", 1995, 8.3).unwrap_err();
    assert!(matches!(err, StoreError::UnknownUser(42)));
}

#[test]
fn delete_missing_movie_is_a_noop() {
    let (store, user) = store_with_user("alice");
    store.add_movie(user, "Jumanji", 1995, 6.5).unwrap();

    assert!(!store.delete_movie(user, "Avatar").unwrap());
    assert_eq!(store.list_movies(user).unwrap().len(), 1);
}

#[test]
fn update_changes_only_rating() {
    let (store, user) = store_with_user("alice");
    store.add_movie(user, "Jumanji", 1995, 6.5).unwrap();

    assert!(store.update_movie(user, "Jumanji", 7.0).unwrap());
    let movies = store.list_movies(user).unwrap();
    assert_eq!(
        movies["Jumanji"],
        MovieEntry {
            year: 1995,
            rating: 7.0
        }
    );
}

#[test]
fn update_missing_movie_returns_false() {
    let (store, user) = store_with_user("alice");
    assert!(!store.update_movie(user, "Jumanji", 7.0).unwrap());
    assert!(store.list_movies(user).unwrap().is_empty());
}

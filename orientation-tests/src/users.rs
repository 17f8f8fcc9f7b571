use orientation::{Arr, Maybe, Stream};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub password: Option<String>,
}

impl User {
    /// Ids divisible by 3 or 5 get their id as a password, everyone else gets none.
    pub fn from_id(id: u64) -> Self {
        User {
            username: format!("username{id}"),
            password: (id % 5 == 0 || id % 3 == 0).then(|| id.to_string()),
        }
    }
}

/// Users with ids in `[100, 1000)` that have a password, drawn from an infinite id source.
pub fn users_with_passwords() -> Stream<User> {
    Stream::nats()
        .drop_while(|id| *id < 100)
        .take_while(|id| *id < 1000)
        .fmap(User::from_id)
        .filter(|user| user.password.is_some())
}

pub fn first_with_prefix(users: &Stream<User>, prefix: &str) -> Maybe<User> {
    users.find(|user| user.username.starts_with(prefix))
}

pub fn find_username5() -> Arr<User> {
    first_with_prefix(&users_with_passwords(), "username5").to_arr()
}

#[test]
fn infinite_stream() {
    let expected = User {
        username: "username500".to_string(),
        password: Some("500".to_string()),
    };

    assert_eq!(find_username5(), Arr::of(expected));
}

#[test]
fn same_stream_answers_twice() {
    let users = users_with_passwords();

    assert_eq!(
        first_with_prefix(&users, "username7"),
        first_with_prefix(&users, "username7")
    );
    assert_eq!(users.foldl(|n, _| n + 1, 0), users.to_arr().len());
}

#[test]
fn bounded_window_is_finite() {
    let users = users_with_passwords().to_arr();

    // 900 ids, of which those divisible by 3 or 5 survive
    let expected = (100..1000u64).filter(|id| id % 3 == 0 || id % 5 == 0).count();
    assert_eq!(users.len(), expected);
    assert_eq!(users.head().fmap(|u| u.username), Maybe::just("username100".to_string()));
}

#[test]
fn no_match_in_a_bounded_stream_is_nothing() {
    assert_eq!(first_with_prefix(&users_with_passwords(), "admin"), Maybe::nothing());
}

#[test]
fn found_user_renders_as_json() {
    let found = first_with_prefix(&users_with_passwords(), "username5");

    assert_eq!(
        found.to_string(),
        r#"Just({"username":"username500","password":"500"})"#
    );
}

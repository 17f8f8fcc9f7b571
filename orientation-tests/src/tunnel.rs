use orientation::{Arr, Maybe};
#[cfg(test)]
use proptest::prelude::*;
use serde::Deserialize;
use serde_json::{json, Value};

pub const NO_CANDY: &str = "No Candy found";

/// Nested tunnels where any level may be missing or explicitly null.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Tunnel {
    pub a: Option<LevelA>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelA {
    pub term: Option<String>,
    pub b: Option<LevelB>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelB {
    pub term: Option<String>,
    pub c: Option<LevelC>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelC {
    pub term: Option<String>,
    pub d: Option<LevelD>,
    pub dd: Option<Terminal>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelD {
    pub e: Option<LevelE>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelE {
    pub f: Option<Terminal>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Terminal {
    pub term: Option<String>,
}

pub fn tunnels_with_candy() -> Vec<Value> {
    vec![
        json!({
            "a": {"b": {"c": {
                "d": {"e": {"f": {"term": "Candy"}}},
                "dd": {"term": "This Candy should not be found..."}
            }}}
        }),
        json!({"a": {"term": "Candy"}}),
        json!({
            "a": {"b": {"c": {
                "d": {"e": {}},
                "dd": {"term": "Candy"}
            }}}
        }),
    ]
}

pub fn tunnels_without_candy() -> Vec<Value> {
    vec![
        Value::Null,
        json!({"a": {"b": {"c": {"d": null}}}}),
        json!({}),
        json!({"a": {"b": {}}}),
    ]
}

/// Every place candy may hide, deepest first, keeping only the ones that are there.
pub fn candy_hits(tunnel: Option<Tunnel>) -> Arr<String> {
    let root = || Maybe::from_nullable(tunnel.clone());
    Maybe::cat_maybes(Arr::from_vec(vec![
        root()
            .pick(|t| t.a)
            .pick(|a| a.b)
            .pick(|b| b.c)
            .pick(|c| c.d)
            .pick(|d| d.e)
            .pick(|e| e.f)
            .pick(|f| f.term),
        root()
            .pick(|t| t.a)
            .pick(|a| a.b)
            .pick(|b| b.c)
            .pick(|c| c.dd)
            .pick(|dd| dd.term),
        root().pick(|t| t.a).pick(|a| a.term),
    ]))
}

pub fn find_candy(tunnel: Option<Tunnel>) -> String {
    candy_hits(tunnel).head().or_else(NO_CANDY.to_string())
}

/// The same search over untyped json, projecting fields by name.
pub fn find_candy_json(tunnel: &Value) -> Value {
    let root = || Maybe::just(tunnel.clone());
    let paths: [&[&str]; 3] = [
        &["a", "b", "c", "d", "e", "f", "term"],
        &["a", "b", "c", "dd", "term"],
        &["a", "term"],
    ];
    let hits = Maybe::map_maybes(
        |path: &[&str]| path.iter().fold(root(), |node, key| node.field(key)),
        Arr::from_vec(paths.to_vec()),
    );
    hits.head().or_else(json!(NO_CANDY))
}

/// A chain of `depth` nested `{"next": …}` objects ending in `{"term": "Candy"}`,
/// broken at level `cut` (if any) by a null or a missing key.
pub fn nested(depth: usize, cut: Option<usize>, null_cut: bool) -> Value {
    (0..depth).rev().fold(json!({"term": "Candy"}), |inner, level| {
        if cut == Some(level) {
            if null_cut {
                json!({ "next": null })
            } else {
                json!({})
            }
        } else {
            json!({ "next": inner })
        }
    })
}

pub fn dig(root: Value, depth: usize) -> Maybe<Value> {
    (0..depth)
        .fold(Maybe::just(root), |node, _| node.field("next"))
        .field("term")
}

#[cfg(test)]
fn parse(v: Value) -> Option<Tunnel> {
    serde_json::from_value(v).expect("fixture is a valid tunnel")
}

#[test]
fn candies_can_be_found() {
    for tunnel in tunnels_with_candy() {
        assert_eq!(find_candy_json(&tunnel), json!("Candy"));
        assert_eq!(find_candy(parse(tunnel)), "Candy");
    }
}

#[test]
fn nulls_and_missing_fields_are_abstracted_over() {
    for tunnel in tunnels_without_candy() {
        assert_eq!(find_candy_json(&tunnel), json!(NO_CANDY));
        assert_eq!(find_candy(parse(tunnel)), NO_CANDY);
    }
}

#[test]
fn deepest_hit_wins() {
    let tunnel = parse(tunnels_with_candy().remove(0));
    let hits = candy_hits(tunnel);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits.head(), Maybe::just("Candy".to_string()));
}

#[test]
fn renders_like_json() {
    let user = Maybe::from_nullable(Some(json!({"user": "asd"})));
    assert_eq!(format!("{user}"), r#"Just({"user":"asd"})"#);
}

// build arbitrarily deep tunnels, cut them somewhere (or not), and dig for the candy
#[cfg(test)]
proptest! {
    #[test]
    fn picks_short_circuit_at_any_depth(
        depth in 0usize..24,
        cut_at in proptest::option::of(0usize..24),
        null_cut in any::<bool>(),
    ) {
        let cut = cut_at.filter(|c| *c < depth);
        let found = dig(nested(depth, cut, null_cut), depth);

        if cut.is_some() {
            prop_assert_eq!(found, Maybe::nothing());
        } else {
            prop_assert_eq!(found, Maybe::just(json!("Candy")));
        }
    }
}

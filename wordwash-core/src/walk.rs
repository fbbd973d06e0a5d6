//! walk.rs - Recursive traversal of nested string containers.
//!
//! The walker descends arbitrarily nested `serde_json::Value` containers
//! (objects and arrays) depth-first and invokes a visitor on every leaf
//! string, together with the key or index of that leaf within its immediate
//! parent. Values are owned trees, so a container can never reappear on its
//! own ancestor path and traversal always terminates; `max_depth` remains as
//! an explicit bound for callers that want one.

use serde_json::Value;

/// The key of a visited leaf within its immediate parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// An object member key.
    Key(&'a str),
    /// An array element index.
    Index(usize),
}

/// Visits every leaf string of `value` depth-first.
///
/// `value` is expected to be a container; plain strings and other primitives
/// are the caller's responsibility and are not visited. With
/// `max_depth: Some(n)`, containers nested more than `n` levels below the
/// root are not entered, and their leaves are silently not visited.
pub fn walk_strings<'a, F>(value: &'a Value, max_depth: Option<usize>, visit: &mut F)
where
    F: FnMut(&'a str, Segment<'a>),
{
    walk_level(value, 0, max_depth, visit);
}

fn walk_level<'a, F>(value: &'a Value, depth: usize, max_depth: Option<usize>, visit: &mut F)
where
    F: FnMut(&'a str, Segment<'a>),
{
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                walk_entry(member, Segment::Key(key), depth, max_depth, visit);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk_entry(item, Segment::Index(index), depth, max_depth, visit);
            }
        }
        _ => {}
    }
}

fn walk_entry<'a, F>(
    entry: &'a Value,
    segment: Segment<'a>,
    depth: usize,
    max_depth: Option<usize>,
    visit: &mut F,
) where
    F: FnMut(&'a str, Segment<'a>),
{
    match entry {
        Value::String(leaf) => visit(leaf, segment),
        Value::Object(_) | Value::Array(_) => {
            if max_depth.is_none_or(|limit| depth < limit) {
                walk_level(entry, depth + 1, max_depth, visit);
            }
        }
        _ => {}
    }
}

/// The mutating twin of [`walk_strings`]: the visitor receives each leaf
/// string by `&mut` and may rewrite it in place.
pub fn walk_strings_mut<F>(value: &mut Value, max_depth: Option<usize>, visit: &mut F)
where
    F: FnMut(&mut String, Segment<'_>),
{
    walk_level_mut(value, 0, max_depth, visit);
}

fn walk_level_mut<F>(value: &mut Value, depth: usize, max_depth: Option<usize>, visit: &mut F)
where
    F: FnMut(&mut String, Segment<'_>),
{
    match value {
        Value::Object(members) => {
            for (key, member) in members.iter_mut() {
                walk_entry_mut(member, Segment::Key(key), depth, max_depth, visit);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                walk_entry_mut(item, Segment::Index(index), depth, max_depth, visit);
            }
        }
        _ => {}
    }
}

fn walk_entry_mut<F>(
    entry: &mut Value,
    segment: Segment<'_>,
    depth: usize,
    max_depth: Option<usize>,
    visit: &mut F,
) where
    F: FnMut(&mut String, Segment<'_>),
{
    match entry {
        Value::String(leaf) => visit(leaf, segment),
        Value::Object(_) | Value::Array(_) => {
            if max_depth.is_none_or(|limit| depth < limit) {
                walk_level_mut(entry, depth + 1, max_depth, visit);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect(value: &Value, max_depth: Option<usize>) -> Vec<String> {
        let mut leaves = Vec::new();
        walk_strings(value, max_depth, &mut |leaf, _| leaves.push(leaf.to_string()));
        leaves
    }

    #[test]
    fn visits_object_and_array_leaves_in_traversal_order() {
        let value = json!({
            "foo": "one",
            "bar": { "test": "two", "bar": "three" },
            "baz": ["four", ["five"], { "deep": "six" }]
        });
        assert_eq!(collect(&value, None), vec!["one", "two", "three", "four", "five", "six"]);
    }

    #[test]
    fn non_string_primitives_are_not_visited() {
        let value = json!({ "a": 1, "b": true, "c": null, "d": "text" });
        assert_eq!(collect(&value, None), vec!["text"]);
    }

    #[test]
    fn plain_string_root_is_not_a_container() {
        assert!(collect(&json!("just a string"), None).is_empty());
    }

    #[test]
    fn max_depth_stops_descent() {
        let value = json!({ "top": "a", "nest": { "mid": "b", "nest": { "deep": "c" } } });
        assert_eq!(collect(&value, Some(0)), vec!["a"]);
        assert_eq!(collect(&value, Some(1)), vec!["a", "b"]);
        assert_eq!(collect(&value, Some(2)), vec!["a", "b", "c"]);
    }

    #[test]
    fn segments_name_the_immediate_parent_key() {
        let value = json!({ "outer": { "inner": "x" }, "list": ["y"] });
        let mut seen = Vec::new();
        walk_strings(&value, None, &mut |_, segment| {
            seen.push(match segment {
                Segment::Key(key) => key.to_string(),
                Segment::Index(index) => index.to_string(),
            });
        });
        assert_eq!(seen, vec!["inner", "0"]);
    }

    #[test]
    fn mut_walker_rewrites_leaves_in_place() {
        let mut value = json!({ "a": "hello", "b": ["world"] });
        walk_strings_mut(&mut value, None, &mut |leaf, _| {
            *leaf = leaf.to_uppercase();
        });
        assert_eq!(value, json!({ "a": "HELLO", "b": ["WORLD"] }));
    }
}

use crate::KeyPath;

/// Named-child access for hierarchical document nodes.
///
/// Implemented on cheap reference-like cursors into a document (a `&Node` or
/// a wrapper around one), so document crates can implement it for trees built
/// from foreign types.
pub trait TreeNode: Copy {
    /// The child with the given name, if it can itself contain named children.
    fn child_container(self, name: &str) -> Option<Self>;

    /// The child with the given name, container or terminal.
    fn child_value(self, name: &str) -> Option<Self>;
}

/// The outcome of walking a key path through a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathLookup<N> {
    /// The path resolved to a value.
    Found(N),
    /// Every container on the path resolved, but the terminal field is absent.
    MissingField,
    /// Descent stopped early with unconsumed segments left over, or the path
    /// named a container rather than a field.
    MissingPath,
}

impl<N> PathLookup<N> {
    /// The found node, if any.
    pub fn found(self) -> Option<N> {
        match self {
            PathLookup::Found(node) => Some(node),
            _ => None,
        }
    }
}

/// Walk a key path through a document, starting at `root`.
///
/// Each segment descends into a child container of that name while one
/// exists. The first segment without a matching container is taken as the
/// terminal field name; the walk succeeds only if no further segments remain
/// and the container reached holds a child of that name.
pub fn lookup<N: TreeNode>(root: N, path: &KeyPath) -> PathLookup<N> {
    let mut node = root;
    let mut segments = path.segments().iter();
    let mut field: Option<&str> = None;
    for segment in segments.by_ref() {
        match node.child_container(segment) {
            Some(child) => node = child,
            None => {
                field = Some(segment.as_str());
                break;
            }
        }
    }
    match field {
        // Every segment named a container; there is no terminal field.
        None => PathLookup::MissingPath,
        Some(name) => {
            if segments.next().is_some() {
                // Failed to descend with segments still unconsumed.
                return PathLookup::MissingPath;
            }
            match node.child_value(name) {
                Some(value) => PathLookup::Found(value),
                None => PathLookup::MissingField,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    enum Node {
        Tree(HashMap<String, Node>),
        Leaf(i64),
    }

    impl TreeNode for &Node {
        fn child_container(self, name: &str) -> Option<Self> {
            match self.child_value(name) {
                Some(child @ Node::Tree(_)) => Some(child),
                _ => None,
            }
        }

        fn child_value(self, name: &str) -> Option<Self> {
            match self {
                Node::Tree(children) => children.get(name),
                Node::Leaf(_) => None,
            }
        }
    }

    fn tree(entries: Vec<(&str, Node)>) -> Node {
        Node::Tree(
            entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        )
    }

    fn sample() -> Node {
        tree(vec![(
            "a",
            tree(vec![("b", tree(vec![("c", Node::Leaf(42))]))]),
        )])
    }

    fn leaf(result: PathLookup<&Node>) -> Option<i64> {
        match result.found() {
            Some(Node::Leaf(n)) => Some(*n),
            _ => None,
        }
    }

    #[test]
    fn nested_field_is_found() {
        let root = sample();
        let path = KeyPath::parse("a.b.c").unwrap();
        assert_eq!(leaf(lookup(&root, &path)), Some(42));
    }

    #[test]
    fn missing_container_is_a_missing_path() {
        let root = sample();
        let path = KeyPath::parse("a.x.c").unwrap();
        assert!(matches!(lookup(&root, &path), PathLookup::MissingPath));
    }

    #[test]
    fn missing_terminal_field() {
        let root = sample();
        let path = KeyPath::parse("a.b.d").unwrap();
        assert!(matches!(lookup(&root, &path), PathLookup::MissingField));
    }

    #[test]
    fn path_naming_a_container_is_a_missing_path() {
        let root = sample();
        let path = KeyPath::parse("a.b").unwrap();
        assert!(matches!(lookup(&root, &path), PathLookup::MissingPath));
    }

    #[test]
    fn top_level_field() {
        let root = tree(vec![("x", Node::Leaf(7))]);
        let path = KeyPath::parse("x").unwrap();
        assert_eq!(leaf(lookup(&root, &path)), Some(7));
    }
}

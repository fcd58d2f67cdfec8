use std::collections::HashMap;

use crate::pattern::DotPattern;

/// One trie node. `word` is `Some` exactly at terminals and stores the
/// original casing of the inserted word.
#[derive(Default)]
struct Node {
    children: HashMap<DotPattern, Node>,
    word: Option<String>,
}

/// Prefix tree over dot-pattern sequences for one language.
///
/// Words sharing a prefix of patterns share nodes along that prefix; a path
/// from the root to a terminal corresponds 1:1 with a pattern sequence.
#[derive(Default)]
pub struct PatternTrie {
    root: Node,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `path` from the root, creating nodes as needed, and store `word`
    /// at the final node. Returns the word previously stored there, if any
    /// (identical-path collision; the newer word wins).
    pub fn insert(&mut self, path: &[DotPattern], word: &str) -> Option<String> {
        let mut node = &mut self.root;
        for pattern in path {
            node = node.children.entry(pattern.clone()).or_default();
        }
        node.word.replace(word.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && self.root.word.is_none()
    }

    /// Number of terminal nodes.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        self.for_each_terminal(|_, _| count += 1);
        count
    }

    /// Visit every terminal depth-first, passing the full path and word.
    ///
    /// The path buffer is pushed and popped around each child visit, so
    /// sibling subtrees never observe each other's suffixes.
    pub fn for_each_terminal<F>(&self, mut visit: F)
    where
        F: FnMut(&[DotPattern], &str),
    {
        let mut path = Vec::new();
        walk(&self.root, &mut path, &mut visit);
    }
}

fn walk<F>(node: &Node, path: &mut Vec<DotPattern>, visit: &mut F)
where
    F: FnMut(&[DotPattern], &str),
{
    if let Some(word) = &node.word {
        visit(path, word);
    }
    for (pattern, child) in &node.children {
        path.push(pattern.clone());
        walk(child, path, visit);
        path.pop();
    }
}

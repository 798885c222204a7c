//! Persistent rank-annotated binary trie.
//!
//! Each node records how many distinct traces pass through it (`size`), the
//! length of the suffixes stored below it (`height`), and whether the all-0
//! and all-1 suffixes of that length are present. Nodes are immutable once
//! the trie is frozen and are shared through `Rc`:
//!
//! - `skip_to` walks a path and hands out the subtree it lands on, without
//!   copying anything.
//! - `keep_top` rebuilds only the nodes whose counts change and reuses every
//!   untouched subtree, so the collection it was derived from stays valid.
//!
//! Duplicates are dropped on insertion; a trie's `size` counts distinct
//! traces.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::traits::{Symbol, TraceCollection};

#[derive(Clone, Debug, Default)]
struct Node {
    children: [Option<Rc<Node>>; 2],
    height: usize,
    size: usize,
    contains_zeros: bool,
    contains_ones: bool,
}

impl Node {
    fn empty(height: usize) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    fn child_size(&self, symbol: usize) -> usize {
        self.children[symbol].as_ref().map_or(0, |c| c.size)
    }
}

/// Whether `child` ends an all-`symbol` suffix, i.e. is a leaf or carries
/// the matching flag itself.
fn continues_constant_run(child: &Option<Rc<Node>>, symbol: usize) -> bool {
    child.as_ref().is_some_and(|c| {
        c.height == 0
            || if symbol == 0 {
                c.contains_zeros
            } else {
                c.contains_ones
            }
    })
}

/// Drop `k` traces below `node`, preferring to discard whole children.
///
/// Requires `k < node.size`. Only nodes on rewritten paths are allocated.
fn shrink(node: &Rc<Node>, k: usize) -> Rc<Node> {
    if k == 0 {
        return Rc::clone(node);
    }
    let children = match (&node.children[0], &node.children[1]) {
        (Some(zero), one) if zero.size <= k => {
            [None, one.as_ref().map(|o| shrink(o, k - zero.size))]
        }
        (zero, Some(one)) if one.size <= k => {
            [zero.as_ref().map(|z| shrink(z, k - one.size)), None]
        }
        (Some(zero), one) => [Some(shrink(zero, k)), one.clone()],
        (None, one) => [None, one.as_ref().map(|o| shrink(o, k))],
    };
    let contains_zeros = continues_constant_run(&children[0], 0);
    let contains_ones = continues_constant_run(&children[1], 1);
    Rc::new(Node {
        children,
        height: node.height,
        size: node.size - k,
        contains_zeros,
        contains_ones,
    })
}

/// Frozen trie; cheap to clone, every clone shares the same nodes.
#[derive(Clone, Debug)]
pub struct RankedTrie {
    root: Rc<Node>,
}

impl RankedTrie {
    /// Build a trie from binary traces of equal length, ignoring duplicates.
    pub fn from_traces<T: AsRef<[Symbol]>>(traces: &[T]) -> Result<Self> {
        let mut builder = RankedTrieBuilder::new();
        for trace in traces {
            builder.insert(trace.as_ref())?;
        }
        Ok(builder.build())
    }

    fn empty(height: usize) -> Self {
        Self {
            root: Rc::new(Node::empty(height)),
        }
    }

    /// Whether `trace` is stored in the trie.
    pub fn contains(&self, trace: &[Symbol]) -> bool {
        contains_path(&self.root, trace)
    }

    /// Subtree below the root's `symbol` child, sharing its nodes.
    pub fn child(&self, symbol: Symbol) -> Option<Self> {
        self.root
            .children
            .get(symbol as usize)?
            .as_ref()
            .map(|c| Self { root: Rc::clone(c) })
    }

    /// True when both tries are the very same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
    }

    /// The all-0 trace of the current height is present.
    pub fn contains_zeros(&self) -> bool {
        self.root.contains_zeros
    }

    /// The all-1 trace of the current height is present.
    pub fn contains_ones(&self) -> bool {
        self.root.contains_ones
    }

    /// All stored traces in lexicographic order.
    pub fn traces(&self) -> Vec<Vec<Symbol>> {
        let mut out = Vec::with_capacity(self.root.size);
        let mut path = Vec::with_capacity(self.root.height);
        collect_paths(&self.root, &mut path, &mut out);
        out
    }

    /// Node reached by taking `position - 1` steps through the opposite
    /// symbol and one step through `value`.
    fn descend(&self, value: Symbol, position: usize) -> Option<&Rc<Node>> {
        let value = value as usize;
        if value > 1 || position == 0 {
            return None;
        }
        let mut node = &self.root;
        for _ in 1..position {
            node = node.children[1 - value].as_ref()?;
        }
        node.children[value].as_ref()
    }
}

fn contains_path(node: &Node, trace: &[Symbol]) -> bool {
    match trace.split_first() {
        None => node.size > 0,
        Some((&first, rest)) => node
            .children
            .get(first as usize)
            .and_then(|c| c.as_ref())
            .is_some_and(|c| contains_path(c, rest)),
    }
}

fn collect_paths(node: &Node, path: &mut Vec<Symbol>, out: &mut Vec<Vec<Symbol>>) {
    if node.height == 0 {
        if node.size > 0 {
            out.push(path.clone());
        }
        return;
    }
    for (symbol, child) in node.children.iter().enumerate() {
        if let Some(child) = child {
            path.push(symbol as Symbol);
            collect_paths(child, path, out);
            path.pop();
        }
    }
}

impl TraceCollection for RankedTrie {
    fn size(&self) -> usize {
        self.root.size
    }

    fn height(&self) -> usize {
        self.root.height
    }

    fn alphabet_size(&self) -> usize {
        2
    }

    fn skip_to(&self, value: Symbol, position: usize) -> Self {
        match self.descend(value, position) {
            Some(node) => Self {
                root: Rc::clone(node),
            },
            None => Self::empty(self.height().saturating_sub(position)),
        }
    }

    fn count_after_skipping(&self, value: Symbol, position: usize) -> usize {
        self.descend(value, position).map_or(0, |n| n.size)
    }

    fn keep_top(&self, n: usize) -> Self {
        let size = self.size();
        if n >= size {
            return self.clone();
        }
        if n == 0 {
            return Self::empty(self.height());
        }
        Self {
            root: shrink(&self.root, size - n),
        }
    }

    fn unique_member(&self) -> Result<Vec<Symbol>> {
        let invalid = || Error::InvalidUniqueExtraction {
            size: self.root.size,
        };
        if self.root.size != 1 {
            return Err(invalid());
        }
        let mut path = Vec::with_capacity(self.root.height);
        let mut node = &self.root;
        while node.height > 0 {
            let (symbol, next) = match &node.children {
                [Some(zero), _] => (0, zero),
                [None, Some(one)] => (1, one),
                [None, None] => return Err(invalid()),
            };
            path.push(symbol);
            node = next;
        }
        Ok(path)
    }

    fn first_occurrence_order(&self) -> (usize, usize) {
        let root = &self.root;
        (
            root.child_size(0)
                .saturating_sub(usize::from(root.contains_zeros)),
            root.child_size(1)
                .saturating_sub(usize::from(root.contains_ones)),
        )
    }
}

/// Append-only builder; the only place trie nodes are ever mutated.
#[derive(Debug, Default)]
pub struct RankedTrieBuilder {
    root: Node,
    trace_len: Option<usize>,
}

impl RankedTrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a binary trace. Returns `false` if it was already present.
    ///
    /// Fails with [`Error::MalformedInput`] on non-binary symbols or a length
    /// differing from earlier traces.
    pub fn insert(&mut self, trace: &[Symbol]) -> Result<bool> {
        if let Some(&bad) = trace.iter().find(|&&s| s > 1) {
            return Err(Error::malformed(format!("non-binary symbol {bad} in trace")));
        }
        match self.trace_len {
            Some(len) if len != trace.len() => {
                return Err(Error::malformed(format!(
                    "trace has length {}, expected {len}",
                    trace.len()
                )));
            }
            _ => self.trace_len = Some(trace.len()),
        }
        if contains_path(&self.root, trace) {
            return Ok(false);
        }
        insert_new(&mut self.root, trace);
        Ok(true)
    }

    /// Number of distinct traces inserted so far.
    pub fn len(&self) -> usize {
        self.root.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.size == 0
    }

    pub fn build(self) -> RankedTrie {
        let mut root = self.root;
        root.height = self.trace_len.unwrap_or(0);
        RankedTrie {
            root: Rc::new(root),
        }
    }
}

fn insert_new(node: &mut Node, trace: &[Symbol]) {
    node.size += 1;
    let Some((&first, rest)) = trace.split_first() else {
        return;
    };
    node.height = trace.len();
    if trace.iter().all(|&s| s == 0) {
        node.contains_zeros = true;
    } else if trace.iter().all(|&s| s == 1) {
        node.contains_ones = true;
    }
    let child = node.children[first as usize].get_or_insert_with(|| Rc::new(Node::default()));
    // Nothing outside the builder holds these nodes yet, so this never copies.
    insert_new(Rc::make_mut(child), rest);
}

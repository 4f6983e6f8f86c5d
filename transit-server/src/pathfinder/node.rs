//! Per-search working state: the node arena and the open frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cost triple of a search node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Cost {
    /// Accumulated cost from the start.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
    /// `g + h`.
    pub f: f64,
}

impl Cost {
    fn new(g: f64, h: f64) -> Self {
        Self { g, h, f: g + h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Status {
    Unseen,
    Open,
    Closed,
}

/// One arena slot per grid cell. The slot index is the cell's linear index,
/// so `parent` links form a tree rooted at the start without owning pointers.
#[derive(Debug, Clone, Copy)]
pub(super) struct SearchNode {
    pub parent: Option<usize>,
    pub cost: Cost,
    pub status: Status,
}

impl SearchNode {
    const UNSEEN: Self = Self {
        parent: None,
        cost: Cost {
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
        },
        status: Status::Unseen,
    };
}

/// Arena allocation failed.
#[derive(Debug)]
pub(super) struct OutOfMemory;

/// Arena of search nodes plus the frontier ordered by `(f, h, insertion)`.
pub(super) struct SearchState {
    pub nodes: Vec<SearchNode>,
    open: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl SearchState {
    /// Allocate working memory for a grid with `cells` cells.
    ///
    /// `frontier_hint` pre-sizes the frontier; it grows on demand.
    pub fn try_new(cells: usize, frontier_hint: usize) -> Result<Self, OutOfMemory> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(cells).map_err(|_| OutOfMemory)?;
        nodes.resize(cells, SearchNode::UNSEEN);

        let mut open = BinaryHeap::new();
        open.try_reserve(frontier_hint).map_err(|_| OutOfMemory)?;

        Ok(Self {
            nodes,
            open,
            next_seq: 0,
        })
    }

    /// Open `idx` with the given costs, or lower its costs if it is already
    /// open and `g` is strictly better. Returns whether the node changed.
    ///
    /// Closed nodes are never reopened. Frontier growth is fallible, and a
    /// failed reservation leaves the node untouched.
    pub fn relax(
        &mut self,
        idx: usize,
        parent: Option<usize>,
        g: f64,
        h: f64,
    ) -> Result<bool, OutOfMemory> {
        let node = &self.nodes[idx];
        let h = match node.status {
            Status::Closed => return Ok(false),
            Status::Open if g >= node.cost.g => return Ok(false),
            Status::Open => node.cost.h,
            Status::Unseen => h,
        };
        self.open.try_reserve(1).map_err(|_| OutOfMemory)?;

        let node = &mut self.nodes[idx];
        node.cost = Cost::new(g, h);
        node.parent = parent;
        node.status = Status::Open;

        let cost = node.cost;
        self.open.push(OpenEntry {
            f: cost.f,
            h: cost.h,
            g: cost.g,
            seq: self.next_seq,
            idx,
        });
        self.next_seq += 1;
        Ok(true)
    }

    /// Remove and close the best open node.
    ///
    /// Entries superseded by a later relaxation are skipped.
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let node = &mut self.nodes[entry.idx];
            if node.status != Status::Open || entry.g > node.cost.g {
                continue;
            }
            node.status = Status::Closed;
            return Some(entry.idx);
        }
        None
    }

    /// Walk backpointers from `goal` to the root. Returned goal-first.
    pub fn trace_back(&self, goal: usize) -> Vec<usize> {
        let mut chain = vec![goal];
        let mut current = goal;
        while let Some(parent) = self.nodes[current].parent {
            chain.push(parent);
            current = parent;
        }
        chain
    }
}

/// Frontier entry. Orders so that `BinaryHeap` (a max-heap) pops the
/// lowest `f`, then the lowest `h`, then the earliest insertion.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    h: f64,
    g: f64,
    seq: u64,
    idx: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

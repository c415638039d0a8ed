//! `SpatialTreap<P>`: storage, rotations and queries.
//!
//! # Invariants
//!
//! * **BST on x.** Every key in a left subtree is `≤` the node's x, every key
//!   in a right subtree is `≥` it.  Inserts send ties left.
//! * **Max-heap on priority.** No child outranks its parent.
//! * **Boxes.** `subtree_box` equals `own_box ∪ left.subtree_box ∪
//!   right.subtree_box`.  Any rotation refreshes the demoted node first and
//!   the promoted node second.
//!
//! Promotions can make the tree arbitrarily deep, so nothing here recurses
//! per level.  Structural operations detach the nodes on their path into a
//! `Vec`, restructure the bottom, then hang the path back on top while
//! refreshing boxes.  Queries and teardown walk with an explicit stack.
//!
//! # Hits and promotion
//!
//! A query collects its results first and only then counts one hit per
//! result.  When a node's hit count reaches `hit_threshold` the count resets
//! and the node's priority is multiplied by `promotion_rate` (clamped to
//! `max_priority`, never lowered), followed by a full re-heapify pass.

use std::collections::HashSet;
use std::ops::ControlFlow;

use cg_core::{BoundingBox, EntityId, Point, PriorityRng, TreapConfig};

use crate::entity::{EntityKind, Hit, Identified, NodeView};
use crate::{SpatialError, SpatialResult};

// ── Nodes ─────────────────────────────────────────────────────────────────────

type Link<P> = Option<Box<Node<P>>>;

pub(crate) struct Node<P> {
    pub(crate) id:          EntityId,
    pub(crate) x:           f64,
    pub(crate) y:           f64,
    pub(crate) priority:    u32,
    pub(crate) hits:        u32,
    pub(crate) kind:        EntityKind,
    pub(crate) payload:     P,
    pub(crate) own_box:     BoundingBox,
    pub(crate) subtree_box: BoundingBox,
    pub(crate) left:        Link<P>,
    pub(crate) right:       Link<P>,
}

impl<P> Node<P> {
    /// Recompute `subtree_box` from the node's own box and its children.
    #[inline]
    fn refresh(&mut self) {
        let mut bb = self.own_box;
        if let Some(l) = &self.left {
            bb = bb.union(&l.subtree_box);
        }
        if let Some(r) = &self.right {
            bb = bb.union(&r.subtree_box);
        }
        self.subtree_box = bb;
    }

    fn view(&self) -> NodeView<'_, P> {
        NodeView {
            id:          self.id,
            kind:        self.kind,
            location:    Point::new(self.x, self.y),
            priority:    self.priority,
            hits:        self.hits,
            own_box:     self.own_box,
            subtree_box: self.subtree_box,
            payload:     &self.payload,
        }
    }

    fn hit(&self) -> Hit {
        Hit { id: self.id, kind: self.kind, location: Point::new(self.x, self.y) }
    }
}

/// Left child becomes the subtree root.
fn rotate_right<P>(mut node: Box<Node<P>>) -> Box<Node<P>> {
    let Some(mut pivot) = node.left.take() else { return node };
    node.left = pivot.right.take();
    node.refresh();
    pivot.right = Some(node);
    pivot.refresh();
    pivot
}

/// Right child becomes the subtree root.
fn rotate_left<P>(mut node: Box<Node<P>>) -> Box<Node<P>> {
    let Some(mut pivot) = node.right.take() else { return node };
    node.right = pivot.left.take();
    node.refresh();
    pivot.left = Some(node);
    pivot.refresh();
    pivot
}

/// Ancestors taken off the tree on the way down, each with the side the
/// detached child belongs on (`true` = left).
type Path<P> = Vec<(Box<Node<P>>, bool)>;

/// Hang `sub` back under each ancestor in turn, refreshing boxes bottom-up.
fn hang<P>(mut path: Path<P>, mut sub: Box<Node<P>>) -> Box<Node<P>> {
    while let Some((mut parent, left)) = path.pop() {
        if left {
            parent.left = Some(sub);
        } else {
            parent.right = Some(sub);
        }
        parent.refresh();
        sub = parent;
    }
    sub
}

/// Like [`hang`], but the bottom slot may be empty.
fn reattach<P>(mut path: Path<P>, sub: Link<P>) -> Link<P> {
    match sub {
        Some(sub) => Some(hang(path, sub)),
        None => {
            let (mut parent, _) = path.pop()?;
            parent.refresh();
            Some(hang(path, parent))
        }
    }
}

fn insert_into<P>(mut link: Link<P>, new: Box<Node<P>>) -> Box<Node<P>> {
    let mut path: Path<P> = Vec::new();
    while let Some(mut node) = link {
        let left = new.x <= node.x;
        link = if left { node.left.take() } else { node.right.take() };
        path.push((node, left));
    }

    let mut sub = new;
    while let Some((mut node, left)) = path.pop() {
        let child_priority = sub.priority;
        if left {
            node.left = Some(sub);
            node.refresh();
            sub = if child_priority > node.priority { rotate_right(node) } else { node };
        } else {
            node.right = Some(sub);
            node.refresh();
            sub = if child_priority > node.priority { rotate_left(node) } else { node };
        }
    }
    sub
}

/// Which child should rise above `node`, if any.  When both children
/// outrank it the left one wins ties.
fn rising_child<P>(node: &Node<P>) -> Option<bool> {
    let p = node.priority;
    let lp = node.left.as_ref().map(|n| n.priority);
    let rp = node.right.as_ref().map(|n| n.priority);
    match (lp, rp) {
        (Some(l), Some(r)) if l > p || r > p => Some(l >= r),
        (Some(l), _) if l > p => Some(true),
        (_, Some(r)) if r > p => Some(false),
        _ => None,
    }
}

/// Push `node` down until neither child outranks it.
fn sift_down<P>(mut node: Box<Node<P>>) -> Box<Node<P>> {
    let mut path: Path<P> = Vec::new();
    while let Some(left_up) = rising_child(&node) {
        let mut top = if left_up { rotate_right(node) } else { rotate_left(node) };
        let demoted = if left_up { top.right.take() } else { top.left.take() };
        match demoted {
            Some(d) => {
                path.push((top, !left_up));
                node = d;
            }
            None => {
                node = top;
                break;
            }
        }
    }
    hang(path, node)
}

/// Post-order pass restoring the heap property everywhere.
fn reheapify<P>(link: Link<P>) -> Link<P> {
    enum Step<P> {
        Enter(Box<Node<P>>),
        Leave { node: Box<Node<P>>, left: bool, right: bool },
    }

    let mut steps: Vec<Step<P>> = link.map(Step::Enter).into_iter().collect();
    let mut done: Vec<Box<Node<P>>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(mut node) => {
                let (l, r) = (node.left.take(), node.right.take());
                steps.push(Step::Leave { node, left: l.is_some(), right: r.is_some() });
                steps.extend(r.map(Step::Enter));
                steps.extend(l.map(Step::Enter));
            }
            Step::Leave { mut node, left, right } => {
                // Children finish left first, so the right one is on top.
                node.right = if right { done.pop() } else { None };
                node.left = if left { done.pop() } else { None };
                node.refresh();
                done.push(sift_down(node));
            }
        }
    }
    done.pop()
}

/// Rotate `node` down (higher-priority child up) until it has at most one
/// child, then splice it out.  Returns the replacement subtree and the
/// detached node.
fn detach<P>(mut node: Box<Node<P>>) -> (Link<P>, Box<Node<P>>) {
    let mut path: Path<P> = Vec::new();
    let rest = loop {
        match (node.left.take(), node.right.take()) {
            (None, None) => break None,
            (Some(only), None) | (None, Some(only)) => break Some(only),
            (Some(mut l), Some(r)) if l.priority > r.priority => {
                node.left = l.right.take();
                node.right = Some(r);
                path.push((l, false));
            }
            (Some(l), Some(mut r)) => {
                node.right = r.left.take();
                node.left = Some(l);
                path.push((r, true));
            }
        }
    };
    (reattach(path, rest), node)
}

/// Directions from the root to the first node (pre-order) carrying `id`.
fn path_to<P>(root: Option<&Node<P>>, id: EntityId) -> Option<Vec<bool>> {
    let mut dirs = Vec::new();
    let mut stack: Vec<(&Node<P>, usize, bool)> = root.map(|r| (r, 0, false)).into_iter().collect();
    while let Some((node, depth, left)) = stack.pop() {
        dirs.truncate(depth.saturating_sub(1));
        if depth > 0 {
            dirs.push(left);
        }
        if node.id == id {
            return Some(dirs);
        }
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1, false)));
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1, true)));
    }
    None
}

/// Remove the first node (pre-order) carrying `id`, refreshing boxes on the
/// way back up.
fn remove_from<P>(link: &mut Link<P>, id: EntityId) -> Option<Box<Node<P>>> {
    let dirs = path_to(link.as_deref(), id)?;

    let mut path: Path<P> = Vec::with_capacity(dirs.len());
    let mut cur = link.take()?;
    for left in dirs {
        let child = if left { cur.left.take() } else { cur.right.take() };
        match child {
            Some(c) => {
                path.push((cur, left));
                cur = c;
            }
            None => {
                *link = Some(hang(path, cur));
                return None;
            }
        }
    }

    let (rest, removed) = detach(cur);
    *link = reattach(path, rest);
    Some(removed)
}

// ── Instrumentation ───────────────────────────────────────────────────────────

/// Work done by the most recent query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes whose subtree box passed the prune test and were examined.
    pub visited: usize,
    /// Subtrees skipped because their box missed the query.
    pub pruned:  usize,
}

// ── SpatialTreap ──────────────────────────────────────────────────────────────

/// Treap over 2-D entries of payload type `P`.
pub struct SpatialTreap<P> {
    pub(crate) root: Link<P>,
    len:             usize,
    config:          TreapConfig,
    rng:             PriorityRng,
    last_stats:      QueryStats,
}

impl<P> Default for SpatialTreap<P> {
    fn default() -> Self {
        let config = TreapConfig::default();
        Self {
            root: None,
            len: 0,
            rng: PriorityRng::new(config.seed),
            config,
            last_stats: QueryStats::default(),
        }
    }
}

impl<P> Drop for SpatialTreap<P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P: Identified> SpatialTreap<P> {
    /// Insert a point-like entry whose own box is the degenerate box at
    /// `(x, y)`.
    pub fn insert(&mut self, x: f64, y: f64, kind: EntityKind, payload: P) -> SpatialResult<EntityId> {
        self.insert_with(x, y, kind, payload, |_, _| BoundingBox::point(x, y))
    }

    /// Insert an entry whose own box is computed by `bbox` from its kind and
    /// payload.
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidGeometry`] for non-finite coordinates or a box
    /// with negative or non-finite extent.  Nothing is inserted.
    pub fn insert_with<F>(
        &mut self,
        x: f64,
        y: f64,
        kind: EntityKind,
        payload: P,
        bbox: F,
    ) -> SpatialResult<EntityId>
    where
        F: FnOnce(EntityKind, &P) -> BoundingBox,
    {
        if !Point::new(x, y).is_finite() {
            return Err(SpatialError::InvalidGeometry(format!("non-finite anchor ({x}, {y})")));
        }
        let own_box = bbox(kind, &payload);
        own_box.validate()?;

        let priority = self.rng.priority(self.config.max_priority);
        Ok(self.insert_ranked(x, y, kind, payload, own_box, priority))
    }

    pub(crate) fn insert_ranked(
        &mut self,
        x: f64,
        y: f64,
        kind: EntityKind,
        payload: P,
        own_box: BoundingBox,
        priority: u32,
    ) -> EntityId {
        let id = payload.entity_id();
        let node = Box::new(Node {
            id,
            x,
            y,
            priority,
            hits: 0,
            kind,
            payload,
            own_box,
            subtree_box: own_box,
            left: None,
            right: None,
        });
        self.root = Some(insert_into(self.root.take(), node));
        self.len += 1;
        id
    }
}

impl<P> SpatialTreap<P> {
    /// Empty treap with validated configuration.
    pub fn new(config: TreapConfig) -> SpatialResult<Self> {
        config.validate()?;
        Ok(Self {
            root: None,
            len: 0,
            rng: PriorityRng::new(config.seed),
            config,
            last_stats: QueryStats::default(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn config(&self) -> &TreapConfig {
        &self.config
    }

    /// Counters from the most recent region, point or hit-test query.
    pub fn stats(&self) -> QueryStats {
        self.last_stats
    }

    /// Aggregate box of the whole tree.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.root.as_ref().map(|r| r.subtree_box)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(&Node<P>, usize)> =
            self.root.as_deref().map(|r| (r, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        best
    }

    /// Pre-order iterator over node snapshots.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter { stack: self.root.as_deref().into_iter().collect() }
    }

    pub fn get(&self, id: EntityId) -> Option<NodeView<'_, P>> {
        self.find(id).map(Node::view)
    }

    pub fn payload(&self, id: EntityId) -> Option<&P> {
        self.find(id).map(|n| &n.payload)
    }

    pub fn subtree_box(&self, id: EntityId) -> Option<BoundingBox> {
        self.find(id).map(|n| n.subtree_box)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.find(id).is_some()
    }

    fn find(&self, id: EntityId) -> Option<&Node<P>> {
        let mut stack: Vec<&Node<P>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        None
    }

    fn find_mut(&mut self, id: EntityId) -> Option<&mut Node<P>> {
        let mut stack: Vec<&mut Node<P>> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            let Node { left, right, .. } = node;
            stack.extend(right.as_deref_mut());
            stack.extend(left.as_deref_mut());
        }
        None
    }

    // ── Promotion ─────────────────────────────────────────────────────────

    /// Promote `id` by the configured rate.  Returns the new priority.
    pub fn promote(&mut self, id: EntityId) -> SpatialResult<u32> {
        self.promote_by(id, self.config.promotion_rate)
    }

    /// Multiply the priority of `id` by `rate`, clamp it to
    /// `max_priority`, and re-heapify the whole tree.  The priority never
    /// goes down, so a node already at the cap stays there.
    pub fn promote_by(&mut self, id: EntityId, rate: f64) -> SpatialResult<u32> {
        if rate.is_nan() || rate < 0.0 {
            return Err(SpatialError::InvalidConfig(format!("promotion rate {rate} is negative")));
        }
        self.raise(id, rate).ok_or(SpatialError::EntityNotFound(id))
    }

    /// Promotion with an already validated rate.  `None` if `id` is absent.
    fn raise(&mut self, id: EntityId, rate: f64) -> Option<u32> {
        let max = self.config.max_priority;
        let node = self.find_mut(id)?;

        let old = node.priority;
        let boosted = (f64::from(old) * rate).min(f64::from(max)) as u32;
        let new = boosted.max(old);
        node.priority = new;

        if new != old {
            tracing::trace!(entity = %id, old, new, "promoted");
            self.root = reheapify(self.root.take());
        }
        Some(new)
    }

    /// Promotion triggered by a query on an entry it just found.
    fn promote_found(&mut self, id: EntityId) {
        if self.raise(id, self.config.promotion_rate).is_none() {
            tracing::warn!(entity = %id, "promotion target vanished");
        }
    }

    /// Count one query hit on `id`, promoting it when the threshold is
    /// reached.
    fn register_hit(&mut self, id: EntityId) {
        let threshold = self.config.hit_threshold;
        let Some(node) = self.find_mut(id) else { return };
        node.hits += 1;
        if node.hits >= threshold {
            node.hits = 0;
            self.promote_found(id);
        }
    }

    fn register_hits(&mut self, hits: &[Hit]) {
        for hit in hits {
            self.register_hit(hit.id);
        }
    }

    // ── Region queries ────────────────────────────────────────────────────

    /// Entries whose anchor point lies inside the box spanned by the two
    /// corners (in any order, borders included).
    pub fn region(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<Hit> {
        let query = BoundingBox::from_corners(x1, y1, x2, y2);
        self.collect_region(query, |n| query.contains_point(n.x, n.y))
    }

    /// Entries accepted by `accept`, which sees the kind, the payload and
    /// the normalised query box.  Subtrees whose aggregate box misses the
    /// query are still pruned before `accept` is consulted.
    pub fn region_by<F>(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, mut accept: F) -> Vec<Hit>
    where
        F: FnMut(EntityKind, &P, &BoundingBox) -> bool,
    {
        let query = BoundingBox::from_corners(x1, y1, x2, y2);
        self.collect_region(query, |n| accept(n.kind, &n.payload, &query))
    }

    fn collect_region<F>(&mut self, query: BoundingBox, mut accept: F) -> Vec<Hit>
    where
        F: FnMut(&Node<P>) -> bool,
    {
        let mut stats = QueryStats::default();
        let mut hits = Vec::new();
        let mut seen = HashSet::new();

        let mut stack: Vec<&Node<P>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if !node.subtree_box.intersects(&query) {
                stats.pruned += 1;
                continue;
            }
            stats.visited += 1;
            if accept(node) && seen.insert(node.id) {
                hits.push(node.hit());
            }
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        self.last_stats = stats;
        self.register_hits(&hits);
        hits
    }

    // ── Point queries ─────────────────────────────────────────────────────

    /// Entry anchored at `(x, y)` within the configured tolerance on both
    /// axes.  A match is promoted immediately, independent of hit counts.
    pub fn point_query(&mut self, x: f64, y: f64) -> Option<EntityId> {
        let tol = self.config.tolerance;
        let mut stats = QueryStats::default();
        let mut found = None;

        let mut stack: Vec<&Node<P>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            stats.visited += 1;
            if (node.x - x).abs() <= tol && (node.y - y).abs() <= tol {
                found = Some(node.id);
                break;
            }
            // Equal keys can sit on either side after rotations.
            if x - tol <= node.x {
                stack.extend(node.left.as_deref());
            } else if node.left.is_some() {
                stats.pruned += 1;
            }
            if x + tol >= node.x {
                stack.extend(node.right.as_deref());
            } else if node.right.is_some() {
                stats.pruned += 1;
            }
        }

        self.last_stats = stats;
        let id = found?;
        self.promote_found(id);
        Some(id)
    }

    /// Entries whose own box contains `(x, y)`.
    pub fn hits_at_point(&mut self, x: f64, y: f64) -> Vec<Hit> {
        self.collect_point(x, y, |n| n.own_box.contains_point(x, y))
    }

    /// Entries for which `hit` confirms `(x, y)` against the payload.  Only
    /// subtrees whose aggregate box contains the point are searched.
    pub fn hits_at_point_by<F>(&mut self, x: f64, y: f64, mut hit: F) -> Vec<Hit>
    where
        F: FnMut(EntityKind, &P, Point) -> bool,
    {
        let at = Point::new(x, y);
        self.collect_point(x, y, |n| hit(n.kind, &n.payload, at))
    }

    fn collect_point<F>(&mut self, x: f64, y: f64, mut accept: F) -> Vec<Hit>
    where
        F: FnMut(&Node<P>) -> bool,
    {
        let mut stats = QueryStats::default();
        let mut hits = Vec::new();

        let mut stack: Vec<&Node<P>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if !node.subtree_box.contains_point(x, y) {
                stats.pruned += 1;
                continue;
            }
            stats.visited += 1;
            if accept(node) {
                hits.push(node.hit());
            }
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        self.last_stats = stats;
        self.register_hits(&hits);
        hits
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Pre-order walk that stops as soon as `f` breaks.
    pub fn visit<B, F>(&self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(NodeView<'_, P>) -> ControlFlow<B>,
    {
        for view in self.iter() {
            f(view)?;
        }
        ControlFlow::Continue(())
    }

    /// First entry (pre-order) accepted by `pred`.  The match counts as a
    /// query hit.
    pub fn search<F>(&mut self, mut pred: F) -> Option<EntityId>
    where
        F: FnMut(&NodeView<'_, P>) -> bool,
    {
        let found = self.iter().find(|v| pred(v)).map(|v| v.id)?;
        self.register_hit(found);
        Some(found)
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Remove the entry carrying `id` and hand its payload back.
    pub fn remove(&mut self, id: EntityId) -> SpatialResult<P> {
        let node = remove_from(&mut self.root, id).ok_or(SpatialError::EntityNotFound(id))?;
        self.len -= 1;
        let node = *node;
        Ok(node.payload)
    }

    /// Drop every entry.  Iterative, so depth does not matter.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<P>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    // ── Verification ──────────────────────────────────────────────────────

    /// Walk the whole tree and check the BST, heap and box invariants plus
    /// the cached length.  Intended for tests and debugging.
    pub fn verify(&self) -> SpatialResult<()> {
        let bad = |msg: String| Err(SpatialError::Invariant(msg));
        let mut count = 0;
        let mut stack: Vec<(&Node<P>, f64, f64)> = self
            .root
            .as_deref()
            .map(|r| (r, f64::NEG_INFINITY, f64::INFINITY))
            .into_iter()
            .collect();

        while let Some((node, lo, hi)) = stack.pop() {
            count += 1;
            if node.x < lo || node.x > hi {
                return bad(format!("{} at x={} outside [{lo}, {hi}]", node.id, node.x));
            }

            let mut expected = node.own_box;
            for child in [&node.left, &node.right].into_iter().flatten() {
                if child.priority > node.priority {
                    return bad(format!(
                        "{} (priority {}) outranks parent {} (priority {})",
                        child.id, child.priority, node.id, node.priority
                    ));
                }
                expected = expected.union(&child.subtree_box);
            }
            if expected != node.subtree_box {
                return bad(format!("{} caches {} but covers {expected}", node.id, node.subtree_box));
            }

            stack.extend(node.left.as_deref().map(|l| (l, lo, node.x)));
            stack.extend(node.right.as_deref().map(|r| (r, node.x, hi)));
        }

        if count != self.len {
            return bad(format!("reachable nodes {count} != len {}", self.len));
        }
        Ok(())
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// Pre-order iterator returned by [`SpatialTreap::iter`].
pub struct Iter<'a, P> {
    stack: Vec<&'a Node<P>>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = NodeView<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(node.view())
    }
}

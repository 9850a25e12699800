//! Quadtree spatial index over (tile rectangle, plate index) pairs.
//!
//! Supports the incremental path: when plates drift a tick, stored tiles are
//! displaced by their plate's motion vector and relocated without
//! re-rasterizing the whole grid. Children are a fixed [NW, NE, SW, SE]
//! array indexed by the quadrant test. An item is pushed into a child only
//! if the child's bounds entirely contain it; straddlers stay at the parent.
//! Single-threaded use only.

use crate::geom::Rect;
use crate::plate::Plate;

/// Leaf capacity; a node holding more than this splits.
pub const NODE_CAPACITY: usize = 20;

/// One indexed item: a tile's bounding rectangle plus its owning plate's
/// index into the flat plate list.
pub type Item = (Rect, usize);

#[derive(Debug, Clone)]
pub struct QuadTree {
    bounds: Rect,
    items: Vec<Item>,
    /// NW, NE, SW, SE.
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, items: Vec::new(), children: None }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Total number of items stored in this node and all descendants.
    pub fn len(&self) -> usize {
        let below: usize = self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(QuadTree::len)
            .sum();
        self.items.len() + below
    }

    /// True if no item is stored here or in any descendant. Short-circuits
    /// on the first occupied node instead of counting the whole tree.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self
                .children
                .as_ref()
                .map_or(true, |c| c.iter().all(QuadTree::is_empty))
    }

    /// The bounds of the four quadrants, in child order.
    fn quadrant_bounds(&self) -> [Rect; 4] {
        let hw = self.bounds.width / 2.0;
        let hh = self.bounds.height / 2.0;
        let (x, y) = (self.bounds.x, self.bounds.y);
        [
            Rect::new(x, y, hw, hh),           // NW
            Rect::new(x + hw, y, hw, hh),      // NE
            Rect::new(x, y + hh, hw, hh),      // SW
            Rect::new(x + hw, y + hh, hw, hh), // SE
        ]
    }

    /// Index of the quadrant entirely containing `rect`, or None for
    /// straddlers (they belong at this level).
    fn quadrant_index(&self, rect: &Rect) -> Option<usize> {
        self.quadrant_bounds()
            .iter()
            .position(|q| q.contains_rect(rect))
    }

    /// Insert an item, delegating to a child when one fully contains it and
    /// splitting the node once it exceeds `NODE_CAPACITY`.
    pub fn insert(&mut self, item: Item) {
        let target = if self.children.is_some() {
            self.quadrant_index(&item.0)
        } else {
            None
        };
        if let (Some(q), Some(children)) = (target, self.children.as_mut()) {
            children[q].insert(item);
            return;
        }
        self.items.push(item);
        if self.items.len() > NODE_CAPACITY {
            self.split();
        }
    }

    /// Create the four children (if absent) and push down every item that
    /// fits entirely inside one of them.
    fn split(&mut self) {
        if self.children.is_none() {
            let [nw, ne, sw, se] = self.quadrant_bounds();
            self.children = Some(Box::new([
                QuadTree::new(nw),
                QuadTree::new(ne),
                QuadTree::new(sw),
                QuadTree::new(se),
            ]));
        }

        let pending = std::mem::take(&mut self.items);
        for item in pending {
            match (self.quadrant_index(&item.0), self.children.as_mut()) {
                (Some(q), Some(children)) => children[q].insert(item),
                _ => self.items.push(item),
            }
        }
    }

    /// Every stored item, this node first, then children in NW..SE order.
    pub fn rectangles(&self) -> Vec<Item> {
        let mut out = self.items.clone();
        if let Some(children) = &self.children {
            for child in children.iter() {
                out.extend(child.rectangles());
            }
        }
        out
    }

    /// Items whose rectangles overlap `region`, pruning subtrees whose
    /// bounds don't reach it.
    pub fn query(&self, region: &Rect) -> Vec<Item> {
        let mut out = Vec::new();
        if !self.bounds.overlaps(region) {
            return out;
        }
        out.extend(self.items.iter().filter(|(r, _)| r.overlaps(region)).copied());
        if let Some(children) = &self.children {
            for child in children.iter() {
                out.extend(child.query(region));
            }
        }
        out
    }

    /// True if `rect` overlaps any stored item.
    pub fn is_colliding(&self, rect: &Rect) -> bool {
        if self.items.iter().any(|(r, _)| r.overlaps(rect)) {
            return true;
        }
        match &self.children {
            Some(children) => children.iter().any(|c| c.is_colliding(rect)),
            None => false,
        }
    }

    /// One tick of plate drift: displace every item by its owning plate's
    /// direction vector, then relocate it (its quadrant may have changed).
    pub fn move_rectangles(&mut self, plates: &[Plate]) {
        let mut moved = Vec::with_capacity(self.len());
        self.drain_into(&mut moved);
        for (mut rect, plate_idx) in moved {
            let dir = plates[plate_idx].direction;
            rect.x += dir.x;
            rect.y += dir.y;
            self.insert((rect, plate_idx));
        }
    }

    /// Remove every item from this node and its descendants, keeping the
    /// node structure in place.
    fn drain_into(&mut self, out: &mut Vec<Item>) {
        out.append(&mut self.items);
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                child.drain_into(out);
            }
        }
    }
}

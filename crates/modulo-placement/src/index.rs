use rstar::{RTree, RTreeObject, AABB};

use modulo_core::{Rect, Shape};

/// An entry in the R-tree, referencing a shape by its position in the
/// collection.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Index into the indexed shape slice.
    pub shape_index: usize,
    pub bounds: Rect,
}

impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.x, self.bounds.y],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

/// Spatial index over a shape collection for overlap queries.
///
/// The R-tree envelope test counts touching boxes as intersecting, so every
/// hit is re-checked with [`Rect::overlaps`] where shared edges are allowed.
/// Query results come back in collection order.
pub struct ShapeIndex<'a> {
    shapes: Vec<&'a Shape>,
    tree: RTree<IndexEntry>,
}

impl<'a> ShapeIndex<'a> {
    pub fn build(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        let shapes: Vec<&'a Shape> = shapes.into_iter().collect();
        let entries = shapes
            .iter()
            .enumerate()
            .map(|(shape_index, s)| IndexEntry {
                shape_index,
                bounds: s.bounds(),
            })
            .collect();
        Self {
            shapes,
            tree: RTree::bulk_load(entries),
        }
    }

    /// Positions of every indexed shape whose footprint truly overlaps `rect`.
    pub fn overlapping(&self, rect: &Rect) -> Vec<usize> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| e.bounds.overlaps(rect))
            .map(|e| e.shape_index)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn overlapping_shapes(&self, rect: &Rect) -> impl Iterator<Item = &'a Shape> + '_ {
        self.overlapping(rect).into_iter().map(move |i| self.shapes[i])
    }

    /// First shape in collection order that overlaps `rect` and satisfies `pred`.
    pub fn first_overlapping(
        &self,
        rect: &Rect,
        pred: impl Fn(&Shape) -> bool,
    ) -> Option<&'a Shape> {
        self.overlapping_shapes(rect).find(|s| pred(s))
    }

    pub fn collides(&self, rect: &Rect) -> bool {
        !self.overlapping(rect).is_empty()
    }

    /// The indexed shapes, in collection order.
    pub fn shapes(&self) -> &[&'a Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

use std::collections::{BTreeMap, HashSet};

use egui::Color32;
use log::debug;

use crate::geometry::hit_testing::collect_hits;
use crate::geometry::{ScreenPoint, WorldRect};
use crate::id_generator::{IdGenerator, ShapeId};
use crate::shape::{factory, Shape, ShapeType};
use crate::transform::CanvasTransform;

/// Sole owner of every shape on the canvas, keyed by id.
///
/// Ids only ever grow, so iteration order is insertion order, which is also
/// paint order (later shapes on top).
#[derive(Debug, Default)]
pub struct Document {
    shapes: BTreeMap<ShapeId, ShapeType>,
    ids: IdGenerator,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ShapeId {
        self.ids.generate_id()
    }

    /// Adds a shape built around a freshly issued id.
    pub fn add_with(&mut self, build: impl FnOnce(ShapeId) -> ShapeType) -> ShapeId {
        let id = self.next_id();
        let shape = build(id);
        debug_assert_eq!(shape.id(), id, "shape must carry the id it was built with");
        debug!("add {} {}", shape.shape_type(), id);
        self.shapes.insert(id, shape);
        id
    }

    pub fn add_rectangle(&mut self, color: Color32, rect: WorldRect) -> ShapeId {
        self.add_with(|id| factory::create_rectangle(id, color, rect))
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.get(&id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeType> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Ids of all shapes under a screen point.
    pub fn hit_test(&self, transform: &CanvasTransform, point: ScreenPoint, tolerance: f32) -> HashSet<ShapeId> {
        collect_hits(self.shapes.values(), transform, point, tolerance)
    }
}

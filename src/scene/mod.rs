//! Ordered scene of committed objects.

pub mod storage;

use crate::draw::GeometricObject;
use crate::util::Point;

/// The ordered collection of committed objects.
///
/// Insertion order is paint order: index 0 is drawn first (bottom layer),
/// the last index last (top layer). Two structurally identical objects are
/// still distinct entries; identity is positional.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<GeometricObject>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene pre-populated with `objects` in paint order.
    pub fn from_objects(objects: Vec<GeometricObject>) -> Self {
        Self { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All objects in paint order.
    pub fn objects(&self) -> &[GeometricObject] {
        &self.objects
    }

    pub fn get(&self, index: usize) -> Option<&GeometricObject> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GeometricObject> {
        self.objects.get_mut(index)
    }

    /// Appends a committed object on top of the existing ones.
    pub fn push(&mut self, obj: GeometricObject) {
        self.objects.push(obj);
    }

    /// Removes and returns the object at `index`, shifting later objects down.
    pub fn remove(&mut self, index: usize) -> Option<GeometricObject> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    /// Removes every object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Moves the object at `index` to the top of the paint order.
    ///
    /// Returns the object's new index, or `None` when `index` is out of
    /// range.
    pub fn bring_to_front(&mut self, index: usize) -> Option<usize> {
        if index < self.objects.len() {
            let obj = self.objects.remove(index);
            self.objects.push(obj);
            Some(self.objects.len() - 1)
        } else {
            None
        }
    }

    /// Moves the object at `index` to the bottom of the paint order.
    pub fn send_to_back(&mut self, index: usize) -> Option<usize> {
        if index < self.objects.len() {
            let obj = self.objects.remove(index);
            self.objects.insert(0, obj);
            Some(0)
        } else {
            None
        }
    }

    /// Finds the topmost object containing `p`, scanning from the top of the
    /// paint order down.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.objects
            .iter()
            .enumerate()
            .rev()
            .find(|(_, obj)| obj.contains(p))
            .map(|(index, _)| index)
    }
}

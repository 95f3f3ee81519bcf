//! An ordered collection of hit-testable scene objects.

use crate::hit::SceneObject;

/// An ordered list of scene objects. Order is preserved and is only
/// observable through hit-test tie-breaking (the first object added wins
/// ties on distance).
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    pub fn add_object(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

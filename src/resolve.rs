//! Hierarchy resolution.
//!
//! Walks the scanner hierarchy and yields one world-space shape per
//! (module-replica, element-replica) leaf instance. The walk is lazy:
//! each shape is composed and transformed on demand, so a consumer can
//! start drawing before the whole scanner is resolved. Dropping the
//! iterator early is free; re-walking means starting again from the
//! root.

use crate::algebra::RigidTransformation;
use crate::model::{BoxShape, ScannerGeometry};

/// Lazy iterator over the world-space shapes of every detecting-element
/// replica in a scanner.
///
/// Iteration order is modules, then elements within the module, then
/// module-replica transforms, then element-replica transforms. For each
/// leaf the module transform is the outer chain entry and the element
/// transform the inner one: the element's local shape is first placed
/// in its module's frame, then the module replica is placed in the
/// world frame. Swapping the two yields structurally valid but
/// geometrically wrong output.
pub struct WorldShapes<'a> {
    scanner: &'a ScannerGeometry,
    module: usize,
    element: usize,
    module_transform: usize,
    element_transform: usize,
}

impl<'a> WorldShapes<'a> {
    fn new(scanner: &'a ScannerGeometry) -> Self {
        Self {
            scanner,
            module: 0,
            element: 0,
            module_transform: 0,
            element_transform: 0,
        }
    }
}

impl Iterator for WorldShapes<'_> {
    type Item = BoxShape;

    fn next(&mut self) -> Option<BoxShape> {
        loop {
            let module = self.scanner.replicated_modules.get(self.module)?;

            let Some(element) = module.object.detecting_elements.get(self.element) else {
                self.module += 1;
                self.element = 0;
                continue;
            };
            let Some(module_transform) = module.transforms.get(self.module_transform) else {
                self.element += 1;
                self.module_transform = 0;
                continue;
            };
            let Some(element_transform) = element.transforms.get(self.element_transform) else {
                self.module_transform += 1;
                self.element_transform = 0;
                continue;
            };
            self.element_transform += 1;

            let world = RigidTransformation::compose(&[*module_transform, *element_transform]);
            return Some(element.object.shape.transformed(&world));
        }
    }
}

impl ScannerGeometry {
    /// Resolves the hierarchy into world-space shapes, lazily.
    pub fn world_shapes(&self) -> WorldShapes<'_> {
        WorldShapes::new(self)
    }

    /// Total number of detecting-element replicas in the scanner, i.e.
    /// the number of shapes [`world_shapes`](Self::world_shapes) yields.
    pub fn num_detecting_elements(&self) -> usize {
        self.replicated_modules
            .iter()
            .map(|module| {
                let per_replica: usize = module
                    .object
                    .detecting_elements
                    .iter()
                    .map(|element| element.transforms.len())
                    .sum();
                module.transforms.len() * per_replica
            })
            .sum()
    }
}

//! Controller registry
//!
//! Embedders with several frameless windows keep one controller per window;
//! the registry gives them stable ids that survive other windows closing.

use slotmap::{new_key_type, SlotMap};

use crate::controller::FramelessController;

new_key_type! {
    /// Unique identifier for a registered controller
    pub struct ControllerId;
}

/// Owns the chrome controllers for a set of windows
#[derive(Default)]
pub struct ChromeRegistry {
    controllers: SlotMap<ControllerId, FramelessController>,
}

impl ChromeRegistry {
    pub fn new() -> Self {
        Self {
            controllers: SlotMap::with_key(),
        }
    }

    /// Register a controller, usually right after its window is created
    pub fn insert(&mut self, controller: FramelessController) -> ControllerId {
        self.controllers.insert(controller)
    }

    pub fn get(&self, id: ControllerId) -> Option<&FramelessController> {
        self.controllers.get(id)
    }

    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut FramelessController> {
        self.controllers.get_mut(id)
    }

    /// Drop a controller when its window is destroyed
    pub fn remove(&mut self, id: ControllerId) -> Option<FramelessController> {
        self.controllers.remove(id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChromeConfig;
    use crate::controller::InteractionMode;

    fn controller() -> FramelessController {
        FramelessController::new(ChromeConfig::default()).unwrap()
    }

    #[test]
    fn test_insert_get_remove() {
        let mut registry = ChromeRegistry::new();
        assert!(registry.is_empty());

        let a = registry.insert(controller());
        let b = registry.insert(controller());
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.get(a).unwrap().mode(), InteractionMode::Idle);

        registry.remove(a);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(a).is_none());
        assert!(registry.get(b).is_some());
    }

    #[test]
    fn test_get_mut_is_independent() {
        let mut registry = ChromeRegistry::new();
        let a = registry.insert(controller());
        let b = registry.insert(controller());

        registry.get_mut(a).unwrap().set_resizing_enabled(false);
        assert!(!registry.get(a).unwrap().is_resizing_enabled());
        assert!(registry.get(b).unwrap().is_resizing_enabled());
    }
}

//! Outside-click subscriptions
//!
//! A widget that must close when the user clicks elsewhere subscribes while
//! it is open. The returned [`PointerGuard`] unsubscribes on drop, so a
//! listener never outlives the widget that registered it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    /// Subscription id -> owning widget slot
    slots: BTreeMap<u64, usize>,
}

/// Shared registry of widgets listening for outside clicks
#[derive(Debug, Clone, Default)]
pub struct PointerSubscriptions {
    registry: Rc<RefCell<Registry>>,
}

impl PointerSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the widget at `slot`; keep the guard for as long as it listens
    pub fn subscribe(&self, slot: usize) -> PointerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.slots.insert(id, slot);
        PointerGuard {
            id,
            registry: Rc::clone(&self.registry),
        }
    }

    /// Slots of all current listeners, in subscription order
    pub fn active_slots(&self) -> Vec<usize> {
        self.registry.borrow().slots.values().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().slots.is_empty()
    }
}

/// Live subscription; dropping it unsubscribes
#[derive(Debug)]
pub struct PointerGuard {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl Drop for PointerGuard {
    fn drop(&mut self) {
        self.registry.borrow_mut().slots.remove(&self.id);
    }
}

//! Cross-page "open the add dialog" requests.
//!
//! The dashboard's quick actions navigate to a list page and ask it to open
//! its create dialog. The request is a one-shot flag: the page consumes it
//! exactly once when it mounts.

use std::mem;

/// A flag that reads `true` exactly once per [`OneShot::trigger`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    armed: bool,
}

impl OneShot {
    pub fn trigger(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns whether the flag was armed, and disarms it.
    pub fn take(&mut self) -> bool {
        mem::take(&mut self.armed)
    }
}

/// Pages that accept a quick-add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddTarget {
    User,
    Order,
    Product,
}

impl AddTarget {
    pub const ALL: [AddTarget; 3] = [AddTarget::User, AddTarget::Order, AddTarget::Product];
}

/// Every one-shot signal of the application, owned by the app and passed
/// explicitly to the pages.
#[derive(Debug, Clone, Default)]
pub struct AppSignals {
    add_user: OneShot,
    add_order: OneShot,
    add_product: OneShot,
}

impl AppSignals {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, target: AddTarget) -> &mut OneShot {
        match target {
            AddTarget::User => &mut self.add_user,
            AddTarget::Order => &mut self.add_order,
            AddTarget::Product => &mut self.add_product,
        }
    }

    pub fn trigger_add(&mut self, target: AddTarget) {
        log::debug!("quick add requested: {:?}", target);
        self.slot(target).trigger();
    }

    pub fn take_add(&mut self, target: AddTarget) -> bool {
        self.slot(target).take()
    }

    pub fn is_add_pending(&self, target: AddTarget) -> bool {
        match target {
            AddTarget::User => self.add_user.is_armed(),
            AddTarget::Order => self.add_order.is_armed(),
            AddTarget::Product => self.add_product.is_armed(),
        }
    }
}

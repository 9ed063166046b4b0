// Delegates: one-to-one callbacks between two screens.
//
// The selection screen knows nothing about its host beyond a single method.
// It holds the host through a `Weak` so the two never keep each other alive.

use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub const PRODUCTS: [&str; 3] = ["iPhone", "iPad", "MacBook"];

pub trait ProductSelectionDelegate {
    fn did_select_product(&self, name: &str);
}

// ============================================================================
// Example: The delegate (host screen)
// ============================================================================

pub struct MainScreen {
    label: RefCell<String>,
}

impl MainScreen {
    pub fn new() -> Rc<Self> {
        Rc::new(MainScreen {
            label: RefCell::new("Choose a product".to_string()),
        })
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// Builds a selection screen with `self` already subscribed as its delegate.
    pub fn present_selection(self: &Rc<Self>) -> ProductSelectionScreen {
        let mut selection = ProductSelectionScreen::new();
        let delegate: Rc<dyn ProductSelectionDelegate> = self.clone();
        selection.set_delegate(&delegate);
        selection
    }
}

impl ProductSelectionDelegate for MainScreen {
    fn did_select_product(&self, name: &str) {
        *self.label.borrow_mut() = format!("You selected: {name}");
    }
}

// ============================================================================
// Example: The delegating screen
// ============================================================================

pub struct ProductSelectionScreen {
    delegate: Option<Weak<dyn ProductSelectionDelegate>>,
    dismissed: Cell<bool>,
}

impl Default for ProductSelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSelectionScreen {
    pub fn new() -> Self {
        Self {
            delegate: None,
            dismissed: Cell::new(false),
        }
    }

    pub fn set_delegate(&mut self, delegate: &Rc<dyn ProductSelectionDelegate>) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    pub fn products(&self) -> &'static [&'static str] {
        &PRODUCTS
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }

    /// Taps the product at `index`, tells the delegate (if it is still
    /// alive), and dismisses. Returns the chosen name.
    pub fn tap(&self, index: usize) -> Option<&'static str> {
        let name = *PRODUCTS.get(index)?;
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.did_select_product(name),
            None => debug!("{name} tapped with no delegate attached"),
        }
        info!("Selected {name}, dismissing");
        self.dismissed.set(true);
        Some(name)
    }
}

// ============================================================================
// Example: Single-slot callback instead of a trait
// ============================================================================

/// Holds at most one `FnMut(&str)`; registering replaces the previous one.
#[derive(Default)]
pub struct SelectionCallback {
    slot: Option<Box<dyn FnMut(&str)>>,
}

impl SelectionCallback {
    pub fn register(&mut self, callback: impl FnMut(&str) + 'static) {
        self.slot = Some(Box::new(callback));
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns false when nothing is registered.
    pub fn notify(&mut self, name: &str) -> bool {
        match self.slot.as_mut() {
            Some(callback) => {
                callback(name);
                true
            }
            None => false,
        }
    }
}

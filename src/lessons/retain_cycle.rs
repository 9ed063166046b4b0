// Reference counting and retain cycles.
//
// A `Person` owns an `Apartment`; the apartment points back at its tenant.
// With a strong back edge neither count reaches zero and neither `Drop` runs.
// With a `Weak` back edge both are freed when the outside handles go away.

use log::info;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared record of which objects have been dropped, in order.
#[derive(Debug, Clone, Default)]
pub struct DropLog(Rc<RefCell<Vec<String>>>);

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, entry: String) {
        info!("{entry} deinitialized");
        self.0.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

// ============================================================================
// Example: Weak back edge
// ============================================================================

pub struct Person {
    pub name: String,
    pub apartment: RefCell<Option<Rc<Apartment>>>,
    log: DropLog,
}

impl Person {
    pub fn new(name: &str, log: &DropLog) -> Rc<Self> {
        info!("Person {name} initialized");
        Rc::new(Person {
            name: name.to_string(),
            apartment: RefCell::new(None),
            log: log.clone(),
        })
    }
}

impl Drop for Person {
    fn drop(&mut self) {
        self.log.record(format!("Person {}", self.name));
    }
}

pub struct Apartment {
    pub unit: String,
    pub tenant: RefCell<Weak<Person>>,
    log: DropLog,
}

impl Apartment {
    pub fn new(unit: &str, log: &DropLog) -> Rc<Self> {
        info!("Apartment {unit} initialized");
        Rc::new(Apartment {
            unit: unit.to_string(),
            tenant: RefCell::new(Weak::new()),
            log: log.clone(),
        })
    }

    pub fn tenant_name(&self) -> Option<String> {
        self.tenant.borrow().upgrade().map(|p| p.name.clone())
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        self.log.record(format!("Apartment {}", self.unit));
    }
}

/// Wires Sean into 4B, then drops both handles. Both drops land in `log`.
pub fn run_weak_example(log: &DropLog) {
    let sean = Person::new("Sean", log);
    let apt = Apartment::new("4B", log);

    *sean.apartment.borrow_mut() = Some(Rc::clone(&apt));
    *apt.tenant.borrow_mut() = Rc::downgrade(&sean);

    info!(
        "strong counts: person={}, apartment={}",
        Rc::strong_count(&sean),
        Rc::strong_count(&apt)
    );

    drop(sean);
    drop(apt);
}

// ============================================================================
// Example: Strong back edge (the leak)
// ============================================================================

pub struct StrongPerson {
    pub name: String,
    pub apartment: RefCell<Option<Rc<StrongApartment>>>,
    log: DropLog,
}

impl Drop for StrongPerson {
    fn drop(&mut self) {
        self.log.record(format!("Person {}", self.name));
    }
}

pub struct StrongApartment {
    pub unit: String,
    pub tenant: RefCell<Option<Rc<StrongPerson>>>,
    log: DropLog,
}

impl Drop for StrongApartment {
    fn drop(&mut self) {
        self.log.record(format!("Apartment {}", self.unit));
    }
}

/// Both sides hold each other strongly.
pub struct LeakedPair {
    pub person: Weak<StrongPerson>,
    pub apartment: Weak<StrongApartment>,
}

impl LeakedPair {
    pub fn strong_counts(&self) -> (usize, usize) {
        (self.person.strong_count(), self.apartment.strong_count())
    }

    /// Clears the tenant edge so the pair can be freed.
    pub fn break_cycle(&self) {
        if let Some(apt) = self.apartment.upgrade() {
            apt.tenant.borrow_mut().take();
        }
    }
}

/// Same wiring as [`run_weak_example`] with a strong back edge. Returns weak
/// handles to the pair so the caller can observe (and undo) the leak.
pub fn run_strong_example(log: &DropLog) -> LeakedPair {
    let sean = Rc::new(StrongPerson {
        name: "Sean".to_string(),
        apartment: RefCell::new(None),
        log: log.clone(),
    });
    let apt = Rc::new(StrongApartment {
        unit: "4B".to_string(),
        tenant: RefCell::new(None),
        log: log.clone(),
    });

    *sean.apartment.borrow_mut() = Some(Rc::clone(&apt));
    *apt.tenant.borrow_mut() = Some(Rc::clone(&sean));

    LeakedPair {
        person: Rc::downgrade(&sean),
        apartment: Rc::downgrade(&apt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_edge_frees_both() {
        let log = DropLog::new();
        run_weak_example(&log);
        assert_eq!(log.entries(), vec!["Person Sean", "Apartment 4B"]);
    }

    #[test]
    fn test_tenant_visible_while_alive() {
        let log = DropLog::new();
        let sean = Person::new("Sean", &log);
        let apt = Apartment::new("4B", &log);
        *apt.tenant.borrow_mut() = Rc::downgrade(&sean);

        assert_eq!(apt.tenant_name().as_deref(), Some("Sean"));
        drop(sean);
        assert_eq!(apt.tenant_name(), None);
    }

    #[test]
    fn test_strong_edge_leaks_until_broken() {
        let log = DropLog::new();
        let pair = run_strong_example(&log);

        assert_eq!(pair.strong_counts(), (1, 1));
        assert!(log.entries().is_empty());

        pair.break_cycle();
        assert_eq!(pair.strong_counts(), (0, 0));
        assert_eq!(log.entries(), vec!["Person Sean", "Apartment 4B"]);
    }
}

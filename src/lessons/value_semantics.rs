// Value types vs shared references.
//
// Assigning a `Clone` struct gives you your own copy. Sharing through
// `Rc<RefCell<_>>` gives everyone the same object, like editing one shared doc.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub year: u16,
    pub make: String,
    pub color: String,
}

impl Car {
    pub fn porsche() -> Self {
        Car {
            year: 2022,
            make: "Porsche".to_string(),
            color: "grey".to_string(),
        }
    }
}

/// Colors of (original, stolen) after recoloring a copy.
pub fn steal_car() -> (String, String) {
    let my_car = Car::porsche();
    let mut stolen_car = my_car.clone();
    stolen_car.color = "yellow".to_string();
    (my_car.color, stolen_car.color)
}

/// Colors of (original, stolen) after recoloring through a shared handle.
pub fn steal_shared_car() -> (String, String) {
    let my_car = Rc::new(RefCell::new(Car::porsche()));
    let stolen_car = Rc::clone(&my_car);
    stolen_car.borrow_mut().color = "yellow".to_string();

    let original = my_car.borrow().color.clone();
    let stolen = stolen_car.borrow().color.clone();
    (original, stolen)
}

// HashSet operations.
//
// A Vec keeps order and duplicates; a HashSet keeps only unique items, in no
// particular order, with O(1) membership checks.

use std::collections::HashSet;

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct DevRoster {
    pub swiftui_devs: HashSet<String>,
    pub swift_devs: HashSet<String>,
    pub kotlin_devs: HashSet<String>,
    pub experienced_devs: HashSet<String>,
}

impl Default for DevRoster {
    fn default() -> Self {
        Self {
            swiftui_devs: set(&["Sean", "James"]),
            swift_devs: set(&["Sean", "James", "Olivia", "Maya", "Leo"]),
            kotlin_devs: set(&["Olivia", "Elijah", "Leo", "Maya", "Dan"]),
            experienced_devs: set(&["Sean", "Ava", "Olivia", "Leo", "Maya"]),
        }
    }
}

impl DevRoster {
    /// SwiftUI ∩ experienced
    pub fn experienced_swiftui_devs(&self) -> HashSet<String> {
        self.swiftui_devs
            .intersection(&self.experienced_devs)
            .cloned()
            .collect()
    }

    /// SwiftUI − experienced
    pub fn junior_swift_devs(&self) -> HashSet<String> {
        self.swiftui_devs
            .difference(&self.experienced_devs)
            .cloned()
            .collect()
    }

    pub fn is_disjoint(&self) -> bool {
        self.swiftui_devs.is_disjoint(&self.swift_devs)
    }

    pub fn union(&self) -> HashSet<String> {
        self.swiftui_devs.union(&self.swift_devs).cloned().collect()
    }

    /// In exactly one of swift / kotlin.
    pub fn specialists(&self) -> HashSet<String> {
        self.swift_devs
            .symmetric_difference(&self.kotlin_devs)
            .cloned()
            .collect()
    }

    pub fn is_subset(&self) -> bool {
        self.swiftui_devs.is_subset(&self.swift_devs)
    }

    pub fn is_superset(&self) -> bool {
        self.swift_devs.is_superset(&self.swiftui_devs)
    }

    /// Inserts "Joe", removes "Sean", then checks for "Maya".
    /// Returns (inserted, removed, contains).
    pub fn mutate(&mut self) -> (bool, bool, bool) {
        let inserted = self.swift_devs.insert("Joe".to_string());
        let removed = self.swift_devs.remove("Sean");
        let contains = self.swift_devs.contains("Maya");
        (inserted, removed, contains)
    }
}

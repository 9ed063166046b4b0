use itertools::Itertools;
use practice_lessons::lessons::sets::DevRoster;
use std::collections::HashSet;

fn show(label: &str, names: &HashSet<String>) {
    println!("{label:<28} {}", names.iter().sorted().join(", "));
}

fn main() {
    let mut roster = DevRoster::default();

    show("experienced SwiftUI:", &roster.experienced_swiftui_devs());
    show("junior SwiftUI:", &roster.junior_swift_devs());
    show("SwiftUI ∪ Swift:", &roster.union());
    show("specialists:", &roster.specialists());
    println!(
        "disjoint: {}, subset: {}, superset: {}",
        roster.is_disjoint(),
        roster.is_subset(),
        roster.is_superset()
    );

    let (inserted, removed, contains) = roster.mutate();
    println!("insert Joe: {inserted}, remove Sean: {removed}, contains Maya: {contains}");
}

use practice_lessons::lessons::value_semantics::{steal_car, steal_shared_car};

fn main() {
    let (mine, stolen) = steal_car();
    println!("Clone:        my car is {mine}, stolen car is {stolen}");

    let (mine, stolen) = steal_shared_car();
    println!("Rc<RefCell>:  my car is {mine}, stolen car is {stolen}");
}

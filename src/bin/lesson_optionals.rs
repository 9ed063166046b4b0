use practice_lessons::lessons::optionals::*;

fn main() {
    let user = User::sean();

    println!("{}", describe_age(&user));
    if let Some(verdict) = check_age(Some(45)) {
        println!("{verdict}");
    }
    println!("age: {}, name: {}", age_or_default(&user), name_or_default(&user));

    // force_age(&user) would panic here: Sean never entered an age.
}

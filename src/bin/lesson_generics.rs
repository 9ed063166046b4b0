use practice_lessons::lessons::generics::describe_higher;

fn main() {
    println!("{}", describe_higher(4, 9));
    println!("{}", describe_higher(2.5, 1.5));
    println!("{}", describe_higher("sean", "swift"));
}

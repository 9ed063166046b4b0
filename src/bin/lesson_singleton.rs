use practice_lessons::lessons::singleton::SharedService;

fn main() {
    practice_lessons::init_logging();

    let first = SharedService::shared();
    let second = SharedService::shared();
    println!("same instance: {}", std::ptr::eq(first, second));

    first.do_something();
    second.do_something();
    println!("calls seen by either handle: {}", first.calls());
}

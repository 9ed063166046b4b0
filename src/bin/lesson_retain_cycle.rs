use practice_lessons::lessons::retain_cycle::{run_strong_example, run_weak_example, DropLog};

fn main() {
    practice_lessons::init_logging();

    println!("=== Weak back edge ===");
    let log = DropLog::new();
    run_weak_example(&log);
    println!("Dropped: {:?}", log.entries());

    println!("\n=== Strong back edge ===");
    let log = DropLog::new();
    let pair = run_strong_example(&log);
    println!("Outside handles gone, strong counts: {:?}", pair.strong_counts());
    println!("Dropped: {:?}", log.entries());

    pair.break_cycle();
    println!("After breaking the cycle: {:?}", log.entries());
}

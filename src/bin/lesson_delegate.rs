use practice_lessons::lessons::delegate::{MainScreen, SelectionCallback};

fn main() {
    practice_lessons::init_logging();

    let main_screen = MainScreen::new();
    println!("{}", main_screen.label());

    let selection = main_screen.present_selection();
    for (i, product) in selection.products().iter().enumerate() {
        println!("  [{i}] {product}");
    }
    selection.tap(2);
    println!("{}", main_screen.label());

    let mut callback = SelectionCallback::default();
    callback.register(|name| println!("Callback got: {name}"));
    callback.notify("iPhone");
}

use std::fmt::Display;

/// Returns `a` if it is strictly greater, otherwise `b`.
pub fn higher_value<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

pub fn describe_higher<T: PartialOrd + Display>(a: T, b: T) -> String {
    format!("higher value is the {}", higher_value(a, b))
}

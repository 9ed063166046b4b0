// Working with `Option`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
    pub age: Option<u32>,
}

impl User {
    pub fn sean() -> Self {
        User {
            name: Some("Sean".to_string()),
            age: None,
        }
    }
}

/// `if let`: branch on presence.
pub fn describe_age(user: &User) -> String {
    if let Some(age) = user.age {
        format!("User's age is {age}")
    } else {
        "User did not enter an age".to_string()
    }
}

/// `let ... else`: bail out early when absent.
pub fn check_age(age: Option<u32>) -> Option<&'static str> {
    let Some(age) = age else {
        return None;
    };

    if age > 40 {
        Some("You are old")
    } else {
        None
    }
}

pub fn age_or_default(user: &User) -> u32 {
    user.age.unwrap_or(0)
}

pub fn name_or_default(user: &User) -> &str {
    user.name.as_deref().unwrap_or("no name")
}

/// Unwraps the age.
///
/// # Panics
///
/// Panics when the user has no age. Prefer the functions above.
pub fn force_age(user: &User) -> u32 {
    user.age.expect("user has no age")
}

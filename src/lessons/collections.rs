// filter / map / fold over a small app portfolio.
// Each adapter is shorthand for a for loop.

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct IndieApp {
    pub name: String,
    pub monthly_price: f64,
    pub users: u32,
}

impl IndieApp {
    fn new(name: &str, monthly_price: f64, users: u32) -> Self {
        Self {
            name: name.to_string(),
            monthly_price,
            users,
        }
    }
}

pub fn portfolio() -> Vec<IndieApp> {
    vec![
        IndieApp::new("Creator View", 11.99, 4356),
        IndieApp::new("FitHero", 0.00, 1756),
        IndieApp::new("Buckets", 3.99, 7598),
        IndieApp::new("Connect Four", 1.99, 34081),
    ]
}

// ============================================================================
// Filter
// ============================================================================

pub fn free_apps(apps: &[IndieApp]) -> Vec<&IndieApp> {
    apps.iter().filter(|app| app.monthly_price == 0.0).collect()
}

pub fn high_user_apps(apps: &[IndieApp]) -> Vec<&IndieApp> {
    apps.iter().filter(|app| app.users > 5000).collect()
}

pub fn premium_apps(apps: &[IndieApp]) -> Vec<&IndieApp> {
    apps.iter().filter(|app| app.monthly_price > 5.0).collect()
}

// ============================================================================
// Map
// ============================================================================

pub fn sorted_names(apps: &[IndieApp]) -> Vec<&str> {
    apps.iter().map(|app| app.name.as_str()).sorted().collect()
}

pub fn increased_prices(apps: &[IndieApp]) -> Vec<f64> {
    apps.iter().map(|app| app.monthly_price * 1.5).collect()
}

// ============================================================================
// Fold
// ============================================================================

pub fn sum(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0, |acc, n| acc + n)
}

/// Folds with subtraction from a starting value of 10: `((10 - 3) - 5) - ...`
pub fn difference_fold(numbers: &[i32]) -> i32 {
    numbers.iter().fold(10, |acc, n| acc - n)
}

pub fn total_users(apps: &[IndieApp]) -> u64 {
    apps.iter().fold(0, |acc, app| acc + u64::from(app.users))
}

/// Chained map + sum. Reads fine here; long chains get hard to follow.
pub fn recurring_revenue(apps: &[IndieApp]) -> f64 {
    apps.iter()
        .map(|app| app.monthly_price * f64::from(app.users))
        .sum()
}

// ============================================================================
// Compact map / flat map
// ============================================================================

pub fn compact(values: &[Option<i32>]) -> Vec<i32> {
    values.iter().flatten().copied().collect()
}

pub fn flatten(rows: &[Vec<i32>]) -> Vec<i32> {
    rows.iter().flat_map(|row| row.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(apps: &[&'a IndieApp]) -> Vec<&'a str> {
        apps.iter().map(|app| app.name.as_str()).collect()
    }

    #[test]
    fn test_filters() {
        let apps = portfolio();
        assert_eq!(names(&free_apps(&apps)), vec!["FitHero"]);
        assert_eq!(names(&high_user_apps(&apps)), vec!["Buckets", "Connect Four"]);
        assert_eq!(names(&premium_apps(&apps)), vec!["Creator View"]);
    }

    #[test]
    fn test_sorted_names() {
        assert_eq!(
            sorted_names(&portfolio()),
            vec!["Buckets", "Connect Four", "Creator View", "FitHero"]
        );
    }

    #[test]
    fn test_increased_prices() {
        let prices = increased_prices(&portfolio());
        assert_eq!(prices.len(), 4);
        assert!((prices[0] - 17.985).abs() < 1e-9);
        assert_eq!(prices[1], 0.0);
    }

    #[test]
    fn test_folds() {
        let numbers = [3, 5, 9, 12];
        assert_eq!(sum(&numbers), 29);
        assert_eq!(difference_fold(&numbers), -19);
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn test_total_users() {
        assert_eq!(total_users(&portfolio()), 47791);
    }

    #[test]
    fn test_recurring_revenue() {
        let expected = 11.99 * 4356.0 + 3.99 * 7598.0 + 1.99 * 34081.0;
        assert!((recurring_revenue(&portfolio()) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_compact_and_flatten() {
        assert_eq!(compact(&[Some(2), Some(3), None]), vec![2, 3]);
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(flatten(&grid), (1..=9).collect::<Vec<_>>());
    }
}

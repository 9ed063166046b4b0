use practice_lessons::lessons::collections::*;

fn main() {
    let apps = portfolio();

    println!("=== filter ===");
    println!("free:    {:?}", free_apps(&apps).iter().map(|a| &a.name).collect::<Vec<_>>());
    println!("popular: {:?}", high_user_apps(&apps).iter().map(|a| &a.name).collect::<Vec<_>>());
    println!("premium: {:?}", premium_apps(&apps).iter().map(|a| &a.name).collect::<Vec<_>>());

    println!("\n=== map ===");
    println!("names:  {:?}", sorted_names(&apps));
    println!("prices: {:?}", increased_prices(&apps));

    println!("\n=== fold ===");
    let numbers = [3, 5, 9, 12];
    println!("sum:          {}", sum(&numbers));
    println!("10 - ...:     {}", difference_fold(&numbers));
    println!("total users:  {}", total_users(&apps));
    println!("monthly:      {:.2}", recurring_revenue(&apps));

    println!("\n=== flatten ===");
    println!("{:?}", compact(&[Some(2), Some(3), None]));
    println!("{:?}", flatten(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]));
}

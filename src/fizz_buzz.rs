/// `"Fizz Buzz"` for multiples of 15, `"Fizz"` for 3, `"Buzz"` for 5, else the number.
pub fn fizz_buzz(n: u64) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "Fizz Buzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}

use chrono::Utc;
use skpapi::{SuResult, Tm};

fn main() {
    let now = Tm::from(Utc::now());
    println!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} (yday {})",
        now.full_year(),
        now.tm_mon + 1,
        now.tm_mday,
        now.tm_hour,
        now.tm_min,
        now.tm_sec,
        now.tm_yday
    );

    for result in SuResult::ALL {
        println!("{:>2} {:<30} {}", result.code(), result.name(), result);
    }
}

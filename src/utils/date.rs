use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

//! JSON response envelopes.
//!
//! Key strings (including their trailing colons and spaces) are part of the
//! public surface and are reproduced byte-for-byte.

use playlens_clean::GenreUser;
use serde_json::{Value, json};

pub fn userdata(total_price: f64, percentage: f64) -> Value {
    json!({
        "Money spent:": total_price,
        "Recommendation percentage": percentage,
    })
}

pub fn countreviews(num_users: usize, percentage: f64) -> Value {
    json!({
        "Number of users:": num_users,
        "Recommendation percentage": percentage,
    })
}

pub fn genre(rank: usize) -> Value {
    json!({ "rank_number: ": rank })
}

pub fn userforgenre(genre_name: &str, top_users: Option<Vec<GenreUser>>) -> Value {
    match top_users {
        Some(users) => json!({ "Top users: ": users }),
        None => json!({ "Top users: ": format!("No data found for genre '{genre_name}'") }),
    }
}

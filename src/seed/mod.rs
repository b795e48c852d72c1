//! Demo data: three fixed users, each with a month of random
//! appointments. Generation tracks which dates are taken so the
//! seeded book always satisfies the all-day exclusivity rule.

use std::collections::HashSet;

use anyhow::Result;
use chrono::{Duration, Utc};
use rand::Rng;
use tokio_rusqlite::Connection;

use crate::appointments::{AppointmentData, create_appointment, db as appointment_db};
use crate::identity::{User, create_user, find_user};

pub const DEMO_USERS: &[(&str, &str)] = &[
    ("alice", "alice123"),
    ("bob", "bob123"),
    ("carol", "carol123"),
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Emily", "Chris", "Katie", "Michael", "Laura", "David", "Sarah",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Johnson", "Brown", "Davis", "Wilson", "Taylor", "Clark", "Lewis", "Walker",
];

const APPOINTMENTS_PER_USER: usize = 20;

/// A date up to a month ahead of today, in `YYYY-MM-DD` form.
fn random_date() -> String {
    let offset = rand::thread_rng().gen_range(0..31);
    (Utc::now().date_naive() + Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}

fn random_item<'a>(items: &[&'a str]) -> &'a str {
    items[rand::thread_rng().gen_range(0..items.len())]
}

/// Create the demo users (skipping ones that already exist) and, if
/// the appointment book is empty, fill it with fake appointments.
/// Running it again against a seeded database changes nothing.
pub async fn seed_demo_data(db: &Connection) -> Result<()> {
    let users = ensure_demo_users(db).await?;

    let existing = db
        .call(|conn| Ok(appointment_db::count_all(conn)?))
        .await?;
    if existing > 0 {
        println!("Appointments already exist in the database.");
        return Ok(());
    }

    println!("No appointments found. Generating fake appointments...");
    for user in &users {
        generate_fake_appointments(db, user).await;
        println!(
            "Generated {} appointments for user: {}",
            APPOINTMENTS_PER_USER, user.username
        );
    }

    Ok(())
}

async fn ensure_demo_users(db: &Connection) -> Result<Vec<User>> {
    let mut users = Vec::new();

    for (username, password) in DEMO_USERS {
        if let Some(user) = find_user(db, username).await? {
            println!("User {} already exists.", username);
            users.push(user);
            continue;
        }

        let user = create_user(db, username, password).await?;
        println!("Created user: {}", username);
        users.push(user);
    }

    Ok(users)
}

async fn generate_fake_appointments(db: &Connection, user: &User) {
    let mut used_dates = HashSet::new();
    let mut all_day_dates = HashSet::new();

    for i in 0..APPOINTMENTS_PER_USER {
        let all_day = i % 4 == 0;

        let mut date = random_date();
        if all_day {
            // An all-day appointment needs a date with nothing on it
            while used_dates.contains(&date) {
                date = random_date();
            }
            all_day_dates.insert(date.clone());
        } else {
            // A regular appointment only needs to dodge all-day dates
            while all_day_dates.contains(&date) {
                date = random_date();
            }
        }
        used_dates.insert(date.clone());

        let data = AppointmentData {
            date,
            first_name: random_item(FIRST_NAMES).to_string(),
            last_name: random_item(LAST_NAMES).to_string(),
            all_day,
        };

        if let Err(err) = create_appointment(db, Some(&user.id), &data).await {
            eprintln!("Error inserting appointment: {}", err);
        }
    }
}

use chrono::{NaiveDate, TimeDelta};
use rand::Rng;

use crate::{
    generate::Generator,
    records::{Role, User},
};

/// Birth dates are staggered by account number so that each account has a
/// different (but stable) age.
fn birth_date(year: i32, n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, (n % 12) + 1, (n % 28) + 1)
        .expect("month is in 1..=12 and day is in 1..=28")
}

impl<R: Rng> Generator<R> {
    /// Creators first, then admins. Ids follow insertion order.
    pub fn generate_users(&mut self) -> Vec<User> {
        let span = tracing::span!(tracing::Level::INFO, "generate_users");
        let _guard = span.enter();

        let mut users = Vec::with_capacity(
            (self.config.creators + self.config.admins) as usize,
        );

        for i in 1..=self.config.creators {
            users.push(User {
                id: users.len() as i64 + 1,
                username: format!("test_creator_{i}@example.com"),
                password_hash: self.catalog.password_hash.clone(),
                birth_date: birth_date(1980 + 2 * i as i32, i),
                role: Role::Creator,
                created_at: self.now
                    - TimeDelta::days(365 - 30 * i as i64),
            });
        }

        for i in 1..=self.config.admins {
            users.push(User {
                id: users.len() as i64 + 1,
                username: format!("test_admin_{i}@example.com"),
                password_hash: self.catalog.password_hash.clone(),
                birth_date: birth_date(1985 + i as i32, i),
                role: Role::Admin,
                created_at: self.now
                    - TimeDelta::days(300 - 30 * i as i64),
            });
        }

        tracing::debug!("Generated {} users", users.len());

        users
    }
}

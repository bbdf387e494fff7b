//! Diesel table definitions for the employee and salary tables.
//!
//! These describe the schema the service reads from. The service never
//! creates or migrates these tables.

diesel::table! {
    /// Employee identity records.
    ///
    /// `national_number` is unique and is the external lookup key.
    users (id) {
        /// Primary key.
        id -> Int8,
        /// Display name.
        username -> Varchar,
        /// External identifier, unique across rows.
        national_number -> Varchar,
        /// Contact e-mail address.
        email -> Varchar,
        /// Contact phone number.
        phone -> Varchar,
        /// Whether the employee is currently active.
        is_active -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Monthly salary records, one row per employee and month.
    salaries (id) {
        /// Primary key.
        id -> Int8,
        /// Calendar year.
        year -> Int4,
        /// Calendar month, expected in `1..=12`.
        month -> Int4,
        /// Gross amount paid.
        salary -> Float8,
        /// Owning employee (`users.id`).
        user_id -> Int8,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(salaries -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(salaries, users);

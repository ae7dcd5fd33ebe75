//! Diesel schema for task persistence.

diesel::table! {
    /// Owner-scoped task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier, fixed at creation.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Task lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with embedded user snapshots.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Task description.
        #[max_length = 500]
        description -> Varchar,
        /// Lifecycle status wire string.
        #[max_length = 20]
        status -> Varchar,
        /// Priority wire string.
        #[max_length = 10]
        priority -> Varchar,
        /// Identifier of the assigned user, indexed for lookups.
        assigned_user_id -> Uuid,
        /// Snapshot of the assigned user.
        assigned_user -> Jsonb,
        /// Snapshot of the creating user.
        created_by -> Jsonb,
        /// Due date.
        due_date -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 100]
        name -> Varchar,
        /// Normalised, unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Argon2id hash in PHC string form.
        password_hash -> Text,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Issued bearer-token sessions.
    sessions (token) {
        /// Opaque bearer token.
        #[max_length = 64]
        token -> Varchar,
        /// Owning user.
        user_id -> Uuid,
        /// Issue timestamp.
        issued_at -> Timestamptz,
        /// Expiry timestamp.
        expires_at -> Timestamptz,
    }
}

diesel::joinable!(sessions -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(sessions, users);

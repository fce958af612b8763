//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with owner, priority, and lifecycle status.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> BigInt,
        /// Required task title.
        title -> Text,
        /// Optional task description.
        description -> Nullable<Text>,
        /// Optional task owner.
        owner -> Nullable<Text>,
        /// Priority as canonical text (`High`, `Medium`, `Low`).
        priority -> Text,
        /// Lifecycle status as canonical text (`New`, `In Progress`, `Done`).
        status -> Text,
        /// Creation timestamp as sortable `YYYY-MM-DD HH:MM:SS` text.
        created_at -> Text,
        /// Last update timestamp as sortable `YYYY-MM-DD HH:MM:SS` text.
        updated_at -> Text,
    }
}

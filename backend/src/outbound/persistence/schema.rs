//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; migrations
//! are owned by the wider platform. `diesel print-schema` can regenerate
//! them from a live database.

diesel::table! {
    /// Event registrations, one per user.
    enrollments (id) {
        /// Primary key.
        id -> Int4,
        /// Owning user id, unique per enrollment.
        user_id -> Int4,
        /// Registrant's full name.
        name -> Varchar,
        /// Registrant's contact phone.
        phone -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Catalog of purchasable ticket types.
    ticket_types (id) {
        /// Primary key.
        id -> Int4,
        /// Display name of the package.
        name -> Varchar,
        /// Price in cents.
        price -> Int4,
        /// Whether the event is attended remotely.
        is_remote -> Bool,
        /// Whether the package includes hotel accommodation.
        includes_hotel -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Purchased tickets, one active per enrollment.
    tickets (id) {
        /// Primary key.
        id -> Int4,
        /// Purchased ticket type.
        ticket_type_id -> Int4,
        /// Owning enrollment.
        enrollment_id -> Int4,
        /// Lifecycle status: RESERVED, PAID, or CANCELLED.
        status -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Hotels offered to eligible attendees.
    hotels (id) {
        /// Primary key.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Cover image reference.
        image -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Rooms belonging to hotels.
    rooms (id) {
        /// Primary key.
        id -> Int4,
        /// Display name, typically the room number.
        name -> Varchar,
        /// Number of guests the room sleeps.
        capacity -> Int4,
        /// Owning hotel.
        hotel_id -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tickets -> ticket_types (ticket_type_id));
diesel::joinable!(tickets -> enrollments (enrollment_id));
diesel::joinable!(rooms -> hotels (hotel_id));

diesel::allow_tables_to_appear_in_same_query!(enrollments, ticket_types, tickets, hotels, rooms,);

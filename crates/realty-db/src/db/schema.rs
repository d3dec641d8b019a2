//! Diesel table definitions for the realty schema.
//!
//! One table per entity. Referential actions (CASCADE on sector/property,
//! SET NULL on user) live in the migration DDL.

diesel::table! {
    app_user (id) {
        id -> Uuid,
        #[max_length = 200]
        name -> Varchar,
        #[max_length = 254]
        email -> Varchar,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    contact (id) {
        id -> Uuid,
        user_id -> Nullable<Uuid>,
        #[max_length = 200]
        name -> Varchar,
        #[max_length = 254]
        email -> Varchar,
        #[max_length = 20]
        phone -> Nullable<Varchar>,
        comments -> Nullable<Text>,
        submitted_at -> Timestamptz,
        responded -> Bool,
    }
}

diesel::table! {
    appointment (id) {
        id -> Uuid,
        user_id -> Nullable<Uuid>,
        #[max_length = 200]
        full_name -> Varchar,
        #[max_length = 254]
        email -> Varchar,
        #[max_length = 20]
        phone -> Varchar,
        appointment_date -> Date,
        appointment_time -> Time,
        #[max_length = 50]
        appointment_type -> Varchar,
        message -> Nullable<Text>,
        #[max_length = 20]
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    contact_inquiry (id) {
        id -> Uuid,
        user_id -> Nullable<Uuid>,
        #[max_length = 200]
        name -> Varchar,
        #[max_length = 254]
        email -> Varchar,
        message -> Text,
        #[max_length = 100]
        services_interested -> Nullable<Varchar>,
        consent_given -> Bool,
        submitted_at -> Timestamptz,
        responded -> Bool,
        ip_address -> Nullable<Inet>,
    }
}

diesel::table! {
    sector (id) {
        id -> Uuid,
        #[max_length = 50]
        name -> Varchar,
        #[max_length = 50]
        slug -> Varchar,
    }
}

diesel::table! {
    property (id) {
        id -> Uuid,
        sector_id -> Uuid,
        #[max_length = 200]
        title -> Varchar,
        #[max_length = 200]
        location -> Varchar,
        price -> Numeric,
        description -> Text,
        #[max_length = 200]
        image -> Nullable<Varchar>,
        #[max_length = 10]
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        is_active -> Bool,
    }
}

diesel::table! {
    property_inquiry (id) {
        id -> Uuid,
        property_id -> Uuid,
        user_id -> Nullable<Uuid>,
        #[max_length = 200]
        full_name -> Varchar,
        #[max_length = 254]
        email -> Varchar,
        #[max_length = 20]
        phone -> Varchar,
        message -> Text,
        submitted_at -> Timestamptz,
        responded -> Bool,
        ip_address -> Nullable<Inet>,
    }
}

diesel::joinable!(contact -> app_user (user_id));
diesel::joinable!(appointment -> app_user (user_id));
diesel::joinable!(contact_inquiry -> app_user (user_id));
diesel::joinable!(property -> sector (sector_id));
diesel::joinable!(property_inquiry -> property (property_id));
diesel::joinable!(property_inquiry -> app_user (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    app_user,
    contact,
    appointment,
    contact_inquiry,
    sector,
    property,
    property_inquiry,
);

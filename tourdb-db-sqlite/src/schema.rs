///////////////////////////////////////////////////////////////////////
// Reference data
///////////////////////////////////////////////////////////////////////

table! {
    countries (id) {
        id -> Text,
        name -> Text,
        code -> Text,
    }
}

table! {
    cities (id) {
        id -> Text,
        name -> Text,
        country -> Text,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
    }
}

table! {
    sites (id) {
        id -> Text,
        name -> Text,
        city -> Text,
        country -> Text,
        site_type -> Text,
        description -> Text,
        lat -> Double,
        lng -> Double,
        image_url -> Text,
        qr_code -> Text,
    }
}

table! {
    dishes (id) {
        id -> Text,
        name -> Text,
        country -> Text,
        site -> Text,
        description -> Text,
        price -> Double,
        image_url -> Text,
    }
}

table! {
    famous_people (id) {
        id -> Text,
        name -> Text,
        last_name -> Nullable<Text>,
        city_of_birth -> Text,
        country_of_origin -> Text,
        category -> Text,
        description -> Text,
        image_url -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// User-generated content
///////////////////////////////////////////////////////////////////////

table! {
    famous_person_tags (id) {
        id -> Text,
        user -> Text,
        famous_person -> Text,
        tag -> Text,
        created_at -> BigInt,
        photo_url -> Text,
        lat -> Double,
        lng -> Double,
    }
}

table! {
    visits (id) {
        id -> Text,
        user -> Text,
        site -> Text,
        method -> Text,
        photo_url -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        email -> Text,
        password -> Text,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    countries,
    cities,
    sites,
    dishes,
    famous_people,
    famous_person_tags,
    visits,
    users,
);

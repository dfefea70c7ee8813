diesel::table! {
    category (category_id) {
        category_id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    product (product_id) {
        product_id -> Int4,
        name -> Varchar,
        price -> Numeric,
        category_id -> Int4,
    }
}

diesel::table! {
    inventory (inventory_id) {
        inventory_id -> Int4,
        product_id -> Int4,
        quantity -> Int4,
    }
}

diesel::joinable!(product -> category (category_id));
diesel::joinable!(inventory -> product (product_id));

diesel::allow_tables_to_appear_in_same_query!(
    category,
    product,
    inventory,
);

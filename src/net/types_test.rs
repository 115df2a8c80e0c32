use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_uppercase_names() {
    let role: Role = serde_json::from_str("\"PHARMACIST\"").unwrap();
    assert_eq!(role, Role::Pharmacist);
    let role: Role = serde_json::from_str("\"USER\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn role_unrecognized_value_is_unknown() {
    let role: Role = serde_json::from_str("\"DELIVERY\"").unwrap();
    assert_eq!(role, Role::Unknown);
    assert!(!role.is_privileged());
    assert!(!role.is_customer());
}

#[test]
fn role_privilege_and_customer_sets_are_disjoint() {
    for role in [Role::Customer, Role::User, Role::Admin, Role::Pharmacist, Role::Unknown] {
        assert!(!(role.is_privileged() && role.is_customer()), "{role:?}");
    }
    assert!(Role::Admin.is_privileged());
    assert!(Role::Pharmacist.is_privileged());
    assert!(Role::Customer.is_customer());
    assert!(Role::User.is_customer());
}

#[test]
fn user_without_role_defaults_to_unknown() {
    let user: User = serde_json::from_value(serde_json::json!({"id": 4})).unwrap();
    assert_eq!(user.role, Role::Unknown);
    assert_eq!(user.full_name, None);
}

// =============================================================
// Ids
// =============================================================

#[test]
fn ids_accept_numeric_strings() {
    let conv: Conversation =
        serde_json::from_value(serde_json::json!({"id": "12", "fullName": "Dr. Grey", "role": "PHARMACIST"})).unwrap();
    assert_eq!(conv.id, 12);
    assert_eq!(conv.full_name.as_deref(), Some("Dr. Grey"));
}

#[test]
fn ids_reject_non_numeric_strings() {
    let res = serde_json::from_value::<Conversation>(serde_json::json!({"id": "abc"}));
    assert!(res.is_err());
}

#[test]
fn chat_message_reads_camel_case_fields() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "id": 1,
        "senderId": 2,
        "receiverId": 3,
        "message": "hello",
        "createdAt": "2024-05-01T10:20:30"
    }))
    .unwrap();
    assert_eq!(msg.sender_id, 2);
    assert_eq!(msg.receiver_id, 3);
    assert_eq!(msg.created_at, "2024-05-01T10:20:30");
}

#[test]
fn chat_message_null_text_fields_decode_empty() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "id": 1,
        "senderId": 2,
        "receiverId": 3,
        "message": null,
        "createdAt": null
    }))
    .unwrap();
    assert_eq!(msg.message, "");
    assert_eq!(msg.created_at, "");
}

#[test]
fn outgoing_message_serializes_receiver_id() {
    let body = OutgoingMessage { receiver_id: 9, message: "hi".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"receiverId": 9, "message": "hi"})
    );
}

// =============================================================
// Products
// =============================================================

#[test]
fn product_optional_fields_default_to_none() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Paracetamol",
        "description": "500mg",
        "price": 4.5,
        "stockQuantity": 20
    }))
    .unwrap();
    assert_eq!(product.stock_quantity, 20);
    assert_eq!(product.category, None);
    assert_eq!(product.image_url, None);
}

#[test]
fn product_null_fields_do_not_fail_the_list() {
    let products: Vec<Product> = serde_json::from_str(
        r#"[
            {"id": 1, "name": "Aspirin", "description": null, "price": 2.5, "stockQuantity": 4},
            {"id": 2, "name": "Zinc", "description": "Tablets", "price": null, "stockQuantity": null},
            {"id": 3, "name": null, "description": "Syrup", "price": 6.0, "stockQuantity": 1}
        ]"#,
    )
    .unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].description, "");
    assert!(products[1].price.abs() < f64::EPSILON);
    assert_eq!(products[1].stock_quantity, 0);
    assert_eq!(products[2].name, "");
}

#[test]
fn product_payload_omits_empty_optionals() {
    let payload = ProductPayload {
        name: "Ibuprofen".to_owned(),
        description: "200mg".to_owned(),
        price: 3.25,
        stock_quantity: 7,
        category: Some("Pain Relief".to_owned()),
        manufacturer: None,
        image_url: None,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "name": "Ibuprofen",
            "description": "200mg",
            "price": 3.25,
            "stockQuantity": 7,
            "category": "Pain Relief"
        })
    );
}

// =============================================================
// Dashboard stats
// =============================================================

#[test]
fn stats_response_accepts_wrapped_shape() {
    let resp: StatsResponse = serde_json::from_value(serde_json::json!({
        "stats": {"totalProducts": 5, "totalOrders": 2, "pendingPrescriptions": 1, "activeUsers": 9}
    }))
    .unwrap();
    assert_eq!(
        resp.into_stats(),
        DashboardStats { total_products: 5, total_orders: 2, pending_prescriptions: 1, active_users: 9 }
    );
}

#[test]
fn stats_response_accepts_flat_shape_with_missing_fields() {
    let resp: StatsResponse =
        serde_json::from_value(serde_json::json!({"totalProducts": 5, "activeUsers": null})).unwrap();
    assert_eq!(
        resp.into_stats(),
        DashboardStats { total_products: 5, ..DashboardStats::default() }
    );
}

#[test]
fn stats_response_null_wrapper_falls_back_to_flat() {
    let resp: StatsResponse =
        serde_json::from_value(serde_json::json!({"stats": null, "totalOrders": 3})).unwrap();
    assert_eq!(resp.into_stats().total_orders, 3);
}

#[test]
fn stats_response_rejects_null_body() {
    assert!(serde_json::from_value::<StatsResponse>(serde_json::Value::Null).is_err());
}

#[test]
fn counts_accept_integral_floats() {
    let stats: DashboardStats = serde_json::from_value(serde_json::json!({"totalOrders": 12.0})).unwrap();
    assert_eq!(stats.total_orders, 12);
}

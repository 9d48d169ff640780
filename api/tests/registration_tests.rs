// tests/registration_tests.rs
// End-to-end checks of the registration rule tables against raw payloads

use api::validation::rules::{self, CAPTAIN_REGISTRATION_RULES, USER_REGISTRATION_RULES};
use serde_json::{json, Value};
use shared::{RegisterCaptainRequest, RegisterUserRequest, VehicleType};

fn valid_captain_payload() -> Value {
    json!({
        "fullname": {"firstname": "Amitabh", "lastname": "Verma"},
        "email": "amitabh@example.com",
        "password": "secret123",
        "vehicle": {
            "color": "black",
            "plate": "MH 12 AB 1234",
            "capacity": 4,
            "vehicleType": "car"
        }
    })
}

fn valid_user_payload() -> Value {
    json!({
        "fullname": {"firstname": "Priya"},
        "email": "priya@example.com",
        "password": "secret123"
    })
}

#[test]
fn valid_captain_payload_produces_no_violations() {
    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &valid_captain_payload());
    assert!(errors.is_empty(), "unexpected violations: {:?}", errors);
}

#[test]
fn valid_user_payload_produces_no_violations() {
    let errors = rules::apply(USER_REGISTRATION_RULES, &valid_user_payload());
    assert!(errors.is_empty(), "unexpected violations: {:?}", errors);
}

#[test]
fn short_firstname_is_the_only_violation() {
    // Scenario: every other field valid, firstname two characters
    let mut payload = valid_captain_payload();
    payload["fullname"]["firstname"] = json!("Jo");

    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "fullname.firstname");
    assert_eq!(
        errors[0].message,
        "Firstname must be at least 3 characters long"
    );
}

#[test]
fn malformed_email_is_reported() {
    let mut payload = valid_captain_payload();
    payload["email"] = json!("not-an-email");

    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);

    assert!(errors
        .iter()
        .any(|e| e.field == "email" && e.message == "Please enter a valid email"));
}

#[test]
fn unknown_vehicle_type_is_reported() {
    let mut payload = valid_captain_payload();
    payload["vehicle"]["vehicleType"] = json!("bike");

    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);
    assert!(errors
        .iter()
        .any(|e| e.field == "vehicle.vehicleType"
            && e.message == "Vehicle type must be car, motorcycle, or auto"));
}

#[test]
fn every_allowed_vehicle_type_passes() {
    for vehicle_type in ["car", "motorcycle", "auto"] {
        let mut payload = valid_captain_payload();
        payload["vehicle"]["vehicleType"] = json!(vehicle_type);

        let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);
        assert!(
            errors.is_empty(),
            "vehicle type {:?} should pass, got {:?}",
            vehicle_type,
            errors
        );
    }
}

#[test]
fn all_violations_are_aggregated_without_short_circuit() {
    let payload = json!({
        "fullname": {"firstname": "Jo"},
        "email": "nope",
        "password": "short",
        "vehicle": {
            "color": "re",
            "plate": "x",
            "capacity": 0,
            "vehicleType": "bike"
        }
    });

    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);

    // One entry per failing rule, in declaration order
    assert_eq!(errors.len(), CAPTAIN_REGISTRATION_RULES.len());
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "fullname.firstname",
            "email",
            "password",
            "vehicle.color",
            "vehicle.plate",
            "vehicle.capacity",
            "vehicle.vehicleType",
        ]
    );
}

#[test]
fn empty_payload_fails_every_rule() {
    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &json!({}));
    assert_eq!(errors.len(), CAPTAIN_REGISTRATION_RULES.len());

    let errors = rules::apply(USER_REGISTRATION_RULES, &json!({}));
    assert_eq!(errors.len(), USER_REGISTRATION_RULES.len());
}

#[test]
fn validation_is_idempotent() {
    let mut payload = valid_captain_payload();
    payload["password"] = json!("short");
    payload["vehicle"]["capacity"] = json!(0);

    let first = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);
    let second = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);

    assert_eq!(first, second);
}

#[test]
fn wrong_json_types_fail_their_rules() {
    let mut payload = valid_captain_payload();
    payload["fullname"]["firstname"] = json!(12345);
    payload["vehicle"]["capacity"] = json!("4");

    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["fullname.firstname", "vehicle.capacity"]);
}

#[test]
fn fractional_capacity_fails_the_integer_rule() {
    let mut payload = valid_captain_payload();
    payload["vehicle"]["capacity"] = json!(2.5);

    let errors = rules::apply(CAPTAIN_REGISTRATION_RULES, &payload);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "vehicle.capacity");
    assert_eq!(errors[0].message, "Capacity must be at least 1");
}

#[test]
fn passing_payload_deserializes_into_typed_request() {
    let req: RegisterCaptainRequest =
        serde_json::from_value(valid_captain_payload()).expect("typed deserialization");

    assert_eq!(req.fullname.firstname, "Amitabh");
    assert_eq!(req.vehicle.capacity, 4);
    assert_eq!(req.vehicle.vehicle_type, VehicleType::Car);

    let req: RegisterUserRequest =
        serde_json::from_value(valid_user_payload()).expect("typed deserialization");
    assert_eq!(req.fullname.lastname, None);
}

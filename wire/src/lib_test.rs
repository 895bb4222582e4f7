use super::*;
use serde_json::json;

fn sample_coordinates() -> Coordinates {
    let mut coords = Coordinates::new();
    coords.insert("Area1", AreaEncoding::Rect([[10.0, 20.0], [40.0, 60.0]]));
    coords.insert("Area2", AreaEncoding::Circle([50.0, 50.0], 15.0));
    coords
}

#[test]
fn rect_encoding_serializes_as_corner_pair() {
    let value = serde_json::to_value(AreaEncoding::Rect([[10.0, 20.0], [40.0, 60.0]])).expect("serialize");
    assert_eq!(value, json!([[10.0, 20.0], [40.0, 60.0]]));
}

#[test]
fn circle_encoding_serializes_as_center_then_radius() {
    let value = serde_json::to_value(AreaEncoding::Circle([50.0, 50.0], 15.0)).expect("serialize");
    assert_eq!(value, json!([[50.0, 50.0], 15.0]));
}

#[test]
fn encoding_kind_is_inferred_from_array_shape() {
    let rect: AreaEncoding = serde_json::from_str("[[1,2],[3,4]]").expect("rect");
    let circle: AreaEncoding = serde_json::from_str("[[1,2],3]").expect("circle");
    assert_eq!(rect, AreaEncoding::Rect([[1.0, 2.0], [3.0, 4.0]]));
    assert_eq!(circle, AreaEncoding::Circle([1.0, 2.0], 3.0));
}

#[test]
fn encoding_rejects_unknown_shape() {
    assert!(serde_json::from_str::<AreaEncoding>("[1,2,3]").is_err());
    assert!(serde_json::from_str::<AreaEncoding>("{\"x\":1}").is_err());
}

#[test]
fn coordinates_serialize_in_insertion_order() {
    let mut coords = Coordinates::new();
    for i in (1..=12).rev() {
        coords.insert(format!("Area{i}"), AreaEncoding::Circle([0.0, 0.0], f64::from(i)));
    }
    let text = serde_json::to_string(&coords).expect("serialize");
    let first = text.find("\"Area12\"").expect("Area12 present");
    let last = text.find("\"Area1\"").expect("Area1 present");
    assert!(first < last, "insertion order lost: {text}");
}

#[test]
fn coordinates_deserialize_preserves_order() {
    let coords: Coordinates =
        serde_json::from_str(r#"{"Area2":[[1,1],2],"Area1":[[0,0],[1,1]]}"#).expect("deserialize");
    let labels: Vec<&str> = coords.iter().map(|(l, _)| l).collect();
    assert_eq!(labels, ["Area2", "Area1"]);
}

#[test]
fn coordinates_reject_duplicate_labels() {
    let err = serde_json::from_str::<Coordinates>(r#"{"Area1":[[0,0],1],"Area1":[[0,0],2]}"#)
        .expect_err("duplicate should fail");
    assert!(err.to_string().contains("duplicate area label"));
}

#[test]
fn coordinates_insert_replaces_existing_label() {
    let mut coords = sample_coordinates();
    coords.insert("Area1", AreaEncoding::Circle([1.0, 1.0], 1.0));
    assert_eq!(coords.len(), 2);
    assert_eq!(coords.get("Area1"), Some(&AreaEncoding::Circle([1.0, 1.0], 1.0)));
}

#[test]
fn marks_request_matches_endpoint_body() {
    let request = MarksRequest { coordinates: sample_coordinates() };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        value,
        json!({
            "coordinates": {
                "Area1": [[10.0, 20.0], [40.0, 60.0]],
                "Area2": [[50.0, 50.0], 15.0],
            }
        })
    );
}

#[test]
fn marks_response_parses_server_body() {
    let body = json!({
        "message": SAVED_MESSAGE,
        "data": { "id": 7, "name": "parachute.jpg", "coordinates": "{}" },
    });
    let resp: MarksResponse = serde_json::from_value(body).expect("deserialize");
    assert_eq!(resp.message, SAVED_MESSAGE);
    assert_eq!(resp.data.id, 7);
    assert_eq!(resp.data.name, "parachute.jpg");
}

#[test]
fn error_response_carries_detail_object() {
    let body = json!({ "message": SAVE_FAILED_MESSAGE, "error": { "kind": "database" } });
    let resp: ErrorResponse = serde_json::from_value(body).expect("deserialize");
    assert_eq!(resp.error["kind"], "database");
}

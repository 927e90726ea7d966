use super::*;

#[test]
fn success_body_decodes_to_response() {
    let body = r##"{"packed_boxes":[{"name":"a","x":0,"y":0,"z":0,"width":1,"length":2,"height":3}],"placement_status":[{"box":"a","status":"Placed","color":"#112233"}]}"##;
    let resp = decode_packing_response(200, true, body).unwrap();
    assert_eq!(resp.packed_boxes.len(), 1);
    assert_eq!(resp.placement_status[0].box_name, "a");
}

#[test]
fn rejection_carries_service_message() {
    let err = decode_packing_response(400, false, r#"{"error":"Please provide at least one box."}"#).unwrap_err();
    assert_eq!(err.user_message(), "Please provide at least one box.");
}

#[test]
fn rejection_without_payload_uses_status() {
    let err = decode_packing_response(502, false, "<html>bad gateway</html>").unwrap_err();
    assert_eq!(err, ServiceError::Status(502));
    assert_eq!(err.user_message(), scene::wire::GENERIC_SERVICE_FAILURE);
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let err = decode_packing_response(200, true, "{\"boxes\": 3}").unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)));
}

#[test]
fn typeface_status_failure_is_reported() {
    assert_eq!(decode_typeface(404, false, "").unwrap_err(), GlyphError::Status(404));
}

#[test]
fn typeface_body_is_parsed() {
    let face = decode_typeface(200, true, r#"{"familyName":"T","resolution":1000,"glyphs":{}}"#).unwrap();
    assert_eq!(face.family_name, "T");
}


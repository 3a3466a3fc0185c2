//! Parameter map regression test
//!
//! JSON operation requests as the playground sends them.

use pixlab::{Grid, Operation, ParamDefaults, ParamValue, apply};
use pixlab_test::RegParams;

#[test]
fn params_reg() {
    let mut rp = RegParams::new("params");

    // --- Test 1: Mixed parameter types ---
    let op: Operation = serde_json::from_str(
        r#"{"id": "custom-padding",
            "parameters": {"paddingSize": 2, "customValue": 16711680, "label": "red", "live": true}}"#,
    )
    .expect("parse operation");
    rp.check(op.id == "custom-padding", "id");
    rp.compare_values(2.0, op.number("paddingSize").unwrap_or(-1.0), 0.0);
    rp.check(
        op.parameters.get("label") == Some(&ParamValue::Text("red".into())),
        "text value",
    );
    rp.check(
        op.parameters.get("live") == Some(&ParamValue::Bool(true)),
        "bool value",
    );

    let grid = Grid::new_filled(3, 3, 9).unwrap();
    let out = apply(&grid, &op).unwrap();
    rp.compare_values(7.0, out.width() as f64, 0.0);
    rp.compare_values(76.0, out.get_pixel(0, 0) as f64, 0.0);
    rp.compare_values(9.0, out.get_pixel(3, 3) as f64, 0.0);

    // --- Test 2: Missing parameter map ---
    let op: Operation = serde_json::from_str(r#"{"id": "histogram"}"#).expect("parse");
    rp.check(op.parameters.is_empty(), "parameters default to empty");

    // --- Test 3: Round trip ---
    let op = Operation::new("contrast")
        .with_param("factor", 0.75)
        .with_param("note", "x");
    let json = serde_json::to_string(&op).expect("serialize");
    let back: Operation = serde_json::from_str(&json).expect("deserialize");
    rp.check(back == op, "operation round trip");

    // --- Test 4: Defaults deserialize with partial overrides ---
    let d: ParamDefaults = serde_json::from_str(r#"{"paddingSize": 4}"#).expect("defaults");
    rp.compare_values(4.0, d.padding_size as f64, 0.0);
    rp.compare_values(1.5, d.factor, 0.0);
    rp.compare_values(0x808080 as f64, d.custom_value as f64, 0.0);

    // --- Test 5: null, arrays and objects fall back to defaults ---
    let op: Operation = serde_json::from_str(
        r#"{"id": "zero-padding", "parameters": {"paddingSize": null, "extra": [1, {"a": 2}]}}"#,
    )
    .expect("parse operation with null");
    rp.check(op.number("paddingSize").is_none(), "null is not numeric");
    let out = apply(&grid, &op).unwrap();
    // Default padding of 10 on each side
    rp.compare_values(23.0, out.width() as f64, 0.0);
    let op: Operation = serde_json::from_str(
        r#"{"id": "contrast", "parameters": {"factor": {"value": 3}}}"#,
    )
    .expect("parse operation with object");
    let flat = Grid::new_filled(2, 2, 100).unwrap();
    // Default factor 1.5: (100 - 128) * 1.5 + 128 = 86
    rp.compare_values(86.0, apply(&flat, &op).unwrap().get_pixel(0, 0) as f64, 0.0);

    assert!(rp.cleanup(), "params regression test failed");
}

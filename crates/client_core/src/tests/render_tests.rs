use serde_json::json;

use super::*;

#[test]
fn names_are_joined_with_comma_space() {
    assert_eq!(
        render_response(&json!(["Al-Fatihah", "Al-Kawthar"])),
        "Al-Fatihah, Al-Kawthar"
    );
}

#[test]
fn numbers_render_in_order() {
    assert_eq!(render_response(&json!([1, 2, 3])), "1, 2, 3");
}

#[test]
fn single_name_has_no_separator() {
    assert_eq!(render_response(&json!(["An-Nas"])), "An-Nas");
}

#[test]
fn empty_array_shows_no_results_message() {
    assert_eq!(render_response(&json!([])), NO_RESULTS_MESSAGE);
}

#[test]
fn non_array_responses_show_no_results_message() {
    assert_eq!(render_response(&json!({ "error": "x" })), NO_RESULTS_MESSAGE);
    assert_eq!(render_response(&json!("Al-Fatihah")), NO_RESULTS_MESSAGE);
    assert_eq!(render_response(&Value::Null), NO_RESULTS_MESSAGE);
}

#[test]
fn mixed_elements_use_plain_string_coercion() {
    assert_eq!(
        render_response(&json!([null, true, 2.0, 2.5, [1, null, "a"], { "k": 1 }])),
        "null, true, 2, 2.5, 1,,a, [object Object]"
    );
}

#[test]
fn whole_floats_print_in_full_below_1e21() {
    assert_eq!(display_value(&json!(1e16)), "10000000000000000");
    assert_eq!(display_value(&json!(1e20)), "100000000000000000000");
    assert_eq!(display_value(&json!(-3.0)), "-3");
    assert_eq!(display_value(&json!(-0.0)), "0");
}

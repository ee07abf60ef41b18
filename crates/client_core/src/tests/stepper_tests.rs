use super::*;

#[test]
fn default_stepper_starts_at_one_hundred() {
    let stepper = Stepper::default();
    assert_eq!(stepper.text(), "100");
    assert_eq!(stepper.value(), Some(100));
    assert_eq!((stepper.min(), stepper.max()), (1, 1000));
}

#[test]
fn increment_adds_one_everywhere_below_max() {
    for start in DEFAULT_MIN_VERSES..DEFAULT_MAX_VERSES {
        let mut stepper = Stepper::new(start, DEFAULT_MIN_VERSES, DEFAULT_MAX_VERSES);
        stepper.increment();
        assert_eq!(stepper.value(), Some(start + 1), "from {start}");
    }
}

#[test]
fn decrement_subtracts_one_everywhere_above_min() {
    for start in DEFAULT_MIN_VERSES + 1..=DEFAULT_MAX_VERSES {
        let mut stepper = Stepper::new(start, DEFAULT_MIN_VERSES, DEFAULT_MAX_VERSES);
        stepper.decrement();
        assert_eq!(stepper.value(), Some(start - 1), "from {start}");
    }
}

#[test]
fn increment_then_decrement_restores_every_interior_value() {
    for start in DEFAULT_MIN_VERSES..DEFAULT_MAX_VERSES {
        let mut stepper = Stepper::new(start, DEFAULT_MIN_VERSES, DEFAULT_MAX_VERSES);
        stepper.increment();
        stepper.decrement();
        assert_eq!(stepper.text(), start.to_string(), "from {start}");
    }
}

#[test]
fn stepping_never_leaves_bounds() {
    let mut stepper = Stepper::new(3, 1, 5);
    for _ in 0..10 {
        stepper.increment();
        assert!((1..=5).contains(&stepper.value().unwrap_or_default()));
    }
    assert_eq!(stepper.value(), Some(5));
    for _ in 0..10 {
        stepper.decrement();
        assert!((1..=5).contains(&stepper.value().unwrap_or_default()));
    }
    assert_eq!(stepper.value(), Some(1));
}

#[test]
fn decrement_stops_at_minimum() {
    let mut stepper = Stepper::new(1, 1, 1000);
    stepper.decrement();
    assert_eq!(stepper.value(), Some(1));
}

#[test]
fn increment_stops_at_maximum() {
    let mut stepper = Stepper::new(1000, 1, 1000);
    stepper.increment();
    assert_eq!(stepper.value(), Some(1000));
}

#[test]
fn stepping_from_blank_treats_field_as_zero() {
    let mut stepper = Stepper::new(10, 1, 1000);
    stepper.set_text("");
    stepper.increment();
    assert_eq!(stepper.text(), "1");

    stepper.set_text("abc");
    stepper.decrement();
    assert_eq!(stepper.text(), "1");
}

#[test]
fn stepping_reclamps_typed_out_of_range_values() {
    let mut stepper = Stepper::new(10, 1, 50);
    stepper.set_text("900");
    stepper.decrement();
    assert_eq!(stepper.text(), "50");

    stepper.set_text("-7");
    stepper.increment();
    assert_eq!(stepper.text(), "1");
}

#[test]
fn typed_text_is_kept_verbatim_until_stepped() {
    let mut stepper = Stepper::default();
    stepper.text_mut().push_str("abc");
    assert_eq!(stepper.text(), "100abc");
    assert_eq!(stepper.value(), Some(100));
}

#[test]
fn constructor_orders_bounds_and_clamps_initial_value() {
    let stepper = Stepper::new(5, 20, 10);
    assert_eq!((stepper.min(), stepper.max()), (10, 20));
    assert_eq!(stepper.text(), "10");
}

#[test]
fn parse_leading_int_reads_like_a_form_field() {
    assert_eq!(parse_leading_int("12"), Some(12));
    assert_eq!(parse_leading_int("  12abc"), Some(12));
    assert_eq!(parse_leading_int("+7"), Some(7));
    assert_eq!(parse_leading_int("-4"), Some(-4));
    assert_eq!(parse_leading_int("3.9"), Some(3));
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
}

pub const DEFAULT_MIN_VERSES: i64 = 1;
pub const DEFAULT_MAX_VERSES: i64 = 1000;
pub const DEFAULT_VERSES: i64 = 100;

/// Reads the leading integer of `raw`, the way form fields are read.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit precedes that point. Values
/// too large for `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    });
    Some(match (magnitude, negative) {
        (Some(value), false) => value,
        (Some(value), true) => -value,
        (None, false) => i64::MAX,
        (None, true) => i64::MIN,
    })
}

/// Bounded numeric field driven by increment and decrement buttons.
///
/// The field text stays editable so a user can type into it; the stepper
/// only guarantees the bounds after one of its own actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stepper {
    text: String,
    min: i64,
    max: i64,
}

impl Stepper {
    pub fn new(initial: i64, min: i64, max: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            text: initial.clamp(min, max).to_string(),
            min,
            max,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn value(&self) -> Option<i64> {
        parse_leading_int(&self.text)
    }

    pub fn increment(&mut self) {
        self.step(1);
    }

    pub fn decrement(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: i64) {
        let current = self.value().unwrap_or(0);
        let next = current.saturating_add(delta).clamp(self.min, self.max);
        self.text = next.to_string();
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(DEFAULT_VERSES, DEFAULT_MIN_VERSES, DEFAULT_MAX_VERSES)
    }
}

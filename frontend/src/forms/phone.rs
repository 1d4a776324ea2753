pub const CALLING_CODE: &str = "998";
pub const PREFIX: &str = "+998";
pub const SUBSCRIBER_DIGITS: usize = 9;
pub const FULL_LENGTH: usize = PREFIX.len() + SUBSCRIBER_DIGITS;

pub fn normalize(raw: &str) -> String {
    // A value that starts with `+` but lost part of the prefix came from an edit the
    // key guard missed (select-all + backspace, IME keyboards), so start over
    let raw = if raw.starts_with('+') && !raw.starts_with(PREFIX) { PREFIX } else { raw };

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let subscriber = digits.strip_prefix(CALLING_CODE).unwrap_or(&digits);

    let mut phone = String::with_capacity(FULL_LENGTH);
    phone.push_str(PREFIX);
    phone.extend(subscriber.chars().take(SUBSCRIBER_DIGITS));
    phone
}

pub fn is_complete(phone: &str) -> bool {
    phone.len() >= FULL_LENGTH
}

pub fn prefill(value: Option<&str>) -> String {
    match value {
        Some(v) if v.starts_with(PREFIX) => normalize(v),
        _ => PREFIX.to_string(),
    }
}

/// `caret` is the input's `selectionStart`.
pub fn blocks_key(key: &str, caret: u32) -> bool {
    let prefix_len = PREFIX.len() as u32;
    if caret <= prefix_len && matches!(key, "Backspace" | "Delete" | "ArrowLeft") {
        return true;
    }
    let mut chars = key.chars();
    let single_digit = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit());
    caret < prefix_len && single_digit
}

// +998*****4567, for logs
pub fn masked(phone: &str) -> String {
    let visible = 4;
    let count = phone.chars().count();
    if count <= PREFIX.len() + visible {
        return phone.to_string();
    }
    phone
        .chars()
        .enumerate()
        .map(|(i, c)| if i >= PREFIX.len() && i < count - visible { '*' } else { c })
        .collect()
}

/// Normalizes a phone number to the canonical `+91 XXXXXXXXXX` form.
///
/// The caller is expected to have run `validation::validate_phone` first;
/// this function does no validation of its own and will happily produce a
/// malformed result for garbage input.
pub fn format_phone(phone: &str) -> String {
    // Drop whitespace, hyphens and parentheses
    let stripped: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    // Strip at most one country-code or trunk prefix, checked in this order
    let rest = stripped
        .strip_prefix("+91")
        .or_else(|| stripped.strip_prefix("91"))
        .or_else(|| stripped.strip_prefix("0"))
        .unwrap_or(&stripped);

    // Keep only the last 10 characters in case of stray leading digits
    let len = rest.chars().count();
    let subscriber: String = rest.chars().skip(len.saturating_sub(10)).collect();

    format!("+91 {}", subscriber)
}

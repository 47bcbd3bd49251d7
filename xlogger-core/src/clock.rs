use chrono::Local;

/// Current local time in the `ctime` layout, e.g. `Wed Jun 30 21:49:08 1993`.
pub fn now() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}

#[test]
fn test_now_layout() {
    let re = regex::Regex::new(r"^[A-Z][a-z]{2} [A-Z][a-z]{2} [ \d]\d \d{2}:\d{2}:\d{2} \d{4}$")
        .unwrap();
    let now = now();
    assert!(re.is_match(&now), "unexpected timestamp {now:?}");
}

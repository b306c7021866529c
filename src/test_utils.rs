pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

pub fn proptest_cases(default: u32) -> u32 {
    match env_u32("PROPTEST_CASES") {
        Some(value) => value.max(1),
        None => default.max(1),
    }
}

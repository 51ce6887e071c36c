use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.static_dir, None);
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("PRESS_API_BASE_URL", "http://localhost:5000/"),
        ("PRESS_STATIC_DIR", "public"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
    assert_eq!(cfg.static_dir, Some(PathBuf::from("public")));
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::Config { var: "PORT", .. }));
}

#[test]
fn api_base_url_needs_http_scheme() {
    let err = HostConfig::from_lookup(lookup(&[("PRESS_API_BASE_URL", "orange-press-be.vercel.app")])).unwrap_err();
    assert!(matches!(err, HostError::Config { var: "PRESS_API_BASE_URL", .. }));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " "), ("PRESS_API_BASE_URL", ""), ("PRESS_STATIC_DIR", "  ")]))
        .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.static_dir, None);
}

#[test]
fn from_env_reads_process_environment() {
    // Only this test touches the process environment.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("PRESS_API_BASE_URL");
        std::env::remove_var("PRESS_STATIC_DIR");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);

    unsafe { std::env::remove_var("PORT") };
}

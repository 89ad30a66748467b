pub mod time;

/// Whether a backend URL points at this machine.
pub fn is_local_backend(url: &str) -> bool {
    ["localhost", "127.0.0.1", "[::1]"]
        .iter()
        .any(|host| url.contains(host))
}

/// Development builds are the ones compiled against a local `BACKEND_URL`.
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL").is_some_and(is_local_backend)
}

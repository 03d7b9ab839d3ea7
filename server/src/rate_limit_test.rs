use super::*;

const PER_CLIENT: usize = 3;
const GLOBAL: usize = 5;

fn limiter() -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit: PER_CLIENT,
        per_client_window: Duration::from_secs(60),
        global_limit: GLOBAL,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter();
    let now = Instant::now();

    for i in 0..PER_CLIENT {
        assert!(rl.check_and_record_at("acme", now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at("acme", now),
        Err(RateLimitError::PerClientExceeded { limit: PER_CLIENT, window_secs: 60 })
    );
}

#[test]
fn per_client_limits_are_independent() {
    let rl = limiter();
    let now = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at("acme", now).unwrap();
    }
    assert!(rl.check_and_record_at("globex", now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter();
    let now = Instant::now();

    // Use distinct clients to avoid hitting per-client limit first.
    for i in 0..GLOBAL {
        let key = format!("client-{i}");
        assert!(rl.check_and_record_at(&key, now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("one-more", now),
        Err(RateLimitError::GlobalExceeded { .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter();
    let start = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at("acme", start).unwrap();
    }
    assert!(rl.check_and_record_at("acme", start).is_err());

    let later = start + Duration::from_secs(61);
    assert!(rl.check_and_record_at("acme", later).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter();
    let now = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at("acme", now).unwrap();
    }
    for _ in 0..10 {
        assert!(rl.check_and_record_at("acme", now).is_err());
    }
    // Only the accepted requests count toward the global window.
    for i in 0..(GLOBAL - PER_CLIENT) {
        assert!(rl.check_and_record_at(&format!("other-{i}"), now).is_ok());
    }
}

#[test]
fn idle_tenants_are_dropped_once_their_window_empties() {
    let rl = limiter();
    let start = Instant::now();

    rl.check_and_record_at("acme", start).unwrap();
    rl.check_and_record_at("globex", start).unwrap();

    let later = start + Duration::from_secs(61);
    rl.check_and_record_at("initech", later).unwrap();

    let inner = rl.inner.lock().unwrap();
    let tracked: Vec<&str> = inner.client_requests.keys().map(String::as_str).collect();
    assert_eq!(tracked, vec!["initech"]);
}

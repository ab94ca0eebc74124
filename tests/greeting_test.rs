use std::thread;

use native_lib::{native_greeting, NATIVE_GREETING};

#[test]
fn test_greeting_is_non_empty() {
    assert!(!native_greeting().is_empty());
}

#[test]
fn test_greeting_matches_literal_on_every_call() {
    for _ in 0..100 {
        assert_eq!(native_greeting(), "Hello from native C++");
    }
}

#[test]
fn test_concurrent_callers_observe_identical_literal() {
    let handles: Vec<_> = (0..2)
        .map(|_| thread::spawn(|| native_greeting().to_string()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), NATIVE_GREETING);
    }
}

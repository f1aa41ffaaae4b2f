//! Integration Tests for the Public API
//!
//! Exercises TimedMap and base conversion through the crate root exports.

use std::sync::Arc;
use std::time::Duration;

use timebase::{
    big_int_power, convert_base, convert_base_with, Alphabet, BaseBound, Config, Error, TimedMap,
};
use tokio::time::sleep;

// == Helper Functions ==

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn session_map() -> TimedMap<String, Vec<u8>> {
    TimedMap::new(Some(ms(100)))
}

// == TimedMap Tests ==

#[tokio::test(start_paused = true)]
async fn test_ttl_expiry_removes_key() {
    let map = TimedMap::new(None);
    map.set("k".to_string(), "v".to_string(), Some(ms(50)));

    assert!(map.has("k"));

    sleep(ms(55)).await;
    assert!(!map.has("k"));
    assert_eq!(map.get("k"), None);
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_second_window_governs() {
    let map = TimedMap::new(None);

    map.set("k", "v1", Some(ms(50)));
    sleep(ms(30)).await;
    map.set("k", "v2", Some(ms(50)));

    sleep(ms(30)).await;
    assert_eq!(map.get("k"), Some("v2"));

    sleep(ms(30)).await;
    assert_eq!(map.get("k"), None);
}

#[tokio::test(start_paused = true)]
async fn test_delete_before_expiry() {
    let map = TimedMap::new(None);
    map.set("k", "v", Some(ms(50)));
    map.set("other", "w", None);

    assert!(map.delete("k"));
    assert!(!map.delete("k"));

    sleep(ms(60)).await;
    assert_eq!(map.len(), 1);
    assert_eq!(map.stats().expirations, 0);
}

#[tokio::test(start_paused = true)]
async fn test_clear_empties_and_cancels() {
    let map = TimedMap::new(None);
    map.set(1, "a", Some(ms(10)));
    map.set(2, "b", Some(ms(20)));
    map.set(3, "c", Some(ms(30)));

    map.clear();
    assert_eq!(map.len(), 0);

    // Reuse the same keys without TTL; stale timers must not remove them
    map.set(1, "x", None);
    map.set(2, "y", None);
    sleep(ms(40)).await;

    assert_eq!(map.len(), 2);
    assert_eq!(map.stats().expirations, 0);
}

#[tokio::test(start_paused = true)]
async fn test_default_ttl_from_map() {
    let map = session_map();
    map.set("session".to_string(), vec![1, 2, 3], None);

    assert_eq!(map.expires_in("session"), Some(ms(100)));

    sleep(ms(101)).await;
    assert!(map.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_no_ttl_never_expires() {
    let map = TimedMap::new(None);
    map.set("k", "v", None);

    sleep(Duration::from_secs(24 * 60 * 60)).await;
    assert_eq!(map.get("k"), Some("v"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_across_tasks() {
    let map = Arc::new(TimedMap::new(Some(ms(500))));

    let mut handles = Vec::new();
    for worker in 0..8u32 {
        let map = map.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..50u32 {
                map.set(worker * 100 + i, i, None);
                if i % 3 == 0 {
                    map.delete(&(worker * 100 + i));
                }
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Every third key is deleted, leaving 33 of 50 per worker
    assert_eq!(map.len(), 8 * 33);

    sleep(ms(1500)).await;
    assert!(map.is_empty());
    let stats = map.stats();
    assert_eq!(stats.pending_timers, 0);
    assert_eq!(stats.expirations, 8 * 33);
}

#[tokio::test(start_paused = true)]
async fn test_map_from_config() {
    let config = Config {
        default_ttl_ms: Some(10),
        alphabet: None,
    };
    let map = TimedMap::from_config(&config);
    map.set("k", 1, None);

    sleep(ms(11)).await;
    assert!(!map.has("k"));
}

// == Base Conversion Tests ==

#[test]
fn test_known_conversions() {
    assert_eq!(convert_base("FF", 16, 2).unwrap(), "11111111");
    assert_eq!(convert_base("255", 10, 16).unwrap(), "FF");
    assert_eq!(convert_base("1010", 2, 10).unwrap(), "10");
}

#[test]
fn test_zero_inputs() {
    assert_eq!(convert_base("0", 2, 36).unwrap(), "0");
    assert_eq!(convert_base("00", 10, 16).unwrap(), "0");
    assert_eq!(convert_base("", 10, 16).unwrap(), "0");
}

#[test]
fn test_base_bounds() {
    assert!(matches!(
        convert_base("1", 1, 10),
        Err(Error::OutOfRangeBase {
            bound: BaseBound::Source,
            ..
        })
    ));
    assert!(matches!(
        convert_base("1", 10, 100),
        Err(Error::OutOfRangeBase {
            bound: BaseBound::Output,
            ..
        })
    ));
}

#[test]
fn test_invalid_digit_is_named() {
    let err = convert_base("19A", 10, 2).unwrap_err();
    assert_eq!(err, Error::InvalidDigit { digit: 'A', base: 10 });
    assert!(err.to_string().contains("'A'"));
}

#[test]
fn test_custom_alphabet_conversion() {
    let dna = Alphabet::new("ACGT").unwrap();
    assert_eq!(convert_base_with("TT", 4, 2, &dna).unwrap(), "CCCC");
    assert_eq!(convert_base_with("", 4, 4, &dna).unwrap(), "A");
}

#[test]
fn test_power_is_exact() {
    let three = num_bigint::BigUint::from(3u32);
    let expected: num_bigint::BigUint = "515377520732011331036461129765621272702107522001"
        .parse()
        .unwrap();
    assert_eq!(big_int_power(&three, 100), expected);
}

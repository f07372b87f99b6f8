//! Property-based tests for timing-free watchdog invariants.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use proptest::prelude::*;
use vigil_test_helpers::ManualExecutor;
use vigil_watchdog::prelude::*;

proptest! {
    #[test]
    fn test_positive_timeouts_validate(timeout_ms in 1u64..60_000) {
        let config = WatchdogConfig::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build();
        prop_assert!(config.is_ok());
    }

    #[test]
    fn test_builder_preserves_fields(
        timeout_ms in 1u64..60_000,
        name in "[a-z][a-z0-9-]{0,30}",
    ) {
        let config = WatchdogConfig::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .thread_name(name.clone())
            .build();
        prop_assert!(config.is_ok());
        let config = config.unwrap();
        prop_assert_eq!(config.timeout, Duration::from_millis(timeout_ms));
        prop_assert_eq!(config.thread_name, name);
    }

    #[test]
    fn test_service_rate_bounded(posted in 0u64..10_000, extra in 0u64..10_000) {
        // Serviced never exceeds posted in a real run.
        let serviced = posted.saturating_sub(extra);
        let stats = WatchdogStats {
            resets_posted: posted,
            resets_serviced: serviced,
            ..Default::default()
        };
        let rate = stats.service_rate();
        prop_assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn test_executor_services_every_post_in_order(count in 0usize..64) {
        let executor = ManualExecutor::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..count {
            let order_clone = order.clone();
            let posted = executor.post(Box::new(move || {
                order_clone.lock().push(i);
            }));
            prop_assert!(posted);
        }

        prop_assert_eq!(executor.pending(), count);
        prop_assert_eq!(executor.run_pending(), count);
        prop_assert_eq!(executor.pending(), 0);

        let serviced = order.lock().clone();
        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(serviced, expected);
    }

    #[test]
    fn test_closed_executor_rejects_every_post(count in 1usize..64) {
        let executor = ManualExecutor::closed();

        for _ in 0..count {
            prop_assert!(!executor.post(Box::new(|| {})), "closed executor must reject post");
        }
        prop_assert_eq!(executor.pending(), 0);
        prop_assert_eq!(executor.run_pending(), 0);
    }
}

#[test]
fn test_zero_timeout_always_rejected() {
    let config = WatchdogConfig::builder().timeout(Duration::ZERO).build();
    assert!(config.is_err());
}

use super::*;
use std::time::Duration;

fn at(ms: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_millis(ms)
}

mod ttl {
    use super::*;

    #[test]
    fn test_no_deadline_never_expires() {
        assert!(!is_expired(None, None, 0, at(0)));
        assert!(!is_expired(None, None, u64::MAX, at(u64::MAX / 2)));
    }

    #[test]
    fn test_before_deadline_is_alive() {
        assert!(!is_expired(Some(at(1_000)), None, 0, at(999)));
    }

    #[test]
    fn test_deadline_boundary_is_inclusive() {
        assert!(is_expired(Some(at(1_000)), None, 0, at(1_000)));
        assert!(is_ttl_expired(Some(at(1_000)), at(1_000)));
    }

    #[test]
    fn test_after_deadline_is_expired() {
        assert!(is_expired(Some(at(1_000)), None, 0, at(1_001)));
    }
}

mod views {
    use super::*;

    #[test]
    fn test_below_quota_is_alive() {
        assert!(!is_expired(None, Some(3), 2, at(0)));
    }

    #[test]
    fn test_quota_boundary_is_inclusive() {
        assert!(is_expired(None, Some(3), 3, at(0)));
        assert!(is_view_limit_reached(Some(1), 1));
    }

    #[test]
    fn test_over_quota_is_expired() {
        assert!(is_expired(None, Some(3), 10, at(0)));
    }

    #[test]
    fn test_remaining_views_floors_at_zero() {
        assert_eq!(remaining_views(Some(5), 2), Some(3));
        assert_eq!(remaining_views(Some(5), 5), Some(0));
        assert_eq!(remaining_views(Some(5), 9), Some(0));
        assert_eq!(remaining_views(None, 9), None);
    }
}

mod after_view {
    use super::*;

    #[test]
    fn test_view_reaching_quota_is_served() {
        assert!(!is_expired_after_view(None, Some(1), 1, at(0)));
        assert!(!is_expired_after_view(None, Some(3), 3, at(0)));
    }

    #[test]
    fn test_view_past_quota_is_refused() {
        assert!(is_expired_after_view(None, Some(1), 2, at(0)));
        assert!(is_expired_after_view(None, Some(3), 7, at(0)));
    }

    #[test]
    fn test_deadline_still_applies() {
        assert!(is_expired_after_view(Some(at(10)), None, 1, at(10)));
        assert!(!is_expired_after_view(Some(at(10)), None, 1, at(9)));
    }
}

mod combined {
    use super::*;

    #[test]
    fn test_either_condition_alone_is_sufficient() {
        // Quota reached, deadline far away.
        assert!(is_expired(Some(at(10_000)), Some(1), 1, at(0)));
        // Deadline reached, quota untouched.
        assert!(is_expired(Some(at(10_000)), Some(100), 0, at(10_000)));
    }

    #[test]
    fn test_matches_definition_over_grid() {
        let deadlines = [None, Some(at(0)), Some(at(500)), Some(at(1_000))];
        let quotas = [None, Some(1), Some(2), Some(3)];
        let nows = [at(0), at(499), at(500), at(1_000), at(1_001)];

        for expires_at in deadlines {
            for max_views in quotas {
                for view_count in 0..5 {
                    for now in nows {
                        let expected = expires_at.is_some_and(|d| now >= d)
                            || max_views.is_some_and(|m| view_count >= m);
                        assert_eq!(
                            is_expired(expires_at, max_views, view_count, now),
                            expected,
                            "expires_at={expires_at:?} max_views={max_views:?} \
                             view_count={view_count} now={now:?}"
                        );
                    }
                }
            }
        }
    }
}

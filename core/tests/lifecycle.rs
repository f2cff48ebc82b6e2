mod common;

use common::{services, t0};
use pastebin_core::ServiceError;
use pastebin_core::types::NewPaste;
use std::time::Duration;

/// Verify a single-view paste is served once and is gone for both read paths afterwards.
#[test]
fn test_single_view_lifecycle() {
    let (services, _temp) = services();
    for (backend, service) in services {
        let paste = service
            .create(NewPaste::new("burn after reading").with_max_views(1), t0())
            .unwrap();

        let view = service.read_counted(&paste.id, t0()).unwrap();
        assert_eq!(view.content, "burn after reading", "backend {backend}");
        assert_eq!(view.remaining_views, Some(0), "backend {backend}");

        assert!(matches!(
            service.read_counted(&paste.id, t0()),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            service.read_uncounted(&paste.id, t0()),
            Err(ServiceError::NotFound)
        ));
    }
}

/// Verify the TTL deadline is inclusive: alive one millisecond before, gone at the deadline.
#[test]
fn test_ttl_deadline_is_inclusive() {
    let (services, _temp) = services();
    for (backend, service) in services {
        let paste = service
            .create(NewPaste::new("one second").with_ttl_seconds(1), t0())
            .unwrap();

        assert!(
            service
                .read_counted(&paste.id, t0() + Duration::from_millis(999))
                .is_ok(),
            "backend {backend}"
        );
        assert!(matches!(
            service.read_counted(&paste.id, t0() + Duration::from_millis(1_000)),
            Err(ServiceError::NotFound)
        ));
        assert_eq!(
            service.ttl_expired(t0() + Duration::from_millis(1_000)).unwrap(),
            vec![paste.id.clone()],
            "backend {backend}"
        );
    }
}

/// Verify either limit alone expires a paste with both limits set.
#[test]
fn test_first_limit_reached_wins() {
    let (services, _temp) = services();
    for (backend, service) in services {
        let by_views = service
            .create(
                NewPaste::new("views").with_ttl_seconds(3600).with_max_views(2),
                t0(),
            )
            .unwrap();
        service.read_counted(&by_views.id, t0()).unwrap();
        service.read_counted(&by_views.id, t0()).unwrap();
        assert!(
            service.read_uncounted(&by_views.id, t0()).is_err(),
            "backend {backend}"
        );

        let by_time = service
            .create(
                NewPaste::new("time").with_ttl_seconds(10).with_max_views(100),
                t0(),
            )
            .unwrap();
        assert!(
            service
                .read_uncounted(&by_time.id, t0() + Duration::from_secs(10))
                .is_err(),
            "backend {backend}"
        );
    }
}

/// Verify whitespace and control characters survive a round trip untouched.
#[test]
fn test_content_round_trips_verbatim() {
    let (services, _temp) = services();
    for (backend, service) in services {
        let paste = service
            .create(NewPaste::new("hello\tworld\n"), t0())
            .unwrap();

        assert_eq!(
            service.read_counted(&paste.id, t0()).unwrap().content,
            "hello\tworld\n",
            "backend {backend}"
        );
        assert_eq!(
            service.read_uncounted(&paste.id, t0()).unwrap().content,
            "hello\tworld\n",
            "backend {backend}"
        );
    }
}

/// Verify an expired paste and a never-issued id fail the same way.
#[test]
fn test_expired_and_unknown_are_indistinguishable() {
    let (services, _temp) = services();
    for (_backend, service) in services {
        let paste = service
            .create(NewPaste::new("short").with_ttl_seconds(1), t0())
            .unwrap();
        let later = t0() + Duration::from_secs(5);

        let expired = service.read_counted(&paste.id, later).unwrap_err();
        let unknown = service.read_counted("zzzzzzzzzzzz", later).unwrap_err();

        assert!(matches!(expired, ServiceError::NotFound));
        assert!(matches!(unknown, ServiceError::NotFound));
        assert_eq!(expired.to_string(), unknown.to_string());
    }
}

/// Verify the admin listing still reports expired records.
#[test]
fn test_summaries_keep_expired_records() {
    let (services, _temp) = services();
    for (backend, service) in services {
        let paste = service
            .create(NewPaste::new("listed").with_max_views(1), t0())
            .unwrap();
        service.read_counted(&paste.id, t0()).unwrap();

        let summaries = service.summaries(t0()).unwrap();
        assert_eq!(summaries.len(), 1, "backend {backend}");
        assert_eq!(
            summaries[0].to_string(),
            format!("Paste {} - expired - views: 1/1", paste.id),
            "backend {backend}"
        );
    }
}

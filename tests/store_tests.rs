use chrono::{DateTime, Duration, TimeZone, Utc};
use sessionlog::errors::{AppError, StoreWarning};
use sessionlog::models::{SessionKind, SessionRecord};
use sessionlog::store::{
    AppendOutcome, KeyValueStorage, MemoryStorage, RetentionPolicy, STORAGE_KEY, SaveOutcome,
    SessionLogStore, parse_log, serialize_log,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn work(secs: u64) -> SessionRecord {
    SessionRecord::new(secs, SessionKind::Work)
}

#[test]
fn test_append_then_stats_and_export() {
    let mut store = SessionLogStore::new(MemoryStorage::new());

    let outcome = store.append(work(1500)).unwrap();
    assert!(outcome.is_appended());
    assert!(outcome.warning().is_none());

    let stats = store.compute_stats();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.total_duration_seconds, 1500);

    let exported: serde_json::Value = serde_json::from_str(&store.export_as_json().unwrap()).unwrap();
    let arr = exported.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["durationSeconds"], 1500);
    assert_eq!(arr[0]["kind"], "work");
}

#[test]
fn test_disabled_store_suppresses_append() {
    let mut store = SessionLogStore::new(MemoryStorage::new());

    store.set_enabled(false);
    assert_eq!(store.append(work(1500)).unwrap(), AppendOutcome::Suppressed);
    assert!(store.is_empty());
    assert_eq!(store.storage().write_count(), 0);

    store.set_enabled(true);
    assert!(store.append(work(1500)).unwrap().is_appended());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_disabled_store_ignores_invalid_record() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    store.set_enabled(false);

    assert_eq!(store.append(work(0)).unwrap(), AppendOutcome::Suppressed);
}

#[test]
fn test_zero_duration_is_rejected() {
    let mut store = SessionLogStore::new(MemoryStorage::new());

    let err = store.append(work(0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord(_)));
    assert!(store.is_empty());
    assert_eq!(store.storage().write_count(), 0);
}

#[test]
fn test_every_append_is_persisted_before_returning() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    let now = at(2025, 6, 18, 9);

    store.append_at(work(1500), now).unwrap();
    store.append_at(work(300), now).unwrap();

    assert_eq!(store.storage().write_count(), 2);
    assert!(!store.is_dirty());

    let payload = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(parse_log(&payload).unwrap(), store.records());
}

#[test]
fn test_missing_timestamp_defaults_to_now() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    let now = at(2025, 6, 18, 9) + Duration::microseconds(1_234_567);

    store.append_at(work(60), now).unwrap();
    store
        .append_at(work(60).with_timestamp(at(2025, 6, 17, 8)), now)
        .unwrap();

    // clamped to millisecond precision
    assert_eq!(
        store.records()[0].timestamp,
        Some(at(2025, 6, 18, 9) + Duration::milliseconds(1234))
    );
    assert_eq!(store.records()[1].timestamp, Some(at(2025, 6, 17, 8)));
}

#[test]
fn test_round_trip_keeps_order_and_extra_fields() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    let now = at(2025, 6, 18, 12);

    store
        .append_at(
            work(1500)
                .with_timestamp(at(2025, 6, 18, 9))
                .with_extra("task", "Write report")
                .with_extra("round", 3),
            now,
        )
        .unwrap();
    store
        .append_at(
            SessionRecord::new(300, SessionKind::ShortBreak).with_timestamp(at(2025, 6, 18, 10)),
            now,
        )
        .unwrap();
    let before = store.records().to_vec();

    let mut reloaded = SessionLogStore::new(store.into_storage());
    let load = reloaded.load_from_storage();

    assert_eq!(load.loaded, 2);
    assert!(load.warning.is_none());
    assert_eq!(reloaded.records(), before.as_slice());
    assert_eq!(reloaded.records()[0].extra["task"], "Write report");
    assert_eq!(reloaded.records()[0].extra["round"], 3);
}

#[test]
fn test_load_is_idempotent() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            STORAGE_KEY,
            r#"[{"timestamp":"2025-06-18T09:30:00Z","durationSeconds":1500,"kind":"work"}]"#,
        )
        .unwrap();

    let mut store = SessionLogStore::new(storage);
    store.load_from_storage();
    let first = store.records().to_vec();
    store.load_from_storage();

    assert_eq!(store.records(), first.as_slice());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_load_accepts_epoch_millis_and_unknown_kinds() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            STORAGE_KEY,
            r#"[{"timestamp":1750239000000,"durationSeconds":1500,"kind":"deepWork","tag":"x"}]"#,
        )
        .unwrap();

    let mut store = SessionLogStore::new(storage);
    store.load_from_storage();

    let rec = &store.records()[0];
    assert_eq!(rec.timestamp, Some(Utc.with_ymd_and_hms(2025, 6, 18, 9, 30, 0).unwrap()));
    assert_eq!(rec.kind, SessionKind::Other("deepWork".to_string()));

    let written = serialize_log(store.records()).unwrap();
    assert!(written.contains(r#""timestamp":"2025-06-18T09:30:00Z""#));
    assert!(written.contains(r#""kind":"deepWork""#));
    assert!(written.contains(r#""tag":"x""#));
}

#[test]
fn test_missing_key_and_blank_payload_load_empty() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    let load = store.load_from_storage();
    assert_eq!(load.loaded, 0);
    assert!(load.warning.is_none());

    store.storage_mut().set(STORAGE_KEY, "  ").unwrap();
    let load = store.load_from_storage();
    assert_eq!(load.loaded, 0);
    assert!(load.warning.is_none());
}

#[test]
fn test_corrupt_payload_yields_empty_log_and_warning() {
    let mut storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, r#"{"not":"an array"}"#).unwrap();

    let mut store = SessionLogStore::new(storage);
    let load = store.load_from_storage();

    assert_eq!(load.loaded, 0);
    assert!(matches!(load.warning, Some(StoreWarning::CorruptPayload(_))));
    assert!(store.is_empty());
}

#[test]
fn test_failed_write_keeps_record_in_memory() {
    let mut store = SessionLogStore::new(MemoryStorage::with_quota(20));

    let outcome = store.append(work(1500)).unwrap();
    let AppendOutcome::Appended { save, .. } = &outcome else {
        panic!("expected append");
    };
    assert!(matches!(save, SaveOutcome::Failed(StoreWarning::WriteFailed(_))));
    assert_eq!(store.len(), 1);
    assert!(store.is_dirty());
    assert!(store.storage().get(STORAGE_KEY).unwrap().is_none());

    // once storage recovers the next append writes the whole log
    store.storage_mut().set_quota(None);
    assert!(store.append(work(300)).unwrap().warning().is_none());

    let payload = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(parse_log(&payload).unwrap().len(), 2);
}

#[test]
fn test_max_records_evicts_oldest_first() {
    let mut store =
        SessionLogStore::new(MemoryStorage::new()).with_retention(RetentionPolicy::MaxRecords(3));
    let now = at(2025, 6, 18, 9);

    let mut evicted = Vec::new();
    for secs in 1..=5 {
        match store.append_at(work(secs), now).unwrap() {
            AppendOutcome::Appended { evicted: n, .. } => evicted.push(n),
            AppendOutcome::Suppressed => panic!("unexpected suppression"),
        }
    }

    assert_eq!(evicted, vec![0, 0, 0, 1, 1]);
    let kept: Vec<u64> = store.records().iter().map(|r| r.duration_seconds).collect();
    assert_eq!(kept, vec![3, 4, 5]);
}

#[test]
fn test_back_dated_record_is_slotted_chronologically() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    let now = at(2025, 6, 18, 12);

    store.append_at(work(1).with_timestamp(at(2025, 6, 18, 9)), now).unwrap();
    store.append_at(work(2).with_timestamp(at(2025, 6, 18, 11)), now).unwrap();
    store.append_at(work(3).with_timestamp(at(2025, 6, 18, 10)), now).unwrap();
    store.append_at(work(4).with_timestamp(at(2025, 6, 18, 10)), now).unwrap();

    let order: Vec<u64> = store.records().iter().map(|r| r.duration_seconds).collect();
    assert_eq!(order, vec![1, 3, 4, 2]);

    let stats = store.compute_stats();
    assert_eq!(stats.last_timestamp, Some(at(2025, 6, 18, 11)));
    assert_eq!(stats.recent[0].duration_seconds, 2);
}

#[test]
fn test_max_records_with_back_dated_record_evicts_the_oldest() {
    let mut store =
        SessionLogStore::new(MemoryStorage::new()).with_retention(RetentionPolicy::MaxRecords(2));
    let now = at(2025, 6, 18, 12);

    store
        .append_at(work(1).with_timestamp(now - Duration::hours(2)), now)
        .unwrap();
    store
        .append_at(work(2).with_timestamp(now - Duration::hours(1)), now)
        .unwrap();
    let outcome = store
        .append_at(work(3).with_timestamp(now - Duration::days(30)), now)
        .unwrap();

    assert!(matches!(outcome, AppendOutcome::Appended { evicted: 1, .. }));
    let kept: Vec<u64> = store.records().iter().map(|r| r.duration_seconds).collect();
    assert_eq!(kept, vec![1, 2]);
}

#[test]
fn test_max_age_days_evicts_back_dated_record_outside_window() {
    let mut store =
        SessionLogStore::new(MemoryStorage::new()).with_retention(RetentionPolicy::MaxAgeDays(7));
    let now = at(2025, 6, 18, 9);

    store
        .append_at(work(100).with_timestamp(now - Duration::hours(1)), now)
        .unwrap();
    let outcome = store
        .append_at(work(200).with_timestamp(now - Duration::days(60)), now)
        .unwrap();
    store
        .append_at(work(300).with_timestamp(now - Duration::days(3)), now)
        .unwrap();

    assert!(matches!(outcome, AppendOutcome::Appended { evicted: 1, .. }));
    let kept: Vec<u64> = store.records().iter().map(|r| r.duration_seconds).collect();
    assert_eq!(kept, vec![300, 100]);

    let cutoff = now - Duration::days(7);
    assert!(store.records().iter().all(|r| r.timestamp.is_some_and(|ts| ts >= cutoff)));

    let payload = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(parse_log(&payload).unwrap(), store.records());
}

#[test]
fn test_default_retention_is_500_records() {
    let store = SessionLogStore::new(MemoryStorage::new());
    assert_eq!(store.retention(), RetentionPolicy::MaxRecords(500));
    assert_eq!(store.display_limit(), 10);
}

#[test]
fn test_max_age_days_drops_expired_records() {
    let now = at(2025, 6, 18, 9);
    let old = vec![
        SessionRecord::new(100, SessionKind::Work),
        work(200).with_timestamp(now - Duration::days(10)),
        work(300).with_timestamp(now - Duration::days(8)),
        work(400).with_timestamp(now - Duration::days(1)),
    ];

    let mut storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, &serialize_log(&old).unwrap()).unwrap();

    let mut store =
        SessionLogStore::new(storage).with_retention(RetentionPolicy::MaxAgeDays(7));
    assert_eq!(store.load_from_storage().loaded, 4);

    let outcome = store.append_at(work(500), now).unwrap();
    assert_eq!(
        outcome,
        AppendOutcome::Appended {
            evicted: 3,
            save: SaveOutcome::Saved {
                bytes: store.compute_stats().approx_bytes
            },
        }
    );
    let kept: Vec<u64> = store.records().iter().map(|r| r.duration_seconds).collect();
    assert_eq!(kept, vec![400, 500]);
}

#[test]
fn test_stats_recent_list_is_newest_first_and_bounded() {
    let mut store = SessionLogStore::new(MemoryStorage::new()).with_display_limit(2);
    let now = at(2025, 6, 18, 12);

    store
        .append_at(work(1500).with_timestamp(at(2025, 6, 18, 9)), now)
        .unwrap();
    store
        .append_at(
            SessionRecord::new(300, SessionKind::ShortBreak).with_timestamp(at(2025, 6, 18, 10)),
            now,
        )
        .unwrap();
    store
        .append_at(work(1500).with_timestamp(at(2025, 6, 18, 11)), now)
        .unwrap();

    let stats = store.compute_stats();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total_duration_seconds, 3300);
    assert_eq!(stats.first_timestamp, Some(at(2025, 6, 18, 9)));
    assert_eq!(stats.last_timestamp, Some(at(2025, 6, 18, 11)));
    assert_eq!(
        stats.approx_bytes,
        serialize_log(store.records()).unwrap().len()
    );

    let recent: Vec<_> = stats.recent.iter().map(|r| r.timestamp).collect();
    assert_eq!(recent, vec![Some(at(2025, 6, 18, 11)), Some(at(2025, 6, 18, 10))]);
}

#[test]
fn test_empty_stats() {
    let store = SessionLogStore::new(MemoryStorage::new());
    let stats = store.compute_stats();

    assert!(stats.is_empty());
    assert_eq!(stats.total_duration_seconds, 0);
    assert_eq!(stats.approx_bytes, 2);
    assert!(stats.first_timestamp.is_none());
    assert!(stats.recent.is_empty());
}

#[test]
fn test_clear_persists_empty_log() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    store.append(work(1500)).unwrap();

    assert!(store.clear().is_saved());
    assert!(store.is_empty());
    assert_eq!(
        store.storage().get(STORAGE_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_csv_export_has_header_and_one_row_per_record() {
    let mut store = SessionLogStore::new(MemoryStorage::new());
    let empty = store.export_as_csv().unwrap();
    assert_eq!(
        empty.lines().collect::<Vec<_>>(),
        vec!["timestamp,kind,duration_seconds,duration,extra"]
    );

    store
        .append_at(
            work(1500)
                .with_timestamp(at(2025, 6, 18, 9))
                .with_extra("task", "a, b"),
            at(2025, 6, 18, 9),
        )
        .unwrap();

    let csv = store.export_as_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        r#"2025-06-18T09:00:00Z,work,1500,25m 00s,"{""task"":""a, b""}""#
    );
}

use std::sync::Arc;

use causeway::{
    RenderMode, ResultExt, SharedError, causes, collect_fields, has_cause, has_cause_instance,
    has_matching_cause, new_cause, render, with_field, with_fields,
};
use causeway_test_utils::{
    Classified, DbError, QueryError, RetriesExhausted, init_tracing_once, refused,
};
use serde_json::json;

#[test]
fn scenario_db_failure_with_fields() {
    let _ = init_tracing_once();
    let e1 = new_cause(DbError::Unavailable, refused());
    assert_eq!(e1.to_string(), "database unavailable: connection refused");
    assert!(has_cause(&e1, &DbError::Unavailable));

    let e2 = with_field(with_field(e1, "retry", 3), "host", "db1");
    let fields = collect_fields(&e2);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["retry"], json!(3));
    assert_eq!(fields["host"], json!("db1"));
    assert!(has_cause(&e2, &DbError::Unavailable));
}

#[test]
fn sentinel_variants_compare_by_value() {
    let _ = init_tracing_once();
    let err = new_cause(
        DbError::Corrupted {
            table: "users".into(),
        },
        refused(),
    );
    assert!(has_cause(
        &err,
        &DbError::Corrupted {
            table: "users".into()
        }
    ));
    assert!(!has_cause(
        &err,
        &DbError::Corrupted {
            table: "orders".into()
        }
    ));
    assert!(has_matching_cause(&err, |c| matches!(
        c.downcast_ref::<DbError>(),
        Some(DbError::Corrupted { .. })
    )));
}

#[test]
fn foreign_cause_provider_is_walked() {
    let _ = init_tracing_once();
    let classified = Classified {
        kind: DbError::Timeout,
        source: refused(),
    };
    assert!(has_cause(&classified, &DbError::Timeout));
    assert!(!has_cause(&classified, &DbError::Unavailable));

    let candidates: Vec<String> = causes(&classified).map(|c| c.to_string()).collect();
    assert_eq!(candidates, ["query timed out"]);

    let outer = new_cause(classified, QueryError::new("SELECT 1"));
    assert!(has_cause(&outer, &DbError::Timeout));
    assert!(!has_matching_cause(&outer, |c| c.is::<std::io::Error>()));
}

#[test]
fn foreign_origin_provider_is_followed_from_the_root() {
    let _ = init_tracing_once();
    let exhausted = RetriesExhausted {
        attempts: 3,
        last: Arc::new(new_cause(DbError::Timeout, refused())),
    };
    let err = with_field(new_cause(exhausted, QueryError::new("SELECT 1")), "host", "db1");
    assert!(has_cause(&err, &DbError::Timeout));

    let candidates: Vec<String> = causes(&err).map(|c| c.to_string()).collect();
    assert_eq!(candidates, ["retries exhausted after 3 attempts", "query timed out"]);
}

#[test]
fn outer_origins_never_match() {
    let _ = init_tracing_once();
    let chain = new_cause(
        new_cause(DbError::Unavailable, refused()),
        DbError::Timeout,
    );
    assert!(has_cause(&chain, &DbError::Unavailable));
    assert!(!has_cause(&chain, &DbError::Timeout));

    let nested = new_cause(DbError::Unavailable, new_cause(DbError::Timeout, refused()));
    assert!(!has_cause(&nested, &DbError::Timeout));

    let direct = new_cause(DbError::Unavailable, refused());
    assert!(!has_matching_cause(&direct, |c| c.is::<std::io::Error>()));
}

#[test]
fn shared_sentinel_matches_by_identity() {
    let _ = init_tracing_once();
    let sentinel: SharedError = Arc::new(DbError::Timeout);
    let err = with_field(new_cause(Arc::clone(&sentinel), refused()), "attempt", 2);
    assert!(has_cause_instance(&err, &*sentinel));
    assert!(!has_cause_instance(&err, &DbError::Timeout));
    assert!(has_cause(&err, &DbError::Timeout));
}

#[test]
fn fields_from_outer_layers_shadow_inner_ones() {
    let _ = init_tracing_once();
    let inner = with_fields(refused(), [("host", json!("db1")), ("port", json!(5432))]);
    let outer = with_fields(inner, [("host", json!("db2")), ("attempt", json!(1))]);
    let fields = collect_fields(&outer);
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["host"], json!("db2"));
    assert_eq!(fields["port"], json!(5432));
    assert_eq!(fields["attempt"], json!(1));
    assert_eq!(outer.to_string(), "connection refused");
}

#[test]
fn detailed_rendering_uses_foreign_verbose_support() {
    let _ = init_tracing_once();
    let err = new_cause(DbError::Timeout, QueryError::new("SELECT 1"));
    assert_eq!(
        render(&err, RenderMode::Detailed).to_string(),
        "query timed out\nquery failed\n  statement: SELECT 1"
    );
    assert_eq!(render(&err, RenderMode::Plain).to_string(), "query timed out: query failed");
    assert_eq!(
        render(&err, RenderMode::Quoted).to_string(),
        "\"query timed out: query failed\""
    );
}

#[test]
fn shared_handles_render_and_walk() {
    let _ = init_tracing_once();
    let shared: SharedError = Arc::new(with_field(
        new_cause(DbError::Unavailable, QueryError::new("SELECT 1")),
        "host",
        "db1",
    ));
    assert!(shared.as_fields_provider().is_some());
    assert!(has_cause(&shared, &DbError::Unavailable));
    assert_eq!(collect_fields(&shared)["host"], json!("db1"));
    assert_eq!(
        render(&shared, RenderMode::Detailed).to_string(),
        "host: db1\ndatabase unavailable\nquery failed\n  statement: SELECT 1"
    );
}

#[test]
fn result_ext_builds_walkable_chains() {
    let _ = init_tracing_once();
    let res: Result<(), std::io::Error> = Err(refused());
    let err = res
        .with_cause(DbError::Unavailable)
        .with_field("host", "db1")
        .with_cause(DbError::Timeout)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "query timed out: database unavailable: connection refused"
    );
    assert!(has_cause(&err, &DbError::Timeout));
    assert!(!has_cause(&err, &DbError::Unavailable));
    // the fields wrapper sits behind an origin, outside the wrap chain
    assert!(collect_fields(&err).is_empty());
}

#[test]
fn wrappers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<causeway::CauseWithOrigin>();
    assert_send_sync::<causeway::WithFields>();
    assert_send_sync::<SharedError>();

    let shared: SharedError = Arc::new(with_field(refused(), "host", "db1"));
    let handle = {
        let shared = Arc::clone(&shared);
        std::thread::spawn(move || collect_fields(&shared))
    };
    let fields = handle.join().expect("thread panicked");
    assert_eq!(fields["host"], json!("db1"));
}

//! End-to-end selection scenarios driven through `Session`.

use tally_engine::{
    format_amount, EngineConfig, LoadOutcome, MemoryStore, PageQuery, RestoreSource, Session,
    StateStore,
};

const SINGLE: &str = r#"[{"desc":"A","value":100,"count":0,"checked":false}]"#;
const CAPPED: &str = r#"[{"desc":"A","value":100,"count":0,"checked":false,"maxCount":2}]"#;
const LIST_B: &str = r#"{"items":[{"desc":"X","value":7},{"desc":"Y","value":3}],
                         "meta":{"formatAsPercent":true,"summaryText":"Summe: ","title":"Crit"}}"#;

fn session_for(search: &str) -> Session {
    let config = EngineConfig::default();
    let query = PageQuery::from_search(search, &config);
    Session::new(config, query)
}

fn load(session: &mut Session, list: Option<&str>, body: &str, store: &mut dyn StateStore) -> LoadOutcome {
    let ticket = match list {
        Some(id) => session.on_list_switch(id).unwrap(),
        None => session.begin_initial_load(),
    };
    session.finish_load(ticket, Ok(body.to_string()), store)
}

#[test]
fn test_check_and_count() {
    let mut store = MemoryStore::new();
    let mut session = session_for("");
    load(&mut session, None, SINGLE, &mut store);

    session.on_toggle(0, true, &mut store);
    session.on_count_input(0, "3");
    session.on_count_commit(0, "3", &mut store);

    assert_eq!(session.formatted_row_total(0).as_deref(), Some("300"));
    assert_eq!(session.formatted_total(), "300");
}

#[test]
fn test_max_count_clamps_field() {
    let mut store = MemoryStore::new();
    let mut session = session_for("");
    load(&mut session, None, CAPPED, &mut store);

    session.on_toggle(0, true, &mut store);
    assert_eq!(session.on_count_input(0, "9").as_deref(), Some("2"));
    assert_eq!(session.formatted_row_total(0).as_deref(), Some("200"));
    for raw in ["", "1", "77", "abc", "-4"] {
        session.on_count_commit(0, raw, &mut store);
        let row = &session.rows()[0];
        assert!(row.count() <= 2);
    }
}

#[test]
fn test_percent_display() {
    assert_eq!(format_amount(12.5, true), "12,5 %");

    let mut store = MemoryStore::new();
    let mut session = session_for("?list=criticalDamage");
    load(&mut session, None, LIST_B, &mut store);
    session.on_toggle(0, true, &mut store);
    session.on_count_commit(0, "2", &mut store);
    assert!(session.display().percent_mode);
    assert_eq!(session.display().summary_label, "Summe: ");
    assert_eq!(session.display().title, "Crit");
    assert_eq!(session.formatted_total(), "14 %");
}

#[test]
fn test_share_link_restores_in_fresh_session() {
    let mut store = MemoryStore::new();
    let mut session = session_for("");
    load(&mut session, None, CAPPED, &mut store);
    session.on_toggle(0, true, &mut store);
    session.on_count_commit(0, "2", &mut store);
    let before = session.formatted_total();

    let url = session.on_share("https://calc.example/tool/index.html?theme=dark").unwrap();
    let search = url.split_once('?').unwrap().1;

    let mut fresh_store = MemoryStore::new();
    let mut fresh = session_for(search);
    let outcome = load(&mut fresh, None, CAPPED, &mut fresh_store);
    assert!(matches!(
        outcome,
        LoadOutcome::Loaded { restored: Some(RestoreSource::SharedLink), .. }
    ));
    assert_eq!(fresh.selection_state(), session.selection_state());
    assert_eq!(fresh.formatted_total(), before);
    // applied shared state lands in the persistent channel too
    assert!(fresh_store.load("tally-state-penetration").is_some());
}

#[test]
fn test_lists_keep_separate_state() {
    let mut store = MemoryStore::new();
    let mut session = session_for("");
    load(&mut session, None, SINGLE, &mut store);
    session.on_toggle(0, true, &mut store);
    session.on_count_commit(0, "5", &mut store);
    let saved_a = session.selection_state();

    load(&mut session, Some("criticalDamage"), LIST_B, &mut store);
    assert_eq!(session.active_list_id(), "criticalDamage");
    session.on_toggle(0, true, &mut store);
    session.on_count_commit(0, "9", &mut store);

    let outcome = load(&mut session, Some("penetration"), SINGLE, &mut store);
    assert!(matches!(
        outcome,
        LoadOutcome::Loaded { restored: Some(RestoreSource::Stored), .. }
    ));
    assert_eq!(session.selection_state(), saved_a);
    assert_eq!(session.formatted_total(), "500");
}

#[test]
fn test_shared_state_applies_once() {
    let mut store = MemoryStore::new();
    let mut origin = session_for("");
    load(&mut origin, None, SINGLE, &mut store);
    origin.on_toggle(0, true, &mut store);
    origin.on_count_commit(0, "1", &mut store);
    let url = origin.on_share("https://calc.example/").unwrap();

    let mut store = MemoryStore::new();
    let mut session = session_for(url.split_once('?').unwrap().1);
    load(&mut session, None, SINGLE, &mut store);
    session.on_count_commit(0, "4", &mut store);

    load(&mut session, Some("criticalDamage"), LIST_B, &mut store);
    load(&mut session, Some("penetration"), SINGLE, &mut store);
    assert_eq!(session.rows()[0].count(), 4);
}

#[test]
fn test_restore_never_adds_rows() {
    let mut store = MemoryStore::new();
    store.save(
        "tally-state-penetration",
        r#"[{"index":0,"checked":true,"count":1},{"index":3,"checked":true,"count":8}]"#,
    );
    let mut session = session_for("");
    load(&mut session, None, SINGLE, &mut store);
    assert_eq!(session.rows().len(), 1);
    assert_eq!(session.grand_total(), 100);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut store = MemoryStore::new();
    let mut session = session_for("");
    load(&mut session, None, SINGLE, &mut store);
    session.on_toggle(0, true, &mut store);
    session.on_count_commit(0, "12345", &mut store);
    assert_eq!(session.formatted_total(), session.formatted_total());
    assert_eq!(session.formatted_total(), "1.234.500");
}

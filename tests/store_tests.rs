use intentscope::events::EventType;
use intentscope::store;
use std::io::Cursor;

#[test]
fn reads_one_event_per_line() {
    let data = concat!(
        r#"{"type":"overlay_shown","domain":"youtube.com","timestamp":1700000000000}"#,
        "\n",
        r#"{"type":"intention_submitted","domain":"youtube.com","timestamp":1700000060000,"intention":"watch one tutorial","tabId":7}"#,
        "\n",
        r#"{"type":"timer_started","domain":"youtube.com","timestamp":1700000120000,"minutes":10}"#,
        "\n",
    );
    let events = store::read_events(Cursor::new(data)).unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].event_type, EventType::OverlayShown);
    assert_eq!(events[1].intention.as_deref(), Some("watch one tutorial"));
    assert_eq!(events[1].tab_id, Some(7));
    assert_eq!(events[2].event_type, EventType::TimerStarted);
    assert_eq!(events[2].minutes, Some(10));
}

#[test]
fn degraded_lines_are_skipped_not_fatal() {
    let data = concat!(
        "\n",
        "not json at all\n",
        r#"{"type":"mystery_event","domain":"x.com","timestamp":1}"#,
        "\n",
        r#"{"type":"overlay_shown","domain":"youtube.com"}"#,
        "\n",
        r#"  {"type":"overlay_shown","domain":"youtube.com","timestamp":1700000000000}  "#,
        "\n",
    );
    let events = store::read_events(Cursor::new(data)).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].domain, "youtube.com");
}

#[test]
fn empty_input_yields_empty_snapshot() {
    let events = store::read_events(Cursor::new("")).unwrap();
    assert!(events.is_empty());
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let err = store::load_events("/nonexistent/events.jsonl").unwrap_err();
    assert!(matches!(err, store::StoreError::Io(_)));
}

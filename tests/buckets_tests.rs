use chrono::{FixedOffset, TimeZone, Utc};
use intentscope::buckets;
use intentscope::events::{EventRecord, EventType};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap()
        .timestamp_millis()
}

fn overlay(domain: &str, ts: i64) -> EventRecord {
    EventRecord::new(EventType::OverlayShown, domain, ts)
}

fn submitted(domain: &str, ts: i64, text: &str) -> EventRecord {
    EventRecord::new(EventType::IntentionSubmitted, domain, ts).with_intention(text)
}

#[test]
fn submissions_without_overlay_keep_no_intention_at_zero() {
    // Scenario: two submissions, no overlay, same day
    let events = vec![
        submitted("youtube.com", at(2024, 3, 5, 10, 0), "watch one tutorial"),
        submitted("youtube.com", at(2024, 3, 5, 11, 0), "watch one tutorial"),
    ];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    let days = &daily["youtube.com"];
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, "2024-03-05");
    assert_eq!(days[0].overlay_shown, 0);
    assert_eq!(days[0].intention_submitted, 2);
    assert_eq!(days[0].no_intention, 0);
}

#[test]
fn overlay_then_submission_cancels_out() {
    let events = vec![
        overlay("youtube.com", at(2024, 3, 5, 10, 0)),
        submitted("youtube.com", at(2024, 3, 5, 10, 1), "watch one tutorial"),
    ];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    let day = &daily["youtube.com"][0];
    assert_eq!(day.overlay_shown, 1);
    assert_eq!(day.intention_submitted, 1);
    assert_eq!(day.no_intention, 0);
}

#[test]
fn unanswered_overlays_accumulate() {
    let events = vec![
        overlay("youtube.com", at(2024, 3, 5, 9, 0)),
        overlay("youtube.com", at(2024, 3, 5, 10, 0)),
        overlay("youtube.com", at(2024, 3, 5, 11, 0)),
        submitted("youtube.com", at(2024, 3, 5, 11, 5), "watch one tutorial"),
    ];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    let day = &daily["youtube.com"][0];
    assert_eq!(day.overlay_shown, 3);
    assert_eq!(day.intention_submitted, 1);
    assert_eq!(day.no_intention, 2);
}

#[test]
fn bucket_key_formats_are_zero_padded() {
    let events = vec![overlay("news.ycombinator.com", at(2024, 3, 5, 9, 7))];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    assert_eq!(daily["news.ycombinator.com"][0].date, "2024-03-05");
    let hourly = buckets::aggregate_hourly_counts_in(&events, &Utc);
    assert_eq!(hourly["news.ycombinator.com"][0].hour, "2024-03-05 09:00");
}

#[test]
fn events_fold_in_timestamp_order_regardless_of_input_order() {
    // Supplied overlay-first, but the submission happened earlier; the
    // clamp must see the submission first and floor at zero.
    let events = vec![
        overlay("youtube.com", at(2024, 3, 5, 10, 0)),
        submitted("youtube.com", at(2024, 3, 5, 9, 0), "watch one tutorial"),
    ];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    let day = &daily["youtube.com"][0];
    assert_eq!(day.no_intention, 1);
}

#[test]
fn no_intention_is_never_negative() {
    let events = vec![
        submitted("youtube.com", at(2024, 3, 5, 9, 0), "a"),
        submitted("youtube.com", at(2024, 3, 5, 9, 1), "b"),
        submitted("youtube.com", at(2024, 3, 5, 9, 2), "c"),
        overlay("youtube.com", at(2024, 3, 5, 9, 3)),
    ];
    for day in buckets::aggregate_daily_counts_in(&events, &Utc).values().flatten() {
        assert!(day.no_intention <= day.overlay_shown);
    }
}

#[test]
fn timer_events_and_empty_domains_are_skipped() {
    let events = vec![
        overlay("youtube.com", at(2024, 3, 5, 10, 0)),
        EventRecord::new(EventType::TimerStarted, "youtube.com", at(2024, 3, 5, 10, 1)),
        EventRecord::new(EventType::TimerExpired, "youtube.com", at(2024, 3, 5, 10, 30)),
        overlay("", at(2024, 3, 5, 10, 2)),
    ];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    assert_eq!(daily.len(), 1);
    assert_eq!(daily["youtube.com"][0].overlay_shown, 1);
    assert_eq!(daily["youtube.com"][0].intention_submitted, 0);
}

#[test]
fn buckets_are_sorted_and_domains_are_independent() {
    let events = vec![
        overlay("reddit.com", at(2024, 3, 6, 8, 0)),
        overlay("youtube.com", at(2024, 3, 6, 8, 0)),
        overlay("youtube.com", at(2024, 3, 4, 8, 0)),
        overlay("youtube.com", at(2024, 3, 5, 8, 0)),
    ];
    let daily = buckets::aggregate_daily_counts_in(&events, &Utc);
    let dates: Vec<&str> = daily["youtube.com"].iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-04", "2024-03-05", "2024-03-06"]);
    assert_eq!(daily["reddit.com"].len(), 1);

    // per-domain totals match the raw event counts
    let youtube_total: usize = daily["youtube.com"].iter().map(|d| d.overlay_shown).sum();
    assert_eq!(youtube_total, 3);
}

#[test]
fn day_boundary_follows_the_supplied_timezone() {
    let events = vec![overlay("youtube.com", at(2024, 1, 1, 23, 30))];
    let utc = buckets::aggregate_daily_counts_in(&events, &Utc);
    assert_eq!(utc["youtube.com"][0].date, "2024-01-01");

    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let shifted = buckets::aggregate_daily_counts_in(&events, &plus_two);
    assert_eq!(shifted["youtube.com"][0].date, "2024-01-02");
}

#[test]
fn clamp_desynchronizes_across_hour_boundaries() {
    // Known limitation: an overlay answered in the next bucket leaves a
    // stranded no_intention count behind.
    let events = vec![
        overlay("youtube.com", at(2024, 3, 5, 9, 59)),
        submitted("youtube.com", at(2024, 3, 5, 10, 1), "watch one tutorial"),
    ];
    let hourly = buckets::aggregate_hourly_counts_in(&events, &Utc);
    let hours = &hourly["youtube.com"];
    assert_eq!(hours.len(), 2);
    assert_eq!(hours[0].hour, "2024-03-05 09:00");
    assert_eq!(hours[0].no_intention, 1);
    assert_eq!(hours[1].hour, "2024-03-05 10:00");
    assert_eq!(hours[1].no_intention, 0);
}

mod common;

use std::io::Write;

use tempfile::NamedTempFile;

use common::{Call, FakeApi};
use macro_log_rs::credentials::{FileCredentials, StaticCredentials};
use macro_log_rs::error::TrackerError;
use macro_log_rs::lifecycle::MountGuard;
use macro_log_rs::models::WeightLog;
use macro_log_rs::weight::{Key, WeightEntryBuffer, WeightScreen, submit_weight};

fn typed(s: &str) -> WeightEntryBuffer {
    let mut buf = WeightEntryBuffer::new();
    for c in s.chars() {
        buf.append_char(c).unwrap();
    }
    buf
}

#[tokio::test]
async fn test_submit_sends_one_authenticated_request() {
    let api = FakeApi::ok();
    let creds = StaticCredentials::new("tok-123");

    let log = submit_weight(&typed("72.5"), &creds, &api).await.unwrap();

    assert_eq!(log.weight, 72.5);
    assert_eq!(
        api.calls(),
        vec![Call::LogWeight {
            token: "tok-123".to_string(),
            weight: 72.5,
        }]
    );
}

#[tokio::test]
async fn test_submit_empty_buffer_is_invalid_input() {
    let api = FakeApi::ok();
    let creds = StaticCredentials::new("tok-123");

    let outcome = submit_weight(&WeightEntryBuffer::new(), &creds, &api).await;

    assert!(matches!(outcome, Err(TrackerError::InvalidInput(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_submit_without_token_is_unauthenticated() {
    let api = FakeApi::ok();

    let outcome = submit_weight(&typed("80"), &StaticCredentials::signed_out(), &api).await;

    assert!(matches!(outcome, Err(TrackerError::Unauthenticated)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_submit_with_two_points_is_invalid_input() {
    let api = FakeApi::ok();
    let creds = StaticCredentials::new("tok-123");

    let outcome = submit_weight(&typed("72..5"), &creds, &api).await;

    assert!(matches!(outcome, Err(TrackerError::InvalidInput(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_submit_does_not_clear_buffer() {
    let api = FakeApi::ok();
    let buffer = typed("70");

    submit_weight(&buffer, &StaticCredentials::new("t"), &api)
        .await
        .unwrap();

    assert_eq!(buffer.as_str(), "70");
}

#[tokio::test]
async fn test_screen_clears_buffer_and_charts_after_log() {
    let api = FakeApi::ok();
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();
    for key in [Key::Digit(7), Key::Digit(9), Key::Point, Key::Digit(1)] {
        screen.press(key).unwrap();
    }

    let log = screen
        .submit(&StaticCredentials::new("t"), &api, &guard)
        .await
        .unwrap();

    assert_eq!(log.weight, 79.1);
    assert!(screen.buffer().is_empty());
    assert_eq!(screen.chart().latest(), Some(79.1));
}

#[tokio::test]
async fn test_screen_keeps_buffer_when_rejected() {
    let api = FakeApi::rejecting(401);
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();
    screen.press(Key::Digit(8)).unwrap();
    screen.press(Key::Digit(0)).unwrap();

    let outcome = screen
        .submit(&StaticCredentials::new("expired"), &api, &guard)
        .await;

    assert!(matches!(
        outcome,
        Err(TrackerError::RemoteRejected { status: 401, .. })
    ));
    assert_eq!(screen.buffer().as_str(), "80");
    assert!(screen.chart().is_empty());
}

#[tokio::test]
async fn test_screen_log_after_unmount_is_not_applied() {
    let guard = MountGuard::new();
    let api = FakeApi::ok().unmounting(&guard);
    let mut screen = WeightScreen::mount();
    screen.press(Key::Digit(9)).unwrap();

    screen
        .submit(&StaticCredentials::new("t"), &api, &guard)
        .await
        .unwrap();

    assert_eq!(screen.buffer().as_str(), "9");
    assert!(screen.history().is_empty());
}

#[tokio::test]
async fn test_history_loads_into_chart() {
    let history = vec![
        WeightLog::new(82.0, Some("1-6-2025".to_string())),
        WeightLog::new(81.2, Some("2-6-2025".to_string())),
    ];
    let api = FakeApi::ok().with_history(history.clone());
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();

    let loaded = screen
        .load_history(&StaticCredentials::new("tok"), &api, &guard)
        .await;

    assert_eq!(loaded, 2);
    assert_eq!(screen.history(), history.as_slice());
    assert_eq!(
        api.calls(),
        vec![Call::RetrieveWeights {
            token: "tok".to_string()
        }]
    );
}

#[tokio::test]
async fn test_history_failure_leaves_chart_empty() {
    let api = FakeApi::rejecting(503).with_history(vec![WeightLog::new(80.0, None)]);
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();

    let loaded = screen
        .load_history(&StaticCredentials::new("tok"), &api, &guard)
        .await;

    assert_eq!(loaded, 0);
    assert!(screen.chart().is_empty());
}

#[tokio::test]
async fn test_history_without_token_skips_request() {
    let api = FakeApi::ok();
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();

    screen
        .load_history(&StaticCredentials::signed_out(), &api, &guard)
        .await;

    assert!(api.calls().is_empty());
    assert!(screen.chart().is_empty());
}

#[tokio::test]
async fn test_history_after_unmount_is_not_applied() {
    let guard = MountGuard::new();
    let api = FakeApi::ok()
        .with_history(vec![WeightLog::new(80.0, None)])
        .unmounting(&guard);
    let mut screen = WeightScreen::mount();

    let loaded = screen
        .load_history(&StaticCredentials::new("tok"), &api, &guard)
        .await;

    assert_eq!(loaded, 0);
    assert!(screen.history().is_empty());
}

#[tokio::test]
async fn test_token_read_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "file-token").unwrap();
    let api = FakeApi::ok();

    submit_weight(&typed("65"), &FileCredentials::new(file.path()), &api)
        .await
        .unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::LogWeight {
            token: "file-token".to_string(),
            weight: 65.0,
        }]
    );
}

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use ws_core::model::SeriesDomain;
use ws_runtime::{FixedClock, Gateway, PollUpdate};

const INTERVAL: Duration = Duration::from_secs(45);

fn gateway() -> Gateway {
    Gateway::builder()
        .seed(21)
        .instant()
        .poll_interval(INTERVAL)
        .clock(FixedClock(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap()))
        .build()
}

fn counting(gw: &Gateway, domain: SeriesDomain) -> (Arc<AtomicUsize>, ws_runtime::Subscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = hits.clone();
    let sub = gw.subscribe(domain, move |update: &PollUpdate| {
        assert_eq!(update.domain(), domain);
        assert_eq!(update.len(), 24);
        h.fetch_add(1, Ordering::SeqCst);
    });
    (hits, sub)
}

#[tokio::test(start_paused = true)]
async fn nothing_is_published_before_start() {
    let gw = gateway();
    let (hits, _sub) = counting(&gw, SeriesDomain::Occupancy);
    tokio::time::sleep(INTERVAL * 3).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn no_callback_after_unsubscribe() {
    let gw = gateway();
    let (occ, occ_sub) = counting(&gw, SeriesDomain::Occupancy);
    let (energy, _energy_sub) = counting(&gw, SeriesDomain::Energy);

    gw.start().unwrap();
    tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;
    assert_eq!(occ.load(Ordering::SeqCst), 1);
    assert_eq!(energy.load(Ordering::SeqCst), 1);

    occ_sub.unsubscribe();
    tokio::time::sleep(INTERVAL * 2).await;
    assert_eq!(occ.load(Ordering::SeqCst), 1);
    assert_eq!(energy.load(Ordering::SeqCst), 3);

    gw.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn several_subscribers_share_a_topic() {
    let gw = gateway();
    let (a, _sa) = counting(&gw, SeriesDomain::Environmental);
    let (b, _sb) = counting(&gw, SeriesDomain::Environmental);

    gw.start().unwrap();
    tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;
    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
    gw.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stop_halts_polling() {
    let gw = gateway();
    let (hits, _sub) = counting(&gw, SeriesDomain::Energy);

    gw.start().unwrap();
    tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;
    gw.stop().await.unwrap();
    assert!(!gw.is_running());

    tokio::time::sleep(INTERVAL * 4).await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn start_twice_is_an_error_and_stop_is_idempotent() {
    let gw = gateway();
    gw.stop().await.unwrap();

    gw.start().unwrap();
    assert!(gw.is_running());
    assert!(gw.start().is_err());

    gw.stop().await.unwrap();
    gw.stop().await.unwrap();
    assert!(!gw.is_running());

    gw.start().unwrap();
    gw.stop().await.unwrap();
}

#[test]
fn start_outside_a_runtime_fails() {
    let gw = gateway();
    assert!(gw.start().is_err());
    assert!(!gw.is_running());
}

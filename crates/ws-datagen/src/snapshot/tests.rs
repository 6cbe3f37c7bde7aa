use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, TimeZone, Utc};
use ws_core::classify::SpaceStatus;
use ws_core::model::{
    ActivityFilter, EmployeeFilter, EmployeeStatus, ReportFormat, ReportPayload, SpaceFilter, SpaceKind,
    TimeRange, ZoneStatus,
};

use super::*;
use crate::constants::{HOTDESK_FIRST_COL, TOTAL_SPACES};
use crate::random::{ConstantSource, RandomSource, SeededSource};
use crate::series::{baseline, tariff};
use ws_core::model::SeriesDomain;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 14, 30, 0).unwrap()
}

fn seeded() -> SeededSource {
    SeededSource::from_seed(42)
}

// ---------------------------------------------------------------------------
// Series-backed builders
// ---------------------------------------------------------------------------

#[test]
fn test_occupancy_has_24_points() {
    let points = build_occupancy(now(), &mut seeded());
    assert_eq!(points.len(), 24);
    assert_eq!(points.last().unwrap().hour, "14:00");
    for p in &points {
        assert_eq!(p.capacity, 150);
        assert!((5.0..=100.0).contains(&p.occupancy));
        assert!((p.utilization - p.occupancy / 100.0).abs() < 1e-12);
    }
}

#[test]
fn test_environmental_midpoint_values() {
    let points = build_environmental(now(), &mut ConstantSource::MIDPOINT);
    assert_eq!(points.len(), 24);
    let last = points.last().unwrap();
    let t = baseline(SeriesDomain::Environmental, 14);
    assert_eq!(last.temperature, t);
    assert_eq!(last.humidity, 75.0 - 1.2 * t);
    let people = baseline(SeriesDomain::Occupancy, 14);
    assert_eq!(last.co2, 400.0 + 6.0 * people);
    for p in &points {
        assert!((0.0..=100.0).contains(&p.comfort));
    }
}

#[test]
fn test_energy_points_cost_follows_tariff() {
    let points = build_energy_points(now(), &mut ConstantSource::MIDPOINT);
    // Window ends at 14:00 and starts at 15:00 the previous day.
    let first = &points[0];
    assert_eq!(first.hour, "15:00");
    assert_eq!(first.cost, first.consumption * tariff(15));
    for p in &points {
        assert!((0.0..=100.0).contains(&p.efficiency));
    }
}

#[test]
fn test_energy_dashboard_shape() {
    let dash = build_energy_dashboard(now(), &mut seeded());
    assert_eq!(dash.hourly.len(), 24);
    assert_eq!(dash.predictions.len(), 24);
    assert_eq!(dash.hourly_pattern.len(), 24);
    assert_eq!(dash.analysis.peak_hours.len(), 5);
    assert_eq!(dash.analysis.off_peak_hours.len(), 5);
    assert!(!dash.actions.is_empty());
    assert_eq!(
        dash.current_consumption,
        dash.hourly.last().unwrap().consumption
    );
    assert!((dash.daily_average * 24.0 - dash.daily_total).abs() < 1e-6);
    assert!((0.0..=1.0).contains(&dash.analysis.peak_share));
    // Midday hours dominate the weekly pattern.
    assert!(dash.analysis.peak_hours.iter().all(|h| (8..=18).contains(h)));
    assert!(dash.predictions[0].timestamp > now());
}

// ---------------------------------------------------------------------------
// Spaces
// ---------------------------------------------------------------------------

#[test]
fn test_space_aggregates_within_capacity() {
    let mut rng = seeded();
    for _ in 0..50 {
        let aggs = build_space_aggregates(&mut rng);
        assert_eq!(aggs.len(), 4);
        let current: u32 = aggs.iter().map(|a| a.current).sum();
        let capacity: u32 = aggs.iter().map(|a| a.capacity).sum();
        assert!(current <= capacity);
        for a in &aggs {
            assert!(a.current <= a.capacity);
            assert_eq!(a.status, SpaceStatus::from_utilization(a.utilization));
        }
    }
}

#[test]
fn test_space_roster_shape() {
    let spaces = build_spaces(&mut seeded());
    assert_eq!(spaces.len(), TOTAL_SPACES as usize);
    let count = |kind: SpaceKind| spaces.iter().filter(|s| s.kind == kind).count();
    assert_eq!(count(SpaceKind::Desk), 60);
    assert_eq!(count(SpaceKind::HotSeat), 30);
    assert_eq!(count(SpaceKind::MeetingRoom), 15);
    for (i, s) in spaces.iter().enumerate() {
        assert_eq!(s.id as usize, i + 1);
        assert!(s.current <= s.capacity);
        assert_eq!(s.status, SpaceStatus::from_utilization(s.utilization));
        assert!(!s.amenities.is_empty());
    }
}

#[test]
fn test_space_page_total_counts_before_limit() {
    let spaces = build_spaces(&mut seeded());
    let page = space_page(spaces.clone(), &SpaceFilter::default());
    assert_eq!(page.spaces.len(), 20);
    assert_eq!(page.total, 105);

    let filter = SpaceFilter {
        search: Some("MEETING".into()),
        limit: Some(5),
        ..Default::default()
    };
    let page = space_page(spaces, &filter);
    assert_eq!(page.total, 15);
    assert_eq!(page.spaces.len(), 5);
    assert!(page.spaces.iter().all(|s| s.kind == SpaceKind::MeetingRoom));
}

#[test]
fn test_space_page_status_filter() {
    let spaces = build_spaces(&mut seeded());
    let expected = spaces
        .iter()
        .filter(|s| s.status == SpaceStatus::Overutilized)
        .count();
    let filter = SpaceFilter {
        status_filter: Some(SpaceStatus::Overutilized),
        limit: Some(200),
        ..Default::default()
    };
    let page = space_page(spaces, &filter);
    assert_eq!(page.total, expected);
    assert_eq!(page.spaces.len(), expected);
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[test]
fn test_employee_roster_ranges() {
    let roster = build_employees(&mut seeded());
    assert_eq!(roster.len(), 150);
    for e in &roster {
        assert!((0.0..=8.0).contains(&e.hours_today));
        assert!((0.0..=40.0).contains(&e.hours_week));
        assert!((0.0..=100.0).contains(&e.productivity));
        assert!((1..=3).contains(&e.skills.len()));
        assert!(e.email.contains('@'));
    }
}

#[test]
fn test_employee_page_default_and_max_limit() {
    let roster = build_employees(&mut seeded());
    let page = employee_page(&roster, &EmployeeFilter::default());
    assert_eq!(page.employees.len(), 50);
    assert_eq!(page.total, 150);

    let page = employee_page(
        &roster,
        &EmployeeFilter {
            limit: Some(1000),
            ..Default::default()
        },
    );
    assert_eq!(page.employees.len(), 150);
}

#[test]
fn test_employee_page_filters() {
    let roster = build_employees(&mut seeded());
    let filter = EmployeeFilter {
        department: Some("engineering".into()),
        status: Some(EmployeeStatus::Active),
        limit: Some(150),
        ..Default::default()
    };
    let page = employee_page(&roster, &filter);
    assert!(page.employees.iter().all(|e| {
        e.department == "Engineering" && e.status == EmployeeStatus::Active
    }));
    assert_eq!(page.total, page.employees.len());

    let target = roster[10].email.clone();
    let page = employee_page(
        &roster,
        &EmployeeFilter {
            search: Some(target.to_uppercase()),
            ..Default::default()
        },
    );
    assert_eq!(page.total, 1);
    assert_eq!(page.employees[0].id, 11);
}

// ---------------------------------------------------------------------------
// Zones, weekly, summary
// ---------------------------------------------------------------------------

#[test]
fn test_zone_grid_partition() {
    let mut rng = seeded();
    for _ in 0..20 {
        let cells = build_zone_grid(&mut rng);
        assert_eq!(cells.len(), 96);
        for c in &cells {
            assert_eq!(c.id, format!("{}-{}", c.row, c.col));
            if c.col >= HOTDESK_FIRST_COL {
                assert_ne!(c.status, ZoneStatus::Assigned);
            } else {
                assert_ne!(c.status, ZoneStatus::Hotdesk);
            }
            let labelled = matches!(c.status, ZoneStatus::Occupied | ZoneStatus::Assigned);
            assert_eq!(c.employee.is_some(), labelled);
        }
    }
}

#[test]
fn test_weekend_utilization_below_weekday() {
    let mut rng = seeded();
    let (mut weekday, mut weekend) = (0.0, 0.0);
    let runs = 100;
    for _ in 0..runs {
        let week = build_weekly_trend(&mut rng);
        assert_eq!(week.len(), 7);
        for p in &week {
            if p.is_weekend() {
                weekend += p.utilization;
            } else {
                weekday += p.utilization;
            }
        }
    }
    let weekday_mean = weekday / (runs * 5) as f64;
    let weekend_mean = weekend / (runs * 2) as f64;
    assert!(weekend_mean < weekday_mean);
}

#[test]
fn test_summary_counts() {
    let s = build_summary(now(), &mut seeded());
    assert_eq!(s.summary.total_spaces, 105);
    assert_eq!(s.summary.total_employees, 150);
    assert!(s.quick_stats.employees_present <= 150);
    assert!(s.quick_stats.meeting_rooms_booked <= 15);
    assert_eq!(s.last_updated, now());
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn test_csv_export_is_base64_rows() {
    let report = build_export(
        "occupancy",
        TimeRange::Week,
        ReportFormat::Csv,
        now(),
        &mut seeded(),
    )
    .unwrap();
    assert_eq!(report.filename, "occupancy_report_20250312_143000.csv");
    let ReportPayload::Inline { data, size } = report.payload else {
        panic!("csv export should be inline");
    };
    let decoded = String::from_utf8(STANDARD.decode(data).unwrap()).unwrap();
    assert_eq!(decoded.len(), size);
    let mut lines = decoded.lines();
    assert_eq!(lines.next(), Some("timestamp,space_id,occupancy,efficiency"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 10);
    for (i, row) in rows.iter().enumerate() {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], now().to_rfc3339());
        assert_eq!(fields[1], format!("SPACE_{i}"));
        assert!(fields[2].parse::<u32>().unwrap() <= 99);
        assert!((60..=99).contains(&fields[3].parse::<u32>().unwrap()));
    }
}

#[test]
fn test_pdf_export_has_download_url() {
    let report = build_export(
        "space_usage",
        TimeRange::Month,
        ReportFormat::Pdf,
        now(),
        &mut seeded(),
    )
    .unwrap();
    assert_eq!(report.time_range, TimeRange::Month);
    match report.payload {
        ReportPayload::Download {
            title,
            download_url,
            summary,
        } => {
            assert_eq!(title, "Space Usage Report");
            assert!(download_url.ends_with(".pdf"));
            assert_eq!(summary.total_spaces, 105);
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn test_export_rejects_bad_kind() {
    let mut rng = seeded();
    assert!(build_export("", TimeRange::Today, ReportFormat::Csv, now(), &mut rng).is_err());
    assert!(
        build_export("../etc", TimeRange::Today, ReportFormat::Pdf, now(), &mut rng).is_err()
    );
}

// ---------------------------------------------------------------------------
// User activity
// ---------------------------------------------------------------------------

#[test]
fn test_activity_default_limit_and_order() {
    let filter = ActivityFilter::default();
    let page = build_user_activity(now(), TimeRange::Today, &filter, &mut seeded());
    assert_eq!(page.activities.len(), 100);
    assert_eq!(page.metadata.total_activities, 100);
    assert_eq!(page.metadata.unique_users, 50);
    for pair in page.activities.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    for a in &page.activities {
        assert!(a.timestamp <= now());
        assert_eq!(a.duration_minutes.is_some(), a.activity_type.has_duration());
        if let Some(minutes) = a.duration_minutes {
            assert!((30..=480).contains(&minutes));
        }
    }
}

#[test]
fn test_activity_limit_is_capped_and_department_pinned() {
    let filter = ActivityFilter {
        department: Some("Finance".into()),
        limit: Some(10_000),
    };
    let page = build_user_activity(now(), TimeRange::Month, &filter, &mut seeded());
    assert_eq!(page.activities.len(), 500);
    assert!(page.activities.iter().all(|a| a.department == "Finance"));
    assert_eq!(page.metadata.time_range, TimeRange::Month);
}

#[test]
fn test_activity_small_limit_has_fewer_users() {
    let filter = ActivityFilter {
        department: None,
        limit: Some(5),
    };
    let page = build_user_activity(now(), TimeRange::Today, &filter, &mut seeded());
    assert_eq!(page.metadata.unique_users, 5);
}

#[test]
fn test_activity_age_at_midpoint() {
    // u = 0.5 gives an age of 2·ln 2 hours.
    let filter = ActivityFilter {
        department: None,
        limit: Some(1),
    };
    let mut rng = ConstantSource::MIDPOINT;
    let page = build_user_activity(now(), TimeRange::Today, &filter, &mut rng);
    let age = now() - page.activities[0].timestamp;
    let expected = 2.0 * std::f64::consts::LN_2 * 3600.0;
    assert!((age.num_seconds() as f64 - expected).abs() <= 1.0);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn test_same_seed_same_snapshots() {
    let mut a = seeded();
    let mut b = seeded();
    assert_eq!(build_spaces(&mut a), build_spaces(&mut b));
    assert_eq!(build_employees(&mut a), build_employees(&mut b));
    assert_eq!(build_zone_grid(&mut a), build_zone_grid(&mut b));
    assert_eq!(
        build_energy_dashboard(now(), &mut a),
        build_energy_dashboard(now(), &mut b)
    );
}

#[test]
fn test_different_seed_different_roster() {
    let a = build_employees(&mut SeededSource::from_seed(1));
    let b = build_employees(&mut SeededSource::from_seed(2));
    assert_ne!(a, b);
}

#[test]
fn test_paginate_reports_total() {
    let (kept, total) = paginate(1..=10, |n| n % 2 == 0, 3);
    assert_eq!(kept, vec![2, 4, 6]);
    assert_eq!(total, 5);
}

#[test]
fn test_builders_accept_any_source() {
    let mut rng: Box<dyn RandomSource> = Box::new(ConstantSource(0.99));
    let cells = build_zone_grid(rng.as_mut());
    assert!(cells.iter().all(|c| c.status == ZoneStatus::Occupied));
}

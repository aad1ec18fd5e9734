use std::fs;

use chrono::NaiveDate;
use docket::config::Config;
use docket::facade::Docket;
use docket::model::{DATE_FORMAT, TaskHandle};
use docket::notify::MemorySink;
use docket::reminder::Urgency;
use docket::store::notified::NotifiedLog;
use tempfile::tempdir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
}

#[test]
fn test_full_workflow() {
    let dir = tempdir().unwrap();
    let config = Config::defaults(dir.path());
    let today = date("2024-01-02");

    // First start: nothing on disk yet
    let sink = MemorySink::new();
    let (mut app, report) = Docket::load_all(&config, today, &sink).unwrap();
    assert!(app.tasks().is_empty());
    assert!(report.sent.is_empty());

    // Add a few tasks, including a blank one that is ignored
    let rent = app.add_task("Pay rent", date("2024-01-01")).unwrap().unwrap();
    let call = app.add_task("Call mom", today).unwrap().unwrap();
    assert_eq!(app.add_task("   ", today).unwrap(), None);
    let dentist = app.add_task("Dentist", date("2024-01-10")).unwrap().unwrap();
    assert_eq!(app.tasks().len(), 3);

    assert!(app.is_overdue(rent).unwrap());
    assert!(!app.is_overdue(call).unwrap());
    assert!(!app.is_overdue(dentist).unwrap());

    // Calendar filter
    assert_eq!(app.filter_by_date(today), vec![false, true, false]);
    assert_eq!(app.filter_by_date(date("2030-01-01")), vec![false, false, false]);

    // Edit keeps due date; blank edit is ignored
    assert!(app.edit_task(call, "Call mom back").unwrap());
    assert!(!app.edit_task(call, " ").unwrap());
    assert_eq!(app.task(call).unwrap().text, "Call mom back");
    assert_eq!(app.task(call).unwrap().due, today);
    drop(app);

    // Second start: both open tasks that are due get reminded
    let sink = MemorySink::new();
    let (mut app, report) = Docket::load_all(&config, today, &sink).unwrap();
    assert_eq!(app.tasks().len(), 3);
    assert_eq!(sink.sent().len(), 2);
    let urgencies: Vec<_> = report.sent.iter().map(|r| r.urgency).collect();
    assert_eq!(urgencies, vec![Urgency::Overdue, Urgency::DueToday]);

    // Completing and deleting
    app.set_completed(rent, true).unwrap();
    assert!(!app.is_overdue(rent).unwrap());
    let removed = app.delete_task(dentist).unwrap();
    assert_eq!(removed.text, "Dentist");
    assert!(app.delete_task(dentist).is_err());
    drop(app);

    // Third start on the same day: already reminded, nothing new
    let sink = MemorySink::new();
    let (app, report) = Docket::load_all(&config, today, &sink).unwrap();
    assert!(sink.sent().is_empty());
    assert!(report.sent.is_empty());
    assert_eq!(app.tasks().len(), 2);
    assert!(app.tasks()[0].completed);
}

#[test]
fn pay_rent_scenario_records_dedup_entry() {
    let dir = tempdir().unwrap();
    let config = Config::defaults(dir.path());
    fs::write(
        &config.tasks_file,
        r#"[{"task":"Pay rent","due":"2024-01-01","completed":false}]"#,
    )
    .unwrap();

    let sink = MemorySink::new();
    Docket::load_all(&config, date("2024-01-02"), &sink).unwrap();

    assert_eq!(
        sink.sent(),
        vec![(
            "Task Reminder".to_string(),
            "'Pay rent' is due and overdue!".to_string()
        )]
    );
    let raw = fs::read_to_string(&config.notified_file).unwrap();
    assert_eq!(raw, r#"{"Pay rent_2024-01-01":"2024-01-02"}"#);
}

#[test]
fn pay_rent_scenario_already_notified_sends_nothing() {
    let dir = tempdir().unwrap();
    let config = Config::defaults(dir.path());
    fs::write(
        &config.tasks_file,
        r#"[{"task":"Pay rent","due":"2024-01-01","completed":false}]"#,
    )
    .unwrap();
    fs::write(
        &config.notified_file,
        r#"{"Pay rent_2024-01-01": "2024-01-02"}"#,
    )
    .unwrap();

    let sink = MemorySink::new();
    let (_, report) = Docket::load_all(&config, date("2024-01-02"), &sink).unwrap();

    assert!(sink.sent().is_empty());
    assert!(report.sent.is_empty());
    let log = NotifiedLog::load(&config.notified_file).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn mark_all_completed_clears_overdue_for_three_tasks() {
    let dir = tempdir().unwrap();
    let config = Config::defaults(dir.path());
    let today = date("2024-06-01");
    let mut app = Docket::open(&config, today).unwrap();
    for (text, due) in [("A", "2024-01-01"), ("B", "2024-02-01"), ("C", "2024-03-01")] {
        app.add_task(text, date(due)).unwrap();
    }

    assert_eq!(app.mark_all_completed().unwrap(), 3);
    for i in 0..3 {
        assert!(!app.is_overdue(TaskHandle(i)).unwrap());
    }

    let reopened = Docket::open(&config, today).unwrap();
    assert!(reopened.tasks().iter().all(|t| t.completed));
}

#[test]
fn malformed_task_file_is_fatal() {
    let dir = tempdir().unwrap();
    let config = Config::defaults(dir.path());
    fs::write(&config.tasks_file, "{ definitely not a list").unwrap();

    let sink = MemorySink::new();
    let err = Docket::load_all(&config, date("2024-01-02"), &sink)
        .err()
        .unwrap();
    assert_eq!(err.code(), "malformed_file");
    // The reminder pass never ran, so the log was not created
    assert!(!config.notified_file.exists());
}

#[test]
fn malformed_notified_file_is_fatal() {
    let dir = tempdir().unwrap();
    let config = Config::defaults(dir.path());
    fs::write(&config.notified_file, "[]").unwrap();

    let err = Docket::open(&config, date("2024-01-02")).err().unwrap();
    assert_eq!(err.code(), "malformed_file");
}

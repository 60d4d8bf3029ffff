use taskledger_core::TaskCollection;

fn sample() -> TaskCollection {
    TaskCollection::from_lines([
        "4",
        "0,Buy milk",
        "1,Submit report,3",
        "2,Prepare slides,2,Alice",
        "1,Pay rent,0",
    ])
    .unwrap()
}

#[test]
fn descriptions_cover_every_task_in_index_order() {
    let lines: Vec<String> = sample().descriptions().collect();
    assert_eq!(
        lines,
        vec![
            "0 Buy milk",
            "1 Submit report",
            "2 Prepare slides",
            "3 Pay rent",
        ]
    );
}

#[test]
fn details_render_each_kind_shape() {
    let lines: Vec<String> = sample().details().collect();
    assert_eq!(
        lines,
        vec![
            "0 [ ] Buy milk",
            "1 [ ] Submit report | Due in 3 days",
            "2 [ ] Prepare slides | Due in 2 days | Assigned to Alice",
            "3 [ ] Pay rent | Due in 0 days",
        ]
    );
}

#[test]
fn details_mark_completed_tasks() {
    let mut tasks = TaskCollection::from_lines(["1", "1,Submit report,3"]).unwrap();
    tasks.complete(0).unwrap();

    let lines: Vec<String> = tasks.details().collect();
    assert_eq!(lines, vec!["0 [X] Submit report | Due in 3 days"]);
}

#[test]
fn single_plain_task_detail_matches_expected_line() {
    let tasks = TaskCollection::from_lines(["1", "0,Buy milk"]).unwrap();
    let lines: Vec<String> = tasks.details().collect();
    assert_eq!(lines, vec!["0 [ ] Buy milk"]);
}

#[test]
fn due_today_lists_only_dated_tasks_with_zero_days() {
    let lines: Vec<String> = sample().due_today().collect();
    assert_eq!(lines, vec!["3 [ ] Pay rent | Due in 0 days"]);
}

#[test]
fn due_today_ignores_completion_and_always_renders_incomplete() {
    let mut tasks =
        TaskCollection::from_lines(["2", "1,Pay rent,0", "2,Water plants,0,Bob"]).unwrap();
    tasks.complete(0).unwrap();

    let lines: Vec<String> = tasks.due_today().collect();
    assert_eq!(
        lines,
        vec![
            "0 [ ] Pay rent | Due in 0 days",
            "1 [ ] Water plants | Due in 0 days",
        ]
    );
}

#[test]
fn due_today_never_lists_plain_tasks() {
    let mut tasks = TaskCollection::from_lines(["1", "0,Buy milk"]).unwrap();
    tasks.complete(0).unwrap();
    assert_eq!(tasks.due_today().count(), 0);
}

#[test]
fn reminders_cover_incomplete_dated_tasks_only() {
    let lines: Vec<String> = sample().reminders().collect();
    assert_eq!(
        lines,
        vec![
            "The task \"Submit report\" is due in 3 days",
            "Sending a reminder to complete \"Prepare slides\" to Alice",
            "The task \"Pay rent\" is due in 0 days",
        ]
    );
}

#[test]
fn reminders_skip_completed_tasks() {
    let mut tasks = sample();
    tasks.complete(1).unwrap();
    tasks.complete(2).unwrap();

    let lines: Vec<String> = tasks.reminders().collect();
    assert_eq!(lines, vec!["The task \"Pay rent\" is due in 0 days"]);
}

#[test]
fn reports_are_repeatable_without_mutation() {
    let tasks = sample();
    let first: Vec<String> = tasks.details().collect();
    let second: Vec<String> = tasks.details().collect();
    assert_eq!(first, second);
}

use tasklist_core::{remove_confirmed, AlwaysConfirm, Task, TaskId, TaskListStore, TitleEditor};

#[test]
fn editor_starts_with_current_title() {
    let mut store = TaskListStore::new();
    let id = store.add("Water plants").expect("non-blank title should be added");

    let editor = TitleEditor::begin(&store.get(id).expect("task should exist"));
    assert_eq!(editor.id(), id);
    assert_eq!(editor.draft(), "Water plants");
    assert!(!editor.is_dirty());
}

#[test]
fn cancel_restores_original_and_leaves_store_alone() {
    let mut store = TaskListStore::new();
    let id = store.add("Original").expect("non-blank title should be added");
    let before = store.snapshot();

    let mut editor = TitleEditor::begin(&store.get(id).expect("task should exist"));
    editor.set_draft("Changed");
    assert!(editor.is_dirty());
    assert_eq!(editor.draft(), "Changed");
    assert_eq!(editor.original(), "Original");

    assert_eq!(editor.cancel(), "Original");
    assert!(store.snapshot().same_as(&before));
}

#[test]
fn commit_applies_draft() {
    let mut store = TaskListStore::new();
    let id = store.add("Old").expect("non-blank title should be added");

    let mut editor = TitleEditor::begin(&store.get(id).expect("task should exist"));
    editor.set_draft("New ");
    assert!(editor.commit(&mut store));

    assert_eq!(store.get(id).expect("task should exist").title(), "New");
}

#[test]
fn blank_draft_commit_keeps_stored_title() {
    let mut store = TaskListStore::new();
    let id = store.add("Keep").expect("non-blank title should be added");

    let mut editor = TitleEditor::begin(&store.get(id).expect("task should exist"));
    editor.set_draft("");
    assert!(!editor.commit(&mut store));

    assert_eq!(store.get(id).expect("task should exist").title(), "Keep");
}

#[test]
fn commit_after_task_removed_is_noop() {
    let mut store = TaskListStore::new();
    let id = store.add("Doomed").expect("non-blank title should be added");
    let mut editor = TitleEditor::begin(&store.get(id).expect("task should exist"));
    store.remove(id);

    editor.set_draft("Revived");
    assert!(!editor.commit(&mut store));
    assert!(store.is_empty());
}

#[test]
fn declined_removal_keeps_task() {
    let mut store = TaskListStore::new();
    let id = store.add("Maybe").expect("non-blank title should be added");
    let mut asked = Vec::new();

    let mut gate = |task: &Task| {
        asked.push(task.title().to_string());
        false
    };
    assert!(!remove_confirmed(&mut store, id, &mut gate));

    assert_eq!(asked, vec!["Maybe"]);
    assert_eq!(store.count(), 1);
}

#[test]
fn confirmed_removal_deletes_task() {
    let mut store = TaskListStore::new();
    let id = store.add("Yes").expect("non-blank title should be added");
    store.add("Other").expect("non-blank title should be added");

    assert!(remove_confirmed(&mut store, id, &mut AlwaysConfirm));

    assert!(store.get(id).is_none());
    assert_eq!(store.count(), 1);
}

#[test]
fn gate_is_not_asked_for_unknown_id() {
    let mut store = TaskListStore::new();
    store.add("A").expect("non-blank title should be added");
    let mut calls = 0;

    let mut gate = |_: &Task| {
        calls += 1;
        true
    };
    assert!(!remove_confirmed(&mut store, TaskId::new(77), &mut gate));

    assert_eq!(calls, 0);
    assert_eq!(store.count(), 1);
}

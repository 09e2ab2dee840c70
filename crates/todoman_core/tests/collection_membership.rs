use proptest::prelude::*;
use std::collections::HashSet;
use todoman_core::{Board, Colour, Index, Item, Note, OrderedUniqueCollection, Todo};
use uuid::Uuid;

fn distinct_ids(max: usize) -> impl Strategy<Value = Vec<Uuid>> {
    proptest::collection::hash_set(any::<u128>(), 0..max)
        .prop_map(|raw| raw.into_iter().map(Uuid::from_u128).collect())
}

#[test]
fn board_ignores_second_add_of_same_todo() {
    let mut board = Board::new("Weekly", Colour::rgb(200, 120, 40));
    let todo = Todo::new("Write report");

    assert!(board.add_todo(todo.clone()));
    assert!(!board.add_todo(todo.clone()));

    assert_eq!(board.todos.len(), 1);
    assert!(board.has_todo(todo.id()));
}

#[test]
fn removing_from_empty_index_is_a_no_op() {
    let mut index = Index::new();
    assert!(index.remove_item(Uuid::new_v4()).is_none());
    assert!(index.is_empty());
}

#[test]
fn todo_notes_keep_display_order() {
    let mut todo = Todo::new("Plan trip");
    let notes = [
        Note::new("flights", "ana"),
        Note::new("hotel", "ana"),
        Note::new("visa", "ben"),
    ];
    for note in notes.iter().cloned() {
        todo.add_note(note);
    }

    let names: Vec<&str> = todo.notes.iter().map(|note| note.name.as_str()).collect();
    assert_eq!(names, vec!["flights", "hotel", "visa"]);

    todo.remove_note(notes[1].id());
    let names: Vec<&str> = todo.notes.iter().map(|note| note.name.as_str()).collect();
    assert_eq!(names, vec!["flights", "visa"]);
}

#[test]
fn find_locates_member_by_identity() {
    let todo = Todo::new("Findable");
    let id = todo.id();
    let mut todos = OrderedUniqueCollection::new();
    todos.add(todo);

    assert_eq!(todos.find(&id).map(|t: &Todo| t.name.as_str()), Some("Findable"));
    assert!(todos.find(&Uuid::new_v4()).is_none());
}

proptest! {
    #[test]
    fn distinct_adds_preserve_count_and_order(ids in distinct_ids(32)) {
        let mut index = Index::new();
        for id in &ids {
            prop_assert!(index.add_item(Item::new(*id, id.to_string())));
        }

        prop_assert_eq!(index.len(), ids.len());
        let listed: Vec<Uuid> = index.items.iter().map(Item::id).collect();
        prop_assert_eq!(listed, ids);
    }

    #[test]
    fn re_adding_a_member_changes_nothing(ids in distinct_ids(16), pick in any::<prop::sample::Index>()) {
        prop_assume!(!ids.is_empty());
        let mut index = Index::new();
        for id in &ids {
            index.add_item(Item::new(*id, "original"));
        }
        let before = index.clone();

        let again = ids[pick.index(ids.len())];
        prop_assert!(!index.add_item(Item::new(again, "replacement")));
        prop_assert_eq!(index, before);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op(ids in distinct_ids(16), absent in any::<u128>()) {
        let absent = Uuid::from_u128(absent);
        prop_assume!(!ids.contains(&absent));

        let mut index = Index::new();
        for id in &ids {
            index.add_item(Item::new(*id, "kept"));
        }
        let before = index.clone();

        prop_assert!(index.remove_item(absent).is_none());
        prop_assert_eq!(index, before);
    }

    #[test]
    fn has_tracks_membership(
        ids in distinct_ids(16),
        removals in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut index = Index::new();
        for id in &ids {
            index.add_item(Item::new(*id, "member"));
        }

        let mut removed = HashSet::new();
        if !ids.is_empty() {
            for pick in &removals {
                let id = ids[pick.index(ids.len())];
                index.remove_item(id);
                removed.insert(id);
            }
        }

        for id in &ids {
            prop_assert_eq!(index.has_item(*id), !removed.contains(id));
        }
        prop_assert_eq!(index.len(), ids.len() - removed.len());
    }
}

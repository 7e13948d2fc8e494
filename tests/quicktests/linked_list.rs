use textbook::linked_list::DoublyLinkedList;
use textbook::Error;

#[quickcheck]
fn append_keeps_order(xs: Vec<i8>) -> bool {
    let mut list = DoublyLinkedList::new();
    for x in &xs {
        list.append(*x);
    }

    list.len() == xs.len() && list.iter_entries().eq(xs.iter().enumerate())
}

#[quickcheck]
fn prepend_reverses_order(xs: Vec<i8>) -> bool {
    let mut list = DoublyLinkedList::new();
    for x in &xs {
        list.prepend(*x);
    }

    list.get(0).ok() == xs.last() && list.iter().eq(xs.iter().rev())
}

#[quickcheck]
fn insert_at_ends_matches_append_and_prepend(xs: Vec<i8>) -> bool {
    let mut inserted = DoublyLinkedList::new();
    let mut pushed = DoublyLinkedList::new();
    for (i, x) in xs.iter().enumerate() {
        if i % 2 == 0 {
            inserted.insert_at(*x, inserted.len()).unwrap();
            pushed.append(*x);
        } else {
            inserted.insert_at(*x, 0).unwrap();
            pushed.prepend(*x);
        }
    }

    inserted == pushed
}

#[quickcheck]
fn remove_at_shifts_following_values(xs: Vec<i8>, index: usize) -> bool {
    if xs.len() < 2 {
        return true;
    }
    let index = index % (xs.len() - 1);
    let mut list: DoublyLinkedList<_> = xs.iter().copied().collect();

    list.remove_at(index) == Ok(xs[index])
        && list.get(index) == Ok(&xs[index + 1])
        && list.len() == xs.len() - 1
}

#[quickcheck]
fn remove_absent_value_leaves_list(xs: Vec<i8>) -> bool {
    // Nothing that fits in an `i8` is out of range for an `i16`.
    let mut list: DoublyLinkedList<i16> = xs.iter().map(|x| i16::from(*x)).collect();
    let expected = if xs.is_empty() {
        Error::EmptyContainer
    } else {
        Error::NotFound
    };

    list.remove(&1000) == Err(expected) && list.len() == xs.len()
}

#[quickcheck]
fn entries_can_stop_anywhere(xs: Vec<i8>, stop: usize) -> bool {
    let list: DoublyLinkedList<_> = xs.iter().copied().collect();
    let taken = list.iter_entries().take(stop).count();

    taken == stop.min(xs.len()) && list.iter_entries().count() == xs.len()
}

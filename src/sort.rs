//! In place comparison sorts.

/// Sorts `items` ascending by repeatedly swapping neighbours that are out of order. After pass
/// `i` the largest `i + 1` values have bubbled up into their final places. Takes `O(N²)` time.
///
/// # Examples
///
/// ```
/// use textbook::sort::bubble_sort;
///
/// let mut items = [9, 3, 7, 4, 69, 420, 42];
/// bubble_sort(&mut items);
///
/// assert_eq!(items, [3, 4, 7, 9, 42, 69, 420]);
/// ```
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len {
        for j in 0..len - 1 - i {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
            }
        }
    }
}

/// Sorts `items` ascending by partitioning around the last value and sorting either side.
/// Takes `O(N lg N)` time on average and `O(N²)` when the input is already sorted.
///
/// # Examples
///
/// ```
/// use textbook::sort::quick_sort;
///
/// let mut items = [9, 3, 7, 4, 69, 420, 42];
/// quick_sort(&mut items);
///
/// assert_eq!(items, [3, 4, 7, 9, 42, 69, 420]);
/// ```
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items);
    let (lo, hi) = items.split_at_mut(pivot);
    quick_sort(lo);
    quick_sort(&mut hi[1..]);
}

/// Moves every value no greater than the last one in front of it and returns where the last
/// value ends up.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let hi = items.len() - 1;

    let mut pivot = 0;
    for i in 0..hi {
        if items[i] <= items[hi] {
            items.swap(i, pivot);
            pivot += 1;
        }
    }

    items.swap(pivot, hi);
    pivot
}

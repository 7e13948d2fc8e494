use quickcheck::{Arbitrary, Gen};

/// Indices are drawn from a small range so they regularly land inside short lists.
const MAX_INDEX: usize = 16;

/// An enum for the various kinds of "things" to do to
/// a linked list in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T at the head
    Prepend(T),
    /// Insert the T at the tail
    Append(T),
    /// Insert the T at the index
    InsertAt(T, usize),
    /// Read the value at the index
    Get(usize),
    /// Remove the value at the index
    RemoveAt(usize),
    /// Remove the first value equal to T
    Remove(T),
    /// Compare entries
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        let index = usize::arbitrary(g) % MAX_INDEX;
        match g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap() {
            0 => Op::Prepend(T::arbitrary(g)),
            1 => Op::Append(T::arbitrary(g)),
            2 => Op::InsertAt(T::arbitrary(g), index),
            3 => Op::Get(index),
            4 => Op::RemoveAt(index),
            5 => Op::Remove(T::arbitrary(g)),
            6 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

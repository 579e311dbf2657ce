use std::cmp::Ordering;

use super::HeapStore;

/// The store an element lives in. `Overflow` ranks above `Main` on ties
/// between the two stores, like the queue does on dequeue.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Source {
    Main,
    Overflow,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    source: Source,
    indx: usize,
}

/// Read-only walk over two heaps in non-increasing priority order.
///
/// Keeps a frontier of candidate slots ordered by the element they point to.
/// The largest candidate is yielded and replaced by its children, so neither
/// heap is ever modified. O(k log k) for k yielded elements.
pub struct OrderedWalk<'a, T, C> {
    main: &'a [T],
    overflow: &'a [T],
    compare: &'a C,
    frontier: HeapStore<Slot>,
    remaining: usize,
}

impl<'a, T, C> OrderedWalk<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(main: &'a [T], overflow: &'a [T], compare: &'a C) -> Self {
        let mut walk = Self {
            main,
            overflow,
            compare,
            frontier: HeapStore::new(),
            remaining: main.len() + overflow.len(),
        };
        walk.push_slot(Slot { source: Source::Main, indx: 0 });
        walk.push_slot(Slot { source: Source::Overflow, indx: 0 });
        walk
    }

    fn slice(&self, source: Source) -> &'a [T] {
        match source {
            Source::Main => self.main,
            Source::Overflow => self.overflow,
        }
    }

    fn push_slot(&mut self, slot: Slot) {
        if slot.indx >= self.slice(slot.source).len() {
            return;
        }
        let (main, overflow, compare) = (self.main, self.overflow, self.compare);
        self.frontier.push(slot, &|a: &Slot, b: &Slot| by_element(main, overflow, compare, a, b));
    }
}

fn by_element<T, C>(main: &[T], overflow: &[T], compare: &C, a: &Slot, b: &Slot) -> Ordering
where
    C: Fn(&T, &T) -> Ordering,
{
    let resolve = |slot: &Slot| match slot.source {
        Source::Main => &main[slot.indx],
        Source::Overflow => &overflow[slot.indx],
    };
    compare(resolve(a), resolve(b)).then_with(|| a.source.cmp(&b.source))
}

impl<'a, T, C> Iterator for OrderedWalk<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (main, overflow, compare) = (self.main, self.overflow, self.compare);
        let slot = self
            .frontier
            .pop(&|a: &Slot, b: &Slot| by_element(main, overflow, compare, a, b))?;

        self.push_slot(Slot { source: slot.source, indx: 2 * slot.indx + 1 });
        self.push_slot(Slot { source: slot.source, indx: 2 * slot.indx + 2 });
        self.remaining -= 1;

        Some(&self.slice(slot.source)[slot.indx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C> ExactSizeIterator for OrderedWalk<'a, T, C> where C: Fn(&T, &T) -> Ordering {}

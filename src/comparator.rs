use std::cmp::{Ordering, Reverse};

/// Types with a built-in total order that the queue can use without a custom comparator.
///
/// Numbers compare arithmetically, text compares lexicographically.
/// Floats use the IEEE 754 total order, so `NaN` has a fixed place instead of
/// breaking the heap.
pub trait Comparable {
    /// Returns [`Ordering::Greater`] when `self` outranks `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// The comparator used when no custom comparator is given.
///
/// ```rust
/// use std::cmp::Ordering;
/// use tie_queue::default_comparator;
///
/// assert_eq!(default_comparator(&10, &1000), Ordering::Less);
/// assert_eq!(default_comparator("jano", "fran"), Ordering::Greater);
/// ```
pub fn default_comparator<T: Comparable + ?Sized>(a: &T, b: &T) -> Ordering {
    a.compare(b)
}

/// The inverse of [`default_comparator`]. Turns the queue into a min-queue.
pub fn reversed_comparator<T: Comparable + ?Sized>(a: &T, b: &T) -> Ordering {
    b.compare(a)
}

macro_rules! comparable_by_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

comparable_by_ord!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, str, String,
);

impl Comparable for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

// `None` ranks below every value.
impl<T: Comparable> Comparable for Option<T> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Comparable> Comparable for Reverse<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings() {
        assert_eq!(default_comparator("jano", "valentina"), Ordering::Less);
        assert_eq!(default_comparator("jano", "jano"), Ordering::Equal);
        assert_eq!(default_comparator("jano", "fran"), Ordering::Greater);

        let a = String::from("albert");
        let b = String::from("zombie");
        assert_eq!(default_comparator(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(default_comparator(&10, &1000), Ordering::Less);
        assert_eq!(default_comparator(&10, &10), Ordering::Equal);
        assert_eq!(default_comparator(&10, &1), Ordering::Greater);
        assert_eq!(default_comparator(&-3i64, &2i64), Ordering::Less);
    }

    #[test]
    fn test_floats() {
        assert_eq!(default_comparator(&1.5f64, &0.5f64), Ordering::Greater);
        assert_eq!(default_comparator(&-0.0f32, &0.0f32), Ordering::Less);
        assert_eq!(default_comparator(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(default_comparator(&Some(1), &None), Ordering::Greater);
        assert_eq!(default_comparator(&None::<u8>, &None), Ordering::Equal);
        assert_eq!(default_comparator(&Reverse(1), &Reverse(2)), Ordering::Greater);
        assert_eq!(reversed_comparator(&1, &2), Ordering::Greater);
    }
}

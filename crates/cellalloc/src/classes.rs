//! The size-class table.
//!
//! Ten power-of-two classes serve requests of up to [`MAX_SMALL_SIZE`]
//! bytes; class `i` holds blocks of `2^(i+1)` bytes. Larger requests bypass
//! the classes and get a dedicated region.

/// Number of small size classes.
pub const CLASS_COUNT: usize = 10;

/// Block size of the smallest class.
pub const MIN_BLOCK_SIZE: usize = 2;

/// Largest request served from a size class.
pub const MAX_SMALL_SIZE: usize = 1024;

/// Block size of class `class`: 2, 4, 8, …, 1024.
///
/// Exact and total on `0..CLASS_COUNT`; callers never pass anything else.
#[must_use]
pub const fn block_size(class: usize) -> usize {
    MIN_BLOCK_SIZE << class
}

/// Smallest class whose block size holds `size`, or `None` when the request
/// needs a dedicated region.
///
/// The map is a monotone step function: `class_of(2) == Some(0)`,
/// `class_of(3) == Some(1)`, …, `class_of(1024) == Some(9)`.
#[must_use]
pub const fn class_of(size: usize) -> Option<usize> {
    if size > MAX_SMALL_SIZE {
        return None;
    }
    let fitted = if size <= MIN_BLOCK_SIZE {
        MIN_BLOCK_SIZE
    } else {
        size.next_power_of_two()
    };
    Some(fitted.trailing_zeros() as usize - 1)
}

/// Whether `size` is one of the ten valid class block sizes.
///
/// Used to vet candidate page headers during pointer classification.
#[must_use]
pub const fn is_class_block_size(size: usize) -> bool {
    size >= MIN_BLOCK_SIZE && size <= MAX_SMALL_SIZE && size.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size_table() {
        let expected = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024];
        for (class, size) in expected.into_iter().enumerate() {
            assert_eq!(block_size(class), size);
        }
    }

    #[test]
    fn classification_round_trips_through_block_size() {
        for class in 0..CLASS_COUNT {
            assert_eq!(class_of(block_size(class)), Some(class));
        }
    }

    #[test]
    fn tie_breaks() {
        assert_eq!(class_of(2), Some(0));
        assert_eq!(class_of(3), Some(1));
    }

    #[test]
    fn tiny_requests_share_the_smallest_class() {
        assert_eq!(class_of(0), Some(0));
        assert_eq!(class_of(1), Some(0));
    }

    #[test]
    fn large_cutover() {
        assert_eq!(class_of(MAX_SMALL_SIZE), Some(CLASS_COUNT - 1));
        assert_eq!(class_of(MAX_SMALL_SIZE + 1), None);
        assert_eq!(class_of(usize::MAX), None);
    }

    #[test]
    fn classification_is_monotone_and_sufficient() {
        let mut previous = 0;
        for size in 1..=MAX_SMALL_SIZE {
            let class = class_of(size).unwrap();
            assert!(class >= previous, "classes must not shrink as sizes grow");
            assert!(block_size(class) >= size, "a block must hold the request");
            previous = class;
        }
    }

    #[test]
    fn header_vetting_accepts_only_class_sizes() {
        for class in 0..CLASS_COUNT {
            assert!(is_class_block_size(block_size(class)));
        }
        for bogus in [0, 1, 3, 6, 100, 2048, usize::MAX] {
            assert!(!is_class_block_size(bogus));
        }
    }
}

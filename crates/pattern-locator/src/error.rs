use thiserror::Error;

/// Rejected locator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("haystack is empty")]
    HaystackEmpty,

    #[error("needle is empty")]
    NeedleEmpty,

    #[error("haystack is shorter than needle ({haystack_len} < {needle_len})")]
    HaystackShorter {
        haystack_len: usize,
        needle_len: usize,
    },

    #[error("max distance must be a positive number")]
    DistanceNotPositive,

    #[error("max distance {max_distance} exceeds haystack length {haystack_len}")]
    DistanceTooLarge {
        max_distance: usize,
        haystack_len: usize,
    },
}

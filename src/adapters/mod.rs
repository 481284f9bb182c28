// Adapters layer: concrete implementations of the domain ports (card storage, clock).

pub mod clock;
pub mod storage;

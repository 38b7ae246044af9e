use thiserror::Error;

#[derive(PartialEq, Debug, Error)]
pub enum Error {
    #[error("Region at {offset:#06x} (size {size:#x}) overlaps an existing region")]
    RegionOverlap { offset: u16, size: usize },

    #[error("Offset {offset:#06x} already holds an MMIO register")]
    DuplicateRegister { offset: u16 },

    #[error("Write of {size:#x} bytes at {start:#06x} leaves the bus span of {bus_len:#x} bytes")]
    AddressOutOfRange {
        start: u16,
        size: usize,
        bus_len: usize,
    },

    #[error("Invalid hex digit in byte string: {0:?}")]
    InvalidHex(String),

    #[error("Step limit of {0} steps exhausted without hitting a BRK")]
    StepLimitReached(u64),
}

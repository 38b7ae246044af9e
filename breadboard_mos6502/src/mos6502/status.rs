/// `Status` represents the processor status register, `p` on the `MOS6502`.
///
/// Each bit in `p` has a different meaning:
///
/// ```text
/// +---+---+---+---+---+---+---+---+
/// | N | V |   | B | D | I | Z | C |
/// +---+---+---+---+---+---+---+---+
/// ```
///
/// - `C` is the carry flag, the "ninth bit" of arithmetic and shift operations.
/// - `Z` is set whenever the 8-bit result of an operation is 0.
/// - `I` is the interrupt disable flag. While set, maskable interrupts (IRQ) are ignored.
/// - `D` is the decimal mode flag. While set, ADC and SBC operate on packed BCD values.
/// - `B` distinguishes a `BRK`-pushed status byte from an IRQ/NMI-pushed one.
/// - ` ` is the expansion bit. It's unused and always reads as 1.
/// - `V` is set when addition/subtraction overflows in the signed interpretation.
/// - `N` mirrors bit 7 of the result of data movements and arithmetic.
///
/// Gotchas:
///
/// - `B` doesn't exist in the live `p`. It only appears in copies of `p` pushed to the
///   stack by `BRK` and `PHP`, and is masked off again when `PLP`/`RTI` restore `p`.
/// - ` ` (unused) is _always_ set to 1 in the live register.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Status(pub u8);

impl Status {
    pub fn get(&self, flag: StatusFlag) -> bool {
        let bit = flag as u8;

        (self.0 & (1 << bit)) != 0
    }

    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        let bit = flag as u8;
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }

    /// Return a copy of this status with `flag` set to `value`.
    ///
    /// Used to build the stacked copies of `p` pushed during `PHP` and interrupt entry.
    pub fn with(self, flag: StatusFlag, value: bool) -> Status {
        let mut status = self;
        status.set(flag, value);
        status
    }
}

impl Default for Status {
    /// The power-on value of `p`: `Zero`, `InterruptDisable` and the unused bit set.
    fn default() -> Status {
        let mut status = Status(0);
        status.set(StatusFlag::Zero, true);
        status.set(StatusFlag::InterruptDisable, true);
        status.set(StatusFlag::Unused, true);
        status
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    DecimalMode = 3,
    Break = 4,
    Unused = 5,
    Overflow = 6,
    Negative = 7,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn default_status_sets_zero_interrupt_disable_and_unused() {
        let status = Status::default();

        assert_eq!(status.0, 0b0010_0110);
        assert!(status.get(StatusFlag::Zero));
        assert!(status.get(StatusFlag::InterruptDisable));
        assert!(status.get(StatusFlag::Unused));
        assert!(!status.get(StatusFlag::Carry));
    }

    #[test]
    pub fn set_and_get_roundtrip() {
        let mut status = Status(0);
        status.set(StatusFlag::Negative, true);
        status.set(StatusFlag::Carry, true);

        assert!(status.get(StatusFlag::Negative));
        assert!(status.get(StatusFlag::Carry));
        assert_eq!(status.0, 0b1000_0001);

        status.set(StatusFlag::Negative, false);
        assert!(!status.get(StatusFlag::Negative));
    }

    #[test]
    pub fn with_copies_instead_of_mutating() {
        let status = Status::default();
        let pushed = status.with(StatusFlag::Break, true);

        assert!(pushed.get(StatusFlag::Break));
        assert!(!status.get(StatusFlag::Break));
    }
}

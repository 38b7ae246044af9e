/// The four events that can redirect control flow through a vector.
///
/// All of them share the same entry sequence on the 6502 (stack the return state, set
/// `InterruptDisable`, load `PC` from the vector); they differ only in gating, in
/// whether anything is stacked at all, and in the `Break` bit of the pushed status.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Interrupt {
    /// Non-maskable interrupt. Delivered even while `InterruptDisable` is set.
    Nmi,

    /// Power-on / reset. Stacks nothing but still decrements `SP` by 3.
    Reset,

    /// Maskable interrupt request. Ignored while `InterruptDisable` is set.
    Irq,

    /// The software interrupt raised by the `BRK` instruction.
    Brk,
}

pub const NMI_VECTOR_ADDRESS: u16 = 0xFFFA;
pub const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;
pub const IRQ_VECTOR_ADDRESS: u16 = 0xFFFE;

impl Interrupt {
    /// Only IRQ respects the `InterruptDisable` flag.
    pub fn maskable(self) -> bool {
        self == Interrupt::Irq
    }

    /// The pushed status byte carries `Break` only for `BRK`; hardware interrupts push
    /// it clear so the handler can tell the two apart.
    pub fn pushes_break_flag(self) -> bool {
        self == Interrupt::Brk
    }

    pub fn vector_address(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR_ADDRESS,
            Interrupt::Reset => RESET_VECTOR_ADDRESS,
            Interrupt::Irq => IRQ_VECTOR_ADDRESS,
            Interrupt::Brk => IRQ_VECTOR_ADDRESS,
        }
    }
}

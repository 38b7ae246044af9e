mod addressing_mode;
mod bus;
mod error;
mod instruction;
mod interrupt;
mod opcode;
mod register;
mod runner;
mod status;

use log::warn;

use register::Register;

pub use addressing_mode::AddressingMode;
pub use bus::{Bus, Memory, MmioBlock, MmioHandler, Ram, Rom};
pub use error::Error;
pub use instruction::InstructionSignature;
pub use interrupt::{
    Interrupt, IRQ_VECTOR_ADDRESS, NMI_VECTOR_ADDRESS, RESET_VECTOR_ADDRESS,
};
pub use opcode::Opcode;
pub use runner::{run, run_to_break, RunExit, RunOptions};
pub use status::{Status, StatusFlag};

pub type Result<A> = std::result::Result<A, Error>;

pub type Address = u16;

const STACK_ROOT: u16 = 0x0100;

/// The outcome of one fetch/decode/execute step.
///
/// `Break` is how `step` tells its caller that a `BRK` was executed; the live status
/// register carries no `Break` bit, so this is the only signal.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StepResult {
    Normal,

    /// The instruction was `BRK`. The interrupt entry sequence has already run.
    Break,

    /// The opcode byte doesn't decode to a documented instruction. A diagnostic has
    /// been logged and the break path has been taken in its place.
    IllegalOpcode,
}

/// `MOS6502` emulates the functionality of the MOS Technology 6502 microprocessor.
///
/// The model is instruction-accurate: each [`MOS6502::step`] executes one whole
/// instruction and charges its full cycle cost (including page-crossing penalties) to
/// [`MOS6502::cycles`]. It is not cycle-stepped; the bus sees the instruction's reads
/// and writes in program order, not on their real clock edges.
pub struct MOS6502 {
    /// `a` is the accumulator register. Arithmetic and logic results land here, and it
    /// is the only register `ADC`/`SBC` and the logical instructions operate on.
    pub a: u8,

    /// An 8-bit index register, mainly used for counters and memory offsets.
    pub x: u8,

    /// An 8-bit index register, mainly used for counters and memory offsets.
    pub y: u8,

    pub p: Status,

    /// `pc` is the program counter. It points at the next byte to fetch.
    pub pc: u16,

    /// `sp` is the stack pointer, an offset into the fixed stack page `0x0100..=0x01FF`.
    ///
    /// The 6502 uses a _descending_ stack: pushing decrements `sp`, pulling increments
    /// it, and both wrap within the page.
    pub sp: u8,

    /// Total cycles charged since construction. Monotonically non-decreasing; every
    /// instruction costs at least 2.
    pub cycles: u64,

    /// The memory map this CPU is wired to. The CPU owns the bus for the duration of
    /// emulation; peripherals see traffic through the MMIO handlers they registered.
    pub bus: Bus,
}

impl MOS6502 {
    pub fn new(bus: Bus) -> MOS6502 {
        MOS6502 {
            a: 0,
            x: 0,
            y: 0,

            p: Status::default(),

            pc: 0,
            sp: 0xFF,

            cycles: 0,

            bus,
        }
    }

    /// Execute the next instruction.
    ///
    /// Fetches the opcode byte at `pc`, decodes it through the signature table,
    /// resolves the operand, executes, and charges the cycle cost. Undocumented
    /// opcode bytes are logged and take the break path, so a runaway program halts
    /// instead of executing garbage.
    pub fn step(&mut self) -> StepResult {
        let fetch_address = self.pc;
        let opcode_byte = self.bus.read(fetch_address);
        self.pc = self.pc.wrapping_add(1);

        match InstructionSignature::decode(opcode_byte) {
            Some(signature) => self.execute(signature),
            None => {
                warn!(
                    "Unhandled opcode {:#04x} at {:#06x}",
                    opcode_byte, fetch_address
                );
                self.interrupt(Interrupt::Brk);
                StepResult::IllegalOpcode
            }
        }
    }

    fn execute(&mut self, signature: InstructionSignature) -> StepResult {
        let mode = signature.addressing_mode;

        match signature.opcode {
            // Register Operations
            Opcode::LDA => self.op_load(Register::A, mode),
            Opcode::LDX => self.op_load(Register::X, mode),
            Opcode::LDY => self.op_load(Register::Y, mode),
            Opcode::STA => self.op_store(Register::A, mode),
            Opcode::STX => self.op_store(Register::X, mode),
            Opcode::STY => self.op_store(Register::Y, mode),
            Opcode::TAX => self.op_transfer(Register::A, Register::X),
            Opcode::TAY => self.op_transfer(Register::A, Register::Y),
            Opcode::TXA => self.op_transfer(Register::X, Register::A),
            Opcode::TYA => self.op_transfer(Register::Y, Register::A),

            // Stack Operations
            Opcode::TSX => self.op_transfer(Register::SP, Register::X),
            Opcode::TXS => self.op_transfer(Register::X, Register::SP),
            Opcode::PHA => self.op_push_stack(Register::A),
            Opcode::PHP => self.op_push_stack(Register::P),
            Opcode::PLA => self.op_pull_stack(Register::A),
            Opcode::PLP => self.op_pull_stack(Register::P),

            // Logical Operations
            Opcode::AND => self.op_logical(mode, true, |a, m| a & m),
            Opcode::EOR => self.op_logical(mode, false, |a, m| a ^ m),
            Opcode::ORA => self.op_logical(mode, false, |a, m| a | m),
            Opcode::BIT => self.op_bit(mode),

            // Arithmetic
            Opcode::ADC => self.op_add(mode),
            Opcode::SBC => self.op_subtract(mode),
            Opcode::CMP => self.op_compare(Register::A, mode),
            Opcode::CPX => self.op_compare(Register::X, mode),
            Opcode::CPY => self.op_compare(Register::Y, mode),

            // Increments & Decrements
            Opcode::INC => self.op_modify_memory(mode, |v| v.wrapping_add(1)),
            Opcode::INX => self.op_modify_register(Register::X, |x| x.wrapping_add(1)),
            Opcode::INY => self.op_modify_register(Register::Y, |y| y.wrapping_add(1)),
            Opcode::DEC => self.op_modify_memory(mode, |v| v.wrapping_sub(1)),
            Opcode::DEX => self.op_modify_register(Register::X, |x| x.wrapping_sub(1)),
            Opcode::DEY => self.op_modify_register(Register::Y, |y| y.wrapping_sub(1)),

            // Shifts
            Opcode::ASL => self.op_shift(mode, |v, _carry| (v << 1, v >> 7)),
            Opcode::LSR => self.op_shift(mode, |v, _carry| (v >> 1, v & 1)),
            Opcode::ROL => self.op_shift(mode, |v, carry| ((v << 1) | carry, v >> 7)),
            Opcode::ROR => self.op_shift(mode, |v, carry| ((carry << 7) | (v >> 1), v & 1)),

            // Jumps & Calls
            Opcode::JMP => self.op_jump(mode),
            Opcode::JSR => self.op_jump_subroutine(),
            Opcode::RTS => self.op_return(),

            // Branches
            Opcode::BCS => self.op_branch(StatusFlag::Carry, true),
            Opcode::BCC => self.op_branch(StatusFlag::Carry, false),
            Opcode::BEQ => self.op_branch(StatusFlag::Zero, true),
            Opcode::BNE => self.op_branch(StatusFlag::Zero, false),
            Opcode::BMI => self.op_branch(StatusFlag::Negative, true),
            Opcode::BPL => self.op_branch(StatusFlag::Negative, false),
            Opcode::BVS => self.op_branch(StatusFlag::Overflow, true),
            Opcode::BVC => self.op_branch(StatusFlag::Overflow, false),

            // Status Flag Changes
            Opcode::CLC => self.op_set_flag(StatusFlag::Carry, false),
            Opcode::CLD => self.op_set_flag(StatusFlag::DecimalMode, false),
            Opcode::CLI => self.op_set_flag(StatusFlag::InterruptDisable, false),
            Opcode::CLV => self.op_set_flag(StatusFlag::Overflow, false),
            Opcode::SEC => self.op_set_flag(StatusFlag::Carry, true),
            Opcode::SED => self.op_set_flag(StatusFlag::DecimalMode, true),
            Opcode::SEI => self.op_set_flag(StatusFlag::InterruptDisable, true),

            // System Functions
            Opcode::NOP => self.op_nop(),
            Opcode::RTI => self.op_return_from_interrupt(),
            Opcode::BRK => {
                self.interrupt(Interrupt::Brk);
                return StepResult::Break;
            }
        }

        StepResult::Normal
    }

    /// Simulates the `irq` input pin. Ignored while `InterruptDisable` is set.
    pub fn irq(&mut self) {
        self.interrupt(Interrupt::Irq);
    }

    /// Simulates the `nmi` input pin. Delivered regardless of `InterruptDisable`.
    pub fn nmi(&mut self) {
        self.interrupt(Interrupt::Nmi);
    }

    /// Simulates the `reset` input pin.
    ///
    /// Nothing is written to the stack but `sp` still drops by 3 (the hardware goes
    /// through the push motions with the write line disabled). `InterruptDisable` is
    /// set, `DecimalMode` cleared, and `pc` loaded from the RESET vector; `a`, `x`,
    /// `y` and the remaining flags keep whatever they held.
    pub fn reset(&mut self) {
        self.interrupt(Interrupt::Reset);
    }

    /// The shared entry sequence for BRK, IRQ, NMI and RESET.
    fn interrupt(&mut self, interrupt: Interrupt) {
        if interrupt.maskable() && self.p.get(StatusFlag::InterruptDisable) {
            return;
        }

        if interrupt == Interrupt::Brk {
            // Skip the signature byte that follows the BRK opcode. The stacked
            // return address points one past it.
            self.pc = self.pc.wrapping_add(1);
        }

        if interrupt == Interrupt::Reset {
            self.sp = self.sp.wrapping_sub(3);
            self.p.set(StatusFlag::DecimalMode, false);
        } else {
            self.push_stack_u8((self.pc >> 8) as u8);
            self.push_stack_u8(self.pc as u8);

            let pushed = self
                .p
                .with(StatusFlag::Break, interrupt.pushes_break_flag());
            self.push_stack_u8(pushed.0);
        }

        // InterruptDisable is set only after the old status has been stacked, so the
        // handler's RTI restores the pre-interrupt value.
        self.p.set(StatusFlag::InterruptDisable, true);
        self.pc = self.bus.read_u16(interrupt.vector_address());
        self.cycles += 7;
    }

    /// Resolve the effective address of a memory-addressed operand.
    ///
    /// Consumes the operand bytes (advancing `pc` past them) and returns the address
    /// together with whether indexing crossed a page boundary. Zero page pointer
    /// arithmetic wraps within the zero page; absolute indexing wraps at `0xFFFF`.
    ///
    /// `Implied`, `Accumulator`, `Relative` and `Indirect` operands are decoded by
    /// their instructions; routing them through here is a bug in the decoder.
    pub fn resolve_address(&mut self, mode: AddressingMode) -> (Address, bool) {
        match mode {
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (addr, false)
            }
            AddressingMode::ZeroPage => {
                let addr = self.bus.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                (addr, false)
            }
            AddressingMode::ZeroPageX => {
                let zero_page_location = self.bus.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                (zero_page_location.wrapping_add(self.x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                let zero_page_location = self.bus.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                (zero_page_location.wrapping_add(self.y) as u16, false)
            }
            AddressingMode::Absolute => {
                let addr = self.bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                (addr, false)
            }
            AddressingMode::AbsoluteX => {
                let base = self.bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                let addr = base.wrapping_add(self.x as u16);
                (addr, (base & 0xFF00) != (addr & 0xFF00))
            }
            AddressingMode::AbsoluteY => {
                let base = self.bus.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                let addr = base.wrapping_add(self.y as u16);
                (addr, (base & 0xFF00) != (addr & 0xFF00))
            }
            AddressingMode::IndexedIndirect => {
                let pointer = self.bus.read(self.pc).wrapping_add(self.x);
                self.pc = self.pc.wrapping_add(1);
                let lo = self.bus.read(pointer as u16);
                let hi = self.bus.read(pointer.wrapping_add(1) as u16);
                (u16::from_le_bytes([lo, hi]), false)
            }
            AddressingMode::IndirectIndexed => {
                let pointer = self.bus.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                let lo = self.bus.read(pointer as u16);
                let hi = self.bus.read(pointer.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(self.y as u16);
                (addr, (base & 0xFF00) != (addr & 0xFF00))
            }
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::Relative
            | AddressingMode::Indirect => {
                unreachable!("{} operands are not resolved through resolve_address", mode)
            }
        }
    }

    fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
            Register::P => self.p.0,
            Register::SP => self.sp,
        }
    }

    /// Write a value to a register and update the status flags if necessary.
    fn write_register(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
            Register::P => self.p.0 = value,
            Register::SP => self.sp = value,
        }

        // Writing to `P` or `SP` doesn't trigger the flag bookkeeping
        if register != Register::P && register != Register::SP {
            self.update_zero_flag(value);
            self.update_negative_flag(value);
        }

        // `P` has no real storage for `Break`, and the unused bit always reads as 1.
        // Whatever arrives from the stack gets normalized.
        if register == Register::P {
            self.p.set(StatusFlag::Break, false);
            self.p.set(StatusFlag::Unused, true);
        }
    }

    fn update_zero_flag(&mut self, result: u8) {
        self.p.set(StatusFlag::Zero, result == 0);
    }

    fn update_negative_flag(&mut self, result: u8) {
        self.p.set(StatusFlag::Negative, result & 0x80 != 0);
    }

    /// Signed overflow for addition: set when both inputs share a sign and the result
    /// doesn't. Subtraction reuses this with the operand complemented.
    fn update_overflow_flag(&mut self, a_initial: u8, operand: u8, result: u8) {
        let overflow = !(a_initial ^ operand) & (a_initial ^ result) & 0x80 != 0;
        self.p.set(StatusFlag::Overflow, overflow);
    }

    fn push_stack_u8(&mut self, byte: u8) {
        self.bus.write(STACK_ROOT + self.sp as u16, byte);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull_stack_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_ROOT + self.sp as u16)
    }

    fn op_load(&mut self, register: Register, mode: AddressingMode) {
        let (addr, page_boundary_crossed) = self.resolve_address(mode);
        let value = self.bus.read(addr);
        self.write_register(register, value);

        self.cycles += load_cycle_count(mode);
        if page_boundary_crossed && page_cross_penalty_applies(mode) {
            self.cycles += 1;
        }
    }

    fn op_store(&mut self, register: Register, mode: AddressingMode) {
        let value = self.read_register(register);
        let (addr, _) = self.resolve_address(mode);
        self.bus.write(addr, value);

        // Indexed stores pre-charge the page-cross cycle in their base count, so the
        // crossed flag is irrelevant here.
        self.cycles += store_cycle_count(mode);
    }

    /// Copy the contents of `source` into `target`.
    ///
    /// All transfers update `Zero`/`Negative` except `TXS`, which falls out of
    /// `write_register` skipping the flags for `SP`.
    fn op_transfer(&mut self, source: Register, target: Register) {
        let value = self.read_register(source);
        self.write_register(target, value);
        self.cycles += 2;
    }

    fn op_push_stack(&mut self, source: Register) {
        let value = if source == Register::P {
            // The pushed copy carries `Break`; the live register never does.
            self.p.with(StatusFlag::Break, true).0
        } else {
            self.read_register(source)
        };

        self.push_stack_u8(value);
        self.cycles += 3;
    }

    fn op_pull_stack(&mut self, target: Register) {
        let value = self.pull_stack_u8();
        self.write_register(target, value);
        self.cycles += 4;
    }

    fn op_modify_register(&mut self, register: Register, f: impl FnOnce(u8) -> u8) {
        let value = self.read_register(register);
        self.write_register(register, f(value));
        self.cycles += 2;
    }

    fn op_modify_memory(&mut self, mode: AddressingMode, f: impl FnOnce(u8) -> u8) {
        let (addr, _) = self.resolve_address(mode);
        let result = f(self.bus.read(addr));
        self.bus.write(addr, result);

        self.cycles += modify_cycle_count(mode);

        self.update_zero_flag(result);
        self.update_negative_flag(result);
    }

    /// Shared body of the shift and rotate instructions.
    ///
    /// `f` maps `(input, carry_in)` to `(result, carry_out)` where the carries are a
    /// single bit in bit position 0.
    fn op_shift(&mut self, mode: AddressingMode, f: impl FnOnce(u8, u8) -> (u8, u8)) {
        let carry_in = self.p.get(StatusFlag::Carry) as u8;

        let (result, carry_out) = if mode == AddressingMode::Accumulator {
            let (result, carry_out) = f(self.a, carry_in);
            self.a = result;
            self.cycles += 2;
            (result, carry_out)
        } else {
            let (addr, _) = self.resolve_address(mode);
            let (result, carry_out) = f(self.bus.read(addr), carry_in);
            self.bus.write(addr, result);
            self.cycles += modify_cycle_count(mode);
            (result, carry_out)
        };

        self.p.set(StatusFlag::Carry, carry_out != 0);
        self.update_zero_flag(result);
        self.update_negative_flag(result);
    }

    /// Execute the ADd with Carry (ADC) instruction.
    ///
    /// With `DecimalMode` set, both operands are treated as packed BCD. The binary
    /// intermediate is computed either way because `Zero`, `Negative` and `Overflow`
    /// come from it even in decimal mode; only `Carry` follows the decimal result.
    fn op_add(&mut self, mode: AddressingMode) {
        let (addr, page_boundary_crossed) = self.resolve_address(mode);
        let operand = self.bus.read(addr);

        let a_initial = self.a;
        let carry_in = self.p.get(StatusFlag::Carry) as u16;
        let binary_sum = a_initial as u16 + operand as u16 + carry_in;
        let mut carry_out = binary_sum > 0xFF;
        let binary_result = binary_sum as u8;

        if !self.p.get(StatusFlag::DecimalMode) {
            self.a = binary_result;
        } else {
            let mut sum = bcd_to_dec(a_initial) as u16 + bcd_to_dec(operand) as u16 + carry_in;
            carry_out = sum >= 100;
            if carry_out {
                sum -= 100;
            }
            self.a = dec_to_bcd(sum as u8);
        }

        self.p.set(StatusFlag::Carry, carry_out);
        self.update_zero_flag(binary_result);
        self.update_negative_flag(binary_result);
        self.update_overflow_flag(a_initial, operand, binary_result);

        self.cycles += binary_cycle_count(mode);
        if page_boundary_crossed && page_cross_penalty_applies(mode) {
            self.cycles += 1;
        }
    }

    /// Execute the SuBtract with Carry / borrow (SBC) instruction.
    ///
    /// Binary SBC is ADC of the complemented operand. The decimal path subtracts in
    /// base 100, borrowing when the difference goes negative.
    fn op_subtract(&mut self, mode: AddressingMode) {
        let (addr, page_boundary_crossed) = self.resolve_address(mode);
        let operand = self.bus.read(addr);

        let a_initial = self.a;
        let carry_in = self.p.get(StatusFlag::Carry) as u16;
        let binary_difference = a_initial as u16 + (!operand) as u16 + carry_in;
        let mut carry_out = binary_difference > 0xFF;
        let binary_result = binary_difference as u8;

        if !self.p.get(StatusFlag::DecimalMode) {
            self.a = binary_result;
        } else {
            let difference = bcd_to_dec(a_initial) as i16 - bcd_to_dec(operand) as i16
                + carry_in as i16
                - 1;
            carry_out = difference >= 0;
            let difference = if carry_out {
                difference
            } else {
                difference + 100
            };
            self.a = dec_to_bcd(difference as u8);
        }

        self.p.set(StatusFlag::Carry, carry_out);
        self.update_zero_flag(binary_result);
        self.update_negative_flag(binary_result);
        self.update_overflow_flag(a_initial, !operand, binary_result);

        self.cycles += binary_cycle_count(mode);
        if page_boundary_crossed && page_cross_penalty_applies(mode) {
            self.cycles += 1;
        }
    }

    /// Shared body of AND, EOR and ORA.
    ///
    /// `indirect_indexed_penalty`: AND charges the page-cross cycle on `($zp),Y` like
    /// the arithmetic instructions do; EOR and ORA only charge it for absolute
    /// indexing.
    fn op_logical(
        &mut self,
        mode: AddressingMode,
        indirect_indexed_penalty: bool,
        f: fn(u8, u8) -> u8,
    ) {
        let (addr, page_boundary_crossed) = self.resolve_address(mode);
        let operand = self.bus.read(addr);

        let result = f(self.a, operand);
        self.write_register(Register::A, result);

        self.cycles += binary_cycle_count(mode);
        let penalty_applies = match mode {
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => true,
            AddressingMode::IndirectIndexed => indirect_indexed_penalty,
            _ => false,
        };
        if page_boundary_crossed && penalty_applies {
            self.cycles += 1;
        }
    }

    fn op_bit(&mut self, mode: AddressingMode) {
        let (addr, _) = self.resolve_address(mode);
        let operand = self.bus.read(addr);

        self.p.set(StatusFlag::Zero, self.a & operand == 0);
        self.p.set(StatusFlag::Overflow, operand & 0b0100_0000 != 0);
        self.p.set(StatusFlag::Negative, operand & 0b1000_0000 != 0);

        self.cycles += binary_cycle_count(mode);
    }

    /// Shared body of CMP, CPX and CPY: the flags of `register - operand` without the
    /// assignment. `Carry` means no borrow, i.e. `register >= operand` unsigned.
    fn op_compare(&mut self, register: Register, mode: AddressingMode) {
        let register_value = self.read_register(register);
        let (addr, page_boundary_crossed) = self.resolve_address(mode);
        let operand = self.bus.read(addr);

        let result = register_value.wrapping_sub(operand);
        self.p.set(StatusFlag::Carry, register_value >= operand);
        self.update_zero_flag(result);
        self.update_negative_flag(result);

        self.cycles += binary_cycle_count(mode);
        if page_boundary_crossed && page_cross_penalty_applies(mode) {
            self.cycles += 1;
        }
    }

    /// Branch by the signed relative operand if `flag` currently equals `expected`.
    fn op_branch(&mut self, flag: StatusFlag, expected: bool) {
        if self.p.get(flag) == expected {
            let offset = self.bus.read(self.pc) as i8;
            self.pc = self.pc.wrapping_add(1);

            let old_pc = self.pc;
            self.pc = self.pc.wrapping_add(offset as u16);
            self.cycles += 3;

            if (old_pc & 0xFF00) != (self.pc & 0xFF00) {
                self.cycles += 1;
            }
        } else {
            self.pc = self.pc.wrapping_add(1);
            self.cycles += 2;
        }
    }

    /// Execute the JuMP (JMP) instruction.
    ///
    /// The indirect form reproduces the NMOS hardware bug: when the pointer's low
    /// byte is `0xFF` the high byte of the target is fetched from the beginning of
    /// the _same_ page rather than the next one.
    fn op_jump(&mut self, mode: AddressingMode) {
        let pointer = self.bus.read_u16(self.pc);

        match mode {
            AddressingMode::Absolute => {
                self.pc = pointer;
                self.cycles += 3;
            }
            AddressingMode::Indirect => {
                let lo = self.bus.read(pointer);
                let pointer_incremented = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let hi = self.bus.read(pointer_incremented);
                self.pc = u16::from_le_bytes([lo, hi]);
                self.cycles += 5;
            }
            _ => unreachable!("JMP only decodes as Absolute or Indirect, got {}", mode),
        }
    }

    fn op_jump_subroutine(&mut self) {
        let target = self.bus.read_u16(self.pc);

        // The stacked return address points at the JSR's own last byte; RTS adds the
        // 1 back when it pulls.
        let return_address = self.pc.wrapping_add(1);
        self.push_stack_u8((return_address >> 8) as u8);
        self.push_stack_u8(return_address as u8);

        self.pc = target;
        self.cycles += 6;
    }

    fn op_return(&mut self) {
        let lo = self.pull_stack_u8();
        let hi = self.pull_stack_u8();
        self.pc = u16::from_le_bytes([lo, hi]).wrapping_add(1);
        self.cycles += 6;
    }

    fn op_return_from_interrupt(&mut self) {
        let status = self.pull_stack_u8();
        self.write_register(Register::P, status);

        let lo = self.pull_stack_u8();
        let hi = self.pull_stack_u8();
        self.pc = u16::from_le_bytes([lo, hi]);
        self.cycles += 6;
    }

    fn op_set_flag(&mut self, flag: StatusFlag, value: bool) {
        self.p.set(flag, value);
        self.cycles += 2;
    }

    fn op_nop(&mut self) {
        self.cycles += 2;
    }
}

/// Base cycle cost of the load instructions by addressing mode.
fn load_cycle_count(mode: AddressingMode) -> u64 {
    match mode {
        AddressingMode::Immediate => 2,
        AddressingMode::ZeroPage => 3,
        AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => 4,
        AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 4,
        AddressingMode::IndexedIndirect => 6,
        AddressingMode::IndirectIndexed => 5,
        _ => unreachable!("{} is not a load addressing mode", mode),
    }
}

/// Cycle cost of the store instructions. Indexed stores pre-charge the page-cross
/// cycle, which is why `AbsoluteX`/`AbsoluteY`/`IndirectIndexed` run one higher than
/// their load counterparts.
fn store_cycle_count(mode: AddressingMode) -> u64 {
    match mode {
        AddressingMode::ZeroPage => 3,
        AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => 4,
        AddressingMode::Absolute => 4,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 5,
        AddressingMode::IndexedIndirect | AddressingMode::IndirectIndexed => 6,
        _ => unreachable!("{} is not a store addressing mode", mode),
    }
}

/// Cycle cost of the read-modify-write instructions (INC, DEC and the memory forms
/// of the shifts).
fn modify_cycle_count(mode: AddressingMode) -> u64 {
    match mode {
        AddressingMode::ZeroPage => 5,
        AddressingMode::ZeroPageX => 6,
        AddressingMode::Absolute => 6,
        AddressingMode::AbsoluteX => 7,
        _ => unreachable!("{} is not a read-modify-write addressing mode", mode),
    }
}

/// Base cycle cost of the accumulator-operand instructions (logic, arithmetic,
/// compares, BIT).
fn binary_cycle_count(mode: AddressingMode) -> u64 {
    match mode {
        AddressingMode::Immediate => 2,
        AddressingMode::ZeroPage => 3,
        AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => 4,
        AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 4,
        AddressingMode::IndexedIndirect => 6,
        AddressingMode::IndirectIndexed => 5,
        _ => unreachable!("{} is not an accumulator-operand addressing mode", mode),
    }
}

/// The modes whose extra page-cross cycle applies to loads, arithmetic and compares.
fn page_cross_penalty_applies(mode: AddressingMode) -> bool {
    matches!(
        mode,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectIndexed
    )
}

/// Convert a packed BCD byte (one decimal digit per nibble) to its decimal value.
fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0xF)
}

/// Convert a decimal number in `0..=99` to packed BCD.
fn dec_to_bcd(dec: u8) -> u8 {
    debug_assert!(dec <= 99, "decimal value {} does not fit two BCD digits", dec);
    ((dec / 10) << 4) | (dec % 10)
}

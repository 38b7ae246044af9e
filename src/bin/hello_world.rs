//! Print "Hello, World!" through the terminal output register.

use std::ops::ControlFlow;

use breadboard::terminal::TerminalPeripheral;
use breadboard_mos6502::mos6502::{run, Bus, MOS6502, Ram, RunOptions};

// .ORG $1000
//
// ; MMIO register for writing to terminal
// TERMOUT = $D001
//
// JMP START
//
// MSG:
//         .ASCII "Hello, World!"
//         .BYTE $0A ; newline
// MSG_END:
//
// START:
//         LDX #0
// !       LDA MSG,X
//         STA TERMOUT
//         INX
//         CPX #MSG_END-MSG
//         BNE !-
//         BRK
const PROGRAM: &str = "
    4C 11 10 48 65 6C 6C 6F
    2C 20 57 6F 72 6C 64 21
    0A A2 00 BD 03 10 8D 01
    D0 E8 E0 0E D0 F5 00
";

fn main() {
    env_logger::init();

    let terminal = TerminalPeripheral::new();
    let bus = Bus::new()
        .add_region(0x0000, Ram::new(0x1000))
        .expect("RAM doesn't fit the memory map")
        .add_region(0x1000, Ram::new(0x1000))
        .expect("Program memory doesn't fit the memory map")
        .add_region(0xD000, terminal.mmio_block().expect("Failed to build the terminal"))
        .expect("Terminal doesn't fit the memory map");

    let mut cpu = MOS6502::new(bus);
    cpu.bus
        .write_bytes_hex(0x1000, PROGRAM)
        .expect("Failed to load the program");
    cpu.pc = 0x1000;

    let options = RunOptions {
        max_steps: Some(1_000),
        ..RunOptions::default()
    };
    run(&mut cpu, options, |_| ControlFlow::Continue(())).expect("Program didn't halt");
}

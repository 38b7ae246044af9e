//! Echo typed characters back to the terminal, interrupt-driven.
//!
//! A reader thread puts the terminal into raw mode and forwards keystrokes over a
//! channel. The between-step hook drains the channel, loads each byte into the
//! terminal's input register and raises an IRQ; the ROM's service routine copies the
//! byte to the output register and returns. Ctrl+C stops the run.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use breadboard::terminal::{monitor_stdin, TerminalPeripheral};
use breadboard_mos6502::mos6502::{
    run, Bus, MOS6502, Ram, Rom, RunOptions, IRQ_VECTOR_ADDRESS, NMI_VECTOR_ADDRESS,
    RESET_VECTOR_ADDRESS,
};

const ROM_BASE: u16 = 0xE000;
const ROM_SIZE: usize = 0x2000;

// .ORG $E000
//
// TERMOUT = $D001
// TERMIN  = $D002
//
// RESET:  CLI
// IDLE:   JMP IDLE
//
// IRQ:    PHA
//         LDA TERMIN
//         STA TERMOUT
//         PLA
//         RTI
const ROM_CODE: [u8; 13] = [
    0x58, // CLI
    0x4C, 0x01, 0xE0, // IDLE: JMP IDLE
    0x48, // IRQ: PHA
    0xAD, 0x02, 0xD0, // LDA TERMIN
    0x8D, 0x01, 0xD0, // STA TERMOUT
    0x68, // PLA
    0x40, // RTI
];

const RESET_ENTRY: u16 = 0xE000;
const IRQ_ENTRY: u16 = 0xE004;

/// The ROM image: code at the bottom, vectors at the top of the address space.
fn rom_image() -> Vec<u8> {
    let mut image = ROM_CODE.to_vec();
    image.resize(ROM_SIZE, 0);

    let vector = |address: u16| (address - ROM_BASE) as usize;
    image[vector(NMI_VECTOR_ADDRESS)..][..2].copy_from_slice(&RESET_ENTRY.to_le_bytes());
    image[vector(RESET_VECTOR_ADDRESS)..][..2].copy_from_slice(&RESET_ENTRY.to_le_bytes());
    image[vector(IRQ_VECTOR_ADDRESS)..][..2].copy_from_slice(&IRQ_ENTRY.to_le_bytes());

    image
}

fn main() {
    env_logger::init();

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || monitor_stdin(sender));

    let terminal = TerminalPeripheral::new();
    let bus = Bus::new()
        .add_region(0x0000, Ram::new(0xD000))
        .expect("RAM doesn't fit the memory map")
        .add_region(0xD000, terminal.mmio_block().expect("Failed to build the terminal"))
        .expect("Terminal doesn't fit the memory map")
        .add_region(ROM_BASE, Rom::from_bytes(rom_image()))
        .expect("ROM doesn't fit the memory map");

    let mut cpu = MOS6502::new(bus);
    cpu.pc = cpu.bus.read_u16(RESET_VECTOR_ADDRESS);

    let options = RunOptions {
        cycles_per_second: Some(1_000_000),
        ..RunOptions::default()
    };
    run(&mut cpu, options, |cpu| match receiver.try_recv() {
        Ok(Some(byte)) => {
            terminal.receive_input(byte);
            cpu.irq();
            ControlFlow::Continue(())
        }
        Ok(None) => ControlFlow::Break(()),
        Err(TryRecvError::Empty) => ControlFlow::Continue(()),
        Err(TryRecvError::Disconnected) => ControlFlow::Break(()),
    })
    .expect("Echo loop ended unexpectedly");
}

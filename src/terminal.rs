//! A terminal peripheral for emulated systems: three MMIO registers backed by the
//! host's stdin/stdout, plus the raw-mode reader thread that feeds them.

use std::io::{self, Read, Write};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use log::warn;
use termion::raw::IntoRawMode;

use breadboard_mos6502::mos6502::{MmioBlock, MmioHandler, Result};

/// Register offsets within the peripheral's MMIO block.
pub const STATUS_REGISTER: u16 = 0;
pub const OUTPUT_REGISTER: u16 = 1;
pub const INPUT_REGISTER: u16 = 2;

/// Bit of the status register that reports a byte waiting in the input buffer.
const STATUS_WAITING_BIT: u8 = 7;

struct TerminalState {
    input_buffer: u8,
    input_waiting: bool,
}

/// Lets emulated programs talk to the host terminal.
///
/// The peripheral owns three registers, laid out for a memory map that places the
/// block at e.g. `0xD000`:
///
/// | offset | register | behavior                                                  |
/// |--------|----------|-----------------------------------------------------------|
/// | 0      | status   | read: bit 7 set while an input byte is waiting             |
/// | 1      | output   | write: byte goes to stdout                                 |
/// | 2      | input    | read: the buffered byte; clears the waiting bit            |
///
/// Input arrives from outside the CPU's thread: a reader thread (see
/// [`monitor_stdin`]) hands bytes to the runner's between-step hook, which calls
/// [`TerminalPeripheral::receive_input`] and raises an IRQ. The register state is
/// behind a mutex so that hand-off is safe.
pub struct TerminalPeripheral {
    state: Arc<Mutex<TerminalState>>,
}

impl TerminalPeripheral {
    pub fn new() -> TerminalPeripheral {
        TerminalPeripheral {
            state: Arc::new(Mutex::new(TerminalState {
                input_buffer: 0,
                input_waiting: false,
            })),
        }
    }

    /// Build the MMIO block exposing this peripheral's registers.
    ///
    /// The peripheral keeps its own handle on the shared state, so the block can be
    /// moved into a bus while input keeps flowing in from the host side.
    pub fn mmio_block(&self) -> Result<MmioBlock> {
        MmioBlock::new()
            .add_register(
                STATUS_REGISTER,
                Box::new(StatusRegister {
                    state: Arc::clone(&self.state),
                }),
            )?
            .add_register(OUTPUT_REGISTER, Box::new(OutputRegister))?
            .add_register(
                INPUT_REGISTER,
                Box::new(InputRegister {
                    state: Arc::clone(&self.state),
                }),
            )
    }

    /// Buffer one byte of host input and flag it in the status register.
    ///
    /// A byte that arrives before the previous one was consumed replaces it; the
    /// emulated program is expected to service its interrupt faster than a human
    /// types.
    pub fn receive_input(&self, byte: u8) {
        let mut state = self.state.lock().unwrap();
        state.input_buffer = byte;
        state.input_waiting = true;
    }
}

impl Default for TerminalPeripheral {
    fn default() -> TerminalPeripheral {
        TerminalPeripheral::new()
    }
}

struct StatusRegister {
    state: Arc<Mutex<TerminalState>>,
}

impl MmioHandler for StatusRegister {
    fn read(&mut self) -> u8 {
        let state = self.state.lock().unwrap();
        (state.input_waiting as u8) << STATUS_WAITING_BIT
    }

    fn write(&mut self, _value: u8) {}
}

struct OutputRegister;

impl MmioHandler for OutputRegister {
    fn read(&mut self) -> u8 {
        0
    }

    fn write(&mut self, value: u8) {
        let mut stdout = io::stdout();
        if stdout.write_all(&[value]).and_then(|_| stdout.flush()).is_err() {
            warn!("Dropped output byte {:#04x}: stdout is gone", value);
        }
    }
}

struct InputRegister {
    state: Arc<Mutex<TerminalState>>,
}

impl MmioHandler for InputRegister {
    fn read(&mut self) -> u8 {
        let mut state = self.state.lock().unwrap();
        state.input_waiting = false;
        state.input_buffer
    }

    fn write(&mut self, _value: u8) {}
}

/// Put the terminal into raw mode and forward stdin bytes into `sender`, one at a
/// time. Meant to run on its own thread.
///
/// Sends `None` and returns when Ctrl+C (0x03, End of Text) arrives, which is the
/// consumer's cue to shut down. Raw mode is restored when the guard drops, including
/// on early returns.
pub fn monitor_stdin(sender: Sender<Option<u8>>) {
    let _raw_mode = match io::stdout().into_raw_mode() {
        Ok(guard) => guard,
        Err(error) => {
            warn!("Could not switch the terminal to raw mode: {}", error);
            return;
        }
    };

    for byte in io::stdin().bytes() {
        match byte {
            Ok(0x03) => {
                let _ = sender.send(None);
                return;
            }
            Ok(byte) => {
                if sender.send(Some(byte)).is_err() {
                    return;
                }
            }
            Err(error) => {
                warn!("Reading stdin failed: {}", error);
                let _ = sender.send(None);
                return;
            }
        }
    }

    // stdin reached EOF; tell the consumer nothing more is coming.
    let _ = sender.send(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadboard_mos6502::mos6502::{Bus, MOS6502, Ram};

    fn system_with_terminal() -> (TerminalPeripheral, MOS6502) {
        let terminal = TerminalPeripheral::new();
        let bus = Bus::new()
            .add_region(0x0000, Ram::new(0x1000))
            .unwrap()
            .add_region(0xD000, terminal.mmio_block().unwrap())
            .unwrap();
        (terminal, MOS6502::new(bus))
    }

    #[test]
    fn status_register_reports_waiting_input() {
        let (terminal, mut cpu) = system_with_terminal();

        assert_eq!(cpu.bus.read(0xD000), 0);

        terminal.receive_input(b'x');
        assert_eq!(cpu.bus.read(0xD000), 1 << STATUS_WAITING_BIT);
    }

    #[test]
    fn reading_the_input_register_consumes_the_byte() {
        let (terminal, mut cpu) = system_with_terminal();
        terminal.receive_input(b'k');

        assert_eq!(cpu.bus.read(0xD002), b'k');
        // The waiting bit clears once the byte has been read.
        assert_eq!(cpu.bus.read(0xD000), 0);
        // The buffer itself keeps the last byte.
        assert_eq!(cpu.bus.read(0xD002), b'k');
    }

    #[test]
    fn newer_input_replaces_unconsumed_input() {
        let (terminal, mut cpu) = system_with_terminal();

        terminal.receive_input(b'a');
        terminal.receive_input(b'b');

        assert_eq!(cpu.bus.read(0xD002), b'b');
    }

    /// A program can poll the status register and fetch the byte itself, without
    /// interrupts ever being involved.
    #[test]
    fn polling_loop_reads_input_through_the_bus() {
        let (terminal, mut cpu) = system_with_terminal();
        // wait: LDA $D000; BPL wait; LDA $D002; STA $10; BRK
        cpu.bus
            .write_bytes_hex(0x0200, "ad 00 d0 10 fb ad 02 d0 85 10 00")
            .unwrap();
        cpu.pc = 0x0200;

        cpu.step(); // LDA $D000 -> 0, stays in the loop
        cpu.step(); // BPL taken
        assert_eq!(cpu.pc, 0x0200);

        terminal.receive_input(b'!');
        cpu.step(); // LDA $D000 -> bit 7 set, Negative
        cpu.step(); // BPL not taken
        cpu.step(); // LDA $D002
        cpu.step(); // STA $10
        assert_eq!(cpu.bus.read(0x10), b'!');
    }
}

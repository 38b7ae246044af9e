use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use super::error::Error;
use super::{Result, StepResult, MOS6502};

/// How a [`run`] ended. Exceeding the step limit is an [`Error`], not an exit.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RunExit {
    /// The program executed a `BRK` instruction.
    Break,

    /// The program hit an opcode byte that doesn't decode. The diagnostic has
    /// already been logged by the CPU.
    IllegalOpcode,

    /// The between-step hook requested a stop.
    Stopped,
}

/// Knobs for [`run`]. The default runs unthrottled until the program breaks.
#[derive(Default, Clone, Copy, Debug)]
pub struct RunOptions {
    /// Give up with [`Error::StepLimitReached`] after this many steps. The CPU is
    /// left in a consistent state and can be inspected or stepped further.
    pub max_steps: Option<u64>,

    /// Approximate a real clock by sleeping off each step's cycle cost. Purely
    /// cosmetic; cycle accounting is unaffected.
    pub cycles_per_second: Option<u64>,
}

/// Drive `cpu` until the program breaks, the step limit runs out, or the hook stops
/// the run.
///
/// `between_step` is invoked after every completed step. It is the place to poll
/// peripherals, deliver input through MMIO registers, and raise `cpu.irq()` /
/// `cpu.nmi()`. Interrupt delivery is never preemptive, it only happens at step
/// boundaries. The hook must not write CPU registers directly.
pub fn run<F>(cpu: &mut MOS6502, options: RunOptions, mut between_step: F) -> Result<RunExit>
where
    F: FnMut(&mut MOS6502) -> ControlFlow<()>,
{
    let mut steps: u64 = 0;

    loop {
        if let Some(max_steps) = options.max_steps {
            if steps >= max_steps {
                return Err(Error::StepLimitReached(max_steps));
            }
        }

        let cycles_before = cpu.cycles;
        let result = cpu.step();
        steps += 1;

        if let Some(cycles_per_second) = options.cycles_per_second {
            let step_cycles = cpu.cycles - cycles_before;
            thread::sleep(Duration::from_secs_f64(
                step_cycles as f64 / cycles_per_second as f64,
            ));
        }

        match result {
            StepResult::Break => return Ok(RunExit::Break),
            StepResult::IllegalOpcode => return Ok(RunExit::IllegalOpcode),
            StepResult::Normal => {}
        }

        if between_step(cpu).is_break() {
            return Ok(RunExit::Stopped);
        }
    }
}

/// Run with default options and no hook. Handy for tests and fire-and-forget
/// programs that end in `BRK`.
pub fn run_to_break(cpu: &mut MOS6502, max_steps: u64) -> Result<RunExit> {
    run(
        cpu,
        RunOptions {
            max_steps: Some(max_steps),
            ..RunOptions::default()
        },
        |_| ControlFlow::Continue(()),
    )
}

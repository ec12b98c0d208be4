// Clippy rules to disable.
#![allow(clippy::new_without_default)]

pub mod bus;
pub mod constants;
pub mod cpu;
pub mod disasm;
pub mod opcodes;

pub use bus::{Bus, Ram};
pub use cpu::{Cpu, PinState, StatusFlag};
pub use disasm::Disassembly;
pub use opcodes::{Mode, Variant};

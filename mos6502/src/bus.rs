//! The memory interface between the CPU core and the host machine.
//!
//! The core never owns a memory map. Every access goes through the `Bus`
//! trait the host supplies, so RAM mirrors, ROM banking, and memory-mapped
//! devices all live on the host side.

/// Trait for the host's address bus.
pub trait Bus {
    /// Read from the bus at the given address, triggering any possible
    /// side-effects on memory-mapped devices.
    fn read(&mut self, addr: u16) -> u8;

    /// Deterministically read from the bus without side-effects.
    ///
    /// Some devices change their state when read (a video chip incrementing
    /// its address pointer, for example). Debuggers and the disassembler use
    /// this entry point, so devices must not change state here. Hosts whose
    /// hardware cannot support this should not use the disassembler against
    /// device-mapped regions.
    fn peek(&self, addr: u16) -> u8;

    /// Write to the bus with the given data.
    fn write(&mut self, addr: u16, value: u8);
}

/// A flat 64 KiB memory with no mapped devices.
///
/// This is not a model of any real machine. It exists to load and run
/// standalone programs in tests and tooling; real hosts bring their own
/// `Bus` implementation.
pub struct Ram {
    bytes: [u8; 0x10000],
}

impl Ram {
    pub fn new() -> Ram {
        Ram {
            bytes: [0; 0x10000],
        }
    }

    /// Copy a block of bytes into memory, wrapping at the top of the
    /// address space.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (index, value) in bytes.iter().enumerate() {
            self.bytes[(addr as usize + index) & 0xffff] = *value;
        }
    }

    /// Load a program and point the reset vector at its first byte.
    pub fn with_program(origin: u16, program: &[u8]) -> Ram {
        let mut ram = Ram::new();
        ram.load(origin, program);
        ram.load(
            crate::constants::InterruptVectors::ResetVector as u16,
            &origin.to_le_bytes(),
        );
        ram
    }
}

impl Bus for Ram {
    fn read(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn peek(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

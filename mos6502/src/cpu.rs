use log::{debug, trace};

use crate::bus::Bus;
use crate::constants::{
    InterruptVectors, RESET_STACK_POINTER, RESET_STATUS_FLAG, STACK_PAGE,
};
use crate::opcodes::{Mode, Opcode, Variant};

pub mod opcodes_cmos;
pub mod opcodes_illegal;
pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

#[cfg(test)]
#[macro_use]
mod test_helpers;

// Test must be after test_helpers, rust format tries to move things around.
#[cfg(test)]
mod test;

#[rustfmt::skip]
pub enum StatusFlag {
  Carry            = 0b00000001,
  Zero             = 0b00000010,
  InterruptDisable = 0b00000100,
  Decimal          = 0b00001000,
  Break            = 0b00010000,
  Unused           = 0b00100000,
  Overflow         = 0b01000000,
  Negative         = 0b10000000,
}

/// Level of the IRQ and NMI input pins. The lines are active-low on
/// hardware; `Asserted` is the low level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Asserted,
    Cleared,
}

/// This struct implements the MOS Technology 6502 central processing unit
/// and its CMOS descendants.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
pub struct Cpu {
    /// Every memory access goes through the host-supplied bus; the core
    /// never caches memory contents across calls.
    pub bus: Box<dyn Bus>,

    /// Which family member this instance emulates. Fixed at construction.
    pub variant: Variant,

    /// The decoded opcode table matching the variant.
    table: &'static [Opcode; 256],

    // "A" register - The accumulator. Typical results of operations are
    // stored here. In combination with the status register, supports using
    // the status register for carrying, overflow detection, and so on.
    pub a: u8,
    /// "X" register.
    pub x: u8,
    /// "Y" register.
    pub y: u8,

    /// "PC" - Program counter. All operand fetches and effective address
    /// arithmetic wrap modulo 2^16.
    pub pc: u16,

    /// "S" - Stack pointer
    ///
    /// The 6502 has hardware support for a stack implemented using a
    /// 256-byte array whose location is hardcoded at page 0x01
    /// (0x0100-0x01FF), using the S register for a stack pointer.
    ///
    /// The 6502 uses a descending stack (it grows downwards).
    pub s: u8,

    /// "P" - Status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVUB DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break (a software flag, never physically stored)
    /// ||+------- Unused, reads back as 1 whenever P is pushed
    /// |+-------- Overflow
    /// +--------- Negative
    pub p: u8,

    /// Level of the IRQ input pin. The host writes this between run calls;
    /// the line is level-triggered.
    pub irq: PinState,

    /// Level of the NMI input pin. Edge-triggered: one service per
    /// assertion, re-armed when the host releases the line.
    pub nmi: PinState,

    /// The number of cycles consumed by the instruction currently
    /// retiring, including interrupt entry and run-time penalties.
    /// Cycle-stepping debuggers can read this between run calls.
    pub cycles: u8,

    /// The most recently fetched opcode byte and its address.
    pub current_opcode: u8,
    pub current_opcode_addr: u16,

    jammed: bool,
    waiting: bool,
    nmi_serviced: bool,
}

impl Cpu {
    pub fn new(variant: Variant, bus: Box<dyn Bus>) -> Cpu {
        let mut cpu = Cpu {
            bus,
            variant,
            table: variant.table(),
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            s: RESET_STACK_POINTER,
            p: RESET_STATUS_FLAG,
            irq: PinState::Cleared,
            nmi: PinState::Cleared,
            cycles: 0,
            current_opcode: 0,
            current_opcode_addr: 0,
            jammed: false,
            waiting: false,
            nmi_serviced: false,
        };
        cpu.reset();
        cpu
    }

    /// Pull the RESET line. Loads PC from the reset vector and
    /// re-initialises the stack pointer and status register; A, X and Y
    /// keep whatever they held, as on real hardware.
    pub fn reset(&mut self) {
        self.pc = self.read_u16(InterruptVectors::ResetVector as u16);
        self.s = RESET_STACK_POINTER;
        self.p = RESET_STATUS_FLAG;
        self.jammed = false;
        self.waiting = false;
        self.nmi_serviced = false;
        debug!("reset: pc loaded from vector, pc={:#06x}", self.pc);
    }

    /// Execute up to `count` instructions, servicing interrupts at each
    /// instruction boundary. Returns the instructions executed and the
    /// cycles consumed. A jammed CPU accounts a single idle cycle and
    /// returns immediately; a waiting (WAI) CPU burns cycles until an
    /// interrupt pin wakes it, consuming loop iterations but not
    /// instruction counts.
    pub fn run_instructions(&mut self, count: u32) -> (u32, u64) {
        if self.jammed {
            return (0, 1);
        }
        let mut executed = 0u32;
        let mut cycles = 0u64;
        let mut slots = count;
        while executed < count && slots > 0 {
            slots -= 1;
            let (step_cycles, did_execute) = self.step();
            cycles += step_cycles as u64;
            if did_execute {
                executed += 1;
            }
            if self.jammed {
                break;
            }
        }
        (executed, cycles)
    }

    /// Execute whole instructions while the accumulated cycle count is
    /// below `limit`. Never stops mid-instruction, so the returned count
    /// may overshoot the limit by the final instruction's cycles.
    pub fn run_cycles(&mut self, limit: u64) -> (u32, u64) {
        if self.jammed {
            return (0, 1);
        }
        let mut executed = 0u32;
        let mut cycles = 0u64;
        while cycles < limit {
            let (step_cycles, did_execute) = self.step();
            cycles += step_cycles as u64;
            if did_execute {
                executed += 1;
            }
            if self.jammed {
                break;
            }
        }
        (executed, cycles)
    }

    /// One boundary-to-boundary step: service pending interrupts, then
    /// either execute a single instruction or burn one cycle if the CPU is
    /// halted. Returns the cycles consumed and whether an instruction
    /// actually executed.
    fn step(&mut self) -> (u8, bool) {
        self.cycles = 0;
        self.check_interrupts();
        if self.jammed || self.waiting {
            self.cycles += 1;
            return (self.cycles, false);
        }

        self.current_opcode_addr = self.pc;
        self.current_opcode = self.next_u8();
        let opcode = self.table[self.current_opcode as usize];
        self.cycles += opcode.cycles;
        (opcode.op)(self, opcode.mode, opcode.extra_cycle);

        (self.cycles, true)
    }

    /// The interrupt check that runs at instruction boundaries. NMI is
    /// edge-triggered and takes priority; IRQ is level-triggered and
    /// gated on the I flag, except that a waiting (WAI) CPU services an
    /// asserted IRQ even with I set.
    fn check_interrupts(&mut self) {
        if self.nmi == PinState::Asserted && !self.nmi_serviced {
            self.nmi_serviced = true;
            self.waiting = false;
            trace!("nmi taken at pc={:#06x}", self.pc);
            self.interrupt(InterruptVectors::NonMaskableInterrupt as u16);
        } else if self.irq == PinState::Asserted
            && (self.waiting || !self.is_status_flag_set(StatusFlag::InterruptDisable))
        {
            self.waiting = false;
            trace!("irq taken at pc={:#06x}", self.pc);
            self.interrupt(InterruptVectors::IrqBrkVector as u16);
        }
        if self.nmi == PinState::Cleared {
            // Re-arm the edge detector once the host releases the line.
            self.nmi_serviced = false;
        }
    }

    /// Hardware interrupt entry. The pushed status image has B clear and
    /// the unused bit set, distinguishing it from a BRK push.
    fn interrupt(&mut self, vector: u16) {
        self.push_stack_u16(self.pc);
        self.push_stack_u8(
            (self.p | StatusFlag::Unused as u8) & !(StatusFlag::Break as u8),
        );
        self.set_status_flag(StatusFlag::InterruptDisable, true);
        if self.variant.is_cmos() {
            self.set_status_flag(StatusFlag::Decimal, false);
        }
        self.pc = self.read_u16(vector);
        self.cycles += 7;
    }

    /// Latch the halt state, as the NMOS locking opcodes and STP do. Hosts
    /// can also call this directly.
    pub fn jam(&mut self) {
        debug!("jammed at pc={:#06x}", self.pc);
        self.jammed = true;
    }

    /// Host-only: release the halt latch. Reset also clears it.
    pub fn unjam(&mut self) {
        debug!("unjammed at pc={:#06x}", self.pc);
        self.jammed = false;
    }

    pub fn is_jammed(&self) -> bool {
        self.jammed
    }

    /// True after WAI until an interrupt pin assertion wakes the CPU.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// The opcode byte the program counter currently points at, read
    /// without side-effects.
    pub fn next_opcode(&self) -> u8 {
        self.bus.peek(self.pc)
    }

    /// The mnemonic for an opcode byte under this variant's table.
    pub fn mnemonic(&self, opcode: u8) -> &'static str {
        self.table[opcode as usize].mnemonic
    }

    /// The addressing mode for an opcode byte under this variant's table.
    pub fn addr_mode(&self, opcode: u8) -> Mode {
        self.table[opcode as usize].mode
    }

    pub(crate) fn opcode_entry(&self, opcode: u8) -> Opcode {
        self.table[opcode as usize]
    }

    fn read_u8(&mut self, address: u16) -> u8 {
        self.bus.read(address)
    }

    fn write_u8(&mut self, address: u16, value: u8) {
        self.bus.write(address, value);
    }

    /// Read a little-endian word, wrapping at the top of the address space.
    fn read_u16(&mut self, address: u16) -> u16 {
        let low = self.read_u8(address);
        let high = self.read_u8(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Read a little-endian word from the zero page; the high byte wraps
    /// within the page.
    fn read_zero_page_u16(&mut self, address: u8) -> u16 {
        let low = self.read_u8(address as u16);
        let high = self.read_u8(address.wrapping_add(1) as u16);
        u16::from_le_bytes([low, high])
    }

    /// Side-effect-free read for debuggers and tests.
    pub fn peek_u8(&self, address: u16) -> u8 {
        self.bus.peek(address)
    }

    pub fn peek_u16(&self, address: u16) -> u16 {
        let low = self.bus.peek(address);
        let high = self.bus.peek(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Increment the program counter and read the next u8 value following
    /// the current pc.
    fn next_u8(&mut self) -> u8 {
        let value = self.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Increment the program counter and read the next u16 value following
    /// the current pc.
    fn next_u16(&mut self) -> u16 {
        let value = self.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Evaluate an addressing mode: consume operand bytes at PC and return
    /// the effective address. `page_boundary_cycle` is 1 for the read
    /// opcodes that pay the indexed page-crossing penalty.
    fn get_operand_address(&mut self, mode: Mode, page_boundary_cycle: u8) -> u16 {
        match mode {
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteX => {
                let base_address = self.next_u16();
                let offset_address = base_address.wrapping_add(self.x as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::AbsoluteY => {
                let base_address = self.next_u16();
                let offset_address = base_address.wrapping_add(self.y as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::AbsoluteIndexedIndirect => {
                let pointer = self.next_u16().wrapping_add(self.x as u16);
                self.read_u16(pointer)
            }
            Mode::Immediate => {
                // The operand byte itself is the target; return its address
                // and step over it.
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            Mode::Implied => {
                panic!("Attempting to get the operand address for an implied mode.")
            }
            Mode::RegisterA => {
                panic!("Register A has no address.")
            }
            Mode::Indirect => {
                let pointer = self.next_u16();
                if self.variant.is_cmos() {
                    self.read_u16(pointer)
                } else {
                    // NMOS JMP ($xxFF) bug: the high-byte fetch wraps within
                    // the same page instead of carrying into the next one.
                    let low = self.read_u8(pointer);
                    let high_address =
                        (pointer & 0xff00) | (pointer.wrapping_add(1) & 0x00ff);
                    let high = self.read_u8(high_address);
                    u16::from_le_bytes([low, high])
                }
            }
            Mode::IndirectX => {
                let zero_page = self.next_u8().wrapping_add(self.x);
                self.read_zero_page_u16(zero_page)
            }
            Mode::IndirectY => {
                let zero_page = self.next_u8();
                let base_address = self.read_zero_page_u16(zero_page);
                let offset_address = base_address.wrapping_add(self.y as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::Relative => {
                // The offset is signed, relative to the PC after the operand
                // byte. Branch penalties are charged by the branch
                // operations, not here.
                let relative_offset = self.next_u8() as i8;
                self.pc.wrapping_add(relative_offset as u16)
            }
            Mode::ZeroPage => self.next_u8() as u16,
            Mode::ZeroPageIndirect => {
                let zero_page = self.next_u8();
                self.read_zero_page_u16(zero_page)
            }
            Mode::ZeroPageRelative => {
                panic!("The bit-branch operations fetch their own operands.")
            }
            // Zero page indexing never leaves the zero page; the index add
            // wraps in u8 space.
            Mode::ZeroPageX => self.next_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.next_u8().wrapping_add(self.y) as u16,
        }
    }

    /// Evaluate the mode and read the operand byte at the effective
    /// address.
    fn get_operand(&mut self, mode: Mode, extra_cycle: u8) -> (u16, u8) {
        let address = self.get_operand_address(mode, extra_cycle);
        let value = self.read_u8(address);
        (address, value)
    }

    /// Like `get_operand`, but for operations that target either memory or
    /// the accumulator (shifts, rotates, INC/DEC on CMOS).
    fn get_address_and_maybe_operand(
        &mut self,
        mode: Mode,
        extra_cycle: u8,
    ) -> (Option<u16>, u8) {
        if mode == Mode::RegisterA {
            return (None, self.a);
        }
        let address = self.get_operand_address(mode, extra_cycle);
        let value = self.read_u8(address);
        (Some(address), value)
    }

    /// Store a result where `get_address_and_maybe_operand` found its
    /// operand.
    fn write_back(&mut self, address: Option<u16>, value: u8) {
        match address {
            Some(address) => self.write_u8(address, value),
            None => self.a = value,
        }
    }

    fn incur_extra_cycle_on_page_boundary(
        &mut self,
        base_address: u16,
        offset_address: u16,
        extra_cycles: u8,
    ) {
        let [_, base_page] = base_address.to_le_bytes();
        let [_, offset_page] = offset_address.to_le_bytes();
        if base_page != offset_page {
            self.cycles += extra_cycles;
        }
    }

    /// These flags are commonly set together.
    fn update_zero_and_negative_flag(&mut self, value: u8) {
        // Numbers can be interpreted as signed or unsigned. The negative
        // flag only cares if the most-significant bit is 1 or 0.
        let negative = 0b1000_0000;
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & negative == negative);
    }

    /// ADC and SBC operate on 9 bits. 8 of them are the register A, while
    /// the last bit is the carry flag. Store this 9th bit onto the status
    /// flag.
    fn update_carry_flag(&mut self, result: u16) {
        let carry = 0b1_0000_0000;
        self.set_status_flag(StatusFlag::Carry, result & carry == carry);
    }

    /// Overflow for ADC and SBC indicates if we overflow from bit 6 to bit
    /// 7 of the u8, and change the meaning of a number from being negative
    /// or positive.
    /// e.g. 0b0111_1111 + 0b0000_0001 = 0b1000_0000
    ///        |             |             |
    ///        positive      positive      negative result
    fn update_overflow_flag(&mut self, operand: u8, result: u8) {
        let bit_7_mask = 0b1000_0000;

        let does_overflow = (
            // Only look at bit 7, the most significant bit (MSB)
            bit_7_mask &
            // A and operand have the same MSB.
            !(self.a ^ operand) &
            // A and result have a different MSB
            (self.a ^ result)
        ) == bit_7_mask;

        self.set_status_flag(StatusFlag::Overflow, does_overflow);
    }

    fn set_status_flag(&mut self, status_flag: StatusFlag, value: bool) {
        if value {
            self.p |= status_flag as u8;
        } else {
            self.p &= !(status_flag as u8);
        }
    }

    fn get_carry(&self) -> u8 {
        self.p & (StatusFlag::Carry as u8)
    }

    pub fn is_status_flag_set(&self, status_flag: StatusFlag) -> bool {
        let flag = status_flag as u8;
        self.p & flag == flag
    }

    /// This function implements pushing to the stack.
    /// See the "S" register for more details.
    fn push_stack_u8(&mut self, value: u8) {
        // The stack page is hard coded.
        let address = u16::from_le_bytes([self.s, STACK_PAGE]);
        // The stack points to the next available memory.
        self.write_u8(address, value);
        // Grow down only after setting the memory.
        self.s = self.s.wrapping_sub(1);
    }

    /// This function implements pulling from the stack.
    /// See the "S" register for more details.
    fn pull_stack_u8(&mut self) -> u8 {
        // The current stack pointer points at available memory, increment
        // it first.
        self.s = self.s.wrapping_add(1);
        // Now read out the memory that is being pulled.
        let address = u16::from_le_bytes([self.s, STACK_PAGE]);
        self.read_u8(address)
    }

    /// The high byte is pushed first so the word reads back little-endian
    /// from its final address, even when S wraps around the stack page.
    fn push_stack_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_stack_u8(high);
        self.push_stack_u8(low);
    }

    fn pull_stack_u16(&mut self) -> u16 {
        let low = self.pull_stack_u8();
        let high = self.pull_stack_u8();
        u16::from_le_bytes([low, high])
    }
}

//! Operations that only exist on the CMOS parts: TRB/TSB on every 65C02,
//! the zero-page bit group on the Rockwell R65C02, and WAI/STP on the
//! WDC W65C02.

use log::trace;

use crate::cpu::opcodes_jump::take_branch;
use crate::cpu::*;

/// Test and reset bits: Z reports the AND of A and memory, then the bits
/// of A are cleared from memory.
/// Function: Z:=A&{adr} {adr}:={adr}&~A
/// Flags: Z
pub fn trb(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & operand == 0);
    cpu.write_u8(address, operand & !cpu.a);
}

/// Test and set bits.
/// Function: Z:=A&{adr} {adr}:={adr} or A
/// Flags: Z
pub fn tsb(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & operand == 0);
    cpu.write_u8(address, operand | cpu.a);
}

/// Clear one bit of a zero page byte. No flags.
/// Function: {zp}:={zp}&~(1<<bit)
/// Flags:
fn rmb(cpu: &mut Cpu, mode: Mode, bit_index: u8) {
    let (address, operand) = cpu.get_operand(mode, 0);
    cpu.write_u8(address, operand & !(1 << bit_index));
}

/// Set one bit of a zero page byte. No flags.
/// Function: {zp}:={zp} or (1<<bit)
/// Flags:
fn smb(cpu: &mut Cpu, mode: Mode, bit_index: u8) {
    let (address, operand) = cpu.get_operand(mode, 0);
    cpu.write_u8(address, operand | (1 << bit_index));
}

/// Branch if a zero page bit matches `branch_if_set`. The operands are a
/// zero page address followed by a relative offset; penalties match the
/// other branches.
fn bit_branch(cpu: &mut Cpu, bit_index: u8, branch_if_set: bool) {
    let zero_page = cpu.next_u8() as u16;
    let value = cpu.read_u8(zero_page);
    let target = cpu.get_operand_address(Mode::Relative, 0);
    let bit_set = value & (1 << bit_index) != 0;
    if bit_set == branch_if_set {
        take_branch(cpu, target);
    }
}

pub fn rmb0(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 0);
}
pub fn rmb1(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 1);
}
pub fn rmb2(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 2);
}
pub fn rmb3(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 3);
}
pub fn rmb4(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 4);
}
pub fn rmb5(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 5);
}
pub fn rmb6(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 6);
}
pub fn rmb7(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    rmb(cpu, mode, 7);
}

pub fn smb0(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 0);
}
pub fn smb1(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 1);
}
pub fn smb2(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 2);
}
pub fn smb3(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 3);
}
pub fn smb4(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 4);
}
pub fn smb5(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 5);
}
pub fn smb6(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 6);
}
pub fn smb7(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    smb(cpu, mode, 7);
}

pub fn bbr0(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 0, false);
}
pub fn bbr1(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 1, false);
}
pub fn bbr2(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 2, false);
}
pub fn bbr3(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 3, false);
}
pub fn bbr4(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 4, false);
}
pub fn bbr5(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 5, false);
}
pub fn bbr6(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 6, false);
}
pub fn bbr7(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 7, false);
}

pub fn bbs0(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 0, true);
}
pub fn bbs1(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 1, true);
}
pub fn bbs2(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 2, true);
}
pub fn bbs3(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 3, true);
}
pub fn bbs4(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 4, true);
}
pub fn bbs5(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 5, true);
}
pub fn bbs6(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 6, true);
}
pub fn bbs7(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    bit_branch(cpu, 7, true);
}

/// Wait for interrupt (WDC). Cycle accounting continues but no further
/// instructions execute until either pin is asserted; an asserted IRQ
/// wakes the CPU even with I set.
/// Function: halts until interrupt
/// Flags:
pub fn wai(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    trace!("wai at pc={:#06x}", cpu.pc);
    cpu.waiting = true;
}

/// Stop (WDC). Latches the halt state; only reset (or a host unjam)
/// recovers.
/// Function: halts until reset
/// Flags:
pub fn stp(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.jam();
}

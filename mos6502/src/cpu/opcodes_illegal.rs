//! The stable undocumented NMOS operations. Most combine a read-modify-write
//! with an accumulator operation; all of them fell out of the instruction
//! decode PLA rather than being designed, but the ones here behave
//! consistently across chips and real software relies on them.

use crate::cpu::opcodes_logical::{add_with_carry, subtract_with_carry};
use crate::cpu::*;

/// Shift left then OR into the accumulator.
/// Function: {adr}:={adr}*2 A:=A or {adr}
/// Flags: N Z C
pub fn slo(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = operand << 1;
    cpu.write_u8(address, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.a |= result;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Rotate left then AND into the accumulator.
/// Function: {adr}:={adr}rol A:=A and {adr}
/// Flags: N Z C
pub fn rla(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = (operand << 1) | cpu.get_carry();
    cpu.write_u8(address, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.a &= result;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Shift right then EOR into the accumulator.
/// Function: {adr}:={adr}/2 A:=A exor {adr}
/// Flags: N Z C
pub fn sre(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = operand >> 1;
    cpu.write_u8(address, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.a ^= result;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Rotate right then add into the accumulator. The add sees the carry the
/// rotate just produced, and honours decimal mode like a normal ADC.
/// Function: {adr}:={adr}ror A:=A adc {adr}
/// Flags: N V Z C
pub fn rra(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = (operand >> 1) | (cpu.get_carry() << 7);
    cpu.write_u8(address, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    add_with_carry(cpu, result);
}

/// Store the AND of A and X. Sets no flags.
/// Function: {adr}:=A&X
/// Flags:
pub fn sax(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.write_u8(address, cpu.a & cpu.x);
}

/// Load A and X together.
/// Function: A,X:={adr}
/// Flags: N Z
pub fn lax(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a = operand;
    cpu.x = operand;
    cpu.update_zero_and_negative_flag(operand);
}

/// Decrement memory then compare it against A.
/// Function: {adr}:={adr}-1 A-{adr}
/// Flags: N Z C
pub fn dcp(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = operand.wrapping_sub(1);
    cpu.write_u8(address, result);
    cpu.update_zero_and_negative_flag(cpu.a.wrapping_sub(result));
    cpu.set_status_flag(StatusFlag::Carry, cpu.a >= result);
}

/// Increment memory then subtract it from A, decimal mode included.
/// Function: {adr}:={adr}+1 A:=A-{adr}
/// Flags: N V Z C
pub fn isc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = operand.wrapping_add(1);
    cpu.write_u8(address, result);
    subtract_with_carry(cpu, result);
}

/// AND immediate, with bit 7 of the result copied into the carry.
/// Function: A:=A&#{imm}
/// Flags: N Z C
pub fn anc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a &= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
    cpu.set_status_flag(StatusFlag::Carry, cpu.a & 0b1000_0000 != 0);
}

/// AND immediate then shift right.
/// Function: A:=(A&#{imm})/2
/// Flags: N Z C
pub fn alr(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    let masked = cpu.a & operand;
    cpu.a = masked >> 1;
    cpu.update_zero_and_negative_flag(cpu.a);
    cpu.set_status_flag(StatusFlag::Carry, masked & 0b0000_0001 != 0);
}

/// AND immediate then rotate right, with the odd flag behaviour the
/// decode logic produces: C comes from bit 6 of the result and V from
/// bits 6 and 5 differing.
/// Function: A:=(A&#{imm})/2
/// Flags: N V Z C
pub fn arr(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    let masked = cpu.a & operand;
    let result = (masked >> 1) | (cpu.get_carry() << 7);
    cpu.a = result;
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, result & 0b0100_0000 != 0);
    cpu.set_status_flag(
        StatusFlag::Overflow,
        ((result >> 6) ^ (result >> 5)) & 0b0000_0001 != 0,
    );
}

/// X becomes (A AND X) minus the immediate, without borrow.
/// Function: X:=A&X-#{imm}
/// Flags: N Z C
pub fn axs(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    let masked = cpu.a & cpu.x;
    cpu.x = masked.wrapping_sub(operand);
    cpu.update_zero_and_negative_flag(cpu.x);
    cpu.set_status_flag(StatusFlag::Carry, masked >= operand);
}

/// The locking opcodes. The chip stops fetching until reset (or a host
/// unjam).
/// Function: halts the CPU
/// Flags:
pub fn kil(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.jam();
}

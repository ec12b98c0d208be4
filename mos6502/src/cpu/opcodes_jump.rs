use crate::cpu::*;

/// Redirect the program counter to `target`, charging the taken-branch
/// penalty: +1 cycle, and +1 more if the target is on a different page
/// than the instruction that follows the branch. Shared with the Rockwell
/// bit branches.
pub(crate) fn take_branch(cpu: &mut Cpu, target: u16) {
    cpu.cycles += 1;
    let [_, from_page] = cpu.pc.to_le_bytes();
    let [_, to_page] = target.to_le_bytes();
    if from_page != to_page {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

fn branch(cpu: &mut Cpu, mode: Mode, do_branch: bool) {
    // The operand byte is consumed whether or not the branch is taken.
    let target = cpu.get_operand_address(mode, 0);
    if do_branch {
        take_branch(cpu, target);
    }
}

/// Branch if plus
/// Function: branch on N=0
/// Flags:
pub fn bpl(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Negative);
    branch(cpu, mode, condition);
}

/// Branch if minus
/// Function: branch on N=1
/// Flags:
pub fn bmi(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = cpu.is_status_flag_set(StatusFlag::Negative);
    branch(cpu, mode, condition);
}

/// Branch if Overflow Clear
/// Function: branch on V=0
/// Flags:
pub fn bvc(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Overflow);
    branch(cpu, mode, condition);
}

/// Branch if Overflow Set
/// Function: branch on V=1
/// Flags:
pub fn bvs(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = cpu.is_status_flag_set(StatusFlag::Overflow);
    branch(cpu, mode, condition);
}

/// Branch if Carry Clear
/// Function: branch on C=0
/// Flags:
pub fn bcc(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Carry);
    branch(cpu, mode, condition);
}

/// Branch if Carry Set
/// Function: branch on C=1
/// Flags:
pub fn bcs(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = cpu.is_status_flag_set(StatusFlag::Carry);
    branch(cpu, mode, condition);
}

/// Branch if Not Equal
/// Function: branch on Z=0
/// Flags:
pub fn bne(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Zero);
    branch(cpu, mode, condition);
}

/// Branch if Equal
/// Function: branch on Z=1
/// Flags:
pub fn beq(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    let condition = cpu.is_status_flag_set(StatusFlag::Zero);
    branch(cpu, mode, condition);
}

/// Branch always (CMOS).
/// Function: branch
/// Flags:
pub fn bra(cpu: &mut Cpu, mode: Mode, _extra_cycle: u8) {
    branch(cpu, mode, true);
}

/// Break - a software interrupt through the IRQ/BRK vector. BRK is a two
/// byte instruction: the byte after the opcode is a padding "signature"
/// byte that the pushed return address skips over. The pushed status image
/// has B set, marking it as a software push.
/// Function: (S)-:=PC+1,P PC:=($FFFE)
/// Flags: B I
pub fn brk(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u16(cpu.pc.wrapping_add(1));
    cpu.push_stack_u8(cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8);
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
    if cpu.variant.is_cmos() {
        cpu.set_status_flag(StatusFlag::Decimal, false);
    }
    cpu.pc = cpu.read_u16(InterruptVectors::IrqBrkVector as u16);
}

/// Return from Interrupt
/// Function: P,PC:=+(S)
/// Flags: N V D I Z C
pub fn rti(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    let value = cpu.pull_stack_u8();
    cpu.p = (value | StatusFlag::Unused as u8) & !(StatusFlag::Break as u8);
    cpu.pc = cpu.pull_stack_u16();
}

/// Jump to subroutine. The pushed return address points at the last byte
/// of the JSR operand; RTS compensates by incrementing after the pull.
/// Function: (S)-:=PC-1 PC:={adr}
/// Flags:
pub fn jsr(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.push_stack_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = address;
}

/// Return from Sub Routine
/// Function: PC:=+(S)+1
/// Flags:
pub fn rts(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.pc = cpu.pull_stack_u16().wrapping_add(1);
}

/// Jump
/// Function: PC:={adr}
/// Flags:
pub fn jmp(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.pc = address;
}

/// Bit test. The immediate form (CMOS only) affects Z alone; the other
/// forms also copy bits 7 and 6 of the operand into N and V.
/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & operand == 0);
    if mode != Mode::Immediate {
        cpu.set_status_flag(StatusFlag::Negative, operand & 0b1000_0000 != 0);
        cpu.set_status_flag(StatusFlag::Overflow, operand & 0b0100_0000 != 0);
    }
}

/// Clear Carry flag
/// Function: C:=0
/// Flags: C
pub fn clc(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Set Carry flag
/// Function: C:=1
/// Flags: C
pub fn sec(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Clear Decimal flag
/// Function: D:=0
/// Flags: D
pub fn cld(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Set Decimal flag
/// Function: D:=1
/// Flags: D
pub fn sed(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Clear Interrupt disable
/// Function: I:=0
/// Flags: I
pub fn cli(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Set Interrupt disable
/// Function: I:=1
/// Flags: I
pub fn sei(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow flag
/// Function: V:=0
/// Flags: V
pub fn clv(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

/// No operation. The multi-byte variants that fill undocumented slots
/// still consume their operand, perform the read, and can incur the
/// indexed page-crossing penalty.
/// Function:
/// Flags:
pub fn nop(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    if mode != Mode::Implied && mode != Mode::RegisterA {
        cpu.get_operand(mode, extra_cycle);
    }
}

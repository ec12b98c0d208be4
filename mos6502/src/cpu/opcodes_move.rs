use crate::cpu::*;

/// Load the value into register A
/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a = operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Store register A at address
/// Function: {adr}:=A
/// Flags:
pub fn sta(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.write_u8(address, cpu.a);
}

/// Load register X with the value
/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.x = operand;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Store register X at address
/// Function: {adr}:=X
/// Flags:
pub fn stx(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.write_u8(address, cpu.x);
}

/// Load register Y with the value
/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_address, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.y = operand;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Store register Y at address
/// Function: {adr}:=Y
/// Flags:
pub fn sty(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.write_u8(address, cpu.y);
}

/// Store zero (CMOS).
/// Function: {adr}:=0
/// Flags:
pub fn stz(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.write_u8(address, 0);
}

/// Transfer A to X
/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.x)
}

/// Transfer X to A
/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a)
}

/// Transfer A to Y
/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.y)
}

/// Transfer Y to A
/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a)
}

/// Transfer S to X
/// Function: X:=S
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.s;
    cpu.update_zero_and_negative_flag(cpu.x)
}

/// Transfer X to S. The only transfer that sets no flags.
/// Function: S:=X
/// Flags:
pub fn txs(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.s = cpu.x;
}

/// Push A to the stack
/// Function: (S)-:=A
/// Flags:
pub fn pha(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u8(cpu.a);
}

/// Pull A
/// Function: A:=+(S)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.pull_stack_u8();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Push the status register to the stack. The pushed image always has the
/// B and unused bits set; that is how software pushes are distinguished
/// from hardware interrupt pushes.
/// Function: (S)-:=P
/// Flags:
pub fn php(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u8(cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8);
}

/// Pull the status register from the stack, ignoring the B bit and forcing
/// the unused bit, neither of which physically exists in the register.
/// Function: P:=+(S)
/// Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    let value = cpu.pull_stack_u8();
    cpu.p = (value | StatusFlag::Unused as u8) & !(StatusFlag::Break as u8);
}

/// Push X (CMOS).
/// Function: (S)-:=X
/// Flags:
pub fn phx(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u8(cpu.x);
}

/// Pull X (CMOS).
/// Function: X:=+(S)
/// Flags: N Z
pub fn plx(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.pull_stack_u8();
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Push Y (CMOS).
/// Function: (S)-:=Y
/// Flags:
pub fn phy(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u8(cpu.y);
}

/// Pull Y (CMOS).
/// Function: Y:=+(S)
/// Flags: N Z
pub fn ply(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.pull_stack_u8();
    cpu.update_zero_and_negative_flag(cpu.y);
}

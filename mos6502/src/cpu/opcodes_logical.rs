use crate::cpu::*;

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a |= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a &= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Logical Exclusive OR
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a ^= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

fn add_binary(cpu: &mut Cpu, operand: u8) {
    // Translating to u16 means that the values won't wrap, so wrapping
    // add is not needed.
    let result_u16 =
        // Get the carry from the previous operation, and carry it over
        // into this one, but operate in the u16 space as to not overflow.
        cpu.get_carry() as u16 + // Either 0x00 or 0x01
        cpu.a as u16 +
        operand as u16;

    let result_u8 = result_u16 as u8;

    cpu.update_zero_and_negative_flag(result_u8);
    // Take the 0x100 value here, and set it to the register. This can then
    // carry over into the next byte of a number.
    cpu.update_carry_flag(result_u16);
    cpu.update_overflow_flag(operand, result_u8);
    cpu.a = result_u8;
}

/// Binary-coded-decimal addition: each nibble is a decimal digit, with the
/// carry rippling between them. The NMOS parts leave N, Z and V undefined
/// here; we report them from the adjusted result, which is also what the
/// CMOS parts define. The CMOS parts additionally pay one extra cycle.
fn add_decimal(cpu: &mut Cpu, operand: u8) {
    let carry = cpu.get_carry();
    let mut low = (cpu.a & 0x0f) + (operand & 0x0f) + carry;
    let mut high = (cpu.a >> 4) + (operand >> 4);
    if low > 0x09 {
        low += 0x06;
        high += 1;
    }
    let carry_out = high > 0x09;
    if carry_out {
        high += 0x06;
    }
    let result = ((high & 0x0f) << 4) | (low & 0x0f);

    cpu.update_zero_and_negative_flag(result);
    cpu.update_overflow_flag(operand, result);
    cpu.set_status_flag(StatusFlag::Carry, carry_out);
    cpu.a = result;
    if cpu.variant.is_cmos() {
        cpu.cycles += 1;
    }
}

/// Binary-coded-decimal subtraction. The carry flag acts as the inverted
/// borrow, exactly as in binary mode.
fn sub_decimal(cpu: &mut Cpu, operand: u8) {
    let borrow = (1 - cpu.get_carry()) as i16;
    let mut low = (cpu.a & 0x0f) as i16 - (operand & 0x0f) as i16 - borrow;
    let mut high = (cpu.a >> 4) as i16 - (operand >> 4) as i16;
    if low < 0 {
        low += 10;
        high -= 1;
    }
    let carry_out = high >= 0;
    if !carry_out {
        high += 10;
    }
    let result = (((high as u8) & 0x0f) << 4) | ((low as u8) & 0x0f);

    cpu.update_zero_and_negative_flag(result);
    cpu.update_overflow_flag(!operand, result);
    cpu.set_status_flag(StatusFlag::Carry, carry_out);
    cpu.a = result;
    if cpu.variant.is_cmos() {
        cpu.cycles += 1;
    }
}

/// The decimal flag selects between binary and BCD addition. Shared with
/// the undocumented RRA.
pub(crate) fn add_with_carry(cpu: &mut Cpu, operand: u8) {
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        add_decimal(cpu, operand);
    } else {
        add_binary(cpu, operand);
    }
}

/// Binary subtraction is addition of the one's complement; the carry flag
/// supplies the +1 that completes the two's complement. Shared with the
/// undocumented ISC.
pub(crate) fn subtract_with_carry(cpu: &mut Cpu, operand: u8) {
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        sub_decimal(cpu, operand);
    } else {
        add_binary(cpu, !operand);
    }
}

/// Add with Carry
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    add_with_carry(cpu, operand);
}

/// Subtract with Carry
/// Function: A:=A-{adr}+C-1
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    subtract_with_carry(cpu, operand);
}

/// Compare A with source
/// http://6502.org/tutorials/compare_instructions.html
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.update_zero_and_negative_flag(cpu.a.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.a >= operand);
}

/// Compare X with source
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.update_zero_and_negative_flag(cpu.x.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.x >= operand);
}

/// Compare Y with source
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.update_zero_and_negative_flag(cpu.y.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.y >= operand);
}

/// Decrement memory, or the accumulator on CMOS.
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_address_and_maybe_operand(mode, extra_cycle);
    let result = operand.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(result);
    cpu.write_back(address, result);
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Increment memory, or the accumulator on CMOS.
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_address_and_maybe_operand(mode, extra_cycle);
    let result = operand.wrapping_add(1);
    cpu.update_zero_and_negative_flag(result);
    cpu.write_back(address, result);
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Arithmetic shift left
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_address_and_maybe_operand(mode, extra_cycle);
    let result = operand << 1;
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.write_back(address, result);
}

/// Rotate left
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_address_and_maybe_operand(mode, extra_cycle);
    let result = (operand << 1) | cpu.get_carry();
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.write_back(address, result);
}

/// Logical shift right
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_address_and_maybe_operand(mode, extra_cycle);
    let result = operand >> 1;
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.write_back(address, result);
}

/// Rotate right
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_address_and_maybe_operand(mode, extra_cycle);

    let result =
        // Shift the operand, {adr}/2
        (operand >> 1) |
        // Move the carry bit to the top, C*128
        (cpu.get_carry() << 7);

    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.write_back(address, result);
}

//! The decoded opcode tables for every supported CPU model.
//!
//! Each of the five models gets a 256-entry table binding an opcode byte to
//! its operation, addressing mode, and base cycle count. The tables are
//! built once and shared by every CPU instance. Page-crossing and
//! branch-taken penalties are added at run time, not encoded in the base
//! cycle counts.

use lazy_static::lazy_static;

use crate::cpu::opcodes_cmos::*;
use crate::cpu::opcodes_illegal::*;
use crate::cpu::opcodes_jump::*;
use crate::cpu::opcodes_logical::*;
use crate::cpu::opcodes_move::*;
use crate::cpu::Cpu;

/// Which 6502 family member to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// NMOS 6502 with documented opcodes only.
    Nmos6502,
    /// NMOS 6502 including the stable undocumented opcodes.
    Nmos6502Undocumented,
    /// Standard CMOS 65C02.
    Cmos65C02,
    /// Western Design Center W65C02: 65C02 plus WAI and STP.
    Wdc65C02,
    /// Rockwell R65C02: 65C02 plus the zero-page bit operations.
    Rockwell65C02,
}

impl Variant {
    // The commodity part numbers are aliases of the base models.
    pub const MOS_6510: Variant = Variant::Nmos6502Undocumented;
    pub const MOS_8500: Variant = Variant::Nmos6502Undocumented;
    pub const MOS_8502: Variant = Variant::Nmos6502Undocumented;
    pub const MOS_7501: Variant = Variant::Nmos6502;
    pub const MOS_8501: Variant = Variant::Nmos6502;

    pub fn is_cmos(self) -> bool {
        !matches!(self, Variant::Nmos6502 | Variant::Nmos6502Undocumented)
    }

    pub(crate) fn table(self) -> &'static [Opcode; 256] {
        match self {
            Variant::Nmos6502 => &NMOS_DOCUMENTED_TABLE,
            Variant::Nmos6502Undocumented => &NMOS_UNDOCUMENTED_TABLE,
            Variant::Cmos65C02 => &CMOS_TABLE,
            Variant::Wdc65C02 => &WDC_TABLE,
            Variant::Rockwell65C02 => &ROCKWELL_TABLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Absolute,                // abs
    AbsoluteX,               // abx
    AbsoluteY,               // aby
    AbsoluteIndexedIndirect, // (abs,x) - CMOS JMP only
    Immediate,               // imm
    Implied,                 // imp
    Indirect,                // (abs) - JMP only
    IndirectX,               // izx
    IndirectY,               // izy
    RegisterA,               // a
    Relative,                // rel
    ZeroPage,                // zp
    ZeroPageIndirect,        // (zp) - CMOS
    ZeroPageRelative,        // zp,rel - Rockwell bit branches
    ZeroPageX,               // zpx
    ZeroPageY,               // zpy
}

impl Mode {
    /// The number of operand bytes following the opcode byte.
    pub fn operand_len(self) -> u16 {
        match self {
            Mode::Implied | Mode::RegisterA => 0,
            Mode::Absolute
            | Mode::AbsoluteX
            | Mode::AbsoluteY
            | Mode::AbsoluteIndexedIndirect
            | Mode::Indirect
            | Mode::ZeroPageRelative => 2,
            _ => 1,
        }
    }
}

pub type OperationFn = fn(&mut Cpu, Mode, u8);

/// One decoded table cell. Immutable once the table is built.
#[derive(Clone, Copy)]
pub struct Opcode {
    pub mnemonic: &'static str,
    pub op: OperationFn,
    pub mode: Mode,
    /// Base cycle count from the published tables.
    pub cycles: u8,
    /// 1 where an indexed read crossing a page boundary costs an extra
    /// cycle. Write and read-modify-write opcodes keep this at 0; their
    /// base count already pays the worst case.
    pub extra_cycle: u8,
}

fn entry(
    mnemonic: &'static str,
    op: OperationFn,
    mode: Mode,
    cycles: u8,
    extra_cycle: u8,
) -> Opcode {
    Opcode {
        mnemonic,
        op,
        mode,
        cycles,
        extra_cycle,
    }
}

lazy_static! {
    static ref NMOS_UNDOCUMENTED_TABLE: [Opcode; 256] = nmos_table();
    static ref NMOS_DOCUMENTED_TABLE: [Opcode; 256] = {
        let mut table = nmos_table();
        strip_undocumented(&mut table);
        table
    };
    static ref CMOS_TABLE: [Opcode; 256] = cmos_table();
    static ref WDC_TABLE: [Opcode; 256] = {
        let mut table = cmos_table();
        table[0xcb] = entry("WAI", wai, Mode::Implied, 3, 0);
        table[0xdb] = entry("STP", stp, Mode::Implied, 3, 0);
        table
    };
    static ref ROCKWELL_TABLE: [Opcode; 256] = {
        let mut table = cmos_table();
        add_rockwell_bit_ops(&mut table);
        table
    };
}

/// NMOS table including the stable undocumented opcodes. The unstable ones
/// (XAA, AHX, SHX, SHY, TAS, LAS) are modelled as NOPs with the observed
/// byte and cycle consumption. 0xEB behaves exactly like SBC #imm on
/// hardware, so it stays an SBC.
#[rustfmt::skip]
fn nmos_table() -> [Opcode; 256] {
    use Mode::*;
    [
        /* 0x00 */
        entry("BRK", brk, Implied, 7, 0),
        entry("ORA", ora, IndirectX, 6, 0),
        entry("KIL", kil, Implied, 2, 0),
        entry("SLO", slo, IndirectX, 8, 0),
        entry("NOP", nop, ZeroPage, 3, 0),
        entry("ORA", ora, ZeroPage, 3, 0),
        entry("ASL", asl, ZeroPage, 5, 0),
        entry("SLO", slo, ZeroPage, 5, 0),
        entry("PHP", php, Implied, 3, 0),
        entry("ORA", ora, Immediate, 2, 0),
        entry("ASL", asl, RegisterA, 2, 0),
        entry("ANC", anc, Immediate, 2, 0),
        entry("NOP", nop, Absolute, 4, 0),
        entry("ORA", ora, Absolute, 4, 0),
        entry("ASL", asl, Absolute, 6, 0),
        entry("SLO", slo, Absolute, 6, 0),
        /* 0x10 */
        entry("BPL", bpl, Relative, 2, 0),
        entry("ORA", ora, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("SLO", slo, IndirectY, 8, 0),
        entry("NOP", nop, ZeroPageX, 4, 0),
        entry("ORA", ora, ZeroPageX, 4, 0),
        entry("ASL", asl, ZeroPageX, 6, 0),
        entry("SLO", slo, ZeroPageX, 6, 0),
        entry("CLC", clc, Implied, 2, 0),
        entry("ORA", ora, AbsoluteY, 4, 1),
        entry("NOP", nop, Implied, 2, 0),
        entry("SLO", slo, AbsoluteY, 7, 0),
        entry("NOP", nop, AbsoluteX, 4, 1),
        entry("ORA", ora, AbsoluteX, 4, 1),
        entry("ASL", asl, AbsoluteX, 7, 0),
        entry("SLO", slo, AbsoluteX, 7, 0),
        /* 0x20 */
        entry("JSR", jsr, Absolute, 6, 0),
        entry("AND", and, IndirectX, 6, 0),
        entry("KIL", kil, Implied, 2, 0),
        entry("RLA", rla, IndirectX, 8, 0),
        entry("BIT", bit, ZeroPage, 3, 0),
        entry("AND", and, ZeroPage, 3, 0),
        entry("ROL", rol, ZeroPage, 5, 0),
        entry("RLA", rla, ZeroPage, 5, 0),
        entry("PLP", plp, Implied, 4, 0),
        entry("AND", and, Immediate, 2, 0),
        entry("ROL", rol, RegisterA, 2, 0),
        entry("ANC", anc, Immediate, 2, 0),
        entry("BIT", bit, Absolute, 4, 0),
        entry("AND", and, Absolute, 4, 0),
        entry("ROL", rol, Absolute, 6, 0),
        entry("RLA", rla, Absolute, 6, 0),
        /* 0x30 */
        entry("BMI", bmi, Relative, 2, 0),
        entry("AND", and, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("RLA", rla, IndirectY, 8, 0),
        entry("NOP", nop, ZeroPageX, 4, 0),
        entry("AND", and, ZeroPageX, 4, 0),
        entry("ROL", rol, ZeroPageX, 6, 0),
        entry("RLA", rla, ZeroPageX, 6, 0),
        entry("SEC", sec, Implied, 2, 0),
        entry("AND", and, AbsoluteY, 4, 1),
        entry("NOP", nop, Implied, 2, 0),
        entry("RLA", rla, AbsoluteY, 7, 0),
        entry("NOP", nop, AbsoluteX, 4, 1),
        entry("AND", and, AbsoluteX, 4, 1),
        entry("ROL", rol, AbsoluteX, 7, 0),
        entry("RLA", rla, AbsoluteX, 7, 0),
        /* 0x40 */
        entry("RTI", rti, Implied, 6, 0),
        entry("EOR", eor, IndirectX, 6, 0),
        entry("KIL", kil, Implied, 2, 0),
        entry("SRE", sre, IndirectX, 8, 0),
        entry("NOP", nop, ZeroPage, 3, 0),
        entry("EOR", eor, ZeroPage, 3, 0),
        entry("LSR", lsr, ZeroPage, 5, 0),
        entry("SRE", sre, ZeroPage, 5, 0),
        entry("PHA", pha, Implied, 3, 0),
        entry("EOR", eor, Immediate, 2, 0),
        entry("LSR", lsr, RegisterA, 2, 0),
        entry("ALR", alr, Immediate, 2, 0),
        entry("JMP", jmp, Absolute, 3, 0),
        entry("EOR", eor, Absolute, 4, 0),
        entry("LSR", lsr, Absolute, 6, 0),
        entry("SRE", sre, Absolute, 6, 0),
        /* 0x50 */
        entry("BVC", bvc, Relative, 2, 0),
        entry("EOR", eor, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("SRE", sre, IndirectY, 8, 0),
        entry("NOP", nop, ZeroPageX, 4, 0),
        entry("EOR", eor, ZeroPageX, 4, 0),
        entry("LSR", lsr, ZeroPageX, 6, 0),
        entry("SRE", sre, ZeroPageX, 6, 0),
        entry("CLI", cli, Implied, 2, 0),
        entry("EOR", eor, AbsoluteY, 4, 1),
        entry("NOP", nop, Implied, 2, 0),
        entry("SRE", sre, AbsoluteY, 7, 0),
        entry("NOP", nop, AbsoluteX, 4, 1),
        entry("EOR", eor, AbsoluteX, 4, 1),
        entry("LSR", lsr, AbsoluteX, 7, 0),
        entry("SRE", sre, AbsoluteX, 7, 0),
        /* 0x60 */
        entry("RTS", rts, Implied, 6, 0),
        entry("ADC", adc, IndirectX, 6, 0),
        entry("KIL", kil, Implied, 2, 0),
        entry("RRA", rra, IndirectX, 8, 0),
        entry("NOP", nop, ZeroPage, 3, 0),
        entry("ADC", adc, ZeroPage, 3, 0),
        entry("ROR", ror, ZeroPage, 5, 0),
        entry("RRA", rra, ZeroPage, 5, 0),
        entry("PLA", pla, Implied, 4, 0),
        entry("ADC", adc, Immediate, 2, 0),
        entry("ROR", ror, RegisterA, 2, 0),
        entry("ARR", arr, Immediate, 2, 0),
        entry("JMP", jmp, Indirect, 5, 0),
        entry("ADC", adc, Absolute, 4, 0),
        entry("ROR", ror, Absolute, 6, 0),
        entry("RRA", rra, Absolute, 6, 0),
        /* 0x70 */
        entry("BVS", bvs, Relative, 2, 0),
        entry("ADC", adc, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("RRA", rra, IndirectY, 8, 0),
        entry("NOP", nop, ZeroPageX, 4, 0),
        entry("ADC", adc, ZeroPageX, 4, 0),
        entry("ROR", ror, ZeroPageX, 6, 0),
        entry("RRA", rra, ZeroPageX, 6, 0),
        entry("SEI", sei, Implied, 2, 0),
        entry("ADC", adc, AbsoluteY, 4, 1),
        entry("NOP", nop, Implied, 2, 0),
        entry("RRA", rra, AbsoluteY, 7, 0),
        entry("NOP", nop, AbsoluteX, 4, 1),
        entry("ADC", adc, AbsoluteX, 4, 1),
        entry("ROR", ror, AbsoluteX, 7, 0),
        entry("RRA", rra, AbsoluteX, 7, 0),
        /* 0x80 */
        entry("NOP", nop, Immediate, 2, 0),
        entry("STA", sta, IndirectX, 6, 0),
        entry("NOP", nop, Immediate, 2, 0),
        entry("SAX", sax, IndirectX, 6, 0),
        entry("STY", sty, ZeroPage, 3, 0),
        entry("STA", sta, ZeroPage, 3, 0),
        entry("STX", stx, ZeroPage, 3, 0),
        entry("SAX", sax, ZeroPage, 3, 0),
        entry("DEY", dey, Implied, 2, 0),
        entry("NOP", nop, Immediate, 2, 0),
        entry("TXA", txa, Implied, 2, 0),
        entry("NOP", nop, Immediate, 2, 0),
        entry("STY", sty, Absolute, 4, 0),
        entry("STA", sta, Absolute, 4, 0),
        entry("STX", stx, Absolute, 4, 0),
        entry("SAX", sax, Absolute, 4, 0),
        /* 0x90 */
        entry("BCC", bcc, Relative, 2, 0),
        entry("STA", sta, IndirectY, 6, 0),
        entry("KIL", kil, Implied, 2, 0),
        entry("NOP", nop, IndirectY, 6, 0),
        entry("STY", sty, ZeroPageX, 4, 0),
        entry("STA", sta, ZeroPageX, 4, 0),
        entry("STX", stx, ZeroPageY, 4, 0),
        entry("SAX", sax, ZeroPageY, 4, 0),
        entry("TYA", tya, Implied, 2, 0),
        entry("STA", sta, AbsoluteY, 5, 0),
        entry("TXS", txs, Implied, 2, 0),
        entry("NOP", nop, AbsoluteY, 5, 0),
        entry("NOP", nop, AbsoluteX, 5, 0),
        entry("STA", sta, AbsoluteX, 5, 0),
        entry("NOP", nop, AbsoluteY, 5, 0),
        entry("NOP", nop, AbsoluteY, 5, 0),
        /* 0xA0 */
        entry("LDY", ldy, Immediate, 2, 0),
        entry("LDA", lda, IndirectX, 6, 0),
        entry("LDX", ldx, Immediate, 2, 0),
        entry("LAX", lax, IndirectX, 6, 0),
        entry("LDY", ldy, ZeroPage, 3, 0),
        entry("LDA", lda, ZeroPage, 3, 0),
        entry("LDX", ldx, ZeroPage, 3, 0),
        entry("LAX", lax, ZeroPage, 3, 0),
        entry("TAY", tay, Implied, 2, 0),
        entry("LDA", lda, Immediate, 2, 0),
        entry("TAX", tax, Implied, 2, 0),
        entry("LAX", lax, Immediate, 2, 0),
        entry("LDY", ldy, Absolute, 4, 0),
        entry("LDA", lda, Absolute, 4, 0),
        entry("LDX", ldx, Absolute, 4, 0),
        entry("LAX", lax, Absolute, 4, 0),
        /* 0xB0 */
        entry("BCS", bcs, Relative, 2, 0),
        entry("LDA", lda, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("LAX", lax, IndirectY, 5, 1),
        entry("LDY", ldy, ZeroPageX, 4, 0),
        entry("LDA", lda, ZeroPageX, 4, 0),
        entry("LDX", ldx, ZeroPageY, 4, 0),
        entry("LAX", lax, ZeroPageY, 4, 0),
        entry("CLV", clv, Implied, 2, 0),
        entry("LDA", lda, AbsoluteY, 4, 1),
        entry("TSX", tsx, Implied, 2, 0),
        entry("NOP", nop, AbsoluteY, 4, 1),
        entry("LDY", ldy, AbsoluteX, 4, 1),
        entry("LDA", lda, AbsoluteX, 4, 1),
        entry("LDX", ldx, AbsoluteY, 4, 1),
        entry("LAX", lax, AbsoluteY, 4, 1),
        /* 0xC0 */
        entry("CPY", cpy, Immediate, 2, 0),
        entry("CMP", cmp, IndirectX, 6, 0),
        entry("NOP", nop, Immediate, 2, 0),
        entry("DCP", dcp, IndirectX, 8, 0),
        entry("CPY", cpy, ZeroPage, 3, 0),
        entry("CMP", cmp, ZeroPage, 3, 0),
        entry("DEC", dec, ZeroPage, 5, 0),
        entry("DCP", dcp, ZeroPage, 5, 0),
        entry("INY", iny, Implied, 2, 0),
        entry("CMP", cmp, Immediate, 2, 0),
        entry("DEX", dex, Implied, 2, 0),
        entry("AXS", axs, Immediate, 2, 0),
        entry("CPY", cpy, Absolute, 4, 0),
        entry("CMP", cmp, Absolute, 4, 0),
        entry("DEC", dec, Absolute, 6, 0),
        entry("DCP", dcp, Absolute, 6, 0),
        /* 0xD0 */
        entry("BNE", bne, Relative, 2, 0),
        entry("CMP", cmp, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("DCP", dcp, IndirectY, 8, 0),
        entry("NOP", nop, ZeroPageX, 4, 0),
        entry("CMP", cmp, ZeroPageX, 4, 0),
        entry("DEC", dec, ZeroPageX, 6, 0),
        entry("DCP", dcp, ZeroPageX, 6, 0),
        entry("CLD", cld, Implied, 2, 0),
        entry("CMP", cmp, AbsoluteY, 4, 1),
        entry("NOP", nop, Implied, 2, 0),
        entry("DCP", dcp, AbsoluteY, 7, 0),
        entry("NOP", nop, AbsoluteX, 4, 1),
        entry("CMP", cmp, AbsoluteX, 4, 1),
        entry("DEC", dec, AbsoluteX, 7, 0),
        entry("DCP", dcp, AbsoluteX, 7, 0),
        /* 0xE0 */
        entry("CPX", cpx, Immediate, 2, 0),
        entry("SBC", sbc, IndirectX, 6, 0),
        entry("NOP", nop, Immediate, 2, 0),
        entry("ISC", isc, IndirectX, 8, 0),
        entry("CPX", cpx, ZeroPage, 3, 0),
        entry("SBC", sbc, ZeroPage, 3, 0),
        entry("INC", inc, ZeroPage, 5, 0),
        entry("ISC", isc, ZeroPage, 5, 0),
        entry("INX", inx, Implied, 2, 0),
        entry("SBC", sbc, Immediate, 2, 0),
        entry("NOP", nop, Implied, 2, 0),
        entry("SBC", sbc, Immediate, 2, 0),
        entry("CPX", cpx, Absolute, 4, 0),
        entry("SBC", sbc, Absolute, 4, 0),
        entry("INC", inc, Absolute, 6, 0),
        entry("ISC", isc, Absolute, 6, 0),
        /* 0xF0 */
        entry("BEQ", beq, Relative, 2, 0),
        entry("SBC", sbc, IndirectY, 5, 1),
        entry("KIL", kil, Implied, 2, 0),
        entry("ISC", isc, IndirectY, 8, 0),
        entry("NOP", nop, ZeroPageX, 4, 0),
        entry("SBC", sbc, ZeroPageX, 4, 0),
        entry("INC", inc, ZeroPageX, 6, 0),
        entry("ISC", isc, ZeroPageX, 6, 0),
        entry("SED", sed, Implied, 2, 0),
        entry("SBC", sbc, AbsoluteY, 4, 1),
        entry("NOP", nop, Implied, 2, 0),
        entry("ISC", isc, AbsoluteY, 7, 0),
        entry("NOP", nop, AbsoluteX, 4, 1),
        entry("SBC", sbc, AbsoluteX, 4, 1),
        entry("INC", inc, AbsoluteX, 7, 0),
        entry("ISC", isc, AbsoluteX, 7, 0),
    ]
}

/// Documented-only NMOS: the undocumented column slots (x3, x7, xB, xF)
/// become NOPs with the historically observed byte and cycle consumption.
/// The KIL cells in column x2 lock the chip regardless of documentation
/// level, so they stay. 0xEB keeps its SBC behaviour.
fn strip_undocumented(table: &mut [Opcode; 256]) {
    for row in (0x00..=0xf0usize).step_by(0x10) {
        for column in [0x03, 0x07, 0x0b, 0x0f] {
            let index = row + column;
            if index == 0xeb {
                continue;
            }
            let cell = &mut table[index];
            cell.mnemonic = "NOP";
            cell.op = nop;
        }
    }
}

/// Standard 65C02 table. There are no locking opcodes on CMOS; every
/// unused slot is a one-byte NOP.
#[rustfmt::skip]
fn cmos_table() -> [Opcode; 256] {
    use Mode::*;
    let unused = entry("NOP", nop, Implied, 1, 0);
    [
        /* 0x00 */
        entry("BRK", brk, Implied, 7, 0),
        entry("ORA", ora, IndirectX, 6, 0),
        unused,
        unused,
        entry("TSB", tsb, ZeroPage, 5, 0),
        entry("ORA", ora, ZeroPage, 3, 0),
        entry("ASL", asl, ZeroPage, 5, 0),
        unused,
        entry("PHP", php, Implied, 3, 0),
        entry("ORA", ora, Immediate, 2, 0),
        entry("ASL", asl, RegisterA, 2, 0),
        unused,
        entry("TSB", tsb, Absolute, 6, 0),
        entry("ORA", ora, Absolute, 4, 0),
        entry("ASL", asl, Absolute, 6, 0),
        unused,
        /* 0x10 */
        entry("BPL", bpl, Relative, 2, 0),
        entry("ORA", ora, IndirectY, 5, 1),
        entry("ORA", ora, ZeroPageIndirect, 5, 0),
        unused,
        entry("TRB", trb, ZeroPage, 5, 0),
        entry("ORA", ora, ZeroPageX, 4, 0),
        entry("ASL", asl, ZeroPageX, 6, 0),
        unused,
        entry("CLC", clc, Implied, 2, 0),
        entry("ORA", ora, AbsoluteY, 4, 1),
        entry("INC", inc, RegisterA, 2, 0),
        unused,
        entry("TRB", trb, Absolute, 6, 0),
        entry("ORA", ora, AbsoluteX, 4, 1),
        entry("ASL", asl, AbsoluteX, 7, 0),
        unused,
        /* 0x20 */
        entry("JSR", jsr, Absolute, 6, 0),
        entry("AND", and, IndirectX, 6, 0),
        unused,
        unused,
        entry("BIT", bit, ZeroPage, 3, 0),
        entry("AND", and, ZeroPage, 3, 0),
        entry("ROL", rol, ZeroPage, 5, 0),
        unused,
        entry("PLP", plp, Implied, 4, 0),
        entry("AND", and, Immediate, 2, 0),
        entry("ROL", rol, RegisterA, 2, 0),
        unused,
        entry("BIT", bit, Absolute, 4, 0),
        entry("AND", and, Absolute, 4, 0),
        entry("ROL", rol, Absolute, 6, 0),
        unused,
        /* 0x30 */
        entry("BMI", bmi, Relative, 2, 0),
        entry("AND", and, IndirectY, 5, 1),
        entry("AND", and, ZeroPageIndirect, 5, 0),
        unused,
        entry("BIT", bit, ZeroPageX, 4, 0),
        entry("AND", and, ZeroPageX, 4, 0),
        entry("ROL", rol, ZeroPageX, 6, 0),
        unused,
        entry("SEC", sec, Implied, 2, 0),
        entry("AND", and, AbsoluteY, 4, 1),
        entry("DEC", dec, RegisterA, 2, 0),
        unused,
        entry("BIT", bit, AbsoluteX, 4, 1),
        entry("AND", and, AbsoluteX, 4, 1),
        entry("ROL", rol, AbsoluteX, 7, 0),
        unused,
        /* 0x40 */
        entry("RTI", rti, Implied, 6, 0),
        entry("EOR", eor, IndirectX, 6, 0),
        unused,
        unused,
        unused,
        entry("EOR", eor, ZeroPage, 3, 0),
        entry("LSR", lsr, ZeroPage, 5, 0),
        unused,
        entry("PHA", pha, Implied, 3, 0),
        entry("EOR", eor, Immediate, 2, 0),
        entry("LSR", lsr, RegisterA, 2, 0),
        unused,
        entry("JMP", jmp, Absolute, 3, 0),
        entry("EOR", eor, Absolute, 4, 0),
        entry("LSR", lsr, Absolute, 6, 0),
        unused,
        /* 0x50 */
        entry("BVC", bvc, Relative, 2, 0),
        entry("EOR", eor, IndirectY, 5, 1),
        entry("EOR", eor, ZeroPageIndirect, 5, 0),
        unused,
        unused,
        entry("EOR", eor, ZeroPageX, 4, 0),
        entry("LSR", lsr, ZeroPageX, 6, 0),
        unused,
        entry("CLI", cli, Implied, 2, 0),
        entry("EOR", eor, AbsoluteY, 4, 1),
        entry("PHY", phy, Implied, 3, 0),
        unused,
        unused,
        entry("EOR", eor, AbsoluteX, 4, 1),
        entry("LSR", lsr, AbsoluteX, 7, 0),
        unused,
        /* 0x60 */
        entry("RTS", rts, Implied, 6, 0),
        entry("ADC", adc, IndirectX, 6, 0),
        unused,
        unused,
        entry("STZ", stz, ZeroPage, 3, 0),
        entry("ADC", adc, ZeroPage, 3, 0),
        entry("ROR", ror, ZeroPage, 5, 0),
        unused,
        entry("PLA", pla, Implied, 4, 0),
        entry("ADC", adc, Immediate, 2, 0),
        entry("ROR", ror, RegisterA, 2, 0),
        unused,
        // The CMOS parts fix the JMP ($xxFF) page-wrap bug and pay one
        // extra cycle for the corrected read.
        entry("JMP", jmp, Indirect, 6, 0),
        entry("ADC", adc, Absolute, 4, 0),
        entry("ROR", ror, Absolute, 6, 0),
        unused,
        /* 0x70 */
        entry("BVS", bvs, Relative, 2, 0),
        entry("ADC", adc, IndirectY, 5, 1),
        entry("ADC", adc, ZeroPageIndirect, 5, 0),
        unused,
        entry("STZ", stz, ZeroPageX, 4, 0),
        entry("ADC", adc, ZeroPageX, 4, 0),
        entry("ROR", ror, ZeroPageX, 6, 0),
        unused,
        entry("SEI", sei, Implied, 2, 0),
        entry("ADC", adc, AbsoluteY, 4, 1),
        entry("PLY", ply, Implied, 4, 0),
        unused,
        entry("JMP", jmp, AbsoluteIndexedIndirect, 6, 0),
        entry("ADC", adc, AbsoluteX, 4, 1),
        entry("ROR", ror, AbsoluteX, 7, 0),
        unused,
        /* 0x80 */
        entry("BRA", bra, Relative, 2, 0),
        entry("STA", sta, IndirectX, 6, 0),
        unused,
        unused,
        entry("STY", sty, ZeroPage, 3, 0),
        entry("STA", sta, ZeroPage, 3, 0),
        entry("STX", stx, ZeroPage, 3, 0),
        unused,
        entry("DEY", dey, Implied, 2, 0),
        entry("BIT", bit, Immediate, 2, 0),
        entry("TXA", txa, Implied, 2, 0),
        unused,
        entry("STY", sty, Absolute, 4, 0),
        entry("STA", sta, Absolute, 4, 0),
        entry("STX", stx, Absolute, 4, 0),
        unused,
        /* 0x90 */
        entry("BCC", bcc, Relative, 2, 0),
        entry("STA", sta, IndirectY, 6, 0),
        entry("STA", sta, ZeroPageIndirect, 5, 0),
        unused,
        entry("STY", sty, ZeroPageX, 4, 0),
        entry("STA", sta, ZeroPageX, 4, 0),
        entry("STX", stx, ZeroPageY, 4, 0),
        unused,
        entry("TYA", tya, Implied, 2, 0),
        entry("STA", sta, AbsoluteY, 5, 0),
        entry("TXS", txs, Implied, 2, 0),
        unused,
        entry("STZ", stz, Absolute, 4, 0),
        entry("STA", sta, AbsoluteX, 5, 0),
        entry("STZ", stz, AbsoluteX, 5, 0),
        unused,
        /* 0xA0 */
        entry("LDY", ldy, Immediate, 2, 0),
        entry("LDA", lda, IndirectX, 6, 0),
        entry("LDX", ldx, Immediate, 2, 0),
        unused,
        entry("LDY", ldy, ZeroPage, 3, 0),
        entry("LDA", lda, ZeroPage, 3, 0),
        entry("LDX", ldx, ZeroPage, 3, 0),
        unused,
        entry("TAY", tay, Implied, 2, 0),
        entry("LDA", lda, Immediate, 2, 0),
        entry("TAX", tax, Implied, 2, 0),
        unused,
        entry("LDY", ldy, Absolute, 4, 0),
        entry("LDA", lda, Absolute, 4, 0),
        entry("LDX", ldx, Absolute, 4, 0),
        unused,
        /* 0xB0 */
        entry("BCS", bcs, Relative, 2, 0),
        entry("LDA", lda, IndirectY, 5, 1),
        entry("LDA", lda, ZeroPageIndirect, 5, 0),
        unused,
        entry("LDY", ldy, ZeroPageX, 4, 0),
        entry("LDA", lda, ZeroPageX, 4, 0),
        entry("LDX", ldx, ZeroPageY, 4, 0),
        unused,
        entry("CLV", clv, Implied, 2, 0),
        entry("LDA", lda, AbsoluteY, 4, 1),
        entry("TSX", tsx, Implied, 2, 0),
        unused,
        entry("LDY", ldy, AbsoluteX, 4, 1),
        entry("LDA", lda, AbsoluteX, 4, 1),
        entry("LDX", ldx, AbsoluteY, 4, 1),
        unused,
        /* 0xC0 */
        entry("CPY", cpy, Immediate, 2, 0),
        entry("CMP", cmp, IndirectX, 6, 0),
        unused,
        unused,
        entry("CPY", cpy, ZeroPage, 3, 0),
        entry("CMP", cmp, ZeroPage, 3, 0),
        entry("DEC", dec, ZeroPage, 5, 0),
        unused,
        entry("INY", iny, Implied, 2, 0),
        entry("CMP", cmp, Immediate, 2, 0),
        entry("DEX", dex, Implied, 2, 0),
        unused, // WAI on the W65C02
        entry("CPY", cpy, Absolute, 4, 0),
        entry("CMP", cmp, Absolute, 4, 0),
        entry("DEC", dec, Absolute, 6, 0),
        unused,
        /* 0xD0 */
        entry("BNE", bne, Relative, 2, 0),
        entry("CMP", cmp, IndirectY, 5, 1),
        entry("CMP", cmp, ZeroPageIndirect, 5, 0),
        unused,
        unused,
        entry("CMP", cmp, ZeroPageX, 4, 0),
        entry("DEC", dec, ZeroPageX, 6, 0),
        unused,
        entry("CLD", cld, Implied, 2, 0),
        entry("CMP", cmp, AbsoluteY, 4, 1),
        entry("PHX", phx, Implied, 3, 0),
        unused, // STP on the W65C02
        unused,
        entry("CMP", cmp, AbsoluteX, 4, 1),
        entry("DEC", dec, AbsoluteX, 7, 0),
        unused,
        /* 0xE0 */
        entry("CPX", cpx, Immediate, 2, 0),
        entry("SBC", sbc, IndirectX, 6, 0),
        unused,
        unused,
        entry("CPX", cpx, ZeroPage, 3, 0),
        entry("SBC", sbc, ZeroPage, 3, 0),
        entry("INC", inc, ZeroPage, 5, 0),
        unused,
        entry("INX", inx, Implied, 2, 0),
        entry("SBC", sbc, Immediate, 2, 0),
        entry("NOP", nop, Implied, 2, 0),
        unused,
        entry("CPX", cpx, Absolute, 4, 0),
        entry("SBC", sbc, Absolute, 4, 0),
        entry("INC", inc, Absolute, 6, 0),
        unused,
        /* 0xF0 */
        entry("BEQ", beq, Relative, 2, 0),
        entry("SBC", sbc, IndirectY, 5, 1),
        entry("SBC", sbc, ZeroPageIndirect, 5, 0),
        unused,
        unused,
        entry("SBC", sbc, ZeroPageX, 4, 0),
        entry("INC", inc, ZeroPageX, 6, 0),
        unused,
        entry("SED", sed, Implied, 2, 0),
        entry("SBC", sbc, AbsoluteY, 4, 1),
        entry("PLX", plx, Implied, 4, 0),
        unused,
        unused,
        entry("SBC", sbc, AbsoluteX, 4, 1),
        entry("INC", inc, AbsoluteX, 7, 0),
        unused,
    ]
}

/// Patch the Rockwell bit operations into columns x7 and xF.
fn add_rockwell_bit_ops(table: &mut [Opcode; 256]) {
    const RMB: [OperationFn; 8] = [rmb0, rmb1, rmb2, rmb3, rmb4, rmb5, rmb6, rmb7];
    const SMB: [OperationFn; 8] = [smb0, smb1, smb2, smb3, smb4, smb5, smb6, smb7];
    const BBR: [OperationFn; 8] = [bbr0, bbr1, bbr2, bbr3, bbr4, bbr5, bbr6, bbr7];
    const BBS: [OperationFn; 8] = [bbs0, bbs1, bbs2, bbs3, bbs4, bbs5, bbs6, bbs7];
    const RMB_NAMES: [&str; 8] = [
        "RMB0", "RMB1", "RMB2", "RMB3", "RMB4", "RMB5", "RMB6", "RMB7",
    ];
    const SMB_NAMES: [&str; 8] = [
        "SMB0", "SMB1", "SMB2", "SMB3", "SMB4", "SMB5", "SMB6", "SMB7",
    ];
    const BBR_NAMES: [&str; 8] = [
        "BBR0", "BBR1", "BBR2", "BBR3", "BBR4", "BBR5", "BBR6", "BBR7",
    ];
    const BBS_NAMES: [&str; 8] = [
        "BBS0", "BBS1", "BBS2", "BBS3", "BBS4", "BBS5", "BBS6", "BBS7",
    ];

    for bit in 0..8 {
        table[0x07 + bit * 0x10] = entry(RMB_NAMES[bit], RMB[bit], Mode::ZeroPage, 5, 0);
        table[0x87 + bit * 0x10] = entry(SMB_NAMES[bit], SMB[bit], Mode::ZeroPage, 5, 0);
        table[0x0f + bit * 0x10] =
            entry(BBR_NAMES[bit], BBR[bit], Mode::ZeroPageRelative, 5, 0);
        table[0x8f + bit * 0x10] =
            entry(BBS_NAMES[bit], BBS[bit], Mode::ZeroPageRelative, 5, 0);
    }
}

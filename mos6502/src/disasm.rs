//! Formats single instructions as text using the active variant's opcode
//! table. All memory is read through the side-effect-free `peek` entry
//! point, so disassembling device-mapped regions is safe as long as the
//! host bus supports deterministic reads.

use std::collections::HashMap;

use crate::cpu::Cpu;
use crate::opcodes::Mode;

/// Addresses can be rendered through a sparse label map; an address with
/// no label renders numerically.
pub type LabelMap = HashMap<u16, String>;

/// One formatted instruction.
pub struct Disassembly {
    /// `MNEMONIC OPERAND` text.
    pub text: String,
    /// Address of the following instruction.
    pub next_addr: u16,
    /// The address the operand refers to, where one exists, for callers
    /// that track cross-references.
    pub ref_addr: Option<u16>,
}

impl Cpu {
    /// Disassemble the instruction at `addr`, resolving operand addresses
    /// through `labels` when supplied.
    pub fn disassemble(&self, addr: u16, labels: Option<&LabelMap>) -> Disassembly {
        let opcode = self.peek_u8(addr);
        let entry = self.opcode_entry(opcode);
        let mnemonic = entry.mnemonic;
        let next_addr = addr.wrapping_add(1).wrapping_add(entry.mode.operand_len());

        let operand_u8 = self.peek_u8(addr.wrapping_add(1));
        let operand_u16 = self.peek_u16(addr.wrapping_add(1));

        let name = |address: u16| -> String {
            if let Some(label) = labels.and_then(|map| map.get(&address)) {
                return label.clone();
            }
            if address <= 0xff {
                format!("${:02X}", address)
            } else {
                format!("${:04X}", address)
            }
        };

        let (text, ref_addr) = match entry.mode {
            Mode::Implied => (mnemonic.to_string(), None),
            Mode::RegisterA => (format!("{} A", mnemonic), None),
            Mode::Immediate => (format!("{} #${:02X}", mnemonic, operand_u8), None),
            Mode::ZeroPage => {
                let address = operand_u8 as u16;
                (format!("{} {}", mnemonic, name(address)), Some(address))
            }
            Mode::ZeroPageX => {
                let address = operand_u8 as u16;
                (format!("{} {},X", mnemonic, name(address)), Some(address))
            }
            Mode::ZeroPageY => {
                let address = operand_u8 as u16;
                (format!("{} {},Y", mnemonic, name(address)), Some(address))
            }
            Mode::ZeroPageIndirect => {
                let address = operand_u8 as u16;
                (format!("{} ({})", mnemonic, name(address)), Some(address))
            }
            Mode::IndirectX => {
                let address = operand_u8 as u16;
                (format!("{} ({},X)", mnemonic, name(address)), Some(address))
            }
            Mode::IndirectY => {
                let address = operand_u8 as u16;
                (format!("{} ({}),Y", mnemonic, name(address)), Some(address))
            }
            Mode::Absolute => (
                format!("{} {}", mnemonic, name(operand_u16)),
                Some(operand_u16),
            ),
            Mode::AbsoluteX => (
                format!("{} {},X", mnemonic, name(operand_u16)),
                Some(operand_u16),
            ),
            Mode::AbsoluteY => (
                format!("{} {},Y", mnemonic, name(operand_u16)),
                Some(operand_u16),
            ),
            Mode::Indirect => (
                format!("{} ({})", mnemonic, name(operand_u16)),
                Some(operand_u16),
            ),
            Mode::AbsoluteIndexedIndirect => (
                format!("{} ({},X)", mnemonic, name(operand_u16)),
                Some(operand_u16),
            ),
            Mode::Relative => {
                let target = next_addr.wrapping_add(operand_u8 as i8 as u16);
                (format!("{} {}", mnemonic, name(target)), Some(target))
            }
            Mode::ZeroPageRelative => {
                let zero_page = operand_u8 as u16;
                let offset = self.peek_u8(addr.wrapping_add(2));
                let target = next_addr.wrapping_add(offset as i8 as u16);
                (
                    format!("{} {},{}", mnemonic, name(zero_page), name(target)),
                    Some(target),
                )
            }
        };

        Disassembly {
            text,
            next_addr,
            ref_addr,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::bus::Ram;
    use crate::cpu::Cpu;
    use crate::opcodes::Variant;

    use super::LabelMap;

    fn cpu_with_bytes(variant: Variant, bytes: &[u8]) -> Cpu {
        let ram = Ram::with_program(0x8000, bytes);
        Cpu::new(variant, Box::new(ram))
    }

    /// Disassemble one instruction per line, starting at 0x8000.
    fn disassemble_all(cpu: &Cpu, count: usize) -> String {
        let mut lines = Vec::new();
        let mut addr = 0x8000;
        for _ in 0..count {
            let disassembly = cpu.disassemble(addr, None);
            lines.push(disassembly.text);
            addr = disassembly.next_addr;
        }
        lines.join("\n")
    }

    #[test]
    fn disassembles_common_addressing_modes() {
        let cpu = cpu_with_bytes(
            Variant::Nmos6502,
            &[
                0xa9, 0x22, // lda #$22
                0xa5, 0x10, // lda $10
                0xb5, 0x10, // lda $10,x
                0xad, 0x34, 0x12, // lda $1234
                0xbd, 0x34, 0x12, // lda $1234,x
                0xb9, 0x34, 0x12, // lda $1234,y
                0xa1, 0x40, // lda ($40,x)
                0xb1, 0x40, // lda ($40),y
                0x6c, 0xff, 0x30, // jmp ($30ff)
                0x0a, // asl a
                0xea, // nop
            ],
        );
        insta::assert_snapshot!(disassemble_all(&cpu, 11), @r###"
        LDA #$22
        LDA $10
        LDA $10,X
        LDA $1234
        LDA $1234,X
        LDA $1234,Y
        LDA ($40,X)
        LDA ($40),Y
        JMP ($30FF)
        ASL A
        NOP
        "###);
    }

    #[test]
    fn disassembles_relative_targets_as_absolute_addresses() {
        // beq +4 from 0x8000 lands at 0x8006.
        let cpu = cpu_with_bytes(Variant::Nmos6502, &[0xf0, 0x04, 0xd0, 0xfc]);
        let first = cpu.disassemble(0x8000, None);
        assert_eq!(first.text, "BEQ $8006");
        assert_eq!(first.ref_addr, Some(0x8006));
        // bne -4 from 0x8002 lands back at 0x8000.
        let second = cpu.disassemble(first.next_addr, None);
        assert_eq!(second.text, "BNE $8000");
        assert_eq!(second.ref_addr, Some(0x8000));
    }

    #[test]
    fn disassembles_cmos_and_rockwell_forms() {
        let cpu = cpu_with_bytes(
            Variant::Rockwell65C02,
            &[
                0xb2, 0x40, // lda ($40)
                0x7c, 0x00, 0x90, // jmp ($9000,x)
                0x07, 0x12, // rmb0 $12
                0x8f, 0x12, 0x02, // bbs0 $12,+2
            ],
        );
        insta::assert_snapshot!(disassemble_all(&cpu, 4), @r###"
        LDA ($40)
        JMP ($9000,X)
        RMB0 $12
        BBS0 $12,$800C
        "###);
    }

    #[test]
    fn resolves_labels_and_reports_references() {
        let mut labels = LabelMap::new();
        labels.insert(0x9000, "render_frame".to_string());
        labels.insert(0x0010, "cursor".to_string());

        let cpu = cpu_with_bytes(
            Variant::Nmos6502,
            &[
                0x20, 0x00, 0x90, // jsr $9000
                0x85, 0x10, // sta $10
            ],
        );
        let first = cpu.disassemble(0x8000, Some(&labels));
        assert_eq!(first.text, "JSR render_frame");
        assert_eq!(first.ref_addr, Some(0x9000));
        assert_eq!(first.next_addr, 0x8003);

        let second = cpu.disassemble(first.next_addr, Some(&labels));
        assert_eq!(second.text, "STA cursor");
        assert_eq!(second.ref_addr, Some(0x0010));
    }

    #[test]
    fn undocumented_mnemonics_depend_on_the_variant() {
        let bytes = [0xa7, 0x12]; // lax $12 on the undocumented table
        let documented = cpu_with_bytes(Variant::Nmos6502, &bytes);
        assert_eq!(documented.disassemble(0x8000, None).text, "NOP $12");

        let undocumented = cpu_with_bytes(Variant::Nmos6502Undocumented, &bytes);
        assert_eq!(undocumented.disassemble(0x8000, None).text, "LAX $12");
    }
}

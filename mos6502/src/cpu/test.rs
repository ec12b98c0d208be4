use crate::bus::Ram;
use crate::cpu::test_helpers::*;
use crate::cpu::{Cpu, PinState, StatusFlag};
use crate::opcodes::Variant;

/// These tests assert the various operations the CPU can do. The terse
/// ones use the register/status macros: name, expected register, expected
/// status, program bytes.
mod immediate_mode {
    use super::*;

    mod adc_basics {
        use super::*;
        // 0x22 + 0x11 == 0x33. P is the default status register value.
        register_a!(adc1, 0x33, P, [0xa9, 0x22, 0x69, 0x11]);
        // This add doesn't do anything, but the N flag is set since the
        // most significant bit is 1.
        register_a!(adc2, 0xff, P | N, [0xa9, 0xff, 0x69, 0x00]);
        // Here we overflow the u8: the result is 0x00 with the carry only
        // in the status register.
        register_a!(adc3, 0x00, P | C | Z, [0xa9, 0xff, 0x69, 0x01]);
        register_a!(adc4, 0x01, P | C, [0xa9, 0xff, 0x69, 0x02]);
        // sec first, so the result is 0x01 + 0x11 + 0x22.
        register_a!(adc_carry, 0x34, P, [0x38, 0xa9, 0x11, 0x69, 0x22]);
    }

    mod adc_overflow_carry {
        // These are the adc cases from:
        // http://www.6502.org/tutorials/vflag.html
        use super::*;
        // 1 + 1 = 2, returns C = 0, V = 0
        register_a!(test_1_1, 0x02, P, [0x18, 0xa9, 0x01, 0x69, 0x01]);
        // 1 + -1 = 0, returns C = 1, V = 0
        register_a!(test_1_neg1, 0x00, P | C | Z, [0x18, 0xa9, 0x01, 0x69, 0xff]);
        // 127 + 1 = 128, returns C = 0, V = 1
        register_a!(test_127_1, 0x80, P | V | N, [0x18, 0xa9, 0x7f, 0x69, 0x01]);
        // -128 + -1 = -129, returns C = 1, V = 1
        register_a!(test_neg128_neg1, 0x7f, P | C | V, [0x18, 0xa9, 0x80, 0x69, 0xff]);
        // 63 + 64 + 1 = 128, returns V = 1. Note: SEC, not CLC.
        register_a!(test_carry_in, 0x80, P | V | N, [0x38, 0xa9, 0x3f, 0x69, 0x40]);
    }

    mod sbc_basics {
        use super::*;
        register_a!(sbc1, 0x22, P | C, [0x38, 0xa9, 0x33, 0xe9, 0x11]);
        register_a!(sbc2, 0x00, P | Z | C, [0x38, 0xa9, 0x33, 0xe9, 0x33]);
        register_a!(sbc3, negative(1), P | N, [0x38, 0xa9, 0x33, 0xe9, 0x34]);
    }

    mod sbc_overflow_carry {
        // The sbc cases from http://www.6502.org/tutorials/vflag.html
        use super::*;
        // 0 - 1 = -1, returns V = 0
        register_a!(test_0_minus_1, 0xff, P | N, [0x38, 0xa9, 0x00, 0xe9, 0x01]);
        // -128 - 1 = -129, returns V = 1
        register_a!(
            test_neg128_minus_1,
            0x7f,
            P | C | V,
            [0x38, 0xa9, 0x80, 0xe9, 0x01]
        );
        // 127 - -1 = 128, returns V = 1
        register_a!(
            test_127_minus_neg1,
            0x80,
            P | V | N,
            [0x38, 0xa9, 0x7f, 0xe9, 0xff]
        );
        // -64 - 64 - 1 = -129, returns V = 1. Note: CLC, not SEC.
        register_a!(test_clc, 0x7f, P | C | V, [0x18, 0xa9, 0xc0, 0xe9, 0x40]);
    }

    register_a!(test_lda, 0x22, P, [0xa9, 0x22]);
    register_x!(test_ldx, 0x22, P, [0xa2, 0x22]);
    register_y!(test_ldy, 0x22, P, [0xa0, 0x22]);
    // The undocumented immediate NOP consumes its operand and nothing else.
    register_a!(test_nop, 0x00, P, [0x80, 0x22]);

    mod compare {
        use super::*;
        status!(cmp_less_operand, P | C, [0xa9, 0x40, 0xc9, 0x30]);
        status!(cmp_equal, P | C | Z, [0xa9, 0x40, 0xc9, 0x40]);
        status!(cmp_greater_operand, P | N, [0xa9, 0x40, 0xc9, 0x50]);
        status!(cpx_equal, P | C | Z, [0xa2, 0x40, 0xe0, 0x40]);
        status!(cpy_equal, P | C | Z, [0xa0, 0x40, 0xc0, 0x40]);
    }
}

mod decimal_mode {
    use super::*;

    // 0x25 + 0x48 = 0x73 in BCD, no carry out.
    register_a!(bcd_add, 0x73, P | D, [0xf8, 0xa9, 0x25, 0x69, 0x48]);
    // 0x99 + 0x01 wraps to 0x00 with a decimal carry.
    register_a!(
        bcd_add_wraps,
        0x00,
        P | D | C | Z,
        [0xf8, 0x18, 0xa9, 0x99, 0x69, 0x01]
    );
    // 0x50 - 0x25 = 0x25, carry (no borrow) out.
    register_a!(
        bcd_sub,
        0x25,
        P | D | C,
        [0xf8, 0x38, 0xa9, 0x50, 0xe9, 0x25]
    );
    // 0x00 - 0x01 borrows all the way down to 0x99.
    register_a!(
        bcd_sub_borrows,
        0x99,
        P | D | N,
        [0xf8, 0x38, 0xa9, 0x00, 0xe9, 0x01]
    );

    fn to_bcd(value: u8) -> u8 {
        ((value / 10) << 4) | (value % 10)
    }

    /// Adding any pair of valid BCD bytes with any carry yields a valid
    /// BCD byte and a correct decimal carry.
    #[test]
    fn bcd_add_is_exhaustively_correct() {
        for a in 0..100u8 {
            for m in 0..100u8 {
                for carry in 0..2u8 {
                    let carry_op = if carry == 1 { 0x38 } else { 0x18 };
                    let program = [0xf8, carry_op, 0xa9, to_bcd(a), 0x69, to_bcd(m)];
                    let (cpu, _) =
                        run_variant(Variant::Nmos6502Undocumented, &program, 4);
                    let sum = a as u16 + m as u16 + carry as u16;
                    assert_eq!(cpu.a, to_bcd((sum % 100) as u8), "{} + {} + {}", a, m, carry);
                    assert_eq!(
                        cpu.is_status_flag_set(StatusFlag::Carry),
                        sum > 99,
                        "{} + {} + {}",
                        a,
                        m,
                        carry
                    );
                }
            }
        }
    }

    #[test]
    fn bcd_subtract_is_exhaustively_correct() {
        for a in 0..100u8 {
            for m in 0..100u8 {
                for carry in 0..2u8 {
                    let carry_op = if carry == 1 { 0x38 } else { 0x18 };
                    let program = [0xf8, carry_op, 0xa9, to_bcd(a), 0xe9, to_bcd(m)];
                    let (cpu, _) =
                        run_variant(Variant::Nmos6502Undocumented, &program, 4);
                    let difference = a as i16 - m as i16 - (1 - carry) as i16;
                    let no_borrow = difference >= 0;
                    let wrapped = difference.rem_euclid(100) as u8;
                    assert_eq!(cpu.a, to_bcd(wrapped), "{} - {} - {}", a, m, 1 - carry);
                    assert_eq!(
                        cpu.is_status_flag_set(StatusFlag::Carry),
                        no_borrow,
                        "{} - {} - {}",
                        a,
                        m,
                        1 - carry
                    );
                }
            }
        }
    }

    /// The CMOS parts pay one extra cycle for a decimal-mode ADC and
    /// report flags from the decimal result.
    #[test]
    fn cmos_decimal_costs_an_extra_cycle() {
        let program = [0xf8, 0xa9, 0x25, 0x69, 0x48];
        let (_, nmos_cycles) = run_variant(Variant::Nmos6502, &program, 3);
        assert_eq!(nmos_cycles, 6);
        let (cpu, cmos_cycles) = run_variant(Variant::Wdc65C02, &program, 3);
        assert_eq!(cmos_cycles, 7);
        assert_eq!(cpu.a, 0x73);
    }

    #[test]
    fn cmos_decimal_zero_flag_reflects_the_decimal_result() {
        let program = [0xf8, 0x18, 0xa9, 0x99, 0x69, 0x01];
        let (cpu, _) = run_variant(Variant::Wdc65C02, &program, 4);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
        assert!(!cpu.is_status_flag_set(StatusFlag::Negative));
    }
}

mod shifts {
    use super::*;

    register_a!(asl_accumulator, 0b0010_1000, P | C, [0xa9, 0b1001_0100, 0x0a]);
    register_a!(lsr_accumulator, 0b0100_1010, P, [0xa9, 0b1001_0100, 0x4a]);
    // Rotates pull the old carry in on the far side.
    register_a!(rol_with_carry, 0b0010_1001, P | C, [0x38, 0xa9, 0b1001_0100, 0x2a]);
    register_a!(ror_with_carry, 0b1100_1010, P | N, [0x38, 0xa9, 0b1001_0100, 0x6a]);

    #[test]
    fn asl_reads_and_writes_memory() {
        let cpu = run_program(&[
            0xa9, 0x81, // lda #$81
            0x85, 0x10, // sta $10
            0x06, 0x10, // asl $10
        ]);
        assert_eq!(cpu.peek_u8(0x10), 0x02);
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }

    /// asl then lsr restores the byte when bit 7 started clear.
    #[test]
    fn asl_then_lsr_round_trips() {
        let cpu = run_program(&[0xa9, 0x35, 0x0a, 0x4a]);
        assert_eq!(cpu.a, 0x35);
    }
}

mod moves_and_stores {
    use super::*;

    register_x!(inx_wraps, 0x01, P, [0xa2, 0xff, 0xe8, 0xe8]);
    register_y!(dey_wraps, 0xff, P | N, [0xa0, 0x00, 0x88]);
    register_x!(tax_moves_a, 0x42, P, [0xa9, 0x42, 0xaa]);
    register_a!(tya_moves_y, 0x42, P, [0xa0, 0x42, 0x98]);
    register_x!(tsx_reads_stack_pointer, 0xfd, P | N, [0xba]);

    #[test]
    fn sta_writes_memory() {
        let cpu = run_program(&[0xa9, 0x33, 0x8d, 0x34, 0x12]);
        assert_eq!(cpu.peek_u8(0x1234), 0x33);
    }

    #[test]
    fn txs_sets_no_flags() {
        // Transferring 0x00 into S would set Z if TXS touched flags.
        let cpu = run_program(&[0xa2, 0x00, 0x9a]);
        assert_eq!(cpu.s, 0x00);
        assert_eq!(cpu.p, P | Z);
    }

    #[test]
    fn zero_page_indexing_wraps_in_the_zero_page() {
        let cpu = run_program(&[
            0xa9, 0x77, // lda #$77
            0x85, 0x20, // sta $20
            0xa2, 0x60, // ldx #$60
            0xb5, 0xc0, // lda $c0,x  ; 0xc0 + 0x60 wraps to 0x20
        ]);
        assert_eq!(cpu.a, 0x77);
    }

    #[test]
    fn indirect_y_pointer_wraps_within_the_zero_page() {
        let cpu = run_program(&[
            0xa9, 0xab, // lda #$ab
            0x8d, 0x34, 0x12, // sta $1234
            0xa9, 0x34, // lda #$34
            0x85, 0xff, // sta $ff   ; pointer low byte at $ff
            0xa9, 0x12, // lda #$12
            0x85, 0x00, // sta $00   ; pointer high byte wraps to $00
            0xa0, 0x00, // ldy #$00
            0xb1, 0xff, // lda ($ff),y
        ]);
        assert_eq!(cpu.a, 0xab);
    }
}

mod stack {
    use super::*;

    #[test]
    fn push_then_pull_is_identity_for_a() {
        let cpu = run_program(&[0xa9, 0x42, 0x48, 0xa9, 0x00, 0x68]);
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.s, 0xfd);
    }

    #[test]
    fn status_round_trips_modulo_the_b_convention() {
        // sec, php, clc, plp: the carry comes back, the B image does not.
        let cpu = run_program(&[0x38, 0x08, 0x18, 0x28]);
        assert_eq!(cpu.p, (P | C) & !B);
    }

    #[test]
    fn php_pushes_b_and_unused_set() {
        let cpu = run_program(&[0x08]);
        assert_eq!(cpu.peek_u8(0x01fd), P | B | U);
    }

    #[test]
    fn stack_pointer_wraps_around_the_stack_page() {
        // With S at 0x00, a push stores to 0x0100 and S wraps to 0xFF.
        let cpu = run_program(&[0xa2, 0x00, 0x9a, 0xa9, 0x7e, 0x48]);
        assert_eq!(cpu.peek_u8(0x0100), 0x7e);
        assert_eq!(cpu.s, 0xff);
    }

    #[test]
    fn jsr_rts_round_trip() {
        // 0x8000: jsr $8004 / 0x8003: nop / 0x8004: rts
        let program = [0x20, 0x04, 0x80, 0xea, 0x60];
        let (cpu, cycles) = run_variant(Variant::Nmos6502, &program, 2);
        // The pushed return address is the last byte of the JSR operand.
        assert_eq!(cpu.peek_u8(0x01fd), 0x80);
        assert_eq!(cpu.peek_u8(0x01fc), 0x02);
        assert_eq!(cpu.pc, 0x8003);
        assert_eq!(cpu.s, 0xfd);
        assert_eq!(cycles, 12);
    }
}

mod branches {
    use super::*;

    #[test]
    fn not_taken_costs_nothing_extra() {
        // lda #$01 clears Z, so beq falls through.
        let (cpu, cycles) = run_variant(Variant::Nmos6502, &[0xa9, 0x01, 0xf0, 0x02], 2);
        assert_eq!(cpu.pc, 0x8004);
        assert_eq!(cycles, 2 + 2);
    }

    #[test]
    fn taken_within_a_page_costs_one_extra() {
        let (cpu, cycles) = run_variant(Variant::Nmos6502, &[0xa9, 0x01, 0xd0, 0x02], 2);
        assert_eq!(cpu.pc, 0x8006);
        assert_eq!(cycles, 2 + 3);
    }

    #[test]
    fn taken_across_a_page_costs_two_extra() {
        // bne -6 from 0x8004 lands at 0x7ffe, crossing into page 0x7f.
        let (cpu, cycles) = run_variant(Variant::Nmos6502, &[0xa9, 0x01, 0xd0, 0xfa], 2);
        assert_eq!(cpu.pc, 0x7ffe);
        assert_eq!(cycles, 2 + 4);
    }

    #[test]
    fn bra_always_branches() {
        let (cpu, cycles) = run_variant(Variant::Wdc65C02, &[0x80, 0x02], 1);
        assert_eq!(cpu.pc, 0x8004);
        assert_eq!(cycles, 3);
    }
}

mod page_cross_penalties {
    use super::*;

    #[test]
    fn absolute_x_read_pays_on_crossing() {
        let (_, cycles) = run_variant(Variant::Nmos6502, &[0xa2, 0x01, 0xbd, 0x00, 0x12], 2);
        assert_eq!(cycles, 2 + 4);
        let (_, cycles) = run_variant(Variant::Nmos6502, &[0xa2, 0xff, 0xbd, 0x01, 0x12], 2);
        assert_eq!(cycles, 2 + 5);
    }

    #[test]
    fn absolute_x_write_never_pays() {
        let (_, cycles) = run_variant(Variant::Nmos6502, &[0xa2, 0xff, 0x9d, 0x01, 0x12], 2);
        assert_eq!(cycles, 2 + 5);
    }

    #[test]
    fn absolute_x_rmw_never_pays() {
        let (_, cycles) = run_variant(Variant::Nmos6502, &[0xa2, 0xff, 0xfe, 0x01, 0x12], 2);
        assert_eq!(cycles, 2 + 7);
    }

    #[test]
    fn indirect_y_read_pays_on_crossing() {
        let program = [
            0xa9, 0x01, // lda #$01
            0x85, 0x10, // sta $10
            0xa9, 0x12, // lda #$12
            0x85, 0x11, // sta $11  ; pointer $10 -> $1201
            0xa0, 0xff, // ldy #$ff
            0xb1, 0x10, // lda ($10),y ; $1201 + $ff crosses into $1300
        ];
        let (_, cycles) = run_variant(Variant::Nmos6502, &program, 6);
        assert_eq!(cycles, 2 + 3 + 2 + 3 + 2 + 6);
    }
}

mod jmp_indirect {
    use super::*;

    fn jmp_indirect_cpu(variant: Variant) -> Cpu {
        let mut ram = Ram::with_program(0x8000, &[0x6c, 0xff, 0x30]);
        ram.load(0x30ff, &[0x00]);
        ram.load(0x3000, &[0x40]); // the page-wrapped high byte
        ram.load(0x3100, &[0x50]); // the correct high byte
        Cpu::new(variant, Box::new(ram))
    }

    #[test]
    fn nmos_wraps_the_high_byte_within_the_page() {
        let mut cpu = jmp_indirect_cpu(Variant::Nmos6502);
        let (_, cycles) = cpu.run_instructions(1);
        assert_eq!(cpu.pc, 0x4000);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn cmos_reads_across_the_page_and_pays_a_cycle() {
        let mut cpu = jmp_indirect_cpu(Variant::Cmos65C02);
        let (_, cycles) = cpu.run_instructions(1);
        assert_eq!(cpu.pc, 0x5000);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn absolute_indexed_indirect_jmp() {
        let mut ram = Ram::with_program(0x8000, &[0xa2, 0x04, 0x7c, 0x00, 0x90]);
        ram.load(0x9004, &[0x00, 0xa0]);
        let mut cpu = Cpu::new(Variant::Cmos65C02, Box::new(ram));
        let (_, cycles) = cpu.run_instructions(2);
        assert_eq!(cpu.pc, 0xa000);
        assert_eq!(cycles, 2 + 6);
    }
}

mod interrupts {
    use super::*;

    /// NOP sleds at the program counter and both interrupt handlers.
    fn interrupt_cpu(variant: Variant) -> Cpu {
        let mut ram = Ram::with_program(0x8000, &[0xea; 16]);
        ram.load(0xfffa, &[0x00, 0xa0]); // nmi -> 0xa000
        ram.load(0xfffe, &[0x00, 0x90]); // irq/brk -> 0x9000
        ram.load(0xa000, &[0xea; 4]);
        ram.load(0x9000, &[0xea; 4]);
        ram.load(0x4000, &[0xea; 4]);
        Cpu::new(variant, Box::new(ram))
    }

    #[test]
    fn reset_loads_the_vector_and_masks_irq() {
        let cpu = cpu_with_program(Variant::Nmos6502, &[]);
        assert_eq!(cpu.pc, 0x8000);
        assert_eq!(cpu.s, 0xfd);
        assert_eq!(cpu.p, P);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
    }

    #[test]
    fn irq_entry_pushes_state_and_vectors() {
        let mut cpu = interrupt_cpu(Variant::Nmos6502);
        cpu.p &= !I;
        cpu.pc = 0x4000;
        cpu.s = 0xff;
        cpu.irq = PinState::Asserted;
        let (executed, cycles) = cpu.run_instructions(1);
        // The entry costs 7 cycles, then the handler's first nop runs.
        assert_eq!(executed, 1);
        assert_eq!(cycles, 7 + 2);
        assert_eq!(cpu.pc, 0x9001);
        assert_eq!(cpu.s, 0xfc);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        // Pushed PC, then the status image with B clear and U set.
        assert_eq!(cpu.peek_u8(0x01ff), 0x40);
        assert_eq!(cpu.peek_u8(0x01fe), 0x00);
        assert_eq!(cpu.peek_u8(0x01fd), (P & !I & !B) | U);
    }

    #[test]
    fn irq_is_masked_by_the_i_flag() {
        let mut cpu = interrupt_cpu(Variant::Nmos6502);
        cpu.irq = PinState::Asserted;
        cpu.run_instructions(2);
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cpu.s, 0xfd);
    }

    #[test]
    fn nmi_wins_over_irq_and_is_edge_triggered() {
        let mut cpu = interrupt_cpu(Variant::Nmos6502);
        cpu.p &= !I;
        cpu.irq = PinState::Asserted;
        cpu.nmi = PinState::Asserted;
        cpu.run_instructions(1);
        assert_eq!(cpu.pc, 0xa001, "the NMI handler ran first");
        // Entry set I, so the still-asserted IRQ stays masked, and the
        // still-asserted NMI has already been serviced.
        let s_after_entry = cpu.s;
        cpu.run_instructions(2);
        assert_eq!(cpu.s, s_after_entry);
    }

    #[test]
    fn nmi_rearms_when_the_line_is_released() {
        let mut cpu = interrupt_cpu(Variant::Nmos6502);
        cpu.nmi = PinState::Asserted;
        cpu.run_instructions(1);
        assert_eq!(cpu.s, 0xfd - 3);
        // Holding the line low does not re-trigger.
        cpu.run_instructions(2);
        assert_eq!(cpu.s, 0xfd - 3);
        // Release and re-assert: one more service.
        cpu.nmi = PinState::Cleared;
        cpu.run_instructions(1);
        cpu.nmi = PinState::Asserted;
        cpu.run_instructions(1);
        assert_eq!(cpu.s, 0xfd - 6);
    }

    #[test]
    fn brk_pushes_the_signature_byte_address() {
        let mut ram = Ram::with_program(0x8000, &[0x00, 0xff]);
        ram.load(0xfffe, &[0x00, 0x90]);
        ram.load(0x9000, &[0xea; 2]);
        let mut cpu = Cpu::new(Variant::Nmos6502, Box::new(ram));
        let (_, cycles) = cpu.run_instructions(1);
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc, 0x9000);
        // BRK is a 2-byte instruction: the pushed return address skips the
        // signature byte.
        assert_eq!(cpu.peek_u8(0x01fd), 0x80);
        assert_eq!(cpu.peek_u8(0x01fc), 0x02);
        // Software pushes carry B set.
        assert_ne!(cpu.peek_u8(0x01fb) & B, 0);
    }

    #[test]
    fn brk_rti_round_trip() {
        let mut ram = Ram::with_program(
            0x8000,
            &[0x00, 0xff, 0xa9, 0x77], // brk, signature, lda #$77
        );
        ram.load(0xfffe, &[0x00, 0x90]);
        ram.load(0x9000, &[0x40]); // rti
        let mut cpu = Cpu::new(Variant::Nmos6502, Box::new(ram));
        let (_, cycles) = cpu.run_instructions(3);
        assert_eq!(cpu.a, 0x77);
        assert_eq!(cpu.pc, 0x8004);
        assert_eq!(cpu.s, 0xfd);
        assert_eq!(cycles, 7 + 6 + 2);
    }

    #[test]
    fn brk_clears_decimal_only_on_cmos() {
        let mut ram = Ram::with_program(0x8000, &[0xf8, 0x00, 0xff]);
        ram.load(0xfffe, &[0x00, 0x90]);
        ram.load(0x9000, &[0xea; 2]);
        let mut cpu = Cpu::new(Variant::Nmos6502, Box::new(ram));
        cpu.run_instructions(2);
        assert!(cpu.is_status_flag_set(StatusFlag::Decimal));

        let mut ram = Ram::with_program(0x8000, &[0xf8, 0x00, 0xff]);
        ram.load(0xfffe, &[0x00, 0x90]);
        ram.load(0x9000, &[0xea; 2]);
        let mut cpu = Cpu::new(Variant::Wdc65C02, Box::new(ram));
        cpu.run_instructions(2);
        assert!(!cpu.is_status_flag_set(StatusFlag::Decimal));
    }
}

mod halt_states {
    use super::*;

    #[test]
    fn kil_jams_until_unjammed() {
        let mut cpu = cpu_with_program(Variant::Nmos6502, &[0x02, 0xa9, 0x42]);
        let (executed, _) = cpu.run_instructions(5);
        assert_eq!(executed, 1);
        assert!(cpu.is_jammed());
        // Jammed runs return immediately with a single idle cycle.
        assert_eq!(cpu.run_instructions(5), (0, 1));
        assert_eq!(cpu.run_cycles(100), (0, 1));
        cpu.unjam();
        let (executed, _) = cpu.run_instructions(1);
        assert_eq!(executed, 1);
        assert_eq!(cpu.a, 0x42);
    }

    #[test]
    fn reset_clears_the_jam() {
        let mut cpu = cpu_with_program(Variant::Nmos6502, &[0x02]);
        cpu.run_instructions(1);
        assert!(cpu.is_jammed());
        cpu.reset();
        assert!(!cpu.is_jammed());
        assert_eq!(cpu.pc, ORIGIN);
    }

    #[test]
    fn cmos_has_no_jam_cells() {
        // 0x02 is a one-cycle NOP on the 65C02.
        let (cpu, cycles) = run_variant(Variant::Cmos65C02, &[0x02, 0xa9, 0x42], 2);
        assert!(!cpu.is_jammed());
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cycles, 1 + 2);
    }

    #[test]
    fn wai_burns_cycles_until_an_interrupt() {
        let mut ram = Ram::with_program(0x8000, &[0xcb, 0xea]);
        ram.load(0xfffe, &[0x00, 0x90]);
        ram.load(0x9000, &[0xea; 2]);
        let mut cpu = Cpu::new(Variant::Wdc65C02, Box::new(ram));
        let (executed, cycles) = cpu.run_instructions(2);
        // Only the WAI itself executed; the second slot burned one idle
        // cycle in the wait state.
        assert_eq!(executed, 1);
        assert_eq!(cycles, 3 + 1);
        assert!(cpu.is_waiting());

        // IRQ wakes the CPU even with I set, per WDC.
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        cpu.irq = PinState::Asserted;
        let (executed, cycles) = cpu.run_instructions(1);
        assert_eq!(executed, 1);
        assert_eq!(cycles, 7 + 2);
        assert!(!cpu.is_waiting());
        assert_eq!(cpu.pc, 0x9001);
    }

    #[test]
    fn stp_jams_permanently() {
        let mut cpu = cpu_with_program(Variant::Wdc65C02, &[0xdb, 0xea]);
        cpu.run_instructions(3);
        assert!(cpu.is_jammed());
        cpu.irq = PinState::Asserted;
        assert_eq!(cpu.run_instructions(1), (0, 1));
    }
}

mod run_loops {
    use super::*;

    #[test]
    fn run_cycles_finishes_whole_instructions() {
        let mut cpu = cpu_with_program(Variant::Nmos6502, &[0xea, 0xea, 0xea, 0xea]);
        // Three 2-cycle nops: the loop only stops once the budget is met,
        // and never mid-instruction.
        let (executed, cycles) = cpu.run_cycles(5);
        assert_eq!(executed, 3);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn run_instructions_reports_the_exact_count() {
        let mut cpu = cpu_with_program(Variant::Nmos6502, &[0xea; 8]);
        let (executed, cycles) = cpu.run_instructions(4);
        assert_eq!(executed, 4);
        assert_eq!(cycles, 8);
        assert_eq!(cpu.pc, ORIGIN + 4);
    }

    #[test]
    fn current_opcode_tracks_the_last_fetch() {
        let mut cpu = cpu_with_program(Variant::Nmos6502, &[0xa9, 0x42, 0xea]);
        cpu.run_instructions(1);
        assert_eq!(cpu.current_opcode, 0xa9);
        assert_eq!(cpu.current_opcode_addr, ORIGIN);
        assert_eq!(cpu.next_opcode(), 0xea);
        assert_eq!(cpu.cycles, 2);
    }
}

mod bit_test {
    use super::*;

    status!(
        bit_copies_high_bits,
        P | N | V | Z,
        [0xa9, 0xc0, 0x85, 0x10, 0xa9, 0x0f, 0x24, 0x10]
    );

    #[test]
    fn bit_immediate_only_touches_z() {
        // 0x0f & 0xf0 == 0 sets Z; N and V stay untouched.
        let cpu = run_wdc_program(&[0xa9, 0x0f, 0x89, 0xf0]);
        assert_eq!(cpu.p, P | Z);
    }
}

mod cmos_ops {
    use super::*;

    #[test]
    fn stz_stores_zero() {
        let cpu = run_wdc_program(&[0xa9, 0xff, 0x85, 0x10, 0x64, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x00);
    }

    #[test]
    fn trb_clears_and_tests() {
        let cpu = run_wdc_program(&[0xa9, 0xff, 0x85, 0x10, 0xa9, 0x0f, 0x14, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0xf0);
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn tsb_sets_and_tests() {
        let cpu = run_wdc_program(&[0xa9, 0x0f, 0x85, 0x10, 0xa9, 0xf0, 0x04, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0xff);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn inc_and_dec_accumulator() {
        let cpu = run_wdc_program(&[0xa9, 0x41, 0x1a]);
        assert_eq!(cpu.a, 0x42);
        let cpu = run_wdc_program(&[0xa9, 0x41, 0x3a]);
        assert_eq!(cpu.a, 0x40);
    }

    #[test]
    fn nmos_treats_inc_a_as_a_nop() {
        let (cpu, _) = run_variant(Variant::Nmos6502, &[0xa9, 0x41, 0x1a], 2);
        assert_eq!(cpu.a, 0x41);
    }

    #[test]
    fn phx_ply_cross_transfer() {
        let cpu = run_wdc_program(&[0xa2, 0x42, 0xda, 0x7a]);
        assert_eq!(cpu.y, 0x42);
        assert_eq!(cpu.s, 0xfd);
    }

    #[test]
    fn zero_page_indirect_store_and_load() {
        let cpu = run_wdc_program(&[
            0xa9, 0x34, // lda #$34
            0x85, 0x40, // sta $40
            0xa9, 0x12, // lda #$12
            0x85, 0x41, // sta $41  ; pointer $40 -> $1234
            0xa9, 0x77, // lda #$77
            0x92, 0x40, // sta ($40)
            0xa9, 0x00, // lda #$00
            0xb2, 0x40, // lda ($40)
        ]);
        assert_eq!(cpu.peek_u8(0x1234), 0x77);
        assert_eq!(cpu.a, 0x77);
    }
}

mod rockwell_bit_ops {
    use super::*;

    #[test]
    fn rmb_clears_one_bit() {
        let program = [0xa9, 0xff, 0x85, 0x12, 0x57, 0x12]; // rmb5 $12
        let (cpu, cycles) = run_variant(Variant::Rockwell65C02, &program, 3);
        assert_eq!(cpu.peek_u8(0x12), 0xdf);
        assert_eq!(cycles, 2 + 3 + 5);
    }

    #[test]
    fn smb_sets_one_bit() {
        let program = [0x87, 0x12]; // smb0 $12
        let (cpu, _) = run_variant(Variant::Rockwell65C02, &program, 1);
        assert_eq!(cpu.peek_u8(0x12), 0x01);
    }

    #[test]
    fn bbs_branches_when_the_bit_is_set() {
        let program = [
            0xa9, 0x02, // lda #$02
            0x85, 0x12, // sta $12
            0x9f, 0x12, 0x02, // bbs1 $12,+2
            0xa9, 0xff, // skipped
            0xa9, 0x01, // lda #$01
        ];
        let (cpu, _) = run_variant(Variant::Rockwell65C02, &program, 4);
        assert_eq!(cpu.a, 0x01);
    }

    #[test]
    fn bbr_falls_through_when_the_bit_is_set() {
        let program = [
            0xa9, 0x02, // lda #$02
            0x85, 0x12, // sta $12
            0x1f, 0x12, 0x02, // bbr1 $12,+2
            0xa9, 0xff, // not skipped
        ];
        let (cpu, _) = run_variant(Variant::Rockwell65C02, &program, 4);
        assert_eq!(cpu.a, 0xff);
    }

    #[test]
    fn bit_branch_pays_the_branch_penalty() {
        let program = [
            0x87, 0x12, // smb0 $12
            0x8f, 0x12, 0x02, // bbs0 $12,+2 (taken, same page)
        ];
        let (_, cycles) = run_variant(Variant::Rockwell65C02, &program, 2);
        assert_eq!(cycles, 5 + 6);
    }

    #[test]
    fn plain_cmos_has_no_bit_ops() {
        // 0x87 is a one-byte NOP on the generic 65C02.
        let (cpu, _) = run_variant(Variant::Cmos65C02, &[0x87, 0x03], 2);
        assert_eq!(cpu.peek_u8(0x12), 0x00);
        assert_eq!(cpu.pc, ORIGIN + 2);
    }
}

mod undocumented_ops {
    use super::*;

    #[test]
    fn lax_loads_a_and_x() {
        let cpu = run_program(&[0xa9, 0x55, 0x85, 0x10, 0xa9, 0x00, 0xa7, 0x10]);
        assert_eq!(cpu.a, 0x55);
        assert_eq!(cpu.x, 0x55);
    }

    #[test]
    fn sax_stores_a_and_x() {
        let cpu = run_program(&[0xa9, 0xf0, 0xa2, 0x3c, 0x87, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x30);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        let cpu = run_program(&[0xa9, 0x02, 0x85, 0x10, 0xa9, 0x01, 0xc7, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x01);
        assert_eq!(cpu.p, P | Z | C);
    }

    #[test]
    fn isc_increments_then_subtracts() {
        let cpu = run_program(&[0xa9, 0x01, 0x85, 0x10, 0x38, 0xa9, 0x05, 0xe7, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x02);
        assert_eq!(cpu.a, 0x03);
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn slo_shifts_then_ors() {
        let cpu = run_program(&[0xa9, 0x40, 0x85, 0x10, 0xa9, 0x01, 0x07, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x80);
        assert_eq!(cpu.a, 0x81);
        assert_eq!(cpu.p, P | N);
    }

    #[test]
    fn rla_rotates_then_ands() {
        let cpu = run_program(&[0xa9, 0x80, 0x85, 0x10, 0x38, 0xa9, 0x03, 0x27, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x01);
        assert_eq!(cpu.a, 0x01);
        assert_eq!(cpu.p, P | C);
    }

    #[test]
    fn sre_shifts_then_eors() {
        let cpu = run_program(&[0xa9, 0x03, 0x85, 0x10, 0xa9, 0x01, 0x47, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x01);
        assert_eq!(cpu.a, 0x00);
        assert_eq!(cpu.p, P | C | Z);
    }

    #[test]
    fn rra_rotates_then_adds() {
        let cpu = run_program(&[0xa9, 0x03, 0x85, 0x10, 0x18, 0xa9, 0x10, 0x67, 0x10]);
        assert_eq!(cpu.peek_u8(0x10), 0x01);
        assert_eq!(cpu.a, 0x12);
        assert_eq!(cpu.p, P);
    }

    register_a!(anc_copies_n_to_c, 0x80, P | N | C, [0xa9, 0xff, 0x0b, 0x80]);
    register_a!(alr_masks_then_shifts, 0x00, P | C | Z, [0xa9, 0x03, 0x4b, 0x01]);
    register_x!(axs_masks_then_subtracts, 0x24, P | C, [0xa9, 0xf0, 0xa2, 0x3c, 0xcb, 0x0c]);

    #[test]
    fn documented_table_turns_lax_into_a_nop() {
        let program = [0xa9, 0x55, 0x85, 0x10, 0xa7, 0x10];
        let (cpu, _) = run_variant(Variant::Nmos6502, &program, 3);
        assert_eq!(cpu.x, 0x00);
        let (cpu, _) = run_variant(Variant::Nmos6502Undocumented, &program, 3);
        assert_eq!(cpu.x, 0x55);
    }
}

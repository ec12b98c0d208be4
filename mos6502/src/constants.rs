pub enum InterruptVectors {
    // The Non-Maskable Interrupt or NMI ($FFFA)
    NonMaskableInterrupt = 0xFFFA,
    ResetVector = 0xFFFC,
    IrqBrkVector = 0xFFFE,
}

/// The stack is hardcoded to page 1, addresses 0x0100-0x01FF.
pub const STACK_PAGE: u8 = 0x01;

/// Status register image after reset: interrupt disable set, plus the B and
/// unused bits that read back as 1.
pub const RESET_STATUS_FLAG: u8 = 0b0011_0100;

/// The stack pointer lands here after the power-on/reset sequence.
pub const RESET_STACK_POINTER: u8 = 0xFD;

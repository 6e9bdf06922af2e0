// Opcode decode table
//
// All 256 opcodes decode through one static table to an
// (operation, addressing mode) pair plus base cycle cost. Page-cross and
// branch penalties are added at execution time. Opcodes with no assigned
// entry decode to `Operation::Fault`, which latches the CPU fault flag.
//
// Undocumented opcodes carry a `*` prefix on their mnemonic. The
// read-NOP family ($04/$0C/$14/$1A/$1C/$44/$54/$64/$74/$80/$D4/$DC/...)
// is encoded with ordinary addressing modes so operand bytes and cycle
// costs come out right; the operation itself does nothing.

use super::addressing::AddressingMode;

/// Operations the decode table can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Loads and stores
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Transfers
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Shifts and rotates
    Asl,
    Lsr,
    Rol,
    Ror,
    // Logic
    And,
    Eor,
    Ora,
    Bit,
    // Arithmetic
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Inc,
    Inx,
    Iny,
    // Control flow
    Brk,
    Jmp,
    Jsr,
    Rts,
    Rti,
    Bcc,
    Bcs,
    Beq,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    // Flags
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    Nop,
    // Undocumented
    Lax,
    Sax,
    Dcp,
    Isb,
    Slo,
    Rla,
    Sre,
    Rra,
    /// Unassigned opcode: latches the CPU fault flag
    Fault,
}

/// One decoded opcode.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub op: Operation,
    pub mode: AddressingMode,
    /// Instruction length in bytes (opcode + operand)
    pub bytes: u8,
    /// Base cycle cost, before page-cross and branch penalties
    pub cycles: u8,
    /// Whether a page cross during addressing adds one cycle
    pub page_cycle: bool,
}

const fn operand_bytes(mode: AddressingMode) -> u8 {
    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => 1,
        AddressingMode::Immediate
        | AddressingMode::ZeroPage
        | AddressingMode::ZeroPageX
        | AddressingMode::ZeroPageY
        | AddressingMode::Relative
        | AddressingMode::IndirectX
        | AddressingMode::IndirectY
        | AddressingMode::IndirectYStore => 2,
        AddressingMode::Absolute
        | AddressingMode::AbsoluteX
        | AddressingMode::AbsoluteXStore
        | AddressingMode::AbsoluteY
        | AddressingMode::AbsoluteYStore
        | AddressingMode::Indirect => 3,
    }
}

const fn entry(
    mnemonic: &'static str,
    op: Operation,
    mode: AddressingMode,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        op,
        mode,
        bytes: operand_bytes(mode),
        cycles,
        page_cycle,
    }
}

const UNASSIGNED: OpcodeInfo = entry("???", Operation::Fault, AddressingMode::Implied, 2, false);

/// The 256-entry decode table.
pub static OPCODE_TABLE: [OpcodeInfo; 256] = build_table();

#[allow(clippy::too_many_lines)]
const fn build_table() -> [OpcodeInfo; 256] {
    use AddressingMode::*;
    use Operation::*;

    let mut t = [UNASSIGNED; 256];

    // Loads
    t[0xA9] = entry("LDA", Lda, Immediate, 2, false);
    t[0xA5] = entry("LDA", Lda, ZeroPage, 3, false);
    t[0xB5] = entry("LDA", Lda, ZeroPageX, 4, false);
    t[0xAD] = entry("LDA", Lda, Absolute, 4, false);
    t[0xBD] = entry("LDA", Lda, AbsoluteX, 4, true);
    t[0xB9] = entry("LDA", Lda, AbsoluteY, 4, true);
    t[0xA1] = entry("LDA", Lda, IndirectX, 6, false);
    t[0xB1] = entry("LDA", Lda, IndirectY, 5, true);
    t[0xA2] = entry("LDX", Ldx, Immediate, 2, false);
    t[0xA6] = entry("LDX", Ldx, ZeroPage, 3, false);
    t[0xB6] = entry("LDX", Ldx, ZeroPageY, 4, false);
    t[0xAE] = entry("LDX", Ldx, Absolute, 4, false);
    t[0xBE] = entry("LDX", Ldx, AbsoluteY, 4, true);
    t[0xA0] = entry("LDY", Ldy, Immediate, 2, false);
    t[0xA4] = entry("LDY", Ldy, ZeroPage, 3, false);
    t[0xB4] = entry("LDY", Ldy, ZeroPageX, 4, false);
    t[0xAC] = entry("LDY", Ldy, Absolute, 4, false);
    t[0xBC] = entry("LDY", Ldy, AbsoluteX, 4, true);

    // Stores
    t[0x85] = entry("STA", Sta, ZeroPage, 3, false);
    t[0x95] = entry("STA", Sta, ZeroPageX, 4, false);
    t[0x8D] = entry("STA", Sta, Absolute, 4, false);
    t[0x9D] = entry("STA", Sta, AbsoluteXStore, 5, false);
    t[0x99] = entry("STA", Sta, AbsoluteYStore, 5, false);
    t[0x81] = entry("STA", Sta, IndirectX, 6, false);
    t[0x91] = entry("STA", Sta, IndirectYStore, 6, false);
    t[0x86] = entry("STX", Stx, ZeroPage, 3, false);
    t[0x96] = entry("STX", Stx, ZeroPageY, 4, false);
    t[0x8E] = entry("STX", Stx, Absolute, 4, false);
    t[0x84] = entry("STY", Sty, ZeroPage, 3, false);
    t[0x94] = entry("STY", Sty, ZeroPageX, 4, false);
    t[0x8C] = entry("STY", Sty, Absolute, 4, false);

    // Transfers
    t[0xAA] = entry("TAX", Tax, Implied, 2, false);
    t[0xA8] = entry("TAY", Tay, Implied, 2, false);
    t[0xBA] = entry("TSX", Tsx, Implied, 2, false);
    t[0x8A] = entry("TXA", Txa, Implied, 2, false);
    t[0x9A] = entry("TXS", Txs, Implied, 2, false);
    t[0x98] = entry("TYA", Tya, Implied, 2, false);

    // Stack
    t[0x48] = entry("PHA", Pha, Implied, 3, false);
    t[0x08] = entry("PHP", Php, Implied, 3, false);
    t[0x68] = entry("PLA", Pla, Implied, 4, false);
    t[0x28] = entry("PLP", Plp, Implied, 4, false);

    // Shifts and rotates
    t[0x0A] = entry("ASL", Asl, Accumulator, 2, false);
    t[0x06] = entry("ASL", Asl, ZeroPage, 5, false);
    t[0x16] = entry("ASL", Asl, ZeroPageX, 6, false);
    t[0x0E] = entry("ASL", Asl, Absolute, 6, false);
    t[0x1E] = entry("ASL", Asl, AbsoluteXStore, 7, false);
    t[0x4A] = entry("LSR", Lsr, Accumulator, 2, false);
    t[0x46] = entry("LSR", Lsr, ZeroPage, 5, false);
    t[0x56] = entry("LSR", Lsr, ZeroPageX, 6, false);
    t[0x4E] = entry("LSR", Lsr, Absolute, 6, false);
    t[0x5E] = entry("LSR", Lsr, AbsoluteXStore, 7, false);
    t[0x2A] = entry("ROL", Rol, Accumulator, 2, false);
    t[0x26] = entry("ROL", Rol, ZeroPage, 5, false);
    t[0x36] = entry("ROL", Rol, ZeroPageX, 6, false);
    t[0x2E] = entry("ROL", Rol, Absolute, 6, false);
    t[0x3E] = entry("ROL", Rol, AbsoluteXStore, 7, false);
    t[0x6A] = entry("ROR", Ror, Accumulator, 2, false);
    t[0x66] = entry("ROR", Ror, ZeroPage, 5, false);
    t[0x76] = entry("ROR", Ror, ZeroPageX, 6, false);
    t[0x6E] = entry("ROR", Ror, Absolute, 6, false);
    t[0x7E] = entry("ROR", Ror, AbsoluteXStore, 7, false);

    // Logic
    t[0x29] = entry("AND", And, Immediate, 2, false);
    t[0x25] = entry("AND", And, ZeroPage, 3, false);
    t[0x35] = entry("AND", And, ZeroPageX, 4, false);
    t[0x2D] = entry("AND", And, Absolute, 4, false);
    t[0x3D] = entry("AND", And, AbsoluteX, 4, true);
    t[0x39] = entry("AND", And, AbsoluteY, 4, true);
    t[0x21] = entry("AND", And, IndirectX, 6, false);
    t[0x31] = entry("AND", And, IndirectY, 5, true);
    t[0x49] = entry("EOR", Eor, Immediate, 2, false);
    t[0x45] = entry("EOR", Eor, ZeroPage, 3, false);
    t[0x55] = entry("EOR", Eor, ZeroPageX, 4, false);
    t[0x4D] = entry("EOR", Eor, Absolute, 4, false);
    t[0x5D] = entry("EOR", Eor, AbsoluteX, 4, true);
    t[0x59] = entry("EOR", Eor, AbsoluteY, 4, true);
    t[0x41] = entry("EOR", Eor, IndirectX, 6, false);
    t[0x51] = entry("EOR", Eor, IndirectY, 5, true);
    t[0x09] = entry("ORA", Ora, Immediate, 2, false);
    t[0x05] = entry("ORA", Ora, ZeroPage, 3, false);
    t[0x15] = entry("ORA", Ora, ZeroPageX, 4, false);
    t[0x0D] = entry("ORA", Ora, Absolute, 4, false);
    t[0x1D] = entry("ORA", Ora, AbsoluteX, 4, true);
    t[0x19] = entry("ORA", Ora, AbsoluteY, 4, true);
    t[0x01] = entry("ORA", Ora, IndirectX, 6, false);
    t[0x11] = entry("ORA", Ora, IndirectY, 5, true);
    t[0x24] = entry("BIT", Bit, ZeroPage, 3, false);
    t[0x2C] = entry("BIT", Bit, Absolute, 4, false);

    // Arithmetic
    t[0x69] = entry("ADC", Adc, Immediate, 2, false);
    t[0x65] = entry("ADC", Adc, ZeroPage, 3, false);
    t[0x75] = entry("ADC", Adc, ZeroPageX, 4, false);
    t[0x6D] = entry("ADC", Adc, Absolute, 4, false);
    t[0x7D] = entry("ADC", Adc, AbsoluteX, 4, true);
    t[0x79] = entry("ADC", Adc, AbsoluteY, 4, true);
    t[0x61] = entry("ADC", Adc, IndirectX, 6, false);
    t[0x71] = entry("ADC", Adc, IndirectY, 5, true);
    t[0xE9] = entry("SBC", Sbc, Immediate, 2, false);
    t[0xE5] = entry("SBC", Sbc, ZeroPage, 3, false);
    t[0xF5] = entry("SBC", Sbc, ZeroPageX, 4, false);
    t[0xED] = entry("SBC", Sbc, Absolute, 4, false);
    t[0xFD] = entry("SBC", Sbc, AbsoluteX, 4, true);
    t[0xF9] = entry("SBC", Sbc, AbsoluteY, 4, true);
    t[0xE1] = entry("SBC", Sbc, IndirectX, 6, false);
    t[0xF1] = entry("SBC", Sbc, IndirectY, 5, true);
    t[0xC9] = entry("CMP", Cmp, Immediate, 2, false);
    t[0xC5] = entry("CMP", Cmp, ZeroPage, 3, false);
    t[0xD5] = entry("CMP", Cmp, ZeroPageX, 4, false);
    t[0xCD] = entry("CMP", Cmp, Absolute, 4, false);
    t[0xDD] = entry("CMP", Cmp, AbsoluteX, 4, true);
    t[0xD9] = entry("CMP", Cmp, AbsoluteY, 4, true);
    t[0xC1] = entry("CMP", Cmp, IndirectX, 6, false);
    t[0xD1] = entry("CMP", Cmp, IndirectY, 5, true);
    t[0xE0] = entry("CPX", Cpx, Immediate, 2, false);
    t[0xE4] = entry("CPX", Cpx, ZeroPage, 3, false);
    t[0xEC] = entry("CPX", Cpx, Absolute, 4, false);
    t[0xC0] = entry("CPY", Cpy, Immediate, 2, false);
    t[0xC4] = entry("CPY", Cpy, ZeroPage, 3, false);
    t[0xCC] = entry("CPY", Cpy, Absolute, 4, false);
    t[0xC6] = entry("DEC", Dec, ZeroPage, 5, false);
    t[0xD6] = entry("DEC", Dec, ZeroPageX, 6, false);
    t[0xCE] = entry("DEC", Dec, Absolute, 6, false);
    t[0xDE] = entry("DEC", Dec, AbsoluteXStore, 7, false);
    t[0xCA] = entry("DEX", Dex, Implied, 2, false);
    t[0x88] = entry("DEY", Dey, Implied, 2, false);
    t[0xE6] = entry("INC", Inc, ZeroPage, 5, false);
    t[0xF6] = entry("INC", Inc, ZeroPageX, 6, false);
    t[0xEE] = entry("INC", Inc, Absolute, 6, false);
    t[0xFE] = entry("INC", Inc, AbsoluteXStore, 7, false);
    t[0xE8] = entry("INX", Inx, Implied, 2, false);
    t[0xC8] = entry("INY", Iny, Implied, 2, false);

    // Control flow
    t[0x00] = entry("BRK", Brk, Implied, 7, false);
    t[0x4C] = entry("JMP", Jmp, Absolute, 3, false);
    t[0x6C] = entry("JMP", Jmp, Indirect, 5, false);
    t[0x20] = entry("JSR", Jsr, Absolute, 6, false);
    t[0x60] = entry("RTS", Rts, Implied, 6, false);
    t[0x40] = entry("RTI", Rti, Implied, 6, false);
    t[0x90] = entry("BCC", Bcc, Relative, 2, false);
    t[0xB0] = entry("BCS", Bcs, Relative, 2, false);
    t[0xF0] = entry("BEQ", Beq, Relative, 2, false);
    t[0x30] = entry("BMI", Bmi, Relative, 2, false);
    t[0xD0] = entry("BNE", Bne, Relative, 2, false);
    t[0x10] = entry("BPL", Bpl, Relative, 2, false);
    t[0x50] = entry("BVC", Bvc, Relative, 2, false);
    t[0x70] = entry("BVS", Bvs, Relative, 2, false);

    // Flags
    t[0x18] = entry("CLC", Clc, Implied, 2, false);
    t[0xD8] = entry("CLD", Cld, Implied, 2, false);
    t[0x58] = entry("CLI", Cli, Implied, 2, false);
    t[0xB8] = entry("CLV", Clv, Implied, 2, false);
    t[0x38] = entry("SEC", Sec, Implied, 2, false);
    t[0xF8] = entry("SED", Sed, Implied, 2, false);
    t[0x78] = entry("SEI", Sei, Implied, 2, false);

    t[0xEA] = entry("NOP", Nop, Implied, 2, false);

    // Undocumented opcodes
    t[0xA7] = entry("*LAX", Lax, ZeroPage, 3, false);
    t[0xB7] = entry("*LAX", Lax, ZeroPageY, 4, false);
    t[0xAF] = entry("*LAX", Lax, Absolute, 4, false);
    t[0xBF] = entry("*LAX", Lax, AbsoluteY, 4, true);
    t[0xA3] = entry("*LAX", Lax, IndirectX, 6, false);
    t[0xB3] = entry("*LAX", Lax, IndirectY, 5, true);
    t[0x87] = entry("*SAX", Sax, ZeroPage, 3, false);
    t[0x97] = entry("*SAX", Sax, ZeroPageY, 4, false);
    t[0x8F] = entry("*SAX", Sax, Absolute, 4, false);
    t[0x83] = entry("*SAX", Sax, IndirectX, 6, false);
    t[0xEB] = entry("*SBC", Sbc, Immediate, 2, false);
    t[0xC7] = entry("*DCP", Dcp, ZeroPage, 5, false);
    t[0xD7] = entry("*DCP", Dcp, ZeroPageX, 6, false);
    t[0xCF] = entry("*DCP", Dcp, Absolute, 6, false);
    t[0xDF] = entry("*DCP", Dcp, AbsoluteX, 6, true);
    t[0xDB] = entry("*DCP", Dcp, AbsoluteY, 6, true);
    t[0xC3] = entry("*DCP", Dcp, IndirectX, 8, false);
    t[0xD3] = entry("*DCP", Dcp, IndirectY, 7, true);
    t[0xE7] = entry("*ISB", Isb, ZeroPage, 5, false);
    t[0xF7] = entry("*ISB", Isb, ZeroPageX, 6, false);
    t[0xEF] = entry("*ISB", Isb, Absolute, 6, false);
    t[0xFF] = entry("*ISB", Isb, AbsoluteX, 6, true);
    t[0xFB] = entry("*ISB", Isb, AbsoluteY, 6, true);
    t[0xE3] = entry("*ISB", Isb, IndirectX, 8, false);
    t[0xF3] = entry("*ISB", Isb, IndirectY, 7, true);
    t[0x07] = entry("*SLO", Slo, ZeroPage, 5, false);
    t[0x17] = entry("*SLO", Slo, ZeroPageX, 6, false);
    t[0x0F] = entry("*SLO", Slo, Absolute, 6, false);
    t[0x1F] = entry("*SLO", Slo, AbsoluteX, 6, true);
    t[0x1B] = entry("*SLO", Slo, AbsoluteY, 6, true);
    t[0x03] = entry("*SLO", Slo, IndirectX, 8, false);
    t[0x13] = entry("*SLO", Slo, IndirectY, 7, true);
    t[0x27] = entry("*RLA", Rla, ZeroPage, 5, false);
    t[0x37] = entry("*RLA", Rla, ZeroPageX, 6, false);
    t[0x2F] = entry("*RLA", Rla, Absolute, 6, false);
    t[0x3F] = entry("*RLA", Rla, AbsoluteX, 6, true);
    t[0x3B] = entry("*RLA", Rla, AbsoluteY, 6, true);
    t[0x23] = entry("*RLA", Rla, IndirectX, 8, false);
    t[0x33] = entry("*RLA", Rla, IndirectY, 7, true);
    t[0x47] = entry("*SRE", Sre, ZeroPage, 5, false);
    t[0x57] = entry("*SRE", Sre, ZeroPageX, 6, false);
    t[0x4F] = entry("*SRE", Sre, Absolute, 6, false);
    t[0x5F] = entry("*SRE", Sre, AbsoluteX, 6, true);
    t[0x5B] = entry("*SRE", Sre, AbsoluteY, 6, true);
    t[0x43] = entry("*SRE", Sre, IndirectX, 8, false);
    t[0x53] = entry("*SRE", Sre, IndirectY, 7, true);
    t[0x67] = entry("*RRA", Rra, ZeroPage, 5, false);
    t[0x77] = entry("*RRA", Rra, ZeroPageX, 6, false);
    t[0x6F] = entry("*RRA", Rra, Absolute, 6, false);
    t[0x7F] = entry("*RRA", Rra, AbsoluteX, 6, true);
    t[0x7B] = entry("*RRA", Rra, AbsoluteY, 6, true);
    t[0x63] = entry("*RRA", Rra, IndirectX, 8, false);
    t[0x73] = entry("*RRA", Rra, IndirectY, 7, true);

    // Read-NOPs real cartridges execute
    t[0x04] = entry("*NOP", Nop, ZeroPage, 3, false);
    t[0x44] = entry("*NOP", Nop, ZeroPage, 3, false);
    t[0x64] = entry("*NOP", Nop, ZeroPage, 3, false);
    t[0x0C] = entry("*NOP", Nop, Absolute, 4, false);
    t[0x14] = entry("*NOP", Nop, ZeroPageX, 4, false);
    t[0x34] = entry("*NOP", Nop, ZeroPageX, 4, false);
    t[0x54] = entry("*NOP", Nop, ZeroPageX, 4, false);
    t[0x74] = entry("*NOP", Nop, ZeroPageX, 4, false);
    t[0xD4] = entry("*NOP", Nop, ZeroPageX, 4, false);
    t[0xF4] = entry("*NOP", Nop, ZeroPageX, 4, false);
    t[0x1A] = entry("*NOP", Nop, Implied, 2, false);
    t[0x3A] = entry("*NOP", Nop, Implied, 2, false);
    t[0x5A] = entry("*NOP", Nop, Implied, 2, false);
    t[0x7A] = entry("*NOP", Nop, Implied, 2, false);
    t[0xDA] = entry("*NOP", Nop, Implied, 2, false);
    t[0xFA] = entry("*NOP", Nop, Implied, 2, false);
    t[0x80] = entry("*NOP", Nop, Immediate, 2, false);
    t[0x1C] = entry("*NOP", Nop, AbsoluteX, 4, true);
    t[0x3C] = entry("*NOP", Nop, AbsoluteX, 4, true);
    t[0x5C] = entry("*NOP", Nop, AbsoluteX, 4, true);
    t[0x7C] = entry("*NOP", Nop, AbsoluteX, 4, true);
    t[0x9C] = entry("*NOP", Nop, AbsoluteX, 4, true);
    t[0xDC] = entry("*NOP", Nop, AbsoluteX, 4, true);
    t[0xFC] = entry("*NOP", Nop, AbsoluteX, 4, true);

    t
}

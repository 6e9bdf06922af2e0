// Instruction disassembly and trace logging

use super::addressing::AddressingMode;
use super::opcodes::{Operation, OPCODE_TABLE};
use super::Cpu;
use crate::host::CpuHost;

impl Cpu {
    /// Disassemble the instruction at `addr`.
    ///
    /// Returns the formatted text (undocumented opcodes carry a `*`
    /// prefix) and the address of the next instruction. Unassigned
    /// opcodes disassemble as `???` and advance one byte.
    pub fn disassemble<H: CpuHost>(host: &mut H, addr: u16) -> (String, u16) {
        let opcode = host.mem_read(addr);
        let info = &OPCODE_TABLE[opcode as usize];
        if info.op == Operation::Fault {
            return ("???".to_string(), addr.wrapping_add(1));
        }

        let byte2 = host.mem_read(addr.wrapping_add(1));
        let byte3 = host.mem_read(addr.wrapping_add(2));
        let word = u16::from_le_bytes([byte2, byte3]);
        let mnemonic = info.mnemonic;

        let text = match info.mode {
            AddressingMode::Implied => mnemonic.to_string(),
            AddressingMode::Accumulator => format!("{} A", mnemonic),
            AddressingMode::Immediate => format!("{} #${:02X}", mnemonic, byte2),
            AddressingMode::ZeroPage => format!("{} ${:02X}", mnemonic, byte2),
            AddressingMode::ZeroPageX => format!("{} ${:02X},X", mnemonic, byte2),
            AddressingMode::ZeroPageY => format!("{} ${:02X},Y", mnemonic, byte2),
            AddressingMode::Relative => {
                let target = addr.wrapping_add(2).wrapping_add(byte2 as i8 as u16);
                format!("{} ${:04X}", mnemonic, target)
            }
            AddressingMode::Absolute => format!("{} ${:04X}", mnemonic, word),
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteXStore => {
                format!("{} ${:04X},X", mnemonic, word)
            }
            AddressingMode::AbsoluteY | AddressingMode::AbsoluteYStore => {
                format!("{} ${:04X},Y", mnemonic, word)
            }
            AddressingMode::Indirect => format!("{} (${:04X})", mnemonic, word),
            AddressingMode::IndirectX => format!("{} (${:02X},X)", mnemonic, byte2),
            AddressingMode::IndirectY | AddressingMode::IndirectYStore => {
                format!("{} (${:02X}),Y", mnemonic, byte2)
            }
        };
        (text, addr.wrapping_add(info.bytes as u16))
    }

    /// Format one trace line for the instruction at the current PC.
    ///
    /// Format: PC  OP OP OP  MNEMONIC OPERAND  A:XX X:XX Y:XX P:XX SP:XX CYC:N
    pub fn trace_line<H: CpuHost>(&self, host: &mut H) -> String {
        let pc = self.pc;
        let opcode = host.mem_read(pc);
        let info = &OPCODE_TABLE[opcode as usize];

        let hex_bytes = match info.bytes {
            2 => format!(
                "{:02X} {:02X}   ",
                opcode,
                host.mem_read(pc.wrapping_add(1))
            ),
            3 => format!(
                "{:02X} {:02X} {:02X}",
                opcode,
                host.mem_read(pc.wrapping_add(1)),
                host.mem_read(pc.wrapping_add(2))
            ),
            _ => format!("{:02X}      ", opcode),
        };

        let (disassembly, _) = Self::disassemble(host, pc);

        format!(
            "{:04X}  {}  {:<12}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc, hex_bytes, disassembly, self.a, self.x, self.y, self.status, self.sp, self.cycles
        )
    }
}

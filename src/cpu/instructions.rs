// Instruction implementations
//
// Operations receive the effective address computed by the addressing
// stage. An operand with no address targets the accumulator, which is how
// the shift and rotate instructions share one body between their
// accumulator and memory forms.

use super::addressing::Operand;
use super::flags;
use super::vectors;
use crate::host::CpuHost;

impl super::Cpu {
    // ========================================
    // Operand Access Helpers
    // ========================================

    /// Read the operand: memory at its address, or the accumulator.
    #[inline]
    pub(crate) fn read_operand<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) -> u8 {
        match operand.addr {
            Some(addr) => host.mem_read(addr),
            None => self.a,
        }
    }

    /// Write the operand: memory at its address, or the accumulator.
    #[inline]
    pub(crate) fn write_operand<H: CpuHost>(&mut self, host: &mut H, operand: &Operand, val: u8) {
        match operand.addr {
            Some(addr) => host.mem_write(addr, val),
            None => self.a = val,
        }
    }

    // ========================================
    // Loads and Stores
    // ========================================

    /// LDA - Load Accumulator. Flags: Z, N
    pub(crate) fn lda<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.a = self.read_operand(host, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// LDX - Load X Register. Flags: Z, N
    pub(crate) fn ldx<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.x = self.read_operand(host, operand);
        self.update_zero_and_negative_flags(self.x);
    }

    /// LDY - Load Y Register. Flags: Z, N
    pub(crate) fn ldy<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.y = self.read_operand(host, operand);
        self.update_zero_and_negative_flags(self.y);
    }

    /// STA - Store Accumulator. No flags.
    pub(crate) fn sta<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.a;
        self.write_operand(host, operand, val);
    }

    /// STX - Store X Register. No flags.
    pub(crate) fn stx<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.x;
        self.write_operand(host, operand, val);
    }

    /// STY - Store Y Register. No flags.
    pub(crate) fn sty<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.y;
        self.write_operand(host, operand, val);
    }

    // ========================================
    // Register Transfers
    // ========================================
    // All update Z and N except TXS.

    pub(crate) fn tax(&mut self) {
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
    }

    pub(crate) fn tay(&mut self) {
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
    }

    pub(crate) fn tsx(&mut self) {
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
    }

    pub(crate) fn txa(&mut self) {
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
    }

    pub(crate) fn txs(&mut self) {
        self.sp = self.x;
    }

    pub(crate) fn tya(&mut self) {
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
    }

    // ========================================
    // Stack Instructions
    // ========================================

    /// PHA - Push Accumulator.
    pub(crate) fn pha<H: CpuHost>(&mut self, host: &mut H) {
        let val = self.a;
        self.stack_push(host, val);
    }

    /// PHP - Push Processor Status. The pushed copy has B set.
    pub(crate) fn php<H: CpuHost>(&mut self, host: &mut H) {
        let val = self.status | flags::BREAK;
        self.stack_push(host, val);
    }

    /// PLA - Pull Accumulator. Flags: Z, N
    pub(crate) fn pla<H: CpuHost>(&mut self, host: &mut H) {
        self.a = self.stack_pop(host);
        self.update_zero_and_negative_flags(self.a);
    }

    /// PLP - Pull Processor Status.
    ///
    /// B, the unused bit and I keep their current values; I is staged into
    /// the delay latch and lands after the next instruction.
    pub(crate) fn plp<H: CpuHost>(&mut self, host: &mut H) {
        let val = self.stack_pop(host);
        self.next_irq = Some(val & flags::INTERRUPT_DISABLE);
        let keep = flags::BREAK | flags::UNUSED | flags::INTERRUPT_DISABLE;
        self.status = (self.status & keep) | (val & !keep);
    }

    // ========================================
    // Shifts and Rotates
    // ========================================

    /// ASL - Arithmetic Shift Left. Flags: C, Z, N
    pub(crate) fn asl<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let result = val << 1;
        self.update_flag(flags::CARRY, (val & 0x80) != 0);
        self.update_zero_and_negative_flags(result);
        self.write_operand(host, operand, result);
    }

    /// LSR - Logical Shift Right. Flags: C, Z, N (N always clear)
    pub(crate) fn lsr<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let result = val >> 1;
        self.update_flag(flags::CARRY, (val & 0x01) != 0);
        self.update_zero_and_negative_flags(result);
        self.write_operand(host, operand, result);
    }

    /// ROL - Rotate Left through carry. Flags: C, Z, N
    pub(crate) fn rol<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let carry_in = self.status & flags::CARRY;
        let result = (val << 1) | carry_in;
        self.update_flag(flags::CARRY, (val & 0x80) != 0);
        self.update_zero_and_negative_flags(result);
        self.write_operand(host, operand, result);
    }

    /// ROR - Rotate Right through carry. Flags: C, Z, N
    pub(crate) fn ror<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let carry_in = (self.status & flags::CARRY) << 7;
        let result = (val >> 1) | carry_in;
        self.update_flag(flags::CARRY, (val & 0x01) != 0);
        self.update_zero_and_negative_flags(result);
        self.write_operand(host, operand, result);
    }

    // ========================================
    // Logic
    // ========================================

    /// AND - Logical AND with accumulator. Flags: Z, N
    pub(crate) fn and<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.a &= self.read_operand(host, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Exclusive OR with accumulator. Flags: Z, N
    pub(crate) fn eor<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.a ^= self.read_operand(host, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Logical OR with accumulator. Flags: Z, N
    pub(crate) fn ora<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.a |= self.read_operand(host, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test.
    ///
    /// N and V are copied from bits 7 and 6 of the operand; Z is set from
    /// A AND operand.
    pub(crate) fn bit<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        self.update_flag(flags::NEGATIVE, (val & 0x80) != 0);
        self.update_flag(flags::OVERFLOW, (val & 0x40) != 0);
        self.update_flag(flags::ZERO, (self.a & val) == 0);
    }

    // ========================================
    // Arithmetic
    // ========================================

    /// Add `val` plus carry into the accumulator. Flags: C, Z, V, N
    fn add_to_accumulator(&mut self, val: u8) {
        let carry = (self.status & flags::CARRY) as u16;
        let sum = self.a as u16 + val as u16 + carry;
        let result = sum as u8;
        self.update_flag(flags::CARRY, sum > 0xFF);
        // Overflow when both operands share a sign the result does not
        let overflow = (self.a ^ result) & (val ^ result) & 0x80 != 0;
        self.update_flag(flags::OVERFLOW, overflow);
        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// ADC - Add with Carry. Flags: C, Z, V, N
    pub(crate) fn adc<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        self.add_to_accumulator(val);
    }

    /// SBC - Subtract with Carry. A = A + !M + C. Flags: C, Z, V, N
    pub(crate) fn sbc<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        self.add_to_accumulator(!val);
    }

    /// Shared body of the CMP family: C when reg >= val, Z/N from the
    /// difference.
    fn compare(&mut self, reg: u8, val: u8) {
        self.update_flag(flags::CARRY, reg >= val);
        self.update_zero_and_negative_flags(reg.wrapping_sub(val));
    }

    pub(crate) fn cmp<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        self.compare(self.a, val);
    }

    pub(crate) fn cpx<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        self.compare(self.x, val);
    }

    pub(crate) fn cpy<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        self.compare(self.y, val);
    }

    // ========================================
    // Increments and Decrements
    // ========================================

    pub(crate) fn dec<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand).wrapping_sub(1);
        self.update_zero_and_negative_flags(val);
        self.write_operand(host, operand, val);
    }

    pub(crate) fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub(crate) fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }

    pub(crate) fn inc<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand).wrapping_add(1);
        self.update_zero_and_negative_flags(val);
        self.write_operand(host, operand, val);
    }

    pub(crate) fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub(crate) fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    // ========================================
    // Control Flow
    // ========================================

    /// BRK - Force Interrupt.
    ///
    /// Pushes PC past the padding byte and P with B set, then jumps
    /// through the IRQ vector. Clears the delayed-I latch so a CLI
    /// immediately before BRK cannot re-enable interrupts across it.
    pub(crate) fn brk<H: CpuHost>(&mut self, host: &mut H) {
        self.pc = self.pc.wrapping_add(1);
        let pc = self.pc;
        self.stack_push_u16(host, pc);
        let pushed = self.status | flags::BREAK;
        self.stack_push(host, pushed);
        self.set_flag(flags::INTERRUPT_DISABLE);
        self.next_irq = None;
        let lo = host.mem_read(vectors::IRQ) as u16;
        let hi = host.mem_read(vectors::IRQ.wrapping_add(1)) as u16;
        self.pc = (hi << 8) | lo;
    }

    /// JMP - Jump to the effective address.
    pub(crate) fn jmp(&mut self, operand: &Operand) {
        if let Some(addr) = operand.addr {
            self.pc = addr;
        }
    }

    /// JSR - Jump to Subroutine. Pushes PC - 1.
    pub(crate) fn jsr<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let ret = self.pc.wrapping_sub(1);
        self.stack_push_u16(host, ret);
        if let Some(addr) = operand.addr {
            self.pc = addr;
        }
    }

    /// RTS - Return from Subroutine.
    pub(crate) fn rts<H: CpuHost>(&mut self, host: &mut H) {
        self.pc = self.stack_pop_u16(host).wrapping_add(1);
    }

    /// RTI - Return from Interrupt.
    ///
    /// Restores P (keeping B and the unused bit) and PC. Unlike PLP the I
    /// bit takes effect immediately, and the delay latch is cleared.
    pub(crate) fn rti<H: CpuHost>(&mut self, host: &mut H) {
        let val = self.stack_pop(host);
        let keep = flags::BREAK | flags::UNUSED;
        self.status = (self.status & keep) | (val & !keep);
        self.next_irq = None;
        self.pc = self.stack_pop_u16(host);
    }

    /// Shared branch body. Returns the extra cycles consumed: +1 when
    /// taken, +1 more when the target lies on a different page than the
    /// branch instruction itself.
    pub(crate) fn branch<H: CpuHost>(&mut self, host: &mut H, condition: bool) -> u32 {
        if condition {
            let mut extra = 1;
            let offset = host.mem_read(self.pc) as i8;
            let start_page = self.pc.wrapping_sub(1) & 0xFF00;
            self.pc = self.pc.wrapping_add(1).wrapping_add(offset as u16);
            if start_page != (self.pc & 0xFF00) {
                extra += 1;
            }
            extra
        } else {
            self.pc = self.pc.wrapping_add(1);
            0
        }
    }

    // ========================================
    // Flag Instructions
    // ========================================
    // CLI and SEI stage the I bit into the delay latch; the change lands
    // only after the following instruction.

    pub(crate) fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    pub(crate) fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    pub(crate) fn cli(&mut self) {
        self.next_irq = Some(0);
    }

    pub(crate) fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }

    pub(crate) fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    pub(crate) fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    pub(crate) fn sei(&mut self) {
        self.next_irq = Some(flags::INTERRUPT_DISABLE);
    }

    // ========================================
    // Undocumented Instructions
    // ========================================

    /// LAX - load A and X from memory. Flags: Z, N
    pub(crate) fn lax<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        self.a = self.read_operand(host, operand);
        self.x = self.a;
        self.update_zero_and_negative_flags(self.a);
    }

    /// SAX - store A AND X. No flags.
    pub(crate) fn sax<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.a & self.x;
        self.write_operand(host, operand, val);
    }

    /// DCP - decrement memory then compare with A.
    pub(crate) fn dcp<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand).wrapping_sub(1);
        self.write_operand(host, operand, val);
        self.compare(self.a, val);
    }

    /// ISB - increment memory then subtract from A.
    pub(crate) fn isb<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand).wrapping_add(1);
        self.write_operand(host, operand, val);
        self.add_to_accumulator(!val);
    }

    /// SLO - shift memory left then OR into A.
    pub(crate) fn slo<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let result = val << 1;
        self.update_flag(flags::CARRY, (val & 0x80) != 0);
        self.write_operand(host, operand, result);
        self.a |= result;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RLA - rotate memory left then AND into A.
    pub(crate) fn rla<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let result = (val << 1) | (self.status & flags::CARRY);
        self.update_flag(flags::CARRY, (val & 0x80) != 0);
        self.write_operand(host, operand, result);
        self.a &= result;
        self.update_zero_and_negative_flags(self.a);
    }

    /// SRE - shift memory right then EOR into A.
    pub(crate) fn sre<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let result = val >> 1;
        self.update_flag(flags::CARRY, (val & 0x01) != 0);
        self.write_operand(host, operand, result);
        self.a ^= result;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RRA - rotate memory right then add to A with the carry the rotate
    /// produced.
    pub(crate) fn rra<H: CpuHost>(&mut self, host: &mut H, operand: &Operand) {
        let val = self.read_operand(host, operand);
        let result = (val >> 1) | ((self.status & flags::CARRY) << 7);
        self.update_flag(flags::CARRY, (val & 0x01) != 0);
        self.write_operand(host, operand, result);
        self.add_to_accumulator(result);
    }
}

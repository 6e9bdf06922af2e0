// Execution loop
//
// `step` runs whole instructions until a cycle budget is spent. Each
// instruction boundary first services a latched NMI or IRQ, then decodes
// through the static opcode table and dispatches. The 7457-cycle APU
// quanta the instruction completed are reported before the next
// instruction starts.

use super::addressing::Operand;
use super::opcodes::{Operation, OPCODE_TABLE};
use super::{flags, vectors, Cpu};
use crate::host::CpuHost;

impl Cpu {
    /// Run whole instructions until at least `budget` cycles are consumed.
    ///
    /// Returns the cycles actually consumed, which may overshoot the
    /// budget by the tail of the last instruction. The first call after
    /// power-on performs the reset sequence. Once the fault latch is set,
    /// the budget is returned without executing anything.
    pub fn step<H: CpuHost>(&mut self, host: &mut H, budget: u32) -> u32 {
        if self.power_on_pending() {
            self.complete_power_on();
            self.reset(host);
        }
        let mut consumed = 0;
        while consumed < budget {
            if self.fault {
                return budget;
            }
            let spent = self.execute_one(host);
            consumed += spent;
            self.cycles = self.cycles.wrapping_add(spent as u64);
            self.apu_divider().accumulate(spent);
            self.notify_apu(host);
        }
        consumed
    }

    /// Charge `cycles` without executing (OAM-DMA stalls and the like).
    /// APU quanta crossed by the stall are reported.
    pub fn skip<H: CpuHost>(&mut self, host: &mut H, cycles: u32) {
        self.cycles = self.cycles.wrapping_add(cycles as u64);
        self.apu_divider().accumulate(cycles);
        self.notify_apu(host);
    }

    fn notify_apu<H: CpuHost>(&mut self, host: &mut H) {
        let steps = self.apu_divider().take_steps();
        if steps > 0 {
            host.apu_step(steps);
        }
    }

    /// Execute one instruction (or service one interrupt) and return the
    /// cycles it consumed.
    fn execute_one<H: CpuHost>(&mut self, host: &mut H) -> u32 {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(host, vectors::NMI);
            return 7;
        }
        if self.irq_pending && !self.get_flag(flags::INTERRUPT_DISABLE) {
            self.irq_pending = false;
            self.service_interrupt(host, vectors::IRQ);
            return 7;
        }

        // CLI/SEI/PLP take effect one instruction late: remember what was
        // staged before this instruction and apply it afterwards, unless
        // the instruction itself cleared the latch (BRK, RTI)
        let staged_irq = self.next_irq;

        if self.trace {
            let line = self.trace_line(host);
            log::trace!("{}", line);
        }

        let opcode = host.mem_read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        let info = &OPCODE_TABLE[opcode as usize];

        let operand = self.fetch_operand(host, info.mode);

        let mut cycles = info.cycles as u32;
        if info.page_cycle && operand.page_crossed {
            cycles += 1;
        }
        cycles += self.execute_operation(host, opcode, info.op, &operand);

        if let (Some(staged), Some(current)) = (staged_irq, self.next_irq) {
            self.status = (self.status & !flags::INTERRUPT_DISABLE) | staged;
            if staged == current {
                self.next_irq = None;
            }
        }

        cycles
    }

    /// Dispatch one decoded operation. Returns extra cycles (branches).
    fn execute_operation<H: CpuHost>(
        &mut self,
        host: &mut H,
        opcode: u8,
        op: Operation,
        operand: &Operand,
    ) -> u32 {
        match op {
            Operation::Lda => self.lda(host, operand),
            Operation::Ldx => self.ldx(host, operand),
            Operation::Ldy => self.ldy(host, operand),
            Operation::Sta => self.sta(host, operand),
            Operation::Stx => self.stx(host, operand),
            Operation::Sty => self.sty(host, operand),

            Operation::Tax => self.tax(),
            Operation::Tay => self.tay(),
            Operation::Tsx => self.tsx(),
            Operation::Txa => self.txa(),
            Operation::Txs => self.txs(),
            Operation::Tya => self.tya(),

            Operation::Pha => self.pha(host),
            Operation::Php => self.php(host),
            Operation::Pla => self.pla(host),
            Operation::Plp => self.plp(host),

            Operation::Asl => self.asl(host, operand),
            Operation::Lsr => self.lsr(host, operand),
            Operation::Rol => self.rol(host, operand),
            Operation::Ror => self.ror(host, operand),

            Operation::And => self.and(host, operand),
            Operation::Eor => self.eor(host, operand),
            Operation::Ora => self.ora(host, operand),
            Operation::Bit => self.bit(host, operand),

            Operation::Adc => self.adc(host, operand),
            Operation::Sbc => self.sbc(host, operand),
            Operation::Cmp => self.cmp(host, operand),
            Operation::Cpx => self.cpx(host, operand),
            Operation::Cpy => self.cpy(host, operand),

            Operation::Dec => self.dec(host, operand),
            Operation::Dex => self.dex(),
            Operation::Dey => self.dey(),
            Operation::Inc => self.inc(host, operand),
            Operation::Inx => self.inx(),
            Operation::Iny => self.iny(),

            Operation::Brk => self.brk(host),
            Operation::Jmp => self.jmp(operand),
            Operation::Jsr => self.jsr(host, operand),
            Operation::Rts => self.rts(host),
            Operation::Rti => self.rti(host),

            Operation::Bcc => return self.branch(host, !self.get_flag(flags::CARRY)),
            Operation::Bcs => return self.branch(host, self.get_flag(flags::CARRY)),
            Operation::Beq => return self.branch(host, self.get_flag(flags::ZERO)),
            Operation::Bmi => return self.branch(host, self.get_flag(flags::NEGATIVE)),
            Operation::Bne => return self.branch(host, !self.get_flag(flags::ZERO)),
            Operation::Bpl => return self.branch(host, !self.get_flag(flags::NEGATIVE)),
            Operation::Bvc => return self.branch(host, !self.get_flag(flags::OVERFLOW)),
            Operation::Bvs => return self.branch(host, self.get_flag(flags::OVERFLOW)),

            Operation::Clc => self.clc(),
            Operation::Cld => self.cld(),
            Operation::Cli => self.cli(),
            Operation::Clv => self.clv(),
            Operation::Sec => self.sec(),
            Operation::Sed => self.sed(),
            Operation::Sei => self.sei(),

            Operation::Nop => {}

            Operation::Lax => self.lax(host, operand),
            Operation::Sax => self.sax(host, operand),
            Operation::Dcp => self.dcp(host, operand),
            Operation::Isb => self.isb(host, operand),
            Operation::Slo => self.slo(host, operand),
            Operation::Rla => self.rla(host, operand),
            Operation::Sre => self.sre(host, operand),
            Operation::Rra => self.rra(host, operand),

            Operation::Fault => {
                log::warn!(
                    "unassigned opcode ${:02X} at ${:04X}, latching fault",
                    opcode,
                    self.pc.wrapping_sub(1)
                );
                self.fault = true;
            }
        }
        0
    }
}

//! Cross-engine integration tests
//!
//! Wires the CPU, PPU and APU together the way an embedding host does:
//! a bus routes CPU memory traffic to RAM, the PPU registers and the APU
//! registers, while the PPU's catch-up callback budgets CPU execution.

use famicore::apu::status;
use famicore::{Apu, Clock, CoreConfig, Cpu, CpuHost, Ppu, PpuHost};

/// Opt into core logs with RUST_LOG=famicore=trace.
fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// IRQ line sink handed to the APU.
#[derive(Default)]
struct IrqLine {
    level: u8,
    raises: u32,
}

impl famicore::ApuHost for IrqLine {
    fn irq(&mut self, level: u8) {
        self.level = level;
        if level != 0 {
            self.raises += 1;
        }
    }
}

/// Minimal console: 2 KiB RAM, PRG ROM, PPU and APU behind the bus.
struct Machine {
    ram: [u8; 0x800],
    prg: [u8; 0x8000],
    ppu: Ppu,
    apu: Apu,
    irq_line: IrqLine,
    apu_windows: u32,
}

impl Machine {
    fn new() -> Self {
        Machine {
            ram: [0; 0x800],
            prg: [0; 0x8000],
            ppu: Ppu::new(),
            apu: Apu::new(),
            irq_line: IrqLine::default(),
            apu_windows: 0,
        }
    }

    fn load(&mut self, addr: u16, program: &[u8]) {
        let base = addr as usize - 0x8000;
        self.prg[base..base + program.len()].copy_from_slice(program);
    }

    fn set_reset_vector(&mut self, addr: u16) {
        self.prg[0x7FFC] = addr as u8;
        self.prg[0x7FFD] = (addr >> 8) as u8;
    }
}

impl CpuHost for Machine {
    fn mem_read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            0x2000..=0x3FFF => self.ppu.read_reg(addr),
            0x4015 => self.apu.read_status(),
            0x4000..=0x401F => 0,
            0x8000..=0xFFFF => self.prg[(addr - 0x8000) as usize],
            _ => 0,
        }
    }

    fn mem_write(&mut self, addr: u16, val: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize] = val,
            0x2000..=0x3FFF => self.ppu.write_reg(addr, val),
            0x4000..=0x4017 => self.apu.write_reg(&mut self.irq_line, addr, val),
            _ => {}
        }
    }

    fn apu_step(&mut self, steps: u32) {
        for _ in 0..steps {
            self.apu.step(&mut self.irq_line, 184);
            self.apu_windows += 1;
        }
    }
}

/// Frame driver capturing the CPU budget the PPU hands out.
#[derive(Default)]
struct FrameBudget {
    cpu_cycles: u64,
    hblanks: u32,
    nmi: bool,
}

impl PpuHost for FrameBudget {
    fn hblank(&mut self, _line: u8) {
        self.hblanks += 1;
    }

    fn vblank(&mut self) {
        self.nmi = true;
    }

    fn cpu_tick(&mut self, cpu_cycles: u32) {
        self.cpu_cycles += cpu_cycles as u64;
    }
}

#[test]
fn test_reset_boots_through_the_bus() {
    init_logs();
    let mut machine = Machine::new();
    machine.load(0x8000, &[0xEA]);
    machine.set_reset_vector(0x8000);
    let mut cpu = Cpu::new();

    cpu.step(&mut machine, 1);

    assert_eq!(cpu.pc, 0x8001);
    assert_eq!(cpu.sp, 0xFD);
}

#[test]
fn test_program_drives_ppu_registers() {
    let mut machine = Machine::new();
    machine.load(
        0x8000,
        &[
            0xA9, 0x80, // LDA #$80
            0x8D, 0x00, 0x20, // STA $2000 (NMI enable)
            0xA9, 0x3F, // LDA #$3F
            0x8D, 0x06, 0x20, // STA $2006
            0xA9, 0x00, // LDA #$00
            0x8D, 0x06, 0x20, // STA $2006
            0xA9, 0x16, // LDA #$16
            0x8D, 0x07, 0x20, // STA $2007 (palette $3F00)
            0x4C, 0x14, 0x80, // JMP self
        ],
    );
    machine.set_reset_vector(0x8000);
    let mut cpu = Cpu::new();

    cpu.step(&mut machine, 40);

    assert_eq!(machine.ppu.vram_read(0x3F00), 0x16);
    // The universal backdrop aliases into the sprite half
    assert_eq!(machine.ppu.vram_read(0x3F10), 0x16);
}

#[test]
fn test_program_drives_apu_registers() {
    let mut machine = Machine::new();
    machine.load(
        0x8000,
        &[
            0xA9, 0x01, // LDA #$01
            0x8D, 0x15, 0x40, // STA $4015 (enable pulse 1)
            0xA9, 0x1F, // LDA #$1F
            0x8D, 0x00, 0x40, // STA $4000
            0xA9, 0x80, // LDA #$80
            0x8D, 0x02, 0x40, // STA $4002
            0xA9, 0x00, // LDA #$00
            0x8D, 0x03, 0x40, // STA $4003
            0x4C, 0x14, 0x80, // JMP self
        ],
    );
    machine.set_reset_vector(0x8000);
    let mut cpu = Cpu::new();

    // Run past one APU quantum so the sequencer sees the key-on
    cpu.step(&mut machine, 8000);

    assert!(machine.apu_windows >= 1);
    assert_ne!(machine.apu.read_status() & status::PULSE1, 0);
}

#[test]
fn test_frame_budget_matches_cpu_and_apu_rates() {
    let mut machine = Machine::new();
    machine.load(0x8000, &[0x4C, 0x00, 0x80]); // JMP $8000
    machine.set_reset_vector(0x8000);
    let mut cpu = Cpu::new();
    let mut ppu = Ppu::new();
    let mut budget = FrameBudget::default();

    ppu.render_frame(&mut budget);
    assert_eq!(budget.hblanks, 240);

    let consumed = cpu.step(&mut machine, budget.cpu_cycles as u32);
    assert!(consumed >= budget.cpu_cycles as u32);
    // ~29781 cycles cross the 7457-cycle boundary three times
    assert_eq!(machine.apu_windows, 3);

    // The driver advances the shared clock with what the CPU reports
    let mut clock = Clock::new();
    clock.advance(consumed);
    assert_eq!(clock.cycles(), consumed as u64);
}

#[test]
fn test_nmi_dispatch_round_trip() {
    let mut machine = Machine::new();
    machine.load(0x8000, &[0xEA, 0x4C, 0x00, 0x80]);
    machine.load(0x9000, &[0x40]); // RTI
    machine.set_reset_vector(0x8000);
    machine.prg[0x7FFA] = 0x00; // NMI vector $9000
    machine.prg[0x7FFB] = 0x90;
    let mut cpu = Cpu::new();
    let mut ppu = Ppu::new();
    ppu.write_reg(0x2000, 0x80); // NMI enable

    cpu.step(&mut machine, 2);
    let mut budget = FrameBudget::default();
    ppu.render_frame(&mut budget);
    assert!(budget.nmi, "VBlank raised with NMI enabled");

    cpu.nmi();
    cpu.step(&mut machine, 1);
    assert_eq!(cpu.pc, 0x9000, "NMI handler entered");
    cpu.step(&mut machine, 1);
    assert!(cpu.pc < 0x8010, "RTI returned to the main loop");
}

#[test]
fn test_config_applies_to_engines() {
    let config = CoreConfig::default();
    let mut apu = Apu::new();
    let mut ppu = Ppu::new();
    let mut cpu = Cpu::new();

    apu.set_volume(config.audio.volume);
    ppu.set_mirror_mode(config.video.mirror_mode);
    cpu.trace = config.debug.trace_cpu;

    // Default mirror mode is horizontal: $2000 pairs with $2400
    ppu.vram_write(0x2000, 0x99);
    assert_eq!(ppu.vram_read(0x2400), 0x99);
    assert!(!cpu.trace);
}

#[test]
fn test_oam_dma_through_skip() {
    // A host implements $4014 DMA by copying 256 bytes and charging the
    // CPU 513 stall cycles through `skip`
    let mut machine = Machine::new();
    machine.load(0x8000, &[0xEA]);
    machine.set_reset_vector(0x8000);
    let mut cpu = Cpu::new();
    cpu.step(&mut machine, 1);

    for i in 0..=255u8 {
        machine.ram[0x0200 + i as usize] = i;
    }
    for i in 0..=255u8 {
        let val = machine.ram[0x0200 + i as usize];
        machine.ppu.write_oam(i, val);
    }
    let before = cpu.cycles;
    cpu.skip(&mut machine, 513);

    assert_eq!(cpu.cycles, before + 513);
    assert_eq!(machine.ppu.read_oam(0x42), 0x42);
}

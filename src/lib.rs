// famicore - cycle-approximate NES/Famicom emulator core
// CPU, PPU and APU engines interlocked through explicit cycle ledgers.
// Cartridge, input and host output paths are external; the core talks to
// them only through the callback traits in `host`.

// Public modules
pub mod apu;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod host;
pub mod ppu;

// Re-export main types for convenience
pub use apu::Apu;
pub use clock::{ApuStepDivider, Clock, CpuCatchUp, APU_STEP_CYCLES};
pub use config::{ConfigError, CoreConfig};
pub use cpu::Cpu;
pub use host::{ApuHost, CpuHost, NullHost, PpuHost, RamHost};
pub use ppu::Ppu;

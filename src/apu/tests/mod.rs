//! APU unit tests
//!
//! Channel internals are tested next to the channels themselves; these
//! modules exercise the register interface, the frame sequencer and the
//! mixed output.

use super::*;
use crate::host::ApuHost;

/// Host recording IRQ line changes and serving DMC bytes.
pub(crate) struct CollectHost {
    pub irqs: Vec<u8>,
    pub sample_byte: u8,
    pub fetches: u32,
}

impl CollectHost {
    pub fn new() -> Self {
        CollectHost {
            irqs: Vec::new(),
            sample_byte: 0,
            fetches: 0,
        }
    }

    pub fn last_irq(&self) -> Option<u8> {
        self.irqs.last().copied()
    }
}

impl ApuHost for CollectHost {
    fn irq(&mut self, level: u8) {
        self.irqs.push(level);
    }

    fn dmc_fetch(&mut self, _addr: u16) -> u8 {
        self.fetches += 1;
        self.sample_byte
    }
}

/// Clock the sequencer `steps` times without producing samples.
pub(crate) fn clock_steps(apu: &mut Apu, host: &mut CollectHost, steps: u32) {
    for _ in 0..steps {
        apu.step(host, 0);
    }
}

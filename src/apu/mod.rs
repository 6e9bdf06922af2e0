// APU module - Audio Processing Unit implementation
//
// Five channels driven by a 240 Hz frame sequencer; the host calls
// `step` once per 7457-cycle quantum and receives that quantum's PCM
// samples. Channel output is stretched across each step's sample window
// rather than generated per CPU cycle.
//
// ## Register Map
//
// | Address       | Description                     |
// |---------------|---------------------------------|
// | $4000-$4003   | Pulse 1                         |
// | $4004-$4007   | Pulse 2                         |
// | $4008-$400B   | Triangle                        |
// | $400C-$400F   | Noise                           |
// | $4010-$4013   | DMC                             |
// | $4015         | Channel enable / status         |
// | $4017         | Frame counter mode              |

mod channels;
mod components;
mod constants;

use crate::host::ApuHost;
use channels::{DmcChannel, NoiseChannel, PulseChannel, TriangleChannel};
use constants::{FRAME_CYCLE, MAX_STEP_SAMPLES};

/// Status bits returned from $4015
pub mod status {
    pub const PULSE1: u8 = 0x01;
    pub const PULSE2: u8 = 0x02;
    pub const TRIANGLE: u8 = 0x04;
    pub const NOISE: u8 = 0x08;
    pub const DMC: u8 = 0x10;
    pub const FRAME_IRQ: u8 = 0x40;
    pub const DMC_IRQ: u8 = 0x80;
}

/// APU structure holding the channels and frame sequencer
pub struct Apu {
    /// 4- or 5-step sequencer mode
    step_mode: u8,

    /// Decrementing sequencer position, 19..0
    frame_counter: i32,

    irq_disable: bool,

    /// $4015 status byte
    pub(crate) state: u8,

    /// 11-bit timer write latches for the pulse channels
    pulse_timer: [u16; 2],

    /// Timer write latch for the triangle channel
    triangle_timer: u16,

    pulse: [PulseChannel; 2],
    triangle: TriangleChannel,
    noise: NoiseChannel,
    dmc: DmcChannel,

    /// Mix lookup for the two pulse channels
    pulse_mix: [u8; 31],

    /// Mix lookup for triangle + noise + DMC
    tnd_mix: [u16; 203],

    /// Mixed output for the current step
    sample_buf: [u8; MAX_STEP_SAMPLES],
}

impl Apu {
    /// Create an APU in its power-on state: 4-step mode, master volume
    /// at maximum, noise register seeded.
    pub fn new() -> Self {
        let mut apu = Apu {
            step_mode: 4,
            frame_counter: 20,
            irq_disable: false,
            state: 0,
            pulse_timer: [0; 2],
            triangle_timer: 0,
            pulse: [PulseChannel::new(false), PulseChannel::new(true)],
            triangle: TriangleChannel::new(),
            noise: NoiseChannel::new(),
            dmc: DmcChannel::new(),
            pulse_mix: [0; 31],
            tnd_mix: [0; 203],
            sample_buf: [0; MAX_STEP_SAMPLES],
        };
        apu.set_volume(255);
        apu
    }

    /// Console reset. Channel state is left as-is, matching the
    /// hardware's reset behavior for the audio path.
    pub fn reset(&mut self) {
        log::debug!("APU reset");
    }

    /// Power the APU off: all channels to silence, sequencer to 4-step.
    pub fn power_off(&mut self) {
        log::debug!("APU power off");
        self.pulse[0].power_off();
        self.pulse[1].power_off();
        self.triangle.power_off();
        self.noise.power_off();
        self.dmc.power_off();
        self.step_mode = 4;
        self.frame_counter = 20;
        self.irq_disable = false;
        self.state = 0;
    }

    /// Rebuild the mix tables for a master volume (0-255) from the
    /// canonical non-linear mixing formulas.
    pub fn set_volume(&mut self, volume: u8) {
        log::debug!("APU set volume: {}", volume);
        let v = volume as f64;
        self.pulse_mix[0] = 0;
        for (i, entry) in self.pulse_mix.iter_mut().enumerate().skip(1) {
            *entry = (v * 95.88 / ((8128.8 / i as f64) + 100.0)) as u8;
        }
        self.tnd_mix[0] = 0;
        for (i, entry) in self.tnd_mix.iter_mut().enumerate().skip(1) {
            *entry = (v * 163.67 / (24329.8 / i as f64 + 100.0)) as u16;
        }
    }

    /// Advance one 240 Hz frame-sequencer step and mix `samples` PCM
    /// samples for it. The returned slice is valid until the next call.
    ///
    /// Windows of 100 samples or fewer only clock the sequencer; the
    /// sample buffer is left untouched.
    pub fn step<H: ApuHost>(&mut self, host: &mut H, samples: usize) -> &[u8] {
        let samples = samples.min(MAX_STEP_SAMPLES);

        self.frame_counter -= 1;
        if self.frame_counter < 0 {
            self.frame_counter = 19;
        }
        let ix = self.frame_counter % self.step_mode as i32;
        if self.step_mode == 5 {
            if ix != 1 {
                self.clock_quarter_frame();
            }
            if ix == 0 || ix == 3 {
                self.clock_half_frame();
            }
        } else {
            self.clock_quarter_frame();
            if ix == 0 || ix == 2 {
                self.clock_half_frame();
            }
        }

        self.refresh_channel_bits();

        if !self.irq_disable
            && (self.frame_counter & 3) == 0
            && (self.state & status::FRAME_IRQ) == 0
        {
            self.state |= status::FRAME_IRQ;
            host.irq(1);
        }

        if samples > 100 {
            let mut pulse1_buf = [0u8; MAX_STEP_SAMPLES];
            let mut pulse2_buf = [0u8; MAX_STEP_SAMPLES];
            let mut triangle_buf = [0u8; MAX_STEP_SAMPLES];
            let mut noise_buf = [0u8; MAX_STEP_SAMPLES];
            let mut dmc_buf = [0u8; MAX_STEP_SAMPLES];

            self.pulse[0].render(&mut pulse1_buf[..samples]);
            self.pulse[1].render(&mut pulse2_buf[..samples]);
            self.triangle.render(&mut triangle_buf[..samples]);
            self.noise.render(&mut noise_buf[..samples]);
            if self.dmc.render(host, &mut dmc_buf[..samples]) {
                self.state |= status::DMC_IRQ;
            }

            for i in 0..samples {
                let pulse =
                    self.pulse_mix[(pulse1_buf[i] + pulse2_buf[i]) as usize] as u16;
                let tnd = self.tnd_mix[triangle_buf[i] as usize * 3
                    + noise_buf[i] as usize * 2
                    + dmc_buf[i] as usize];
                self.sample_buf[i] = (pulse + tnd).min(255) as u8;
            }
        }

        &self.sample_buf[..samples]
    }

    fn clock_quarter_frame(&mut self) {
        self.pulse[0].clock_quarter_frame();
        self.pulse[1].clock_quarter_frame();
        self.noise.clock_quarter_frame();
        self.triangle.clock_linear();
    }

    fn clock_half_frame(&mut self) {
        self.pulse[0].clock_half_frame();
        self.pulse[1].clock_half_frame();
        self.triangle.clock_half_frame();
        self.noise.clock_half_frame();
    }

    fn refresh_channel_bits(&mut self) {
        let mut bits = self.state & (status::FRAME_IRQ | status::DMC_IRQ);
        if self.pulse[0].is_playing() {
            bits |= status::PULSE1;
        }
        if self.pulse[1].is_playing() {
            bits |= status::PULSE2;
        }
        if self.triangle.is_playing() {
            bits |= status::TRIANGLE;
        }
        if self.noise.is_playing() {
            bits |= status::NOISE;
        }
        if self.dmc.is_playing() {
            bits |= status::DMC;
        }
        self.state = bits;
    }

    /// Write a register in $4000-$4017.
    pub fn write_reg<H: ApuHost>(&mut self, host: &mut H, addr: u16, val: u8) {
        match addr {
            0x4000..=0x4007 => {
                let ix = ((addr >> 2) & 1) as usize;
                match addr & 3 {
                    0 => self.pulse[ix].write_envelope(val),
                    1 => self.pulse[ix].write_sweep(val),
                    2 => {
                        self.pulse_timer[ix] = (self.pulse_timer[ix] & 0x0700) | val as u16;
                    }
                    _ => {
                        self.pulse_timer[ix] =
                            (self.pulse_timer[ix] & 0x00FF) | (((val & 7) as u16) << 8);
                        let period = self.pulse_timer[ix];
                        self.pulse[ix].set_timer((val >> 3) & 0x1F, period);
                    }
                }
            }
            0x4008..=0x400B => match addr & 3 {
                0 => self.triangle.write_linear(val),
                2 => {
                    self.triangle_timer = (self.triangle_timer & 0x0700) | val as u16;
                }
                3 => {
                    self.triangle_timer =
                        (self.triangle_timer & 0x00FF) | (((val & 7) as u16) << 8);
                    let period = self.triangle_timer;
                    self.triangle.set_timer((val >> 3) & 0x1F, period);
                }
                _ => {}
            },
            0x400C..=0x400F => match addr & 3 {
                0 => self.noise.write_envelope(val),
                2 => self.noise.set_mode(val),
                3 => self.noise.set_length(val),
                _ => {}
            },
            0x4010..=0x4013 => match addr & 3 {
                0 => {
                    if self.dmc.set_mode(val) {
                        self.state &= !status::DMC_IRQ;
                        host.irq(0);
                    }
                }
                1 => self.dmc.write_delta(val),
                2 => self.dmc.set_address(val),
                _ => self.dmc.set_size(val),
            },
            0x4015 => {
                self.pulse[0].set_enabled(val & status::PULSE1 != 0);
                self.pulse[1].set_enabled(val & status::PULSE2 != 0);
                self.triangle.set_enabled(val & status::TRIANGLE != 0);
                self.noise.set_enabled(val & status::NOISE != 0);
                self.dmc.set_enabled(val & status::DMC != 0);
            }
            0x4017 => {
                if val & 0x80 != 0 {
                    self.step_mode = 5;
                    self.irq_disable = true;
                } else {
                    self.step_mode = 4;
                    self.irq_disable = val & 0x40 != 0;
                }
                if self.irq_disable {
                    self.state &= !status::FRAME_IRQ;
                    host.irq(0);
                }
            }
            _ => {
                // Writes outside the decoded range are ignored
            }
        }
    }

    /// Read $4015: the status byte. Clears the frame-IRQ bit but not the
    /// DMC-IRQ bit.
    pub fn read_status(&mut self) -> u8 {
        let val = self.state;
        self.state &= !status::FRAME_IRQ;
        val
    }

    /// One 240 Hz step's worth of CPU cycles, for hosts scheduling their
    /// own audio windows.
    pub fn cycles_per_step() -> u64 {
        FRAME_CYCLE
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

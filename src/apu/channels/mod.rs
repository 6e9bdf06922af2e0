//! The five audio channels

mod dmc;
mod noise;
mod pulse;
mod triangle;

pub(super) use dmc::DmcChannel;
pub(super) use noise::NoiseChannel;
pub(super) use pulse::PulseChannel;
pub(super) use triangle::TriangleChannel;

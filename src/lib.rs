#![no_std]

pub mod channel;
pub mod color;
pub mod control;
pub mod filter;
pub mod frame_scheduler;
pub mod layout;
pub mod mapper;
pub mod math8;
pub mod palette;
pub mod pattern;
pub mod renderer;
pub mod settings;

pub use channel::{Channel, Receiver, Sender, TryReceiveError, TrySendError};
pub use control::{
    ControlChannel, ControlIntent, ControlProcessor, ControlReceiver, ControlSender,
    SettingsIntent,
};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use layout::{PartitionMode, SectionGeometry, StripLayout};
pub use mapper::{FramePhase, frame_phase, map_frame};
pub use palette::{Palette16, PaletteBlend, predefined};
pub use pattern::{MAX_VIRTUAL_PIXELS, WavePattern};
pub use renderer::{ComposerConfig, Renderer};
pub use settings::RenderSettings;

pub use color::Rgb;
pub use math8::{blend8, scale8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The composer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

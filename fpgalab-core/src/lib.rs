//! FPGA Lab Core — MIF serialization and the slider-figure model.
//!
//! Two independent utilities for a hardware-prototyping workflow:
//! - Quartus Memory Initialization File writer/reader with bit-width
//!   saturation (`mif`)
//! - An explicit-ownership interactive figure: 1-4 plot axes, bottom/right
//!   slider strips, and a reset button (`plot`)

pub mod mif;
pub mod plot;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: plain data types are Send + Sync.
    ///
    /// `plot::Slider` is deliberately absent — its subscribers are
    /// unconstrained closures and the figure is single-threaded.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<mif::MifContents>();
        require_sync::<mif::MifContents>();
        require_send::<mif::MifError>();
        require_sync::<mif::MifError>();

        require_send::<plot::SliderSpec>();
        require_sync::<plot::SliderSpec>();
        require_send::<plot::FracRect>();
        require_sync::<plot::FracRect>();
        require_send::<plot::FigureLayout>();
        require_sync::<plot::FigureLayout>();
        require_send::<plot::PlotError>();
        require_sync::<plot::PlotError>();
    }
}

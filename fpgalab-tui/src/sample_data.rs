//! Demo signal bank for the workbench.
//!
//! Four reference waveforms (sine, square, triangle, noisy sine) sampled
//! at a fixed resolution and driven by the figure's five sliders. The
//! noise source is seeded so redraws are stable frame to frame.

use fpgalab_core::plot::{SliderFigure, SliderSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Samples per trace, and the word depth of an exported MIF.
pub const SAMPLES: usize = 256;

/// Word width of exported MIFs.
pub const EXPORT_WIDTH: u32 = 8;

/// Full scale of a trace sample: max amplitude plus max offset magnitude.
/// Quantization maps `[-FULL_SCALE, FULL_SCALE]` onto the word range.
pub const FULL_SCALE: f64 = 2.5;

const NOISE_SEED: u64 = 42;
const NOISE_LEVEL: f64 = 0.12;

/// The demo figure: four plots, three bottom sliders, two right sliders.
pub fn demo_figure() -> SliderFigure {
    SliderFigure::new(
        4,
        vec![
            SliderSpec::new("Frequency", 0.5, 16.0, 4.0),
            SliderSpec::new("Phase", 0.0, 360.0, 0.0).with_step(15.0),
            SliderSpec::new("Duty", 5.0, 95.0, 50.0).with_step(5.0),
        ],
        vec![
            SliderSpec::new("Amplitude", 0.0, 1.25, 0.8),
            SliderSpec::new("Offset", -1.0, 1.0, 0.0),
        ],
    )
    .expect("demo figure plot count is 4")
}

/// Demo slider values in figure order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoParams {
    pub frequency: f64,
    pub phase_deg: f64,
    pub duty_pct: f64,
    pub amplitude: f64,
    pub offset: f64,
}

impl DemoParams {
    /// Read the parameter block from the figure's slider values.
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            frequency: values[0],
            phase_deg: values[1],
            duty_pct: values[2],
            amplitude: values[3],
            offset: values[4],
        }
    }
}

/// One plotted waveform.
#[derive(Debug, Clone)]
pub struct Trace {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Synthesize the four demo traces for the current parameters.
pub fn traces(params: &DemoParams) -> Vec<Trace> {
    let mut noise_rng = StdRng::seed_from_u64(NOISE_SEED);
    vec![
        Trace {
            name: "sine",
            points: sample(params, |pos, _| (pos * std::f64::consts::TAU).sin()),
        },
        Trace {
            name: "square",
            points: sample(params, |pos, p| {
                if pos * 100.0 < p.duty_pct {
                    1.0
                } else {
                    -1.0
                }
            }),
        },
        Trace {
            name: "triangle",
            points: sample(params, |pos, _| 1.0 - 4.0 * (pos - 0.5).abs()),
        },
        Trace {
            name: "noisy sine",
            points: sample(params, |pos, _| {
                (pos * std::f64::consts::TAU).sin()
                    + noise_rng.gen_range(-NOISE_LEVEL..=NOISE_LEVEL)
            }),
        },
    ]
}

/// Sample one waveform. `shape` receives the position within the current
/// cycle in `[0, 1)` and returns a unit-range sample; amplitude and
/// offset are applied on top.
fn sample(
    params: &DemoParams,
    mut shape: impl FnMut(f64, &DemoParams) -> f64,
) -> Vec<(f64, f64)> {
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / SAMPLES as f64;
            let pos = (params.frequency * t + params.phase_deg / 360.0).fract();
            let y = params.amplitude * shape(pos, params) + params.offset;
            (i as f64, y)
        })
        .collect()
}

/// Quantize a trace sample onto the unsigned export word range,
/// mid-scale at zero. Saturation past full scale is handled by the MIF
/// writer's clamping.
pub fn quantize(y: f64) -> i64 {
    let max = ((1u64 << EXPORT_WIDTH) - 1) as f64;
    (((y / FULL_SCALE) * 0.5 + 0.5) * max).round() as i64
}

/// A trace's samples as MIF word values.
pub fn trace_words(trace: &Trace) -> Vec<i64> {
    trace.points.iter().map(|&(_, y)| quantize(y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DemoParams {
        DemoParams {
            frequency: 2.0,
            phase_deg: 0.0,
            duty_pct: 25.0,
            amplitude: 1.0,
            offset: 0.0,
        }
    }

    #[test]
    fn four_traces_at_sample_resolution() {
        let traces = traces(&params());
        assert_eq!(traces.len(), 4);
        for trace in &traces {
            assert_eq!(trace.points.len(), SAMPLES);
        }
    }

    #[test]
    fn square_wave_respects_duty_cycle() {
        let traces = traces(&params());
        let square = &traces[1];
        let high = square.points.iter().filter(|&&(_, y)| y > 0.0).count();
        let ratio = high as f64 / SAMPLES as f64;
        assert!((ratio - 0.25).abs() < 0.05, "duty ratio {ratio}");
    }

    #[test]
    fn amplitude_and_offset_shift_the_trace() {
        let mut p = params();
        p.amplitude = 0.5;
        p.offset = 0.25;
        let sine = &traces(&p)[0];
        let ys: Vec<f64> = sine.points.iter().map(|&(_, y)| y).collect();
        let max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!((max - 0.75).abs() < 0.01);
        assert!((min - -0.25).abs() < 0.01);
    }

    #[test]
    fn noise_is_deterministic_across_calls() {
        let a = traces(&params());
        let b = traces(&params());
        assert_eq!(a[3].points, b[3].points);
    }

    #[test]
    fn quantize_maps_full_scale_to_word_range() {
        assert_eq!(quantize(0.0), 128);
        assert_eq!(quantize(FULL_SCALE), 255);
        assert_eq!(quantize(-FULL_SCALE), 0);
        // Past full scale: writer clamping takes over.
        assert!(quantize(2.0 * FULL_SCALE) > 255);
    }

    #[test]
    fn demo_figure_has_the_documented_controls() {
        let fig = demo_figure();
        assert_eq!(fig.axes().len(), 4);
        let labels: Vec<&str> = fig.sliders().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Frequency", "Phase", "Duty", "Amplitude", "Offset"]
        );
    }
}

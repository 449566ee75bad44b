//! Seam to an external plotting sink.
//!
//! Rendering is not part of this crate. A [`PlotSink`] receives two
//! equal-length series and a title and produces its artifact as a side
//! effect; callers treat the call as fire-and-forget.
//!
//! # Examples
//!
//! ```
//! use mlscratch_probability::{normal_pdf, plot::{PlotSink, plot_curve}};
//!
//! #[derive(Default)]
//! struct Recorder(Vec<(usize, String)>);
//!
//! impl PlotSink for Recorder {
//!     fn plot(&mut self, xs: &[f64], _ys: &[f64], title: &str) {
//!         self.0.push((xs.len(), title.to_owned()));
//!     }
//! }
//!
//! let mut sink = Recorder::default();
//! plot_curve(&mut sink, "standard normal", -3.0, 3.0, 60, |x| normal_pdf(x, 0.0, 1.0));
//! assert_eq!(sink.0, vec![(61, "standard normal".to_owned())]);
//! ```

/// Consumer of `(xs, ys, title)` triples, typically an image renderer.
///
/// `xs` and `ys` always have equal length.
pub trait PlotSink {
    fn plot(&mut self, xs: &[f64], ys: &[f64], title: &str);
}

impl<S> PlotSink for &mut S
where
    S: PlotSink + ?Sized,
{
    fn plot(&mut self, xs: &[f64], ys: &[f64], title: &str) {
        (**self).plot(xs, ys, title);
    }
}

/// Samples `f` at `steps + 1` evenly spaced points over `[start, end]`.
///
/// Both ends are included. `steps == 0` samples `start` only.
///
/// ```
/// use mlscratch_probability::{plot::sample_curve, uniform_cdf};
///
/// let (xs, ys) = sample_curve(-1.0, 2.0, 3, uniform_cdf);
/// assert_eq!(xs, vec![-1.0, 0.0, 1.0, 2.0]);
/// assert_eq!(ys, vec![0.0, 0.0, 1.0, 1.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_curve<F>(start: f64, end: f64, steps: usize, mut f: F) -> (Vec<f64>, Vec<f64>)
where
    F: FnMut(f64) -> f64,
{
    if steps == 0 {
        return (vec![start], vec![f(start)]);
    }
    let width = end - start;
    (0..=steps)
        .map(|i| {
            let x = if i == steps {
                end
            } else {
                start + width * i as f64 / steps as f64
            };
            (x, f(x))
        })
        .unzip()
}

/// Samples `f` over `[start, end]` and hands the series to `sink`.
pub fn plot_curve<S, F>(sink: &mut S, title: &str, start: f64, end: f64, steps: usize, f: F)
where
    S: PlotSink + ?Sized,
    F: FnMut(f64) -> f64,
{
    let (xs, ys) = sample_curve(start, end, steps, f);
    log::debug!("plotting {} points for {title:?}", xs.len());
    sink.plot(&xs, &ys, title);
}

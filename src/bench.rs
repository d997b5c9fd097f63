use std::collections::BTreeMap;
use std::hint::black_box;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use anyhow::Result;

use crate::activation::*;
use crate::domain;
use crate::domain::DomainConfig;
use crate::numeric::Element;

/// Width of the representation name column.
pub const NAME_WIDTH: usize = 8;
/// Width of every function column.
pub const COLUMN_WIDTH: usize = 10;
/// Number of dashes under the header.
pub const SEPARATOR_WIDTH: usize = 130;

/// The value sequence of one representation, ready to be swept by every column.
#[derive(Debug, Clone)]
pub struct Suite<T>
where
    T: Element,
{
    values: Vec<T>,
}

impl<T> Suite<T>
where
    T: Element,
{
    /// Build the suite by casting the canonical sequence into `T`.
    pub fn new(canonical: &[f64]) -> Self {
        let values = domain::cast::<T>(canonical);
        tracing::debug!(repr = T::NAME, len = values.len(), "built suite");

        Self { values }
    }

    pub fn name(&self) -> &'static str {
        T::NAME
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Time one full pass of `column`'s function over the sequence.
    #[rustfmt::skip]
    pub fn time(&self, column: Column) -> Duration {
        let elapsed = match column {
            Column::Relu       => self.forward(Relu),
            Column::Sigmoid    => self.forward(Sigmoid),
            Column::Tanh       => self.forward(Tanh),
            Column::LeakyRelu  => self.forward(LeakyRelu),
            Column::Elu        => self.forward(Elu),
            Column::Linear     => self.forward(Linear),
            Column::DRelu      => self.derivative(Relu),
            Column::DSigmoid   => self.derivative(Sigmoid),
            Column::DTanh      => self.derivative(Tanh),
            Column::DLeakyRelu => self.derivative(LeakyRelu),
            Column::DElu       => self.derivative(Elu),
            Column::DLinear    => self.derivative(Linear),
        };

        tracing::debug!(
            repr = T::NAME,
            column = column.label(),
            derivative = column.is_derivative(),
            ?elapsed,
            "sweep finished"
        );
        elapsed
    }

    /// Sweep `activation`'s forward function. Monomorphized per activation type.
    pub fn forward<A: Activation<T>>(&self, activation: A) -> Duration {
        sweep(&self.values, |x| activation.activate(x))
    }

    /// Sweep `activation`'s derivative.
    pub fn derivative<A: Activation<T>>(&self, activation: A) -> Duration {
        sweep(&self.values, |x| activation.differentiate(x))
    }

    /// Time every column, in table order.
    pub fn time_all(&self) -> Timings {
        let mut timings = Timings::default();

        for column in Column::ALL {
            timings.insert(column, self.time(column));
        }

        timings
    }
}

/// Call `f` once per value, discarding the results, and return the wall-clock time.
pub fn sweep<T, F>(values: &[T], f: F) -> Duration
where
    T: Element,
    F: Fn(T) -> T,
{
    let before = Instant::now();

    for &x in values {
        black_box(f(black_box(x)));
    }

    before.elapsed()
}

/// Elapsed time of each column for one representation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timings {
    items: BTreeMap<Column, Duration>,
}

impl Timings {
    pub fn insert(&mut self, column: Column, elapsed: Duration) {
        self.items.insert(column, elapsed);
    }

    pub fn get(&self, column: Column) -> Option<Duration> {
        self.items.get(&column).copied()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, Duration)> + '_ {
        self.items.iter().map(|(&column, &elapsed)| (column, elapsed))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Render a duration the way it appears in a table cell, e.g. `12.3ms`.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{elapsed:.1?}")
}

/// The header line, without a trailing newline.
pub fn header_line() -> String {
    let mut line = format!("{:<NAME_WIDTH$}", "Type");

    for column in Column::ALL {
        line.push_str(&format!(" | {:<COLUMN_WIDTH$}", column.label()));
    }

    line
}

pub fn separator_line() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// One data line, without a trailing newline. Missing columns are left blank.
pub fn row_line(name: &str, timings: &Timings) -> String {
    let mut line = format!("{name:<NAME_WIDTH$}");

    for column in Column::ALL {
        let cell = timings.get(column).map(format_duration).unwrap_or_default();
        line.push_str(&format!(" | {cell:<COLUMN_WIDTH$}"));
    }

    line
}

/// Drives the sweeps and writes the table to `out`.
#[derive(Debug)]
pub struct Bench<W>
where
    W: Write,
{
    canonical: Vec<f64>,
    out: W,
    header_written: bool,
}

impl<W> Bench<W>
where
    W: Write,
{
    /// Generate the canonical domain once; every row is cast from it.
    pub fn new(config: &DomainConfig, out: W) -> Self {
        Self::with_canonical(domain::canonical(config), out)
    }

    pub fn with_canonical(canonical: Vec<f64>, out: W) -> Self {
        Self {
            canonical,
            out,
            header_written: false,
        }
    }

    pub fn canonical(&self) -> &[f64] {
        &self.canonical
    }

    /// Write the header and separator. Only the first call writes anything.
    pub fn header(&mut self) -> Result<()> {
        if self.header_written {
            return Ok(());
        }

        writeln!(self.out, "{}", header_line()).context("Unable to write table header.")?;
        writeln!(self.out, "{}", separator_line()).context("Unable to write table separator.")?;
        self.header_written = true;

        Ok(())
    }

    /// Benchmark the representation `T` and write its row.
    pub fn row<T: Element>(&mut self) -> Result<Timings> {
        self.header()?;

        let suite = Suite::<T>::new(&self.canonical);
        let timings = suite.time_all();
        drop(suite);

        writeln!(self.out, "{}", row_line(T::NAME, &timings))
            .with_context(|| format!("Unable to write table row for {}.", T::NAME))?;
        self.out.flush().context("Unable to flush table output.")?;

        Ok(timings)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print the whole table: header, separator and one row per representation.
pub fn run<W: Write>(config: &DomainConfig, out: W) -> Result<()> {
    let mut bench = Bench::new(config, out);

    bench.header()?;
    bench.row::<i8>()?;
    bench.row::<i16>()?;
    bench.row::<i32>()?;
    bench.row::<i64>()?;
    bench.row::<isize>()?;
    bench.row::<u8>()?;
    bench.row::<u16>()?;
    bench.row::<u32>()?;
    bench.row::<u64>()?;
    bench.row::<usize>()?;
    bench.row::<f32>()?;
    bench.row::<f64>()?;

    Ok(())
}

//! The boundary between the bar trackers and whatever draws the bars.
//!
//! Trackers only ever talk to a [`RenderSurface`] and its [`SurfaceBar`]s, which keeps the
//! aggregation logic independent of the terminal library and lets tests substitute a fake.

/// Whether the amount of work behind a bar is known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// The total is fixed and is shown along with a percentage.
    Bounded,

    /// The total is re-estimated as work arrives and is never shown.
    Unbounded,
}

/// How the values of a bar are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarUnit {
    /// Plain counts, e.g. files.
    Count,

    /// Byte sizes in binary units.
    Bytes,
}

/// Description of a bar to add to a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSpec {
    pub label: &'static str,
    pub total: u64,
    pub kind: BarKind,
    pub unit: BarUnit,
}

/// A single bar on a [`RenderSurface`].
pub trait SurfaceBar: Send {
    /// Set the position of the bar.
    fn set_current(&self, current: u64);

    /// The position of the bar.
    fn current(&self) -> u64;

    /// Set the length of the bar.
    fn set_total(&self, total: u64);

    /// The length of the bar.
    fn total(&self) -> u64;

    /// Set the text displayed after the bar. An empty string clears it.
    fn set_annotation(&self, annotation: &str);

    /// Mark the bar as done; it stops animating and keeps its final state on screen.
    fn complete(&self);
}

/// A display that hosts a group of bars.
pub trait RenderSurface: Send {
    type Bar: SurfaceBar;

    /// Add a bar below any existing ones.
    fn add_bar(&mut self, spec: BarSpec) -> Self::Bar;

    /// Block until every pending redraw has reached the terminal.
    fn wait(&mut self);
}

/// Chart strategy selected by the user.
///
/// Closed set: rendering dispatches through one exhaustive match, so adding
/// a fourth kind is a compile-checked extension point rather than a runtime
/// string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// All kinds, in the order the control surface presents them.
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
        }
    }
}

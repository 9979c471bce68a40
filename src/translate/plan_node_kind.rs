/// Physical plan node a variable reference is being translated for.
///
/// Window, aggregate and materialize nodes read every column of their single
/// input through the outer slot, whatever slot the variable originally named.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlanNodeKind {
    /// Not translating for a specific plan node.
    #[default]
    None,
    TableScan,
    IndexScan,
    HashJoin,
    NestLoopJoin,
    MergeJoin,
    Motion,
    Limit,
    Sort,
    SubqueryScan,
    Append,
    Result,
    SharedScan,
    Window,
    Agg,
    Materialize,
}

impl PlanNodeKind {
    pub fn uses_outer_slot(self) -> bool {
        matches!(self, PlanNodeKind::Window | PlanNodeKind::Agg | PlanNodeKind::Materialize)
    }
}

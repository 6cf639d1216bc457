//! Highlight roles for the bars of a snapshot
//!
//! Every snapshot carries one [`Role`] per index. Steppers describe a snapshot
//! with a handful of sparse overrides (the two compared bars, the pivot, ...)
//! and [`build_roles`] expands them into a total [`RoleAssignment`].

/// Semantic role of a single bar at one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Default,
    Compared,
    Swapped,
    Pivot,
    ActiveIndex,
    WorkingRange,
    Written,
    Finalized,
}

impl Role {
    /// Short label used by the headless text renderer and the legend
    pub fn label(self) -> &'static str {
        match self {
            Role::Default => "default",
            Role::Compared => "compared",
            Role::Swapped => "swapped",
            Role::Pivot => "pivot",
            Role::ActiveIndex => "active",
            Role::WorkingRange => "range",
            Role::Written => "written",
            Role::Finalized => "final",
        }
    }

    /// Single-character marker for compact text output; none for `Default`
    pub fn marker(self) -> Option<char> {
        match self {
            Role::Default => None,
            Role::Compared => Some('?'),
            Role::Swapped => Some('~'),
            Role::Pivot => Some('P'),
            Role::ActiveIndex => Some('i'),
            Role::WorkingRange => Some('-'),
            Role::Written => Some('w'),
            Role::Finalized => Some('='),
        }
    }
}

/// One role per index, `len()` always equals the sequence length
pub type RoleAssignment = Vec<Role>;

/// Expand sparse `(index, role)` overrides into a full assignment of length `n`.
///
/// Indices outside `0..n` are dropped. When an index appears more than once
/// the last entry wins.
pub fn build_roles<I>(n: usize, overrides: I, default: Role) -> RoleAssignment
where
    I: IntoIterator<Item = (usize, Role)>,
{
    let mut roles = vec![default; n];
    for (idx, role) in overrides {
        if let Some(slot) = roles.get_mut(idx) {
            *slot = role;
        }
    }
    roles
}

/// Assignment with the same role everywhere
pub fn uniform_roles(n: usize, role: Role) -> RoleAssignment {
    vec![role; n]
}

//! Which way a truncating division goes.

/// Direction for every division in the engine.
///
/// Amounts paid out of a pool are always floored, so truncation stays in
/// the pool.  Amounts a caller is told to supply are rounded up.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::Rounding;
///
/// assert!(Rounding::Up.bumps(true));
/// assert!(!Rounding::Up.bumps(false));
/// assert!(!Rounding::Down.bumps(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling: any remainder adds one unit.
    Up,
    /// Floor: remainders are dropped.
    Down,
}

impl Rounding {
    /// Whether a quotient with a non-zero remainder (`inexact`) must be
    /// bumped by one unit.
    #[must_use]
    pub const fn bumps(self, inexact: bool) -> bool {
        inexact && matches!(self, Self::Up)
    }
}

use serde::{Deserialize, Serialize};

/// A viewport-relative height unit.
///
/// The four kinds differ in how they react to the browser's dynamic
/// toolbars: `lvh` assumes toolbars are retracted, `svh` assumes they are
/// expanded, `dvh` follows the current state and `vh` is the legacy unit
/// whose behavior is browser-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Largest viewport height (`lvh`).
    Lvh,
    /// Dynamic viewport height (`dvh`).
    Dvh,
    /// Smallest viewport height (`svh`).
    Svh,
    /// Baseline viewport height (`vh`).
    Vh,
}

impl UnitKind {
    /// Every unit, in the order the view lists them.
    pub const ALL: [UnitKind; 4] = [UnitKind::Lvh, UnitKind::Vh, UnitKind::Dvh, UnitKind::Svh];

    /// The units whose stability is tracked. Both must stay constant for
    /// the lifetime of a page.
    pub const TRACKED: [UnitKind; 2] = [UnitKind::Lvh, UnitKind::Svh];

    /// CSS suffix, e.g. `100lvh`.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Lvh => "lvh",
            Self::Dvh => "dvh",
            Self::Svh => "svh",
            Self::Vh => "vh",
        }
    }

    /// Whether this unit carries a stability flag.
    pub fn is_tracked(self) -> bool {
        Self::TRACKED.contains(&self)
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_suffix())
    }
}

use std::fmt::Display;

/// Tic-Tac-Toe markers
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Marker {
    Cross,
    Nought,
}

impl Marker {
    /// List all marker variants in move order
    pub const fn variants() -> [Marker; 2] {
        [Marker::Cross, Marker::Nought]
    }

    pub const fn opponent(&self) -> Self {
        match self {
            Marker::Cross => Marker::Nought,
            Marker::Nought => Marker::Cross,
        }
    }

    pub const fn symbol(&self) -> char {
        match self {
            Marker::Cross => 'X',
            Marker::Nought => 'O',
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

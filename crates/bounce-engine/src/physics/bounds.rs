/// One axis-aligned wall of the viewport.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Edge {
    /// `y = -1 + h`, body must stay above.
    Floor,
    /// `y = 1 - h`, body must stay below.
    Ceiling,
    /// `x = -1 + h`, body must stay right of it.
    Left,
    /// `x = 1 - h`, body must stay left of it.
    Right,
}

impl Edge {
    /// Resolution order used by [`Bounds::iter`].
    pub const ALL: [Edge; 4] = [Edge::Floor, Edge::Ceiling, Edge::Left, Edge::Right];

    const fn bit(self) -> u8 {
        match self {
            Edge::Floor => 1 << 0,
            Edge::Ceiling => 1 << 1,
            Edge::Left => 1 << 2,
            Edge::Right => 1 << 3,
        }
    }

    /// Parses the lowercase config name (`floor`, `ceiling`, `left`, `right`).
    pub fn from_name(name: &str) -> Option<Edge> {
        match name {
            "floor" => Some(Edge::Floor),
            "ceiling" => Some(Edge::Ceiling),
            "left" => Some(Edge::Left),
            "right" => Some(Edge::Right),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Floor => "floor",
            Edge::Ceiling => "ceiling",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// Set of walls the body collides with.
///
/// Iteration order is fixed (floor, ceiling, left, right) regardless of the
/// order edges were inserted, so integration stays deterministic.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bounds {
    mask: u8,
}

impl Bounds {
    /// No walls; the body falls forever.
    #[inline]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    #[inline]
    pub const fn floor_only() -> Self {
        Self { mask: Edge::Floor.bit() }
    }

    /// Floor, ceiling and both side walls.
    #[inline]
    pub const fn all() -> Self {
        Self {
            mask: Edge::Floor.bit() | Edge::Ceiling.bit() | Edge::Left.bit() | Edge::Right.bit(),
        }
    }

    #[inline]
    pub const fn with(self, edge: Edge) -> Self {
        Self { mask: self.mask | edge.bit() }
    }

    #[inline]
    pub const fn contains(self, edge: Edge) -> bool {
        self.mask & edge.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<Edge> for Bounds {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(Bounds::none(), Bounds::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_edge() {
        let b = Bounds::all();
        for e in Edge::ALL {
            assert!(b.contains(e));
        }
    }

    #[test]
    fn floor_only_contains_only_floor() {
        let b = Bounds::floor_only();
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![Edge::Floor]);
    }

    #[test]
    fn iteration_order_ignores_insertion_order() {
        let b: Bounds = [Edge::Right, Edge::Floor, Edge::Left].into_iter().collect();
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![Edge::Floor, Edge::Left, Edge::Right]);
    }

    #[test]
    fn with_adds_single_edge() {
        let b = Bounds::floor_only().with(Edge::Left);
        assert!(b.contains(Edge::Left));
        assert!(b.contains(Edge::Floor));
        assert!(!b.contains(Edge::Ceiling));
        assert_eq!(Bounds::none().with(Edge::Floor), Bounds::floor_only());
    }

    #[test]
    fn edge_names_round_trip() {
        for e in Edge::ALL {
            assert_eq!(Edge::from_name(e.name()), Some(e));
        }
        assert_eq!(Edge::from_name("roof"), None);
    }
}

use bitflags::bitflags;

bitflags! {
    /// Walls stored on a cell
    ///
    /// Only the right and bottom sides are recorded: the left and top walls of a
    /// cell are the right and bottom walls of its neighbours, or the maze border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Walls: u8 {
        const Right = 0b01;
        const Down  = 0b10;
        // Combined
        const Both  = Self::Right.bits() | Self::Down.bits();
    }
}

impl Walls {
    /// Build the mask from the two bit-planes of the text format
    ///
    /// Values are OR-ed together as `right | down << 1`, keeping every bit of
    /// the given integers that fits in the mask.
    /// ```
    /// use maze::Walls;
    ///
    /// assert_eq!(Walls::from_planes(1, 0), Walls::Right);
    /// assert_eq!(Walls::from_planes(1, 1), Walls::Both);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_planes(right: i64, down: i64) -> Self {
        Self::from_bits_retain((right | (down << 1)) as u8)
    }

    /// Value of the right-wall plane, `0` or `1`
    #[inline]
    #[must_use]
    pub const fn right_plane(self) -> u8 {
        self.bits() & Self::Right.bits()
    }

    /// Value of the down-wall plane, `0` or `1`
    #[inline]
    #[must_use]
    pub const fn down_plane(self) -> u8 {
        (self.bits() & Self::Down.bits()) >> 1
    }
}

#[cfg(test)]
mod tests {
    use super::Walls;

    #[test]
    fn planes() {
        for walls in [Walls::empty(), Walls::Right, Walls::Down, Walls::Both] {
            assert_eq!(
                Walls::from_planes(walls.right_plane() as _, walls.down_plane() as _),
                walls
            )
        }
    }

    #[test]
    fn planes_are_masked() {
        let odd = Walls::from_bits_retain(0b111);
        assert_eq!(odd.right_plane(), 1);
        assert_eq!(odd.down_plane(), 1);
    }

    #[test]
    fn raw_values_are_kept() {
        // a `2` in the right plane lands on the down bit
        assert_eq!(Walls::from_planes(2, 0), Walls::Down);
        assert_eq!(Walls::from_planes(0, 0), Walls::empty());
    }
}

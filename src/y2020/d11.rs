use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
    strum::IntoEnumIterator,
};

/* --- Day 11: Seating System ---

The ferry's waiting area is a grid of floor (`.`), empty seats (`L`), and occupied seats (`#`).
People are predictable: an empty seat with no occupied adjacent seats (of its eight neighbors)
becomes occupied, and an occupied seat with four or more occupied adjacent seats becomes empty,
all simultaneously, round after round, until no seat changes. How many seats end up occupied?

--- Part Two ---

People actually care about the first *visible* seat in each of the eight directions, ignoring
floor, and it now takes five or more visible occupied seats for an occupied seat to empty. How
many seats end up occupied once this stabilizes? */

define_cell! {
    #[repr(u8)]
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, Eq, PartialEq)]
    enum SeatCell {
        Floor = FLOOR = b'.',
        Empty = EMPTY = b'L',
        Occupied = OCCUPIED = b'#',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<SeatCell>);

impl Solution {
    const ADJACENT_THRESHOLD: usize = 4_usize;
    const VISIBLE_THRESHOLD: usize = 5_usize;

    /// The eight neighbor offsets, as the four cardinal directions plus their clockwise diagonals.
    fn neighbor_deltas() -> impl Iterator<Item = IVec2> {
        Direction::iter().flat_map(|dir| [dir.vec(), dir.vec() + dir.next().vec()])
    }

    fn count_adjacent_occupied(grid: &Grid2D<SeatCell>, pos: IVec2) -> usize {
        Self::neighbor_deltas()
            .filter(|delta| grid.get(pos + *delta) == Some(&SeatCell::Occupied))
            .count()
    }

    fn count_visible_occupied(grid: &Grid2D<SeatCell>, pos: IVec2) -> usize {
        Self::neighbor_deltas()
            .filter(|delta| {
                let mut curr: IVec2 = pos + *delta;

                loop {
                    match grid.get(curr) {
                        None | Some(SeatCell::Empty) => break false,
                        Some(SeatCell::Occupied) => break true,
                        Some(SeatCell::Floor) => curr += *delta,
                    }
                }
            })
            .count()
    }

    fn next_grid<F: Fn(&Grid2D<SeatCell>, IVec2) -> usize>(
        grid: &Grid2D<SeatCell>,
        threshold: usize,
        count_occupied: &F,
    ) -> Grid2D<SeatCell> {
        let cells: Vec<SeatCell> = grid
            .iter_positions()
            .map(|pos| match grid.get(pos).copied() {
                Some(SeatCell::Empty) if count_occupied(grid, pos) == 0_usize => {
                    SeatCell::Occupied
                }
                Some(SeatCell::Occupied) if count_occupied(grid, pos) >= threshold => {
                    SeatCell::Empty
                }
                cell => cell.unwrap_or(SeatCell::Floor),
            })
            .collect();

        Grid2D::try_from_cells_and_width(cells, grid.dimensions().x as usize).unwrap()
    }

    fn stable_grid<F: Fn(&Grid2D<SeatCell>, IVec2) -> usize>(
        &self,
        threshold: usize,
        count_occupied: F,
    ) -> Grid2D<SeatCell> {
        let mut curr: Grid2D<SeatCell> = self.0.clone();

        loop {
            let next: Grid2D<SeatCell> = Self::next_grid(&curr, threshold, &count_occupied);

            if next == curr {
                return curr;
            }

            curr = next;
        }
    }

    fn count_occupied_cells(grid: &Grid2D<SeatCell>) -> usize {
        grid.iter_filtered_positions(|cell| *cell == SeatCell::Occupied)
            .count()
    }

    fn stable_adjacent_occupied_count(&self) -> usize {
        Self::count_occupied_cells(&self.stable_grid(
            Self::ADJACENT_THRESHOLD,
            Self::count_adjacent_occupied,
        ))
    }

    fn stable_visible_occupied_count(&self) -> usize {
        Self::count_occupied_cells(&self.stable_grid(
            Self::VISIBLE_THRESHOLD,
            Self::count_visible_occupied,
        ))
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, args: &QuestionArgs) {
        if args.verbose {
            let stable: Grid2D<SeatCell> =
                self.stable_grid(Self::ADJACENT_THRESHOLD, Self::count_adjacent_occupied);

            println!("{}", String::from(stable.clone()));
            dbg!(Self::count_occupied_cells(&stable));
        } else {
            dbg!(self.stable_adjacent_occupied_count());
        }
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.stable_visible_occupied_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STR: &'static str = "\
        L.LL.LL.LL\n\
        LLLLLLL.LL\n\
        L.L.L..L..\n\
        LLLL.LL.LL\n\
        L.LL.LL.LL\n\
        L.LLLLL.LL\n\
        ..L.L.....\n\
        LLLLLLLLLL\n\
        L.LLLLLL.L\n\
        L.LLLLL.LL";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(
                Grid2D::try_from_cells_and_width(
                    SOLUTION_STR
                        .chars()
                        .filter(|c| *c != '\n')
                        .map(|c| SeatCell::try_from(c).unwrap())
                        .collect(),
                    10_usize,
                )
                .unwrap(),
            )
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_first_round_fills_every_seat() {
        let next: Grid2D<SeatCell> = Solution::next_grid(
            &solution().0,
            Solution::ADJACENT_THRESHOLD,
            &Solution::count_adjacent_occupied,
        );

        pretty_assert_eq!(
            String::from(next),
            SOLUTION_STR.replace('L', "#") + "\n"
        );
    }

    #[test]
    fn test_count_visible_occupied() {
        let grid: Grid2D<SeatCell> = Solution::try_from(
            "\
            .......#.\n\
            ...#.....\n\
            .#.......\n\
            .........\n\
            ..#L....#\n\
            ....#....\n\
            .........\n\
            #........\n\
            ...#.....",
        )
        .unwrap()
        .0;

        assert_eq!(
            Solution::count_visible_occupied(&grid, IVec2::new(3_i32, 4_i32)),
            8_usize
        );
    }

    #[test]
    fn test_stable_adjacent_occupied_count() {
        assert_eq!(solution().stable_adjacent_occupied_count(), 37_usize);
    }

    #[test]
    fn test_stable_visible_occupied_count() {
        assert_eq!(solution().stable_visible_occupied_count(), 26_usize);
    }
}

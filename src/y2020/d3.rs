use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

/* --- Day 3: Toboggan Trajectory ---

The toboggan can only follow certain slopes down the hill, and the hill is dotted with open squares
(`.`) and trees (`#`). The map (your puzzle input) repeats to the right infinitely. Starting at the
top-left open square and following a slope of right 3, down 1, how many trees would you encounter on
the way to the bottom?

--- Part Two ---

Check the slopes right 1 down 1, right 3 down 1, right 5 down 1, right 7 down 1, and right 1 down 2.
What do you get if you multiply together the number of trees encountered on each? */

define_cell! {
    #[repr(u8)]
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, PartialEq)]
    enum MapCell {
        Open = OPEN = b'.',
        Tree = TREE = b'#',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<MapCell>);

impl Solution {
    const SLOPES: [IVec2; 5_usize] = [
        IVec2::new(1_i32, 1_i32),
        IVec2::new(3_i32, 1_i32),
        IVec2::new(5_i32, 1_i32),
        IVec2::new(7_i32, 1_i32),
        IVec2::new(1_i32, 2_i32),
    ];

    /// Counts the trees encountered descending at `slope` from the top-left corner, wrapping
    /// horizontally since the map repeats to the right.
    fn count_trees_along_slope(&self, slope: IVec2) -> usize {
        let dimensions: IVec2 = self.0.dimensions();
        let mut pos: IVec2 = IVec2::ZERO;
        let mut trees: usize = 0_usize;

        while pos.y < dimensions.y {
            if self.0.get(IVec2::new(pos.x % dimensions.x, pos.y)).copied()
                == Some(MapCell::Tree)
            {
                trees += 1_usize;
            }

            pos += slope;
        }

        trees
    }

    fn count_trees_along_standard_slope(&self) -> usize {
        self.count_trees_along_slope(IVec2::new(3_i32, 1_i32))
    }

    fn product_of_tree_counts(&self) -> u64 {
        Self::SLOPES
            .into_iter()
            .map(|slope| self.count_trees_along_slope(slope) as u64)
            .product()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_trees_along_standard_slope());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.product_of_tree_counts());
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
        ..##.......\n\
        #...#...#..\n\
        .#....#..#.\n\
        ..#.#...#.#\n\
        .#...##..#.\n\
        ..#.##.....\n\
        .#.#.#....#\n\
        .#........#\n\
        #.##...#...\n\
        #...##....#\n\
        .#..#...#.#";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(
                Grid2D::try_from_cells_and_width(
                    SOLUTION_STR
                        .chars()
                        .filter(|c| *c != '\n')
                        .map(|c| MapCell::try_from(c).unwrap())
                        .collect(),
                    11_usize,
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
    fn test_count_trees_along_slope() {
        const TREES_PER_SLOPE: [usize; 5_usize] = [2_usize, 7_usize, 3_usize, 4_usize, 2_usize];

        for (slope, trees) in Solution::SLOPES.into_iter().zip(TREES_PER_SLOPE) {
            assert_eq!(solution().count_trees_along_slope(slope), trees);
        }
    }

    #[test]
    fn test_count_trees_along_standard_slope() {
        assert_eq!(solution().count_trees_along_standard_slope(), 7_usize);
    }

    #[test]
    fn test_product_of_tree_counts() {
        assert_eq!(solution().product_of_tree_counts(), 336_u64);
    }
}

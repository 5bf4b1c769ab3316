use {
    crate::*,
    nom::{
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 1: Report Repair ---

The Elves in accounting need an expense report fixed before the trip. The report (your puzzle
input) is a list of numbers; find the two entries that sum to 2020 and multiply them together.

--- Part Two ---

Same report, but now find the three entries that sum to 2020 and multiply them together. */

const TARGET_SUM: u32 = 2020_u32;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u32>);

impl Solution {
    /// Depth-first search over index-ordered combinations of `count` entries. The first
    /// combination summing to the target wins; the puzzle guarantees it exists and is unique.
    fn try_entry_combination_product(
        entries: &[u32],
        count: usize,
        start: usize,
        sum: u32,
        product: u64,
    ) -> Option<u64> {
        if count == 0_usize {
            (sum == TARGET_SUM).then_some(product)
        } else {
            (start..entries.len()).find_map(|index| {
                let entry: u32 = entries[index];

                (sum + entry <= TARGET_SUM)
                    .then(|| {
                        Self::try_entry_combination_product(
                            entries,
                            count - 1_usize,
                            index + 1_usize,
                            sum + entry,
                            product * entry as u64,
                        )
                    })
                    .flatten()
            })
        }
    }

    fn try_product_of_entries(&self, count: usize) -> Option<u64> {
        Self::try_entry_combination_product(&self.0, count, 0_usize, 0_u32, 1_u64)
    }

    fn try_pair_product(&self) -> Option<u64> {
        self.try_product_of_entries(2_usize)
    }

    fn try_triple_product(&self) -> Option<u64> {
        self.try_product_of_entries(3_usize)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(parse_integer, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_pair_product());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_triple_product());
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
        1721\n\
        979\n\
        366\n\
        299\n\
        675\n\
        1456";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                1721_u32, 979_u32, 366_u32, 299_u32, 675_u32, 1456_u32,
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_try_pair_product() {
        assert_eq!(solution().try_pair_product(), Some(514579_u64));
    }

    #[test]
    fn test_try_triple_product() {
        assert_eq!(solution().try_triple_product(), Some(241861950_u64));
    }

    #[test]
    fn test_no_combination() {
        assert_eq!(Solution(vec![1_u32, 2_u32]).try_pair_product(), None);
    }
}

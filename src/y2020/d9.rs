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
    std::ops::Range,
};

/* --- Day 9: Encoding Error ---

The data port's XMAS cipher starts with a 25-number preamble, and every subsequent number must be
the sum of two different numbers among the 25 immediately before it. Find the first number in the
list (after the preamble) that doesn't have this property.

--- Part Two ---

Find a contiguous run of at least two numbers that sums to the invalid number from part one. The
encryption weakness is the sum of the smallest and largest number in that run. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

impl Solution {
    const WINDOW_LEN: usize = 25_usize;

    fn is_sum_of_window_pair(&self, index: usize, window_len: usize) -> bool {
        let target: u64 = self.0[index];
        let window: &[u64] = &self.0[index - window_len..index];

        // Two distinct positions, not necessarily two distinct values.
        window.iter().enumerate().any(|(offset, a)| {
            window[offset + 1_usize..].iter().any(|b| *a + *b == target)
        })
    }

    fn try_first_invalid(&self, window_len: usize) -> Option<u64> {
        (window_len..self.0.len())
            .find(|index| !self.is_sum_of_window_pair(*index, window_len))
            .map(|index| self.0[index])
    }

    /// Two-pointer scan for a run of at least two numbers summing to `target`. All values are
    /// non-negative, so the running sum is monotonic in both pointers.
    fn try_contiguous_range_summing_to(&self, target: u64) -> Option<Range<usize>> {
        let mut start: usize = 0_usize;
        let mut sum: u64 = 0_u64;

        for end in 0_usize..self.0.len() {
            sum += self.0[end];

            while sum > target && start <= end {
                sum -= self.0[start];
                start += 1_usize;
            }

            if sum == target && end + 1_usize - start >= 2_usize {
                return Some(start..end + 1_usize);
            }
        }

        None
    }

    fn try_encryption_weakness(&self, window_len: usize) -> Option<u64> {
        let range: Range<usize> =
            self.try_contiguous_range_summing_to(self.try_first_invalid(window_len)?)?;
        let run: &[u64] = &self.0[range];

        Some(run.iter().min()? + run.iter().max()?)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(parse_integer, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_first_invalid(Self::WINDOW_LEN));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_encryption_weakness(Self::WINDOW_LEN));
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

    const WINDOW_LEN: usize = 5_usize;

    const SOLUTION_STR: &'static str = "\
        35\n\
        20\n\
        15\n\
        25\n\
        47\n\
        40\n\
        62\n\
        55\n\
        65\n\
        95\n\
        102\n\
        117\n\
        150\n\
        182\n\
        127\n\
        219\n\
        299\n\
        277\n\
        309\n\
        576";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                35_u64, 20_u64, 15_u64, 25_u64, 47_u64, 40_u64, 62_u64, 55_u64, 65_u64, 95_u64,
                102_u64, 117_u64, 150_u64, 182_u64, 127_u64, 219_u64, 299_u64, 277_u64, 309_u64,
                576_u64,
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_try_first_invalid() {
        assert_eq!(solution().try_first_invalid(WINDOW_LEN), Some(127_u64));
    }

    #[test]
    fn test_all_valid_has_no_first_invalid() {
        assert_eq!(
            Solution(vec![1_u64, 2_u64, 3_u64, 5_u64, 8_u64]).try_first_invalid(2_usize),
            None
        );
    }

    #[test]
    fn test_try_contiguous_range_summing_to() {
        assert_eq!(
            solution().try_contiguous_range_summing_to(127_u64),
            Some(2_usize..6_usize)
        );
    }

    #[test]
    fn test_try_encryption_weakness() {
        assert_eq!(solution().try_encryption_weakness(WINDOW_LEN), Some(62_u64));
    }
}

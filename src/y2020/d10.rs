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

/* --- Day 10: Adapter Array ---

Every joltage adapter in your bag (your puzzle input) can take an input 1, 2, or 3 jolts lower than
its rated output. The charging outlet is rated 0 jolts, and your device's built-in adapter is rated
3 jolts higher than the highest adapter. Chaining every adapter, what is the number of 1-jolt
differences multiplied by the number of 3-jolt differences?

--- Part Two ---

Adapters can be omitted, as long as each step in the chain is still at most 3 jolts. How many
distinct arrangements connect the outlet to your device? */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u32>);

impl Solution {
    const MAX_JOLT_STEP: u32 = 3_u32;

    /// The full chain in ascending order, with the outlet prepended and the device's built-in
    /// adapter appended.
    fn sorted_chain(&self) -> Vec<u32> {
        let mut chain: Vec<u32> = Vec::with_capacity(self.0.len() + 2_usize);

        chain.push(0_u32);
        chain.extend_from_slice(&self.0);
        chain.sort_unstable();
        chain.push(chain.last().copied().unwrap_or_default() + Self::MAX_JOLT_STEP);

        chain
    }

    fn jolt_difference_product(&self) -> u64 {
        let chain: Vec<u32> = self.sorted_chain();
        let (ones, threes): (u64, u64) =
            chain
                .windows(2_usize)
                .fold((0_u64, 0_u64), |(ones, threes), window| {
                    match window[1_usize] - window[0_usize] {
                        1_u32 => (ones + 1_u64, threes),
                        3_u32 => (ones, threes + 1_u64),
                        _ => (ones, threes),
                    }
                });

        ones * threes
    }

    /// Counts the distinct valid chains with a running tally of the ways to reach each adapter
    /// from the outlet.
    fn count_arrangements(&self) -> u64 {
        let chain: Vec<u32> = self.sorted_chain();
        let mut ways: Vec<u64> = vec![0_u64; chain.len()];

        ways[0_usize] = 1_u64;

        for index in 1_usize..chain.len() {
            ways[index] = (0_usize..index)
                .rev()
                .take_while(|prev| chain[index] - chain[*prev] <= Self::MAX_JOLT_STEP)
                .map(|prev| ways[prev])
                .sum();
        }

        ways.last().copied().unwrap_or_default()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(parse_integer, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.jolt_difference_product());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_arrangements());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

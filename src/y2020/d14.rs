use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{line_ending, one_of},
        combinator::{map, opt},
        error::Error,
        multi::{fold_many_m_n, many0},
        sequence::{delimited, preceded, separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 14: Docking Data ---

The ferry's docking program (your puzzle input) writes values to memory through a 36-bit bitmask,
like `mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X`: a `0` or `1` overwrites the corresponding bit
of every written value, and `X` leaves it unchanged. What is the sum of all values left in memory
after the program completes?

--- Part Two ---

A version 2 decoder chip applies the mask to memory *addresses* instead: `0` leaves the address bit
unchanged, `1` overwrites it with 1, and `X` is floating, taking on both values at once, so one
write lands on every combination. What is the sum of all values left in memory now? */

const MASK_BITS: u32 = 36_u32;
const FULLY_FLOATING: u64 = (1_u64 << MASK_BITS) - 1_u64;

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum ProgramLine {
    /// `ones` holds the mask's `1` bits and `floating` its `X` bits; `0` bits are the remainder.
    Mask { ones: u64, floating: u64 },
    Write { address: u64, value: u64 },
}

impl Parse for ProgramLine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                preceded(
                    tag("mask = "),
                    fold_many_m_n(
                        MASK_BITS as usize,
                        MASK_BITS as usize,
                        one_of("01X"),
                        || (0_u64, 0_u64),
                        |(ones, floating), c| {
                            (
                                (ones << 1_u32) | (c == '1') as u64,
                                (floating << 1_u32) | (c == 'X') as u64,
                            )
                        },
                    ),
                ),
                |(ones, floating)| Self::Mask { ones, floating },
            ),
            map(
                separated_pair(
                    delimited(tag("mem["), parse_integer, tag("]")),
                    tag(" = "),
                    parse_integer,
                ),
                |(address, value)| Self::Write { address, value },
            ),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ProgramLine>);

impl Solution {
    fn sum_after_value_masking(&self) -> u64 {
        let mut memory: HashMap<u64, u64> = HashMap::new();
        let mut ones: u64 = 0_u64;
        let mut floating: u64 = FULLY_FLOATING;

        for line in self.0.iter().copied() {
            match line {
                ProgramLine::Mask {
                    ones: mask_ones,
                    floating: mask_floating,
                } => {
                    ones = mask_ones;
                    floating = mask_floating;
                }
                ProgramLine::Write { address, value } => {
                    memory.insert(address, (value & floating) | ones);
                }
            }
        }

        memory.values().sum()
    }

    /// Every floating bit takes both values, so each write lands on a power-of-two set of
    /// addresses, enumerated by stepping down through the subsets of the floating bits.
    fn sum_after_address_decoding(&self) -> u64 {
        let mut memory: HashMap<u64, u64> = HashMap::new();
        let mut ones: u64 = 0_u64;
        let mut floating: u64 = 0_u64;

        for line in self.0.iter().copied() {
            match line {
                ProgramLine::Mask {
                    ones: mask_ones,
                    floating: mask_floating,
                } => {
                    ones = mask_ones;
                    floating = mask_floating;
                }
                ProgramLine::Write { address, value } => {
                    let base: u64 = (address | ones) & !floating;
                    let mut subset: u64 = floating;

                    loop {
                        memory.insert(base | subset, value);

                        if subset == 0_u64 {
                            break;
                        }

                        subset = (subset - 1_u64) & floating;
                    }
                }
            }
        }

        memory.values().sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(ProgramLine::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.sum_after_value_masking());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.sum_after_address_decoding());
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
        mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X\n\
        mem[8] = 11\n\
        mem[7] = 101\n\
        mem[8] = 0";

    const ADDRESS_DECODING_STR: &'static str = "\
        mask = 000000000000000000000000000000X1001X\n\
        mem[42] = 100\n\
        mask = 00000000000000000000000000000000X0XX\n\
        mem[26] = 1";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                ProgramLine::Mask {
                    ones: 1_u64 << 6_u32,
                    floating: FULLY_FLOATING ^ (1_u64 << 6_u32) ^ (1_u64 << 1_u32),
                },
                ProgramLine::Write {
                    address: 8_u64,
                    value: 11_u64,
                },
                ProgramLine::Write {
                    address: 7_u64,
                    value: 101_u64,
                },
                ProgramLine::Write {
                    address: 8_u64,
                    value: 0_u64,
                },
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_sum_after_value_masking() {
        assert_eq!(solution().sum_after_value_masking(), 165_u64);
    }

    #[test]
    fn test_sum_after_address_decoding() {
        assert_eq!(
            Solution::try_from(ADDRESS_DECODING_STR)
                .unwrap()
                .sum_after_address_decoding(),
            208_u64
        );
    }
}

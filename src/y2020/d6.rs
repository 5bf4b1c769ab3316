use {
    crate::*,
    nom::{
        character::complete::{line_ending, satisfy},
        combinator::{map, opt},
        error::Error,
        multi::{fold_many1, many0, many1},
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 6: Custom Customs ---

Customs declaration forms ask 26 yes-or-no questions, `a` through `z`. Each line of the input is
one person's "yes" answers, and groups of people are separated by blank lines. For each group,
count the number of questions to which *anyone* answered "yes", and sum those counts.

--- Part Two ---

You misread one word: for each group, count the questions to which *everyone* answered "yes", and
sum those counts instead. */

/// One person's answers per group, as 26-bit sets.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Group(Vec<u32>);

impl Group {
    fn any_yes_count(&self) -> u32 {
        self.0
            .iter()
            .fold(0_u32, |union, answers| union | answers)
            .count_ones()
    }

    fn all_yes_count(&self) -> u32 {
        self.0
            .iter()
            .fold(u32::MAX, |intersection, answers| intersection & answers)
            .count_ones()
    }
}

impl Parse for Group {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many1(terminated(
                fold_many1(
                    satisfy(|c| c.is_ascii_lowercase()),
                    || 0_u32,
                    |answers, c| answers | 1_u32 << (c as u8 - LOWERCASE_A_OFFSET) as u32,
                ),
                opt(line_ending),
            )),
            Self,
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Group>);

impl Solution {
    fn sum_of_any_yes_counts(&self) -> u32 {
        self.0.iter().map(Group::any_yes_count).sum()
    }

    fn sum_of_all_yes_counts(&self) -> u32 {
        self.0.iter().map(Group::all_yes_count).sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Group::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.sum_of_any_yes_counts());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.sum_of_all_yes_counts());
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
        abc\n\
        \n\
        a\n\
        b\n\
        c\n\
        \n\
        ab\n\
        ac\n\
        \n\
        a\n\
        a\n\
        a\n\
        a\n\
        \n\
        b";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                Group(vec![0b111_u32]),
                Group(vec![0b001_u32, 0b010_u32, 0b100_u32]),
                Group(vec![0b011_u32, 0b101_u32]),
                Group(vec![0b001_u32; 4_usize]),
                Group(vec![0b010_u32]),
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_any_yes_count() {
        assert_eq!(
            solution()
                .0
                .iter()
                .map(Group::any_yes_count)
                .collect::<Vec<u32>>(),
            vec![3_u32, 3_u32, 3_u32, 1_u32, 1_u32]
        );
    }

    #[test]
    fn test_all_yes_count() {
        assert_eq!(
            solution()
                .0
                .iter()
                .map(Group::all_yes_count)
                .collect::<Vec<u32>>(),
            vec![3_u32, 0_u32, 1_u32, 1_u32, 1_u32]
        );
    }

    #[test]
    fn test_sum_of_any_yes_counts() {
        assert_eq!(solution().sum_of_any_yes_counts(), 11_u32);
    }

    #[test]
    fn test_sum_of_all_yes_counts() {
        assert_eq!(solution().sum_of_all_yes_counts(), 6_u32);
    }
}

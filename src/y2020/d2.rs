use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{alpha1, line_ending, satisfy},
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated, tuple},
        Err, IResult,
    },
};

/* --- Day 2: Password Philosophy ---

The toboggan rental shop's password database is corrupted. Each line holds a policy and a password,
like `1-3 a: abcde`: the policy gives a letter and two numbers. According to the sled rental place
down the street, the numbers are the lowest and highest count of times the letter may appear in a
valid password. How many passwords are valid?

--- Part Two ---

The policy actually describes the shop's own Official Toboggan Corporate Policy: the two numbers
are 1-based positions in the password, exactly one of which must contain the given letter. How many
passwords are valid now? */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct PolicyAndPassword {
    min: usize,
    max: usize,
    letter: char,
    password: String,
}

impl PolicyAndPassword {
    fn is_valid_for_count_policy(&self) -> bool {
        (self.min..=self.max).contains(
            &self
                .password
                .chars()
                .filter(|letter| *letter == self.letter)
                .count(),
        )
    }

    fn letter_at_position(&self, position: usize) -> Option<char> {
        self.password.chars().nth(position - 1_usize)
    }

    fn is_valid_for_position_policy(&self) -> bool {
        (self.letter_at_position(self.min) == Some(self.letter))
            != (self.letter_at_position(self.max) == Some(self.letter))
    }
}

impl Parse for PolicyAndPassword {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                separated_pair(parse_integer::<usize>, tag("-"), parse_integer::<usize>),
                tag(" "),
                satisfy(|letter| letter.is_ascii_lowercase()),
                tag(": "),
                alpha1,
            )),
            |((min, max), _, letter, _, password): (_, _, _, _, &str)| Self {
                min,
                max,
                letter,
                password: password.into(),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<PolicyAndPassword>);

impl Solution {
    fn count_valid_for_count_policy(&self) -> usize {
        self.0
            .iter()
            .filter(|policy_and_password| policy_and_password.is_valid_for_count_policy())
            .count()
    }

    fn count_valid_for_position_policy(&self) -> usize {
        self.0
            .iter()
            .filter(|policy_and_password| policy_and_password.is_valid_for_position_policy())
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(PolicyAndPassword::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_valid_for_count_policy());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_valid_for_position_policy());
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
        1-3 a: abcde\n\
        1-3 b: cdefg\n\
        2-9 c: ccccccccc";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                PolicyAndPassword {
                    min: 1_usize,
                    max: 3_usize,
                    letter: 'a',
                    password: "abcde".into(),
                },
                PolicyAndPassword {
                    min: 1_usize,
                    max: 3_usize,
                    letter: 'b',
                    password: "cdefg".into(),
                },
                PolicyAndPassword {
                    min: 2_usize,
                    max: 9_usize,
                    letter: 'c',
                    password: "ccccccccc".into(),
                },
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_count_valid_for_count_policy() {
        assert_eq!(solution().count_valid_for_count_policy(), 2_usize);
    }

    #[test]
    fn test_count_valid_for_position_policy() {
        assert_eq!(solution().count_valid_for_position_policy(), 1_usize);
    }
}

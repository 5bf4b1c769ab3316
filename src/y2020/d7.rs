use {
    crate::*,
    bitvec::prelude::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{alpha1, line_ending},
        combinator::{map, opt, recognize},
        error::Error,
        multi::{many0_count, separated_list1},
        sequence::{separated_pair, terminated, tuple},
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 7: Handy Haversacks ---

Luggage rules (your puzzle input) describe which colored bags must contain which other colored
bags, like "light red bags contain 1 bright white bag, 2 muted yellow bags." You have a shiny gold
bag. How many bag colors can eventually contain at least one shiny gold bag?

--- Part Two ---

How many individual bags are required inside your single shiny gold bag? */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct BagContent {
    count: u32,
    color_index: usize,
}

/// Luggage rules over interned bag colors. `contents[i]` lists what a bag of color `colors[i]`
/// must contain.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    colors: Vec<String>,
    contents: Vec<Vec<BagContent>>,
}

/// Colors are interned in order of first appearance, container before contents.
fn intern_color(solution: &mut Solution, index_by_color: &mut HashMap<String, usize>, color: &str) -> usize {
    *index_by_color.entry(color.into()).or_insert_with(|| {
        solution.colors.push(color.into());
        solution.contents.push(Vec::new());

        solution.colors.len() - 1_usize
    })
}

impl Solution {
    const SHINY_GOLD: &'static str = "shiny gold";

    fn try_color_index(&self, color: &str) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }

    /// Counts the colors whose bags transitively contain at least one bag of the target color, by
    /// iterating direct-containment to a fixed point.
    fn count_eventual_containers(&self, color: &str) -> Option<usize> {
        let target: usize = self.try_color_index(color)?;
        let mut can_contain: BitVec = bitvec![0; self.colors.len()];
        let mut changed: bool = true;

        while changed {
            changed = false;

            for (container, contents) in self.contents.iter().enumerate() {
                if !can_contain[container]
                    && contents.iter().any(|content| {
                        content.color_index == target || can_contain[content.color_index]
                    })
                {
                    can_contain.set(container, true);
                    changed = true;
                }
            }
        }

        Some(can_contain.count_ones())
    }

    fn count_shiny_gold_containers(&self) -> Option<usize> {
        self.count_eventual_containers(Self::SHINY_GOLD)
    }

    fn count_bags_inside(&self, index: usize) -> u64 {
        self.contents[index]
            .iter()
            .map(|content| content.count as u64 * (1_u64 + self.count_bags_inside(content.color_index)))
            .sum()
    }

    fn try_bags_inside_shiny_gold(&self) -> Option<u64> {
        self.try_color_index(Self::SHINY_GOLD)
            .map(|index| self.count_bags_inside(index))
    }

    fn parse_color<'i>(input: &'i str) -> IResult<&'i str, &'i str> {
        recognize(separated_pair(alpha1, tag(" "), alpha1))(input)
    }

    fn parse_rule<'i>(input: &'i str) -> IResult<&'i str, (&'i str, Vec<(u32, &'i str)>)> {
        map(
            tuple((
                Self::parse_color,
                tag(" bags contain "),
                alt((
                    map(tag("no other bags"), |_| Vec::new()),
                    separated_list1(
                        tag(", "),
                        terminated(
                            separated_pair(parse_integer, tag(" "), Self::parse_color),
                            tuple((tag(" bag"), opt(tag("s")))),
                        ),
                    ),
                )),
                tag("."),
            )),
            |(container, _, contents, _)| (container, contents),
        )(input)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let mut solution: Self = Self {
            colors: Vec::new(),
            contents: Vec::new(),
        };
        let mut index_by_color: HashMap<String, usize> = HashMap::new();

        let (input, _) = many0_count(map(
            terminated(Self::parse_rule, opt(line_ending)),
            |(container, contents): (&str, Vec<(u32, &str)>)| {
                let container_index: usize =
                    intern_color(&mut solution, &mut index_by_color, container);
                let bag_contents: Vec<BagContent> = contents
                    .into_iter()
                    .map(|(count, color)| BagContent {
                        count,
                        color_index: intern_color(&mut solution, &mut index_by_color, color),
                    })
                    .collect();

                solution.contents[container_index] = bag_contents;
            },
        ))(input)?;

        Ok((input, solution))
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_shiny_gold_containers());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_bags_inside_shiny_gold());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::separated_list1,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

/* --- Day 13: Shuttle Search ---

Each shuttle bus has an ID, and departs from the sea port at every timestamp that is a multiple of
that ID. The input is the earliest timestamp you could depart, then the bus IDs in service (`x`
marks buses out of service). What is the ID of the earliest bus you can take, multiplied by the
number of minutes you'll wait for it?

--- Part Two ---

The contest: find the earliest timestamp such that the first bus in the list departs then, and each
subsequent bus departs at the subsequent minute, where `x` entries are unconstrained. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    earliest_departure: u64,
    buses: Vec<Option<u64>>,
}

impl Solution {
    fn try_earliest_bus_product(&self) -> Option<u64> {
        self.buses
            .iter()
            .flatten()
            .copied()
            .map(|id| ((id - self.earliest_departure % id) % id, id))
            .min()
            .map(|(wait, id)| wait * id)
    }

    /// Folds the per-bus congruences `t == -offset (mod id)` together two at a time. The IDs are
    /// pairwise coprime, so each step has a unique solution modulo the product; a non-coprime pair
    /// yields `None` instead.
    fn try_earliest_aligned_timestamp(&self) -> Option<u64> {
        let (residue, _modulus): (i128, i128) = self
            .buses
            .iter()
            .enumerate()
            .filter_map(|(offset, bus)| {
                bus.map(|id| ((-(offset as i128)).rem_euclid(id as i128), id as i128))
            })
            .try_fold(
                (0_i128, 1_i128),
                |(residue, modulus), (bus_residue, bus_modulus)| {
                    let ExtendedEuclideanAlgorithmOutput { gcd, x, .. } =
                        extended_euclidean_algorithm(
                            (modulus % bus_modulus) as i64,
                            bus_modulus as i64,
                        );

                    (gcd == 1_i64).then(|| {
                        let steps: i128 =
                            ((bus_residue - residue) * x as i128).rem_euclid(bus_modulus);

                        (residue + modulus * steps, modulus * bus_modulus)
                    })
                },
            )?;

        u64::try_from(residue).ok()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer,
                line_ending,
                terminated(
                    separated_list1(
                        tag(","),
                        alt((map(tag("x"), |_| None), map(parse_integer, Some))),
                    ),
                    opt(line_ending),
                ),
            ),
            |(earliest_departure, buses)| Self {
                earliest_departure,
                buses,
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_earliest_bus_product());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_earliest_aligned_timestamp());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

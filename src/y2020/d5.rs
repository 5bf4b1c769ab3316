use {
    crate::*,
    bitvec::prelude::*,
    nom::{
        character::complete::{line_ending, one_of},
        combinator::{map, opt},
        error::Error,
        multi::{fold_many_m_n, many0},
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 5: Binary Boarding ---

You dropped your boarding pass, so you scan everyone else's. A seat specification like `FBFBBFFRLR`
is binary space partitioning: the first 7 characters halve the 128 rows (`F` front, `B` back), the
last 3 halve the 8 columns (`L` left, `R` right). A seat's ID is row * 8 + column. What is the
highest seat ID on a boarding pass?

--- Part Two ---

Your seat is the only missing ID in the list, and it isn't at the very front or back: the seats
with IDs one higher and one lower than yours exist. What is your seat ID? */

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct SeatId(u16);

impl SeatId {
    const ROW_BITS: usize = 7_usize;
    const COLUMN_BITS: usize = 3_usize;
    const TOTAL_BITS: usize = Self::ROW_BITS + Self::COLUMN_BITS;
    const SEAT_COUNT: usize = 1_usize << Self::TOTAL_BITS;

    fn row(self) -> u16 {
        self.0 >> Self::COLUMN_BITS
    }

    fn column(self) -> u16 {
        self.0 & ((1_u16 << Self::COLUMN_BITS) - 1_u16)
    }
}

impl Parse for SeatId {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        // The specification is just the seat ID in binary, with `B` and `R` as the set bits.
        let (input, row_and_column): (&str, u16) = fold_many_m_n(
            Self::ROW_BITS,
            Self::ROW_BITS,
            one_of("FB"),
            || 0_u16,
            |bits, c| (bits << 1_u32) | (c == 'B') as u16,
        )(input)?;

        map(
            fold_many_m_n(
                Self::COLUMN_BITS,
                Self::COLUMN_BITS,
                one_of("LR"),
                move || row_and_column,
                |bits, c| (bits << 1_u32) | (c == 'R') as u16,
            ),
            Self,
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<SeatId>);

impl Solution {
    fn max_seat_id(&self) -> Option<u16> {
        self.0.iter().map(|seat_id| seat_id.0).max()
    }

    /// The one unoccupied seat whose immediate neighbors by ID are both occupied.
    fn try_missing_seat_id(&self) -> Option<u16> {
        let mut occupied: BitVec = bitvec![0; SeatId::SEAT_COUNT];

        for seat_id in self.0.iter() {
            occupied.set(seat_id.0 as usize, true);
        }

        (1_usize..SeatId::SEAT_COUNT - 1_usize).find_map(|seat_id| {
            (!occupied[seat_id] && occupied[seat_id - 1_usize] && occupied[seat_id + 1_usize])
                .then_some(seat_id as u16)
        })
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(SeatId::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.max_seat_id());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_missing_seat_id());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::{line_ending, one_of},
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{terminated, tuple},
        Err, IResult,
    },
};

/* --- Day 12: Rain Risk ---

The ferry needs to dodge a storm. The navigation instructions (your puzzle input) are single
characters with values: `N`, `S`, `E`, and `W` move the given distance in that compass direction,
`L` and `R` turn the ship the given number of degrees, and `F` moves forward in the direction the
ship faces (east, initially). What is the Manhattan distance from the starting position once the
instructions run out?

--- Part Two ---

The instructions actually concern a waypoint, which starts 10 units east and 1 unit north of the
ship and moves with it: `N`, `S`, `E`, and `W` move the waypoint, `L` and `R` rotate the waypoint
around the ship, and `F` moves the ship to the waypoint the given number of times. What is the
Manhattan distance now? */

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Action {
    Move(Direction),
    TurnLeft,
    TurnRight,
    Forward,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct ShipInstruction {
    action: Action,
    value: i32,
}

impl ShipInstruction {
    const DEGREES_PER_QUARTER_TURN: i32 = 90_i32;

    fn quarter_turns(self) -> i32 {
        self.value / Self::DEGREES_PER_QUARTER_TURN
    }
}

impl Parse for ShipInstruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((one_of("NSEWLRF"), parse_integer)),
            |(action, value)| Self {
                action: match action {
                    'N' => Action::Move(Direction::North),
                    'S' => Action::Move(Direction::South),
                    'E' => Action::Move(Direction::East),
                    'W' => Action::Move(Direction::West),
                    'L' => Action::TurnLeft,
                    'R' => Action::TurnRight,
                    _ => Action::Forward,
                },
                value,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ShipInstruction>);

impl Solution {
    /// Runs the instructions against the ship itself, returning its final position relative to its
    /// start.
    fn navigate_ship(&self) -> IVec2 {
        let mut pos: IVec2 = IVec2::ZERO;
        let mut facing: Direction = Direction::East;

        for instruction in self.0.iter().copied() {
            match instruction.action {
                Action::Move(dir) => pos += dir.vec() * instruction.value,
                Action::TurnLeft => {
                    for _ in 0_i32..instruction.quarter_turns() {
                        facing = facing.turn(true);
                    }
                }
                Action::TurnRight => {
                    for _ in 0_i32..instruction.quarter_turns() {
                        facing = facing.turn(false);
                    }
                }
                Action::Forward => pos += facing.vec() * instruction.value,
            }
        }

        pos
    }

    /// Runs the instructions against the waypoint, which rotates about the ship. North is negative
    /// y, so a clockwise compass rotation is `perp`.
    fn navigate_by_waypoint(&self) -> IVec2 {
        let mut pos: IVec2 = IVec2::ZERO;
        let mut waypoint: IVec2 = IVec2::new(10_i32, -1_i32);

        for instruction in self.0.iter().copied() {
            match instruction.action {
                Action::Move(dir) => waypoint += dir.vec() * instruction.value,
                Action::TurnLeft => {
                    for _ in 0_i32..instruction.quarter_turns() {
                        waypoint = IVec2::new(waypoint.y, -waypoint.x);
                    }
                }
                Action::TurnRight => {
                    for _ in 0_i32..instruction.quarter_turns() {
                        waypoint = waypoint.perp();
                    }
                }
                Action::Forward => pos += waypoint * instruction.value,
            }
        }

        pos
    }

    fn ship_distance(&self) -> i32 {
        manhattan_magnitude_2d(self.navigate_ship())
    }

    fn waypoint_distance(&self) -> i32 {
        manhattan_magnitude_2d(self.navigate_by_waypoint())
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(ShipInstruction::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.ship_distance());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.waypoint_distance());
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
        F10\n\
        N3\n\
        F7\n\
        R90\n\
        F11";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            let instruction = |action, value| ShipInstruction { action, value };

            Solution(vec![
                instruction(Action::Forward, 10_i32),
                instruction(Action::Move(Direction::North), 3_i32),
                instruction(Action::Forward, 7_i32),
                instruction(Action::TurnRight, 90_i32),
                instruction(Action::Forward, 11_i32),
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_navigate_ship() {
        assert_eq!(solution().navigate_ship(), IVec2::new(17_i32, 8_i32));
        assert_eq!(solution().ship_distance(), 25_i32);
    }

    #[test]
    fn test_navigate_by_waypoint() {
        assert_eq!(solution().navigate_by_waypoint(), IVec2::new(214_i32, 72_i32));
        assert_eq!(solution().waypoint_distance(), 286_i32);
    }

    #[test]
    fn test_full_turn_preserves_heading() {
        let quadruple_turn: Solution = Solution::try_from("L360\nF5").unwrap();

        assert_eq!(quadruple_turn.navigate_ship(), IVec2::new(5_i32, 0_i32));
        assert_eq!(
            quadruple_turn.navigate_by_waypoint(),
            IVec2::new(50_i32, -5_i32)
        );
    }
}

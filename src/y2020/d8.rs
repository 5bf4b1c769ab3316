use {
    crate::*,
    bitvec::prelude::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{all_consuming, map, opt},
        error::Error,
        multi::many0,
        sequence::{preceded, terminated},
        Err, IResult,
    },
};

/* --- Day 8: Handheld Halting ---

The kid sitting next to you on the flight is playing a handheld game console that won't turn on: the
boot code (your puzzle input) loops forever. The boot code is a sequence of instructions, one per
line, each an operation (`acc`, `jmp`, or `nop`) and a signed argument (like `+4` or `-99`). `acc`
adds its argument to a single global accumulator (which starts at 0) and moves to the next
instruction; `jmp` jumps to a new instruction relative to itself; `nop` does nothing and moves to
the next instruction.

Run the boot code and halt it immediately before any instruction is executed a second time. What
value is in the accumulator at that moment?

--- Part Two ---

The program is supposed to terminate by attempting to execute an instruction immediately after the
last instruction in the file. Somewhere in the boot code, exactly one `jmp` should be a `nop`, or
one `nop` should be a `jmp` (`acc` instructions are never corrupted). Fix the program by changing
exactly one instruction so that it terminates, and report the accumulator value after it does. */

#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Copy, Debug)]
pub enum Instruction {
    NoOp(i32),
    Accumulate(i32),
    Jump(i32),
}

impl Instruction {
    fn is_flippable(self) -> bool {
        matches!(self, Self::NoOp(_) | Self::Jump(_))
    }

    fn flipped(self) -> Self {
        match self {
            Self::NoOp(operand) => Self::Jump(operand),
            Self::Jump(operand) => Self::NoOp(operand),
            accumulate => accumulate,
        }
    }
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        // Any mnemonic outside this closed set fails the parse, rather than surviving until
        // execution reaches it.
        alt((
            map(preceded(tag("nop "), parse_integer), Self::NoOp),
            map(preceded(tag("acc "), parse_integer), Self::Accumulate),
            map(preceded(tag("jmp "), parse_integer), Self::Jump),
        ))(input)
    }
}

/// A single execution attempt over a borrowed program.
///
/// The accumulator and instruction pointer are owned exclusively by this value: every fresh
/// attempt, including each bug-fix trial in question 2, constructs a new `Console` over its own
/// program.
pub struct Console<'p> {
    program: &'p [Instruction],
    accumulator: i32,
    position: i32,
}

impl<'p> Console<'p> {
    pub fn new(program: &'p [Instruction]) -> Self {
        Self {
            program,
            accumulator: 0_i32,
            position: 0_i32,
        }
    }

    #[inline]
    pub fn accumulator(&self) -> i32 {
        self.accumulator
    }

    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[inline]
    pub fn has_terminated(&self) -> bool {
        self.position as usize == self.program.len()
    }

    /// Executes the instruction at the current position, returning `true` iff the new position is
    /// one past the final instruction (natural termination).
    ///
    /// The position must index a valid instruction when this is called: the caller is responsible
    /// for not stepping again once termination has been reported.
    pub fn step(&mut self) -> bool {
        match self.program[self.position as usize] {
            Instruction::NoOp(_) => {
                self.position += 1_i32;
            }
            Instruction::Accumulate(operand) => {
                self.accumulator += operand;
                self.position += 1_i32;
            }
            Instruction::Jump(operand) => {
                self.position += operand;
            }
        }

        self.has_terminated()
    }
}

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug)]
pub struct ExecutionResult {
    pub accumulator: i32,
    pub infinite_loop: bool,
}

/// Runs a program until it either terminates naturally or is about to execute an instruction a
/// second time.
///
/// Every position is visited at most once before one of the two exits fires, so this runs at most
/// (program length + 1) steps.
fn execute(program: &[Instruction]) -> ExecutionResult {
    let mut console: Console = Console::new(program);

    if console.has_terminated() {
        // Zero-length program: nothing to run.
        return ExecutionResult {
            accumulator: console.accumulator(),
            infinite_loop: false,
        };
    }

    let mut visited: BitVec = bitvec![0; program.len()];

    visited.set(0_usize, true);

    loop {
        let last_accumulator: i32 = console.accumulator();

        if console.step() {
            return ExecutionResult {
                accumulator: console.accumulator(),
                infinite_loop: false,
            };
        }

        let position: usize = console.position() as usize;

        if visited[position] {
            // The reported value is the accumulator from just before the step that revisited a
            // position, not the value at the revisited position itself. That asymmetry matches the
            // handheld's observed behavior, and question 1's answer depends on it.
            return ExecutionResult {
                accumulator: last_accumulator,
                infinite_loop: true,
            };
        }

        visited.set(position, true);
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn run_until_repeat(&self) -> ExecutionResult {
        execute(&self.0)
    }

    fn accumulator_before_loop(&self) -> i32 {
        self.run_until_repeat().accumulator
    }

    /// Yields, in line order, one copy of the program per `jmp`/`nop` instruction, with just that
    /// instruction's operator flipped. `acc` instructions are never candidates, and each copy
    /// differs from the source program in exactly one element.
    fn iter_flipped_programs(&self) -> impl Iterator<Item = (usize, Vec<Instruction>)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, instruction)| instruction.is_flippable())
            .map(|(index, instruction)| {
                let mut program: Vec<Instruction> = self.0.clone();

                program[index] = instruction.flipped();

                (index, program)
            })
    }

    fn try_fixed_accumulator(&self) -> Option<i32> {
        self.iter_flipped_programs().find_map(|(_, program)| {
            let result: ExecutionResult = execute(&program);

            (!result.infinite_loop).then_some(result.accumulator)
        })
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        // `all_consuming` rejects a program with an unrecognized mnemonic outright, instead of
        // silently truncating the program at the offending line.
        map(
            all_consuming(many0(terminated(Instruction::parse, opt(line_ending)))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, args: &QuestionArgs) {
        if args.verbose {
            dbg!(self.run_until_repeat());
        } else {
            dbg!(self.accumulator_before_loop());
        }
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_fixed_accumulator());
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
        nop +0\n\
        acc +1\n\
        jmp +4\n\
        acc +3\n\
        jmp -3\n\
        acc -99\n\
        acc +1\n\
        jmp -4\n\
        acc +6";

    fn solution() -> &'static Solution {
        use Instruction::{Accumulate as Acc, Jump as Jmp, NoOp as Nop};

        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                Nop(0_i32),
                Acc(1_i32),
                Jmp(4_i32),
                Acc(3_i32),
                Jmp(-3_i32),
                Acc(-99_i32),
                Acc(1_i32),
                Jmp(-4_i32),
                Acc(6_i32),
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_unknown_operator_fails_to_parse() {
        // `jnz` is outside the instruction set, and the rejection happens while parsing, not when
        // execution reaches the line.
        assert!(Solution::try_from("nop +0\njnz -2\nacc +1").is_err());
    }

    #[test]
    fn test_console_step() {
        // (position, accumulator) pairs observed after each step of the example program.
        const STATES_AFTER_STEPS: &'static [(i32, i32)] = &[
            (1_i32, 0_i32),
            (2_i32, 1_i32),
            (6_i32, 1_i32),
            (7_i32, 2_i32),
            (3_i32, 2_i32),
            (4_i32, 5_i32),
            (1_i32, 5_i32),
        ];

        let mut console: Console = Console::new(&solution().0);

        assert_eq!(console.position(), 0_i32);
        assert_eq!(console.accumulator(), 0_i32);
        assert!(!console.has_terminated());

        for (position, accumulator) in STATES_AFTER_STEPS.iter().copied() {
            assert!(!console.step());
            assert_eq!(console.position(), position);
            assert_eq!(console.accumulator(), accumulator);
        }
    }

    #[test]
    fn test_console_step_reports_termination() {
        let program: Vec<Instruction> = vec![Instruction::Accumulate(1_i32)];
        let mut console: Console = Console::new(&program);

        assert!(console.step());
        assert!(console.has_terminated());
        assert_eq!(console.position(), 1_i32);
        assert_eq!(console.accumulator(), 1_i32);
    }

    #[test]
    fn test_run_until_repeat() {
        assert_eq!(
            solution().run_until_repeat(),
            ExecutionResult {
                accumulator: 5_i32,
                infinite_loop: true,
            }
        );
    }

    #[test]
    fn test_programs_without_jumps_terminate() {
        use Instruction::{Accumulate as Acc, NoOp as Nop};

        let solution: Solution = Solution(vec![Nop(7_i32), Acc(2_i32), Acc(-5_i32), Nop(0_i32)]);

        assert_eq!(
            solution.run_until_repeat(),
            ExecutionResult {
                accumulator: -3_i32,
                infinite_loop: false,
            }
        );
    }

    #[test]
    fn test_step_count_is_bounded_by_program_len() {
        let program: &[Instruction] = &solution().0;
        let mut console: Console = Console::new(program);
        let mut visited: BitVec = bitvec![0; program.len()];
        let mut steps: usize = 0_usize;

        visited.set(0_usize, true);

        loop {
            steps += 1_usize;

            if console.step() {
                break;
            }

            let position: usize = console.position() as usize;

            if visited[position] {
                break;
            }

            visited.set(position, true);
        }

        assert!(steps <= program.len() + 1_usize);
    }

    #[test]
    fn test_iter_flipped_programs_flips_a_single_non_acc_instruction() {
        for (index, program) in solution().iter_flipped_programs() {
            let differing_indices: Vec<usize> = program
                .iter()
                .zip(solution().0.iter())
                .enumerate()
                .filter_map(|(index, (mutated, original))| (mutated != original).then_some(index))
                .collect();

            assert_eq!(differing_indices, vec![index]);
            assert!(solution().0[index].is_flippable());
            assert_eq!(program[index], solution().0[index].flipped());
        }
    }

    #[test]
    fn test_try_fixed_accumulator() {
        assert_eq!(solution().try_fixed_accumulator(), Some(8_i32));
    }

    #[test]
    fn test_fix_flips_the_eighth_line() {
        assert_eq!(
            solution().iter_flipped_programs().find_map(|(index, program)| {
                (!execute(&program).infinite_loop).then_some(index)
            }),
            Some(7_usize)
        );
    }

    #[test]
    fn test_try_fixed_accumulator_with_no_fix() {
        use Instruction::Jump as Jmp;

        // Flipping either instruction leaves the other jump spinning in place.
        let solution: Solution = Solution(vec![Jmp(0_i32), Jmp(0_i32)]);

        assert_eq!(solution.try_fixed_accumulator(), None);
    }
}

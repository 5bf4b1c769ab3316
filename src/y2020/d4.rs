use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::{is_not, tag, take_while_m_n},
        character::complete::{alpha1, line_ending},
        combinator::{all_consuming, map, map_res, opt},
        error::Error,
        multi::{many0, many1_count},
        sequence::{preceded, separated_pair, terminated, tuple},
        Err, IResult,
    },
    std::ops::RangeInclusive,
};

/* --- Day 4: Passport Processing ---

The airport line is slow because the automatic passport scanners cannot handle the batch file (your
puzzle input): passports are key:value pairs separated by spaces or newlines, with blank lines
between passports. A passport needs `byr`, `iyr`, `eyr`, `hgt`, `hcl`, `ecl`, and `pid`; `cid` is
optional (this is how we sneak our North Pole Credentials through). How many passports have all the
required fields?

--- Part Two ---

The scanners are better at detecting garbage, so each field now has strict rules: `byr` in
1920..=2002, `iyr` in 2010..=2020, `eyr` in 2020..=2030, `hgt` a number followed by `cm`
(150..=193) or `in` (59..=76), `hcl` a `#` followed by six lowercase hex digits, `ecl` one of
`amb`, `blu`, `brn`, `gry`, `grn`, `hzl`, or `oth`, and `pid` exactly nine digits. How many
passports have all required fields with valid values? */

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Default)]
struct Passport {
    birth_year: Option<String>,
    issue_year: Option<String>,
    expiration_year: Option<String>,
    height: Option<String>,
    hair_color: Option<String>,
    eye_color: Option<String>,
    passport_id: Option<String>,
    country_id: Option<String>,
}

impl Passport {
    fn has_required_fields(&self) -> bool {
        self.birth_year.is_some()
            && self.issue_year.is_some()
            && self.expiration_year.is_some()
            && self.height.is_some()
            && self.hair_color.is_some()
            && self.eye_color.is_some()
            && self.passport_id.is_some()
    }

    fn is_valid_year(value: Option<&str>, range: RangeInclusive<u16>) -> bool {
        value.map_or(false, |value| {
            value.len() == 4_usize
                && value
                    .parse()
                    .map_or(false, |year: u16| range.contains(&year))
        })
    }

    fn has_valid_height(&self) -> bool {
        self.height.as_deref().map_or(false, |height| {
            all_consuming(tuple((parse_integer::<u16>, alt((tag("cm"), tag("in"))))))(height)
                .map_or(false, |(_, (magnitude, unit))| {
                    if unit == "cm" {
                        (150_u16..=193_u16).contains(&magnitude)
                    } else {
                        (59_u16..=76_u16).contains(&magnitude)
                    }
                })
        })
    }

    fn has_valid_hair_color(&self) -> bool {
        self.hair_color.as_deref().map_or(false, |hair_color| {
            all_consuming::<_, _, Error<&str>, _>(preceded(
                tag("#"),
                take_while_m_n(6_usize, 6_usize, |c: char| {
                    c.is_ascii_digit() || ('a'..='f').contains(&c)
                }),
            ))(hair_color)
            .is_ok()
        })
    }

    fn has_valid_eye_color(&self) -> bool {
        self.eye_color.as_deref().map_or(false, |eye_color| {
            matches!(
                eye_color,
                "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"
            )
        })
    }

    fn has_valid_passport_id(&self) -> bool {
        self.passport_id.as_deref().map_or(false, |passport_id| {
            passport_id.len() == 9_usize && passport_id.chars().all(|c| c.is_ascii_digit())
        })
    }

    fn is_strictly_valid(&self) -> bool {
        Self::is_valid_year(self.birth_year.as_deref(), 1920_u16..=2002_u16)
            && Self::is_valid_year(self.issue_year.as_deref(), 2010_u16..=2020_u16)
            && Self::is_valid_year(self.expiration_year.as_deref(), 2020_u16..=2030_u16)
            && self.has_valid_height()
            && self.has_valid_hair_color()
            && self.has_valid_eye_color()
            && self.has_valid_passport_id()
    }
}

impl Parse for Passport {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let mut passport: Self = Self::default();

        // A key outside the known set fails the parse of the whole batch.
        let (input, _) = many1_count(map_res(
            terminated(
                separated_pair(alpha1, tag(":"), is_not(" \t\r\n")),
                opt(alt((tag(" "), line_ending))),
            ),
            |(key, value): (&str, &str)| -> Result<(), ()> {
                *match key {
                    "byr" => &mut passport.birth_year,
                    "iyr" => &mut passport.issue_year,
                    "eyr" => &mut passport.expiration_year,
                    "hgt" => &mut passport.height,
                    "hcl" => &mut passport.hair_color,
                    "ecl" => &mut passport.eye_color,
                    "pid" => &mut passport.passport_id,
                    "cid" => &mut passport.country_id,
                    _ => return Err(()),
                } = Some(value.into());

                Ok(())
            },
        ))(input)?;

        Ok((input, passport))
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Passport>);

impl Solution {
    fn count_with_required_fields(&self) -> usize {
        self.0
            .iter()
            .filter(|passport| passport.has_required_fields())
            .count()
    }

    fn count_strictly_valid(&self) -> usize {
        self.0
            .iter()
            .filter(|passport| passport.is_strictly_valid())
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            all_consuming(many0(terminated(Passport::parse, opt(line_ending)))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_with_required_fields());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_strictly_valid());
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
        ecl:gry pid:860033327 eyr:2020 hcl:#fffffd\n\
        byr:1937 iyr:2017 cid:147 hgt:183cm\n\
        \n\
        iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884\n\
        hcl:#cfa07d byr:1929\n\
        \n\
        hcl:#ae17e1 iyr:2013\n\
        eyr:2024\n\
        ecl:brn pid:760753108 byr:1931\n\
        hgt:179cm\n\
        \n\
        hcl:#cba045 iyr:2011 ecl:brn hgt:59in\n\
        eyr:2025 pid:166559648";

    const INVALID_PASSPORTS_STR: &'static str = "\
        eyr:1972 cid:100\n\
        hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926\n\
        \n\
        iyr:2019\n\
        hcl:#602927 eyr:1967 hgt:170cm\n\
        ecl:grn pid:012533040 byr:1946\n\
        \n\
        hcl:dab227 iyr:2012\n\
        ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277\n\
        \n\
        hgt:59cm ecl:zzz\n\
        eyr:2038 hcl:74454a iyr:2023\n\
        pid:3556412378 byr:2007";

    const VALID_PASSPORTS_STR: &'static str = "\
        pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980\n\
        hcl:#623a2f\n\
        \n\
        eyr:2029 ecl:blu cid:129 byr:1989\n\
        iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm\n\
        \n\
        hcl:#888785\n\
        hgt:164cm byr:2001 iyr:2015 cid:88\n\
        pid:545766238 ecl:hzl\n\
        eyr:2022\n\
        \n\
        iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                Passport {
                    birth_year: Some("1937".into()),
                    issue_year: Some("2017".into()),
                    expiration_year: Some("2020".into()),
                    height: Some("183cm".into()),
                    hair_color: Some("#fffffd".into()),
                    eye_color: Some("gry".into()),
                    passport_id: Some("860033327".into()),
                    country_id: Some("147".into()),
                },
                Passport {
                    birth_year: Some("1929".into()),
                    issue_year: Some("2013".into()),
                    expiration_year: Some("2023".into()),
                    height: None,
                    hair_color: Some("#cfa07d".into()),
                    eye_color: Some("amb".into()),
                    passport_id: Some("028048884".into()),
                    country_id: Some("350".into()),
                },
                Passport {
                    birth_year: Some("1931".into()),
                    issue_year: Some("2013".into()),
                    expiration_year: Some("2024".into()),
                    height: Some("179cm".into()),
                    hair_color: Some("#ae17e1".into()),
                    eye_color: Some("brn".into()),
                    passport_id: Some("760753108".into()),
                    country_id: None,
                },
                Passport {
                    birth_year: None,
                    issue_year: Some("2011".into()),
                    expiration_year: Some("2025".into()),
                    height: Some("59in".into()),
                    hair_color: Some("#cba045".into()),
                    eye_color: Some("brn".into()),
                    passport_id: Some("166559648".into()),
                    country_id: None,
                },
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_count_with_required_fields() {
        assert_eq!(solution().count_with_required_fields(), 2_usize);
    }

    #[test]
    fn test_count_strictly_valid() {
        assert_eq!(
            Solution::try_from(INVALID_PASSPORTS_STR)
                .unwrap()
                .count_strictly_valid(),
            0_usize
        );
        assert_eq!(
            Solution::try_from(VALID_PASSPORTS_STR)
                .unwrap()
                .count_strictly_valid(),
            4_usize
        );
    }
}

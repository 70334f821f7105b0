use std::str::FromStr;

/// A line entered by the user.
///
/// Exercise and set positions are 1-based, as shown by `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Name(String),
    Catalog,
    CatalogAdd { name: String, description: String },
    Add(String),
    Pick(u32),
    Remove(usize),
    Set {
        exercise: usize,
        reps: String,
        weight: String,
    },
    RemoveSet {
        exercise: usize,
        set: usize,
    },
    Move {
        from: usize,
        to: usize,
    },
    Timer,
    TimerReset,
    Rest(u32),
    Finish,
    History,
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("")]
    Empty,
    #[error("Unknown command \"{0}\", type \"help\" for a list of commands")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("\"{0}\" is not a valid number")]
    InvalidNumber(String),
    #[error("Positions start at 1")]
    ZeroPosition,
}

pub const HELP: &str = "\
Commands:
  show                              show the current workout
  name <text>                       rename the workout
  catalog                           list the exercise library
  catalog add <name> | <desc>       add an exercise to the library
  add <name>                        add an exercise
  pick <catalog id>                 add an exercise from the library
  rm <exercise #>                   delete an exercise
  set <exercise #> <reps> <weight>  record a set and start the rest timer
  rmset <exercise #> <set #>        delete a set
  move <from #> <to #>              move an exercise to another position
  timer                             start or stop the workout timer
  timer reset                       reset the workout timer
  rest <seconds>                    change the rest period
  finish                            save the workout and start a new one
  history                           list finished workouts
  quit                              exit";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));
        let args = rest.split_whitespace().collect::<Vec<_>>();

        match (keyword, args.as_slice()) {
            ("", _) => Err(ParseError::Empty),
            ("help" | "?", _) => Ok(Command::Help),
            ("show" | "ls", []) => Ok(Command::Show),
            ("name", [_, ..]) => Ok(Command::Name(rest.to_string())),
            ("name", []) => Err(ParseError::Usage("name <text>")),
            ("catalog", []) => Ok(Command::Catalog),
            ("catalog", ["add", ..]) => {
                let entry = rest.strip_prefix("add").unwrap_or(rest);
                let (name, description) = entry.split_once('|').unwrap_or((entry, ""));
                Ok(Command::CatalogAdd {
                    name: name.trim().to_string(),
                    description: description.trim().to_string(),
                })
            }
            ("add", [_, ..]) => Ok(Command::Add(rest.to_string())),
            ("add", []) => Err(ParseError::Usage("add <name>")),
            ("pick", [id]) => Ok(Command::Pick(number(id)?)),
            ("pick", _) => Err(ParseError::Usage("pick <catalog id>")),
            ("rm", [exercise]) => Ok(Command::Remove(position(exercise)?)),
            ("rm", _) => Err(ParseError::Usage("rm <exercise #>")),
            ("set", [exercise, reps, weight]) => Ok(Command::Set {
                exercise: position(exercise)?,
                reps: (*reps).to_string(),
                weight: (*weight).to_string(),
            }),
            ("set", _) => Err(ParseError::Usage("set <exercise #> <reps> <weight>")),
            ("rmset", [exercise, set]) => Ok(Command::RemoveSet {
                exercise: position(exercise)?,
                set: position(set)?,
            }),
            ("rmset", _) => Err(ParseError::Usage("rmset <exercise #> <set #>")),
            ("move", [from, to]) => Ok(Command::Move {
                from: position(from)?,
                to: position(to)?,
            }),
            ("move", _) => Err(ParseError::Usage("move <from #> <to #>")),
            ("timer", []) => Ok(Command::Timer),
            ("timer", ["reset"]) => Ok(Command::TimerReset),
            ("rest", [seconds]) => Ok(Command::Rest(number(seconds)?)),
            ("rest", _) => Err(ParseError::Usage("rest <seconds>")),
            ("finish", []) => Ok(Command::Finish),
            ("history", []) => Ok(Command::History),
            ("quit" | "exit" | "q", []) => Ok(Command::Quit),
            _ => Err(ParseError::Unknown(line.to_string())),
        }
    }
}

fn number<T: FromStr>(value: &str) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

fn position(value: &str) -> Result<usize, ParseError> {
    match number::<usize>(value)? {
        0 => Err(ParseError::ZeroPosition),
        position => Ok(position),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("help", Command::Help)]
    #[case("show", Command::Show)]
    #[case("  show  ", Command::Show)]
    #[case("name Leg  Day", Command::Name(String::from("Leg  Day")))]
    #[case("catalog", Command::Catalog)]
    #[case(
        "catalog add Front Squat | Squat with the bar in front.",
        Command::CatalogAdd {
            name: String::from("Front Squat"),
            description: String::from("Squat with the bar in front."),
        }
    )]
    #[case(
        "catalog add Front Squat",
        Command::CatalogAdd {
            name: String::from("Front Squat"),
            description: String::new(),
        }
    )]
    #[case("add Bench Press", Command::Add(String::from("Bench Press")))]
    #[case("pick 2", Command::Pick(2))]
    #[case("rm 1", Command::Remove(1))]
    #[case(
        "set 1 10 102.5",
        Command::Set {
            exercise: 1,
            reps: String::from("10"),
            weight: String::from("102.5"),
        }
    )]
    #[case("rmset 2 3", Command::RemoveSet { exercise: 2, set: 3 })]
    #[case("move 3 1", Command::Move { from: 3, to: 1 })]
    #[case("timer", Command::Timer)]
    #[case("timer reset", Command::TimerReset)]
    #[case("rest 90", Command::Rest(90))]
    #[case("finish", Command::Finish)]
    #[case("history", Command::History)]
    #[case("quit", Command::Quit)]
    fn test_parse(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>(), Ok(expected));
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("   ", ParseError::Empty)]
    #[case("jump", ParseError::Unknown(String::from("jump")))]
    #[case("show all", ParseError::Unknown(String::from("show all")))]
    #[case("timer stop", ParseError::Unknown(String::from("timer stop")))]
    #[case("add", ParseError::Usage("add <name>"))]
    #[case("set 1 10", ParseError::Usage("set <exercise #> <reps> <weight>"))]
    #[case("rm one", ParseError::InvalidNumber(String::from("one")))]
    #[case("rm 0", ParseError::ZeroPosition)]
    #[case("move 1 -1", ParseError::InvalidNumber(String::from("-1")))]
    #[case("rest 1.5", ParseError::InvalidNumber(String::from("1.5")))]
    fn test_parse_invalid(#[case] line: &str, #[case] expected: ParseError) {
        assert_eq!(line.parse::<Command>(), Err(expected));
    }
}

use super::MenuError;

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::{FromStr, SplitWhitespace};

/// Operation selected by the first token of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Length,
    GetFirst,
    GetLast,
    Get,
    Push,
    PushPos,
    Pop,
    PopPos,
    PopBatch,
    Clear,
    Print,
    ReversePrint,
    Undefined,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Length,
        Operation::GetFirst,
        Operation::GetLast,
        Operation::Get,
        Operation::Push,
        Operation::PushPos,
        Operation::Pop,
        Operation::PopPos,
        Operation::PopBatch,
        Operation::Clear,
        Operation::Print,
        Operation::ReversePrint,
    ];

    /// Exact, case-sensitive match. Anything unknown is `Undefined`.
    pub fn parse(token: &str) -> Self {
        match token {
            "length" => Operation::Length,
            "getfirst" => Operation::GetFirst,
            "getlast" => Operation::GetLast,
            "get" => Operation::Get,
            "push" => Operation::Push,
            "pushpos" => Operation::PushPos,
            "pop" => Operation::Pop,
            "poppos" => Operation::PopPos,
            "popbatch" => Operation::PopBatch,
            "clear" => Operation::Clear,
            "print" => Operation::Print,
            "reverseprint" => Operation::ReversePrint,
            _ => Operation::Undefined,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Length => "length",
            Operation::GetFirst => "getfirst",
            Operation::GetLast => "getlast",
            Operation::Get => "get",
            Operation::Push => "push",
            Operation::PushPos => "pushpos",
            Operation::Pop => "pop",
            Operation::PopPos => "poppos",
            Operation::PopBatch => "popbatch",
            Operation::Clear => "clear",
            Operation::Print => "print",
            Operation::ReversePrint => "reverseprint",
            Operation::Undefined => "undefined",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Operation::Get => "get <position>",
            Operation::Push => "push <value>",
            Operation::PushPos => "pushpos <position> <value>",
            Operation::PopPos => "poppos <position>",
            Operation::PopBatch => "popbatch <count>",
            other => other.name(),
        }
    }
}

/// A fully parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    Length,
    GetFirst,
    GetLast,
    Get { position: usize },
    Push { value: T },
    PushAt { position: usize, value: T },
    Pop,
    PopAt { position: usize },
    PopBatch { count: usize },
    Clear,
    Print,
    ReversePrint,
    Undefined(String),
}

impl<T> Command<T> {
    pub fn operation(&self) -> Operation {
        match self {
            Command::Length => Operation::Length,
            Command::GetFirst => Operation::GetFirst,
            Command::GetLast => Operation::GetLast,
            Command::Get { .. } => Operation::Get,
            Command::Push { .. } => Operation::Push,
            Command::PushAt { .. } => Operation::PushPos,
            Command::Pop => Operation::Pop,
            Command::PopAt { .. } => Operation::PopPos,
            Command::PopBatch { .. } => Operation::PopBatch,
            Command::Clear => Operation::Clear,
            Command::Print => Operation::Print,
            Command::ReversePrint => Operation::ReversePrint,
            Command::Undefined(_) => Operation::Undefined,
        }
    }
}

impl<T> Command<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Parses one line of whitespace-separated tokens. Blank lines yield `None`.
    /// Tokens past the ones an operation needs are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, MenuError> {
        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(token) => token,
            None => return Ok(None),
        };

        let operation = Operation::parse(first);
        let mut args = Args { operation, tokens };

        let command = match operation {
            Operation::Length => Command::Length,
            Operation::GetFirst => Command::GetFirst,
            Operation::GetLast => Command::GetLast,
            Operation::Get => Command::Get {
                position: args.index("position")?,
            },
            Operation::Push => Command::Push {
                value: args.value()?,
            },
            Operation::PushPos => {
                let position = args.index("position")?;
                let value = args.value()?;
                Command::PushAt { position, value }
            }
            Operation::Pop => Command::Pop,
            Operation::PopPos => Command::PopAt {
                position: args.index("position")?,
            },
            Operation::PopBatch => Command::PopBatch {
                count: args.index("count")?,
            },
            Operation::Clear => Command::Clear,
            Operation::Print => Command::Print,
            Operation::ReversePrint => Command::ReversePrint,
            Operation::Undefined => Command::Undefined(first.to_string()),
        };
        Ok(Some(command))
    }
}

struct Args<'a> {
    operation: Operation,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, name: &'static str) -> Result<&'a str, MenuError> {
        self.tokens.next().ok_or(MenuError::MissingArgument {
            operation: self.operation.name(),
            name,
        })
    }

    fn index(&mut self, name: &'static str) -> Result<usize, MenuError> {
        let token = self.next(name)?;
        let invalid = |reason: String| MenuError::InvalidArgument {
            name,
            token: token.to_string(),
            reason,
        };

        let value: i64 = token.parse().map_err(|e| invalid(format!("{}", e)))?;
        if value < 0 {
            return Err(MenuError::Negative { name, value });
        }
        usize::try_from(value).map_err(|e| invalid(format!("{}", e)))
    }

    fn value<T>(&mut self) -> Result<T, MenuError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let name = "value";
        let token = self.next(name)?;
        token.parse().map_err(|e: T::Err| MenuError::InvalidArgument {
            name,
            token: token.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Command, Operation};
    use crate::menu::MenuError;

    fn parse(line: &str) -> Result<Option<Command<i64>>, MenuError> {
        Command::parse(line)
    }

    #[test]
    fn test_operation_names() {
        for op in Operation::ALL.iter() {
            assert_eq!(Operation::parse(op.name()), *op);
        }
        assert_eq!(Operation::parse("PUSH"), Operation::Undefined);
        assert_eq!(Operation::parse("quit"), Operation::Undefined);
        assert_eq!(Operation::PushPos.usage(), "pushpos <position> <value>");
        assert_eq!(Operation::Clear.usage(), "clear");
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   \t ").unwrap(), None);
        assert_eq!(parse("length").unwrap(), Some(Command::Length));
        assert_eq!(parse("  get   2 ").unwrap(), Some(Command::Get { position: 2 }));
        assert_eq!(parse("push -7").unwrap(), Some(Command::Push { value: -7 }));
        assert_eq!(
            parse("pushpos 1 99").unwrap(),
            Some(Command::PushAt { position: 1, value: 99 })
        );
        assert_eq!(parse("poppos 0").unwrap(), Some(Command::PopAt { position: 0 }));
        assert_eq!(parse("popbatch 3").unwrap(), Some(Command::PopBatch { count: 3 }));
        assert_eq!(parse("print extra tokens").unwrap(), Some(Command::Print));
        assert_eq!(
            parse("frobnicate 1").unwrap(),
            Some(Command::Undefined("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        match parse("push") {
            Err(MenuError::MissingArgument { operation, name }) => {
                assert_eq!(operation, "push");
                assert_eq!(name, "value");
            }
            other => panic!("unexpected {:?}", other),
        }

        match parse("pushpos 1") {
            Err(MenuError::MissingArgument { name, .. }) => assert_eq!(name, "value"),
            other => panic!("unexpected {:?}", other),
        }

        match parse("get two") {
            Err(MenuError::InvalidArgument { name, token, .. }) => {
                assert_eq!(name, "position");
                assert_eq!(token, "two");
            }
            other => panic!("unexpected {:?}", other),
        }

        match parse("poppos -1") {
            Err(MenuError::Negative { name, value }) => {
                assert_eq!(name, "position");
                assert_eq!(value, -1);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(matches!(
            parse("push 99999999999999999999"),
            Err(MenuError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_command_operation() {
        let cmd: Command<i64> = Command::PushAt { position: 0, value: 1 };
        assert_eq!(cmd.operation(), Operation::PushPos);
        assert_eq!(Command::<i64>::Undefined("x".into()).operation(), Operation::Undefined);
    }
}

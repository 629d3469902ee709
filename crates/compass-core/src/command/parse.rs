use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CompassError, Result};
use crate::graph::LocationId;

/// Most classes a single `insert` may enroll a student in
pub const MAX_CLASSES: usize = 6;

static INSERT_RE: OnceLock<Regex> = OnceLock::new();
static CLASS_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn insert_re() -> &'static Regex {
    INSERT_RE.get_or_init(|| {
        Regex::new(r#"^insert\s+"([^"]*)"\s+(.*)$"#).expect("Invalid insert regex pattern")
    })
}

fn class_code_re() -> &'static Regex {
    CLASS_CODE_RE
        .get_or_init(|| Regex::new(r"^[A-Z]{3}\d{4}$").expect("Invalid class code regex pattern"))
}

/// A parsed interpreter command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert {
        name: String,
        id: String,
        residence: LocationId,
        classes: Vec<String>,
    },
    Remove {
        id: String,
    },
    DropClass {
        id: String,
        code: String,
    },
    ReplaceClass {
        id: String,
        from: String,
        to: String,
    },
    RemoveClass {
        code: String,
    },
    ToggleEdgesClosure {
        pairs: Vec<(LocationId, LocationId)>,
    },
    CheckEdgeStatus {
        a: LocationId,
        b: LocationId,
    },
    IsConnected {
        a: LocationId,
        b: LocationId,
    },
    PrintShortestEdges {
        id: String,
    },
    PrintStudentZone {
        id: String,
    },
    VerifySchedule {
        id: String,
    },
}

fn malformed(line: &str) -> CompassError {
    CompassError::MalformedCommand(line.to_string())
}

fn location(token: &str, line: &str) -> Result<LocationId> {
    token.parse().map_err(|_| malformed(line))
}

fn class_code(token: &str, line: &str) -> Result<String> {
    if class_code_re().is_match(token) {
        Ok(token.to_string())
    } else {
        Err(malformed(line))
    }
}

fn parse_insert(line: &str) -> Result<Command> {
    let caps = insert_re().captures(line).ok_or_else(|| malformed(line))?;
    let name = caps[1].to_string();
    let rest: Vec<&str> = caps[2].split_whitespace().collect();

    let [id, residence, count, codes @ ..] = rest.as_slice() else {
        return Err(malformed(line));
    };
    let count: usize = count.parse().map_err(|_| malformed(line))?;
    if count == 0 || count > MAX_CLASSES || count != codes.len() {
        return Err(malformed(line));
    }

    Ok(Command::Insert {
        name,
        id: id.to_string(),
        residence: location(residence, line)?,
        classes: codes
            .iter()
            .map(|code| class_code(code, line))
            .collect::<Result<_>>()?,
    })
}

fn parse_toggle(args: &[&str], line: &str) -> Result<Command> {
    let [count, coords @ ..] = args else {
        return Err(malformed(line));
    };
    let count: usize = count.parse().map_err(|_| malformed(line))?;
    if count.checked_mul(2) != Some(coords.len()) {
        return Err(malformed(line));
    }

    let pairs = coords
        .chunks_exact(2)
        .map(|pair| Ok((location(pair[0], line)?, location(pair[1], line)?)))
        .collect::<Result<_>>()?;
    Ok(Command::ToggleEdgesClosure { pairs })
}

impl FromStr for Command {
    type Err = CompassError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.starts_with("insert") {
            return parse_insert(line);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Err(malformed(line));
        };

        let command = match (name, args) {
            ("remove", [id]) => Command::Remove { id: id.to_string() },
            ("dropClass", [id, code]) => Command::DropClass {
                id: id.to_string(),
                code: class_code(code, line)?,
            },
            ("replaceClass", [id, from, to]) => Command::ReplaceClass {
                id: id.to_string(),
                from: class_code(from, line)?,
                to: class_code(to, line)?,
            },
            ("removeClass", [code]) => Command::RemoveClass {
                code: class_code(code, line)?,
            },
            ("toggleEdgesClosure", args) => parse_toggle(args, line)?,
            ("checkEdgeStatus", [a, b]) => Command::CheckEdgeStatus {
                a: location(a, line)?,
                b: location(b, line)?,
            },
            ("isConnected", [a, b]) => Command::IsConnected {
                a: location(a, line)?,
                b: location(b, line)?,
            },
            ("printShortestEdges", [id]) => Command::PrintShortestEdges { id: id.to_string() },
            ("printStudentZone", [id]) => Command::PrintStudentZone { id: id.to_string() },
            ("verifySchedule", [id]) => Command::VerifySchedule { id: id.to_string() },
            _ => return Err(malformed(line)),
        };

        Ok(command)
    }
}

use crate::error::CommandError;
use crate::registry::GalleryId;
use std::fmt;
use std::str::FromStr;

pub const SOCKET_PATH: &str = "/tmp/orbit.sock";

/// One control-socket instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Pause,
    Resume,
    Next,
    Previous,
    /// Signed so that out-of-range requests (including negatives) reach the gallery and are
    /// ignored there rather than failing to parse.
    GoTo(i64),
}

impl fmt::Display for GalleryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pause => write!(f, "pause"),
            Self::Resume => write!(f, "resume"),
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "previous"),
            Self::GoTo(index) => write!(f, "goto {index}"),
        }
    }
}

impl FromStr for GalleryCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let command = match name.to_ascii_lowercase().as_str() {
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "next" => Self::Next,
            "prev" | "previous" => Self::Previous,
            "goto" | "go" => {
                let arg = words
                    .next()
                    .ok_or_else(|| CommandError::MissingArgument(name.to_string()))?;
                let index = arg
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(arg.to_string()))?;
                Self::GoTo(index)
            }
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(command)
    }
}

/// A command addressed to a specific gallery, or to the default one when `target` is empty.
/// Wire form: `[@<id>] <command>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub target: Option<GalleryId>,
    pub command: GalleryCommand,
}

impl Request {
    pub fn new(target: Option<GalleryId>, command: GalleryCommand) -> Self {
        Self { target, command }
    }
}

impl From<GalleryCommand> for Request {
    fn from(command: GalleryCommand) -> Self {
        Self::new(None, command)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(id) => write!(f, "@{} {}", id, self.command),
            None => write!(f, "{}", self.command),
        }
    }
}

impl FromStr for Request {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix('@') {
            Some(rest) => {
                let (id, command) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let id: u64 = id
                    .parse()
                    .map_err(|_| CommandError::InvalidTarget(id.to_string()))?;
                Ok(Self::new(Some(GalleryId::from(id)), command.parse()?))
            }
            None => Ok(Self::new(None, s.parse()?)),
        }
    }
}

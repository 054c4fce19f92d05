//! UI event types delivered to the sketch state.
//!
//! Front-ends map their native pointer, slider and button events to these
//! values. The script runner parses them from text, one per line.

use std::fmt;
use std::str::FromStr;

/// One event from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Primary button pressed over a cell
    PointerDown { x: u32, y: u32 },
    /// Pointer entered a cell; paints only between a down and an up
    PointerEnter { x: u32, y: u32 },
    /// Primary button released
    PointerUp,
    /// Size slider moved; slider values may be anything, including negative
    ResizeRequested(i64),
    /// Clear button clicked
    ClearRequested,
    /// Tool button clicked, carrying the button identifier
    ToolButtonClicked(String),
    /// Ask the front-end to print the current grid
    Print,
}

impl UiEvent {
    /// Parses a script line such as `down 3 4`, `tool rainbow` or `resize 32`.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let event = match command.as_str() {
            "down" => {
                let (x, y) = parse_coords(&command, &args)?;
                UiEvent::PointerDown { x, y }
            }
            "enter" | "drag" => {
                let (x, y) = parse_coords(&command, &args)?;
                UiEvent::PointerEnter { x, y }
            }
            "up" => {
                expect_arity(&command, &args, 0)?;
                UiEvent::PointerUp
            }
            "resize" | "size" => {
                expect_arity(&command, &args, 1)?;
                let size = args[0]
                    .parse::<i64>()
                    .map_err(|e| format!("Invalid size '{}': {}", args[0], e))?;
                UiEvent::ResizeRequested(size)
            }
            "clear" => {
                expect_arity(&command, &args, 0)?;
                UiEvent::ClearRequested
            }
            "tool" => {
                expect_arity(&command, &args, 1)?;
                UiEvent::ToolButtonClicked(args[0].to_string())
            }
            "print" => {
                expect_arity(&command, &args, 0)?;
                UiEvent::Print
            }
            other => return Err(format!("Unknown command '{}'", other)),
        };

        Ok(Some(event))
    }
}

impl FromStr for UiEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UiEvent::parse(s)?.ok_or_else(|| "Empty event".to_string())
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::PointerDown { x, y } => write!(f, "down {x} {y}"),
            UiEvent::PointerEnter { x, y } => write!(f, "enter {x} {y}"),
            UiEvent::PointerUp => f.write_str("up"),
            UiEvent::ResizeRequested(size) => write!(f, "resize {size}"),
            UiEvent::ClearRequested => f.write_str("clear"),
            UiEvent::ToolButtonClicked(name) => write!(f, "tool {name}"),
            UiEvent::Print => f.write_str("print"),
        }
    }
}

fn expect_arity(command: &str, args: &[&str], expected: usize) -> Result<(), String> {
    if args.len() != expected {
        return Err(format!(
            "'{}' takes {} argument(s), got {}",
            command,
            expected,
            args.len()
        ));
    }
    Ok(())
}

fn parse_coords(command: &str, args: &[&str]) -> Result<(u32, u32), String> {
    expect_arity(command, args, 2)?;
    let x = args[0]
        .parse::<u32>()
        .map_err(|e| format!("Invalid x coordinate '{}': {}", args[0], e))?;
    let y = args[1]
        .parse::<u32>()
        .map_err(|e| format!("Invalid y coordinate '{}': {}", args[1], e))?;
    Ok((x, y))
}

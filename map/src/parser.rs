//! Recursive descent over classified lines.
//!
//! ```text
//! map    = entity*
//! entity = "{" ( key_value | brush )* "}"
//! brush  = "{" face* "}"
//! face   = "(" x y z ")" "(" x y z ")" "(" x y z ")" texture_field*
//! ```
//!
//! Braces are first balanced over the whole input so that a mismatch is always
//! reported as such, then the grammar runs with one context per parse call.
use std::fmt;

use log::{debug, trace, warn};
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::space0,
    multi::many1,
    sequence::{delimited, preceded, terminated},
    IResult as _IResult,
};

use crate::{
    error::MapError,
    tokenizer::{classify, clean, is_bare, TokenKind},
    types::{Brush, Entity, Face, Map},
    vertex::extract_face_points,
};

type IResult<'a, T> = _IResult<&'a str, T>;

/// Fewer planes than this cannot enclose a volume.
const MIN_BRUSH_FACES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Entity,
    Brush,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Entity => write!(f, "entity"),
            FrameKind::Brush => write!(f, "brush"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    kind: FrameKind,
    /// Line of the opening brace.
    line: usize,
}

struct ParseContext<'a, S> {
    lines: &'a [S],
    cursor: usize,
    stack: Vec<Frame>,
}

impl<'a, S: AsRef<str>> ParseContext<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        Self {
            lines,
            cursor: 0,
            stack: vec![],
        }
    }

    /// Next line that is neither blank nor a comment, trimmed, with its 1-based number.
    fn next_line(&mut self) -> Option<(usize, &'a str, TokenKind)> {
        let lines: &'a [S] = self.lines;

        while let Some(line) = lines.get(self.cursor) {
            let line = clean(line.as_ref());
            self.cursor += 1;

            match classify(line) {
                TokenKind::Comment => trace!("Line {}: skipping comment", self.cursor),
                TokenKind::None if line.is_empty() => (),
                kind => return Some((self.cursor, line, kind)),
            }
        }

        None
    }

    fn push(&mut self, kind: FrameKind, line: usize) -> Frame {
        let frame = Frame { kind, line };

        self.stack.push(frame);
        debug!("Line {line}: open {kind} (depth {})", self.stack.len());

        frame
    }

    fn pop(&mut self, line: usize) {
        if let Some(frame) = self.stack.pop() {
            debug!(
                "Line {line}: close {} opened at line {}",
                frame.kind, frame.line
            );
        }
    }

    fn unclosed(&self, frame: Frame) -> MapError {
        MapError::UnbalancedBraces {
            line: frame.line,
            frame: frame.kind,
            depth: self.stack.len(),
        }
    }
}

fn unexpected<T>(line: usize, text: &str, state: &'static str) -> Result<T, MapError> {
    MapError::UnexpectedLine {
        line,
        text: text.to_string(),
        state,
    }
    .to_result()
}

// `{` and `}` must stand alone on their line, a trailing comment is fine.
fn expect_bare(line: usize, text: &str) -> Result<(), MapError> {
    if is_bare(&text[1..]) {
        Ok(())
    } else {
        unexpected(line, text, "after brace")
    }
}

/// Walks every brace line with a nesting stack.
fn check_braces<S: AsRef<str>>(lines: &[S]) -> Result<(), MapError> {
    let mut stack: Vec<Frame> = vec![];

    for (index, line) in lines.iter().enumerate() {
        match classify(line.as_ref()) {
            TokenKind::EntityOpen => stack.push(Frame {
                kind: if stack.is_empty() {
                    FrameKind::Entity
                } else {
                    FrameKind::Brush
                },
                line: index + 1,
            }),
            TokenKind::EntityClose => {
                if stack.pop().is_none() {
                    return MapError::SpuriousClose { line: index + 1 }.to_result();
                }
            }
            _ => (),
        }
    }

    match stack.last() {
        Some(frame) => MapError::UnbalancedBraces {
            line: frame.line,
            frame: frame.kind,
            depth: stack.len(),
        }
        .to_result(),
        None => Ok(()),
    }
}

fn quoted_text(i: &str) -> IResult<&str> {
    delimited(tag("\""), take_till(|c| c == '"'), tag("\""))(i)
}

fn quoted_texts(i: &str) -> IResult<Vec<&str>> {
    terminated(many1(preceded(space0, quoted_text)), space0)(i)
}

/// All quoted strings of a line, `None` if anything else but a comment follows them.
fn line_strings(text: &str) -> Option<Vec<&str>> {
    match quoted_texts(text) {
        Ok((rest, strings)) if is_bare(rest) => Some(strings),
        _ => None,
    }
}

fn parse_key_value<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    line: usize,
    text: &str,
) -> Result<(String, String), MapError> {
    let malformed = |line: usize, text: &str| MapError::MalformedKeyValue {
        line,
        text: text.to_string(),
    };

    let strings = line_strings(text).ok_or_else(|| malformed(line, text))?;

    match strings.as_slice() {
        [key, value] => Ok((key.to_string(), value.to_string())),
        // Value sits on its own line.
        [key] => {
            let truncated = MapError::TruncatedInput {
                line,
                text: text.to_string(),
            };

            // End of input is already refused by `check_braces`, the block's
            // `}` is what normally cuts a pair short.
            let Some((value_line, value_text, kind)) = ctx.next_line() else {
                return truncated.to_result();
            };

            match kind {
                TokenKind::KeyValueString => match line_strings(value_text).as_deref() {
                    Some([value]) => Ok((key.to_string(), value.to_string())),
                    _ => Err(malformed(value_line, value_text)),
                },
                TokenKind::EntityClose => truncated.to_result(),
                _ => Err(malformed(value_line, value_text)),
            }
        }
        _ => Err(malformed(line, text)),
    }
}

fn parse_face(line: usize, text: &str) -> Result<Face, MapError> {
    let ([p1, p2, p3], offset) =
        extract_face_points(text).map_err(|source| MapError::MalformedVertex {
            line,
            text: text.to_string(),
            source,
        })?;

    let texture = text[offset..]
        .split_whitespace()
        .take_while(|field| !field.starts_with("//"))
        .map(|field| field.to_string())
        .collect();

    Ok(Face {
        p1,
        p2,
        p3,
        texture,
    })
}

fn parse_brush<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    open_line: usize,
) -> Result<Brush, MapError> {
    let frame = ctx.push(FrameKind::Brush, open_line);
    let mut brush = Brush::default();

    loop {
        // Unreachable after `check_braces`, kept so the descent stands alone.
        let Some((line, text, kind)) = ctx.next_line() else {
            return Err(ctx.unclosed(frame));
        };

        match kind {
            TokenKind::VertexGroup => brush.faces.push(parse_face(line, text)?),
            TokenKind::EntityClose => {
                expect_bare(line, text)?;
                ctx.pop(line);

                if brush.faces.len() < MIN_BRUSH_FACES {
                    warn!(
                        "Line {open_line}: brush found with only {} faces",
                        brush.faces.len()
                    );
                }

                return Ok(brush);
            }
            // comments never come out of `next_line`
            _ => return unexpected(line, text, "inside a brush"),
        }
    }
}

fn parse_entity<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    open_line: usize,
) -> Result<Entity, MapError> {
    let frame = ctx.push(FrameKind::Entity, open_line);
    let mut entity = Entity::default();

    loop {
        // Unreachable after `check_braces`, kept so the descent stands alone.
        let Some((line, text, kind)) = ctx.next_line() else {
            return Err(ctx.unclosed(frame));
        };

        match kind {
            TokenKind::KeyValueString => {
                let (key, value) = parse_key_value(ctx, line, text)?;

                if let Some(old) = entity.attributes.insert(key.as_str(), value) {
                    warn!("Line {line}: key `{key}` repeated, replacing `{old}`");
                }
            }
            TokenKind::EntityOpen => {
                expect_bare(line, text)?;
                entity.brushes.push(parse_brush(ctx, line)?);
            }
            TokenKind::EntityClose => {
                expect_bare(line, text)?;
                ctx.pop(line);

                return Ok(entity);
            }
            TokenKind::VertexGroup => return unexpected(line, text, "outside of a brush"),
            _ => return unexpected(line, text, "inside an entity"),
        }
    }
}

pub(crate) fn parse_map<S: AsRef<str>>(lines: &[S]) -> Result<Map, MapError> {
    check_braces(lines)?;

    let mut ctx = ParseContext::new(lines);
    let mut entities = vec![];

    while let Some((line, text, kind)) = ctx.next_line() {
        match kind {
            TokenKind::EntityOpen => {
                expect_bare(line, text)?;
                entities.push(parse_entity(&mut ctx, line)?);
            }
            TokenKind::EntityClose => return MapError::SpuriousClose { line }.to_result(),
            _ => return unexpected(line, text, "at top level"),
        }
    }

    let map = Map { entities };

    debug!(
        "Parsed {} entities, {} brushes, {} faces",
        map.entities.len(),
        map.brush_count(),
        map.face_count()
    );

    Ok(map)
}

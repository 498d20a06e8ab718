//! JSON-like text rendering of fields.
//!
//! [`format_field`] produces indented output meant for humans and snapshots.
//! `Display` produces the same text on one line, or indented with `{:#}`.

use core::fmt::{self, Display, Formatter, Write};
use core::mem;

use crate::{Field, Payload, object};

/// Format a field as indented JSON-like text.
///
/// ```
/// use friedrichdb_core::{Field, format_field};
///
/// let mut f = Field::new();
/// f.emplace("a", 1).unwrap();
/// assert_eq!(format_field(&f), "{\n  \"a\": 1\n}");
/// ```
#[must_use]
pub fn format_field(field: &Field) -> String {
    let mut ctx = FormatContext::new(true);
    format_field_into(&mut ctx, field);
    ctx.output
}

struct FormatContext {
    output: String,
    indent: usize,
    pretty: bool,
}

impl FormatContext {
    const fn new(pretty: bool) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            pretty,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    fn open(&mut self, bracket: char) {
        self.output.push(bracket);
        if self.pretty {
            self.output.push('\n');
        }
        self.indent += 1;
    }

    fn separator(&mut self, last: bool) {
        if !last {
            self.output.push(',');
        }
        if self.pretty {
            self.output.push('\n');
        }
    }

    fn close(&mut self, bracket: char) {
        self.indent -= 1;
        if self.pretty {
            self.write_indent();
        }
        self.output.push(bracket);
    }

    fn write_item_indent(&mut self) {
        if self.pretty {
            self.write_indent();
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.output, "\\u{:04x}", c as u32);
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

/// A container whose children are still being written.
enum Frame<'a> {
    Array {
        items: core::slice::Iter<'a, Field>,
        first: bool,
    },
    Object {
        entries: object::Iter<'a>,
        first: bool,
    },
}

impl Frame<'_> {
    const fn closing(&self) -> char {
        match self {
            Frame::Array { .. } => ']',
            Frame::Object { .. } => '}',
        }
    }
}

/// Writes `field` if it is a leaf or an empty container; otherwise opens it and
/// pushes a frame for its children.
fn write_value<'a>(ctx: &mut FormatContext, field: &'a Field, stack: &mut Vec<Frame<'a>>) {
    match field.payload() {
        Payload::Null => ctx.output.push_str("null"),
        Payload::Boolean(true) => ctx.output.push_str("true"),
        Payload::Boolean(false) => ctx.output.push_str("false"),
        Payload::Number(n) => {
            let _ = write!(ctx.output, "{}", **n);
        }
        Payload::String(s) => ctx.write_string(s),
        Payload::Array(arr) if arr.is_empty() => ctx.output.push_str("[]"),
        Payload::Array(arr) => {
            ctx.open('[');
            stack.push(Frame::Array {
                items: arr.iter(),
                first: true,
            });
        }
        Payload::Object(obj) if obj.is_empty() => ctx.output.push_str("{}"),
        Payload::Object(obj) => {
            ctx.open('{');
            stack.push(Frame::Object {
                entries: obj.iter(),
                first: true,
            });
        }
    }
}

fn format_field_into(ctx: &mut FormatContext, root: &Field) {
    let mut stack = Vec::new();
    write_value(ctx, root, &mut stack);

    while let Some(frame) = stack.last_mut() {
        let (first, next) = match frame {
            Frame::Array { items, first } => {
                (mem::replace(first, false), items.next().map(|v| (None, v)))
            }
            Frame::Object { entries, first } => (
                mem::replace(first, false),
                entries.next().map(|(k, v)| (Some(k.as_str()), v)),
            ),
        };

        let Some((key, value)) = next else {
            let bracket = frame.closing();
            stack.pop();
            ctx.separator(true);
            ctx.close(bracket);
            continue;
        };

        if !first {
            ctx.separator(false);
        }
        ctx.write_item_indent();
        if let Some(key) = key {
            ctx.write_string(key);
            ctx.output.push_str(if ctx.pretty { ": " } else { ":" });
        }
        write_value(ctx, value, &mut stack);
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut ctx = FormatContext::new(f.alternate());
        format_field_into(&mut ctx, self);
        f.write_str(&ctx.output)
    }
}

//! Positional message formatting.
//!
//! Templates contain `{}` placeholders that are substituted left to right
//! with stringified arguments. A placeholder may carry an explicit argument
//! index, a format specifier, or both:
//!
//! ```
//! use timber::formatter::format;
//!
//! let line = format("{} bytes from {1}:{0}", &["8080".into(), "localhost".into()]);
//! assert_eq!(line, "8080 bytes from localhost:8080");
//! ```
//!
//! # Placeholders
//!
//! * `{}` substitutes the next auto-indexed argument. The auto index starts
//!   at zero and advances only on placeholders without an explicit index.
//! * `{2}` substitutes the argument at index 2.
//! * `{{` and `}}` emit literal braces.
//!
//! Malformed templates are tolerated, never an error: an unmatched `{`
//! copies the rest of the template verbatim, and a placeholder whose index
//! is out of range contributes nothing to the output. Logging must not
//! fail because a message string is bad.
//!
//! # Format specifiers
//!
//! Everything after a `:` in the placeholder body applies to that one
//! placeholder:
//!
//! * a leading `0` enables zero-fill,
//! * following digits set a minimum field width,
//! * `.` and digits set a fixed-point precision,
//! * the letters `x`, `X`, `d`, `o`, `f`, `e`, `b`, `u`, and `U` select
//!   hex, uppercase hex, decimal, octal, fixed-point, scientific,
//!   boolean-as-word, and uppercase rendering. Letters combine, with later
//!   letters overriding earlier ones on the same axis.
//!
//! ```
//! use timber::formatter::format;
//!
//! assert_eq!(format("{0:04}", &[7.into()]), "0007");
//! assert_eq!(format("{0:.2f}", &[3.14159.into()]), "3.14");
//! assert_eq!(format("{0:X}", &[255.into()]), "FF");
//! ```

mod argument;
pub use argument::Argument;

/// Formats `template` by substituting `args` into its placeholders.
///
/// With no arguments the template is returned unchanged, without any
/// placeholder scanning.
pub fn format(template: &str, args: &[Argument]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut auto_index = 0;
    let mut at = 0;

    while at < template.len() {
        let pos = match template[at..].find(|c| c == '{' || c == '}') {
            Some(offset) => at + offset,
            None => {
                out.push_str(&template[at..]);
                break;
            }
        };
        out.push_str(&template[at..pos]);

        if template.as_bytes()[pos] == b'}' {
            // "}}" collapses to one brace; a lone "}" is literal text
            out.push('}');
            at = if template[pos + 1..].starts_with('}') {
                pos + 2
            } else {
                pos + 1
            };
            continue;
        }

        if template[pos + 1..].starts_with('{') {
            out.push('{');
            at = pos + 2;
            continue;
        }

        let body_start = pos + 1;
        match template[body_start..].find('}') {
            Some(offset) => {
                let body_end = body_start + offset;
                substitute(
                    &mut out,
                    &template[body_start..body_end],
                    args,
                    &mut auto_index,
                );
                at = body_end + 1;
            }
            None => {
                // unmatched '{': the remainder is copied verbatim
                out.push_str(&template[pos..]);
                break;
            }
        }
    }

    out
}

/// Resolves one placeholder body and appends its substitution, if any.
fn substitute(out: &mut String, body: &str, args: &[Argument], auto_index: &mut usize) {
    let (index_part, spec_part) = match body.find(':') {
        Some(colon) => (&body[..colon], Some(&body[colon + 1..])),
        None => (body, None),
    };

    let index = if !index_part.is_empty() && index_part.bytes().all(|b| b.is_ascii_digit()) {
        match index_part.parse() {
            Ok(index) => index,
            // more digits than any argument index could hold
            Err(_) => return,
        }
    } else {
        let index = *auto_index;
        *auto_index += 1;
        index
    };

    let arg = match args.get(index) {
        Some(arg) => arg,
        // out-of-range placeholders contribute nothing
        None => return,
    };

    match spec_part {
        Some(spec) => out.push_str(&FormatSpec::parse(spec).apply(arg)),
        None => out.push_str(&arg.to_string()),
    }
}

/// Numeric base and letter case for integer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    Decimal,
    Hex,
    UpperHex,
    Octal,
}

/// Floating-point notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Plain,
    Fixed,
    Scientific,
}

/// A parsed format specifier, scoped to a single placeholder.
///
/// The components are independent axes and may combine freely. Rendering
/// never mutates the specifier, so no state leaks between placeholders.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FormatSpec {
    zero_fill: bool,
    width: usize,
    precision: Option<usize>,
    base: Base,
    notation: Notation,
    bool_word: bool,
    uppercase: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            zero_fill: false,
            width: 0,
            precision: None,
            base: Base::Decimal,
            notation: Notation::Plain,
            bool_word: false,
            uppercase: false,
        }
    }
}

impl FormatSpec {
    /// Parses the text after the `:` of a placeholder.
    ///
    /// Unrecognized characters are skipped; a bad specifier degrades to a
    /// plainer rendering instead of failing the call.
    fn parse(spec: &str) -> Self {
        let mut parsed = FormatSpec::default();
        let mut chars = spec.chars().peekable();

        if chars.peek() == Some(&'0') {
            parsed.zero_fill = true;
            chars.next();
        }

        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            parsed.width = parsed.width * 10 + digit as usize;
            chars.next();
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            let mut precision = 0;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                precision = precision * 10 + digit as usize;
                chars.next();
            }
            parsed.precision = Some(precision);
            parsed.notation = Notation::Fixed;
        }

        for c in chars {
            match c {
                'x' => parsed.base = Base::Hex,
                'X' => parsed.base = Base::UpperHex,
                'd' => parsed.base = Base::Decimal,
                'o' => parsed.base = Base::Octal,
                'f' => parsed.notation = Notation::Fixed,
                'e' => parsed.notation = Notation::Scientific,
                'b' => parsed.bool_word = true,
                'u' | 'U' => parsed.uppercase = true,
                _ => {}
            }
        }

        parsed
    }

    /// Renders `arg` under this specifier.
    fn apply(&self, arg: &Argument) -> String {
        let mut rendered = match arg {
            Argument::Str(value) => (*value).to_owned(),
            Argument::Owned(value) => value.clone(),
            Argument::Char(value) => value.to_string(),
            Argument::Bool(value) => self.render_bool(*value),
            Argument::Int(value) => self.render_int(*value),
            Argument::Uint(value) => self.render_uint(*value),
            Argument::Float(value) => self.render_float(*value),
        };

        if self.uppercase {
            rendered = rendered.to_uppercase();
        }

        self.pad(rendered)
    }

    fn render_bool(&self, value: bool) -> String {
        let text = match (self.bool_word, value) {
            (true, true) => "true",
            (true, false) => "false",
            (false, true) => "1",
            (false, false) => "0",
        };
        text.to_owned()
    }

    fn render_int(&self, value: i64) -> String {
        match self.base {
            Base::Hex => format!("{:x}", value),
            Base::UpperHex => format!("{:X}", value),
            Base::Octal => format!("{:o}", value),
            Base::Decimal => match self.notation {
                Notation::Scientific => format!("{:e}", value),
                _ => value.to_string(),
            },
        }
    }

    fn render_uint(&self, value: u64) -> String {
        match self.base {
            Base::Hex => format!("{:x}", value),
            Base::UpperHex => format!("{:X}", value),
            Base::Octal => format!("{:o}", value),
            Base::Decimal => match self.notation {
                Notation::Scientific => format!("{:e}", value),
                _ => value.to_string(),
            },
        }
    }

    fn render_float(&self, value: f64) -> String {
        match (self.notation, self.precision) {
            (Notation::Scientific, Some(precision)) => {
                format!("{:.*e}", precision, value)
            }
            (Notation::Scientific, None) => format!("{:e}", value),
            (_, Some(precision)) => format!("{:.*}", precision, value),
            (Notation::Fixed, None) => format!("{:.6}", value),
            (Notation::Plain, None) => value.to_string(),
        }
    }

    /// Pads to the minimum field width, keeping a sign ahead of zero-fill.
    fn pad(&self, rendered: String) -> String {
        let len = rendered.chars().count();
        if len >= self.width {
            return rendered;
        }

        let mut padded = String::with_capacity(self.width);
        if self.zero_fill {
            if let Some(digits) = rendered.strip_prefix('-') {
                padded.push('-');
                padded.extend(std::iter::repeat('0').take(self.width - len));
                padded.push_str(digits);
                return padded;
            }
            padded.extend(std::iter::repeat('0').take(self.width - len));
        } else {
            padded.extend(std::iter::repeat(' ').take(self.width - len));
        }
        padded.push_str(&rendered);
        padded
    }
}

//! Route pattern compilation.
//!
//! A pattern is tokenized into [`Segment`]s first and only then turned into
//! an anchored regular expression. Literal text is escaped before it reaches
//! the regex engine, so `.` or `+` in a pattern match themselves.
//!
//! ```text
//!  Syntax     Meaning
//!  {name}     one or more characters except '/', captured as `name`
//!  [text]     `text` may be present or absent (no nesting)
//!  anything   must match exactly, '/' included
//! ```

use crate::errors::PatternError;
use crate::routing::types::{Params, Segment};
use regex::Regex;
use std::str::CharIndices;

/// A pattern ready for matching. Built once at registration and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// The pattern string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameter names in left-to-right order of appearance.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Matches the whole `path`, returning the captured parameters.
    ///
    /// Parameters inside an optional group that was absent from the path are
    /// left out of the result.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;
        let mut params = Params::new();
        for (i, name) in self.param_names.iter().enumerate() {
            if let Some(value) = captures.get(i + 1) {
                params.push(name.as_str(), value.as_str());
            }
        }
        Some(params)
    }
}

/// Compiles `pattern` into a matcher.
///
/// Malformed input (unbalanced `{}`/`[]`, nested optional groups, empty or
/// repeated parameter names) is rejected rather than guessed at.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    let segments = tokenize(pattern)?;

    let mut param_names = Vec::new();
    let mut regex_pattern = String::from("^");
    push_regex(&segments, &mut regex_pattern, &mut param_names);
    regex_pattern.push('$');

    for (i, name) in param_names.iter().enumerate() {
        if param_names[..i].contains(name) {
            return Err(PatternError::DuplicateParameter {
                pattern: pattern.to_string(),
                name: name.clone(),
            });
        }
    }

    let regex = Regex::new(&regex_pattern).map_err(|source| PatternError::Regex {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex,
        param_names,
    })
}

/// Splits a pattern into literal, parameter and optional segments.
pub fn tokenize(pattern: &str) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    // start offset and collected contents of the open optional group
    let mut optional: Option<(usize, Vec<Segment>)> = None;
    let mut literal = String::new();
    let mut chars = pattern.char_indices();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                let name = read_param_name(pattern, position, &mut chars)?;
                let target = current_target(&mut segments, &mut optional);
                flush_literal(&mut literal, target);
                target.push(Segment::Param(name));
            }
            '[' => {
                if optional.is_some() {
                    return Err(PatternError::NestedOptional {
                        pattern: pattern.to_string(),
                        position,
                    });
                }
                flush_literal(&mut literal, &mut segments);
                optional = Some((position, Vec::new()));
            }
            ']' => match optional.take() {
                Some((_, mut inner)) => {
                    flush_literal(&mut literal, &mut inner);
                    // `[]` is valid but matches nothing
                    if !inner.is_empty() {
                        segments.push(Segment::Optional(inner));
                    }
                }
                None => {
                    return Err(PatternError::UnexpectedClose {
                        pattern: pattern.to_string(),
                        position,
                        found: c,
                    })
                }
            },
            '}' => {
                return Err(PatternError::UnexpectedClose {
                    pattern: pattern.to_string(),
                    position,
                    found: c,
                })
            }
            _ => literal.push(c),
        }
    }

    if let Some((position, _)) = optional {
        return Err(PatternError::UnclosedOptional {
            pattern: pattern.to_string(),
            position,
        });
    }
    flush_literal(&mut literal, &mut segments);

    Ok(segments)
}

fn read_param_name(
    pattern: &str,
    start: usize,
    chars: &mut CharIndices<'_>,
) -> Result<String, PatternError> {
    let mut name = String::new();
    for (position, c) in chars.by_ref() {
        match c {
            '}' if name.is_empty() => {
                return Err(PatternError::EmptyParameterName {
                    pattern: pattern.to_string(),
                    position: start,
                })
            }
            '}' => return Ok(name),
            '{' | '[' | ']' | '/' => {
                return Err(PatternError::InvalidParameterName {
                    pattern: pattern.to_string(),
                    position,
                    found: c,
                })
            }
            _ => name.push(c),
        }
    }
    Err(PatternError::UnclosedParameter {
        pattern: pattern.to_string(),
        position: start,
    })
}

fn current_target<'a>(
    segments: &'a mut Vec<Segment>,
    optional: &'a mut Option<(usize, Vec<Segment>)>,
) -> &'a mut Vec<Segment> {
    match optional {
        Some((_, inner)) => inner,
        None => segments,
    }
}

fn flush_literal(literal: &mut String, target: &mut Vec<Segment>) {
    if !literal.is_empty() {
        target.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn push_regex(segments: &[Segment], out: &mut String, param_names: &mut Vec<String>) {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&regex::escape(text)),
            Segment::Param(name) => {
                out.push_str("([^/]+)");
                param_names.push(name.clone());
            }
            Segment::Optional(inner) => {
                out.push_str("(?:");
                push_regex(inner, out, param_names);
                out.push_str(")?");
            }
        }
    }
}

use crate::ports::outbound::ValueExtractor;
use crate::shared::error::CycloneError;
use crate::shared::Result;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::fmt;

/// One step of a query path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Key(String),
    Index(i64),
}

/// QueryPath - Parsed form of a jq/yq style path expression
///
/// Supported forms: `.` (identity) and any sequence of `.key`,
/// `."quoted key"`, `[N]`, `[-N]` and `["key"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    steps: Vec<PathStep>,
}

impl QueryPath {
    pub fn parse(query: &str) -> Result<Self> {
        let syntax_error = |details: &str| -> anyhow::Error {
            CycloneError::QueryEvaluationError {
                query: query.to_string(),
                details: details.to_string(),
            }
            .into()
        };

        let query_trimmed = query.trim();
        if query_trimmed.is_empty() {
            return Err(syntax_error("empty query path"));
        }
        if !query_trimmed.starts_with('.') {
            return Err(syntax_error("query path must start with '.'"));
        }

        let chars: Vec<char> = query_trimmed.chars().collect();
        let mut steps = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            match chars[pos] {
                '.' => {
                    pos += 1;
                    match chars.get(pos) {
                        // Identity, or `.[0]` style access
                        None if pos == 1 => {}
                        Some('[') => {}
                        None => return Err(syntax_error("trailing '.'")),
                        Some('"') => {
                            let (key, next) = read_quoted(&chars, pos)
                                .ok_or_else(|| syntax_error("unterminated quoted key"))?;
                            steps.push(PathStep::Key(key));
                            pos = next;
                        }
                        Some(c) if is_key_char(*c) => {
                            let start = pos;
                            while pos < chars.len() && is_key_char(chars[pos]) {
                                pos += 1;
                            }
                            steps.push(PathStep::Key(chars[start..pos].iter().collect()));
                        }
                        Some(c) => {
                            return Err(syntax_error(&format!("unexpected character '{}'", c)))
                        }
                    }
                }
                '[' => {
                    pos += 1;
                    let step = if chars.get(pos) == Some(&'"') {
                        let (key, next) = read_quoted(&chars, pos)
                            .ok_or_else(|| syntax_error("unterminated quoted key"))?;
                        pos = next;
                        PathStep::Key(key)
                    } else {
                        let start = pos;
                        if chars.get(pos) == Some(&'-') {
                            pos += 1;
                        }
                        while pos < chars.len() && chars[pos].is_ascii_digit() {
                            pos += 1;
                        }
                        let literal: String = chars[start..pos].iter().collect();
                        let index = literal
                            .parse::<i64>()
                            .map_err(|_| syntax_error("expected an integer index or quoted key"))?;
                        PathStep::Index(index)
                    };
                    if chars.get(pos) != Some(&']') {
                        return Err(syntax_error("missing ']'"));
                    }
                    pos += 1;
                    steps.push(step);
                }
                c => return Err(syntax_error(&format!("unexpected character '{}'", c))),
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Resolves the path to the addressed node
    ///
    /// The returned steps have negative indices made absolute, so they can be
    /// replayed against the same document.
    pub fn locate<'v>(&self, root: &'v Value) -> Option<(Vec<PathStep>, &'v Value)> {
        let mut current = root;
        let mut resolved_steps = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let (resolved_step, next) = match (untag(current), step) {
                (Value::Mapping(map), PathStep::Key(key)) => (step.clone(), map.get(key.as_str())?),
                (Value::Sequence(items), PathStep::Index(index)) => {
                    let resolved = if *index < 0 {
                        items.len() as i64 + index
                    } else {
                        *index
                    };
                    let position = usize::try_from(resolved).ok()?;
                    (PathStep::Index(resolved), items.get(position)?)
                }
                _ => return None,
            };
            resolved_steps.push(resolved_step);
            current = next;
        }
        Some((resolved_steps, current))
    }

    /// Walks the path; anything that does not resolve yields `Value::Null`
    pub fn evaluate(&self, root: &Value) -> Value {
        self.locate(root)
            .map(|(_, value)| value.clone())
            .unwrap_or(Value::Null)
    }
}

/// Replays resolved steps over a fresh document and returns the addressed
/// scalar as written in the source, e.g. `1.10` rather than `1.1`
struct ScalarSource<'a> {
    steps: &'a [PathStep],
}

impl<'de> DeserializeSeed<'de> for ScalarSource<'_> {
    type Value = String;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.steps.split_first() {
            None => deserializer.deserialize_str(ScalarText),
            Some((step, rest)) => deserializer.deserialize_any(Descend { step, rest }),
        }
    }
}

struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a scalar")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }
}

struct Descend<'a> {
    step: &'a PathStep,
    rest: &'a [PathStep],
}

impl<'de> Visitor<'de> for Descend<'_> {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping or a sequence")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<String, A::Error>
    where
        A: MapAccess<'de>,
    {
        let PathStep::Key(wanted) = self.step else {
            return Err(de::Error::custom("index step applied to a mapping"));
        };
        while let Some(key) = map.next_key::<Value>()? {
            if key.as_str() == Some(wanted.as_str()) {
                return map.next_value_seed(ScalarSource { steps: self.rest });
            }
            map.next_value::<IgnoredAny>()?;
        }
        Err(de::Error::custom(format!("key {} not found", wanted)))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<String, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let PathStep::Index(index) = self.step else {
            return Err(de::Error::custom("key step applied to a sequence"));
        };
        let wanted = usize::try_from(*index).map_err(de::Error::custom)?;
        for _ in 0..wanted {
            if seq.next_element::<IgnoredAny>()?.is_none() {
                return Err(de::Error::custom("index out of range"));
            }
        }
        seq.next_element_seed(ScalarSource { steps: self.rest })?
            .ok_or_else(|| de::Error::custom("index out of range"))
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

// `pos` points at the opening quote; returns the key and the index after the closing quote
fn read_quoted(chars: &[char], pos: usize) -> Option<(String, usize)> {
    let mut key = String::new();
    let mut i = pos + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                key.push(*chars.get(i + 1)?);
                i += 2;
            }
            '"' => return Some((key, i + 1)),
            c => {
                key.push(c);
                i += 1;
            }
        }
    }
    None
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// YamlPathExtractor - `ValueExtractor` over YAML (and therefore JSON) content
///
/// Only the first document of a multi-document stream is queried.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlPathExtractor;

impl YamlPathExtractor {
    pub fn new() -> Self {
        Self
    }

    fn document_text<'c>(content: &'c [u8], query: &str) -> Result<&'c str> {
        let text = std::str::from_utf8(content)
            .map_err(|e| evaluation_error(query, format!("content is not valid UTF-8: {}", e)))?;
        if text.trim().is_empty() {
            return Err(evaluation_error(query, "content is empty".to_string()));
        }
        Ok(text)
    }

    fn parse_document(text: &str, query: &str) -> Result<Value> {
        let document = serde_yaml_ng::Deserializer::from_str(text)
            .next()
            .ok_or_else(|| evaluation_error(query, "content has no YAML document".to_string()))?;
        Value::deserialize(document)
            .map_err(|e| evaluation_error(query, format!("failed to parse content: {}", e)))
    }

    fn source_text(text: &str, steps: &[PathStep]) -> Option<String> {
        let document = serde_yaml_ng::Deserializer::from_str(text).next()?;
        ScalarSource { steps }.deserialize(document).ok()
    }

    fn render(text: &str, path: &QueryPath, document: &Value) -> Result<String> {
        let Some((steps, value)) = path.locate(document) else {
            return Ok("null".to_string());
        };
        let rendered = match untag(value) {
            Value::Null => "null".to_string(),
            Value::Bool(b) => Self::source_text(text, &steps).unwrap_or_else(|| b.to_string()),
            Value::Number(n) => Self::source_text(text, &steps).unwrap_or_else(|| n.to_string()),
            Value::String(s) => s.clone(),
            other => serde_yaml_ng::to_string(other)?,
        };
        Ok(rendered)
    }
}

fn evaluation_error(query: &str, details: String) -> anyhow::Error {
    CycloneError::QueryEvaluationError {
        query: query.to_string(),
        details,
    }
    .into()
}

impl ValueExtractor for YamlPathExtractor {
    fn extract_value(&self, content: &[u8], query: &str) -> Result<String> {
        let path = QueryPath::parse(query)?;
        let text = Self::document_text(content, query)?;
        let document = Self::parse_document(text, query)?;
        let rendered = Self::render(text, &path, &document)?;

        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            return Err(CycloneError::QueryEvaluationError {
                query: query.to_string(),
                details: "query produced an empty result".to_string(),
            }
            .into());
        }
        Ok(trimmed.to_string())
    }
}

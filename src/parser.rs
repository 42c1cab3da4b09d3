use crate::error::{LayoutError, LayoutResult};
use crate::ir::{RoadmapNode, RoadmapResponse};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

// Greedy on purpose: first `{` through last `}` keeps nested objects intact.
static EMBEDDED_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

#[derive(Deserialize)]
#[serde(untagged)]
enum RoadmapDocument {
    Response(RoadmapResponse),
    Node(RoadmapNode),
}

impl From<RoadmapDocument> for RoadmapResponse {
    fn from(doc: RoadmapDocument) -> Self {
        match doc {
            RoadmapDocument::Response(response) => response,
            RoadmapDocument::Node(root) => RoadmapResponse::from_root(root),
        }
    }
}

/// Parses a generator response or a bare root node.
///
/// Generators do not always return clean JSON, so this falls back to JSON5 and
/// then to the outermost `{ ... }` object found in the text.
pub fn parse_roadmap(input: &str) -> LayoutResult<RoadmapResponse> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LayoutError::parse("empty roadmap document"));
    }

    let strict_err = match parse_document(trimmed) {
        Ok(doc) => return Ok(doc.into()),
        Err(err) => err,
    };

    let Some(found) = EMBEDDED_OBJECT_RE.find(trimmed) else {
        return Err(LayoutError::parse(format!(
            "no JSON object found in input ({strict_err})"
        )));
    };
    if found.as_str().len() == trimmed.len() {
        return Err(LayoutError::parse(strict_err));
    }

    tracing::debug!(
        start = found.start(),
        end = found.end(),
        "extracting embedded roadmap object"
    );
    parse_document(found.as_str())
        .map(Into::into)
        .map_err(|err| LayoutError::parse(format!("embedded object: {err}")))
}

/// Parses, unwraps and validates a roadmap, returning its root.
pub fn load_roadmap(input: &str) -> LayoutResult<RoadmapNode> {
    let root = parse_roadmap(input)?.into_root()?;
    root.validate()?;
    Ok(root)
}

fn parse_document(text: &str) -> Result<RoadmapDocument, String> {
    match serde_json::from_str::<RoadmapDocument>(text) {
        Ok(doc) => Ok(doc),
        Err(json_err) => {
            tracing::debug!(error = %json_err, "strict JSON parse failed, trying JSON5");
            json5::from_str::<RoadmapDocument>(text)
                .map_err(|json5_err| format!("{json_err}; as JSON5: {json5_err}"))
        }
    }
}

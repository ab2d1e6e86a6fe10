//! SOAP body codec.
//!
//! Encoding maps a dynamic input value onto nested elements (`item` for array
//! entries, key-named elements for map entries). Decoding is tolerant: it
//! builds an element tree, locates the `return` element, and converts it back
//! to a dynamic value with the inverse rules.

use crate::error::TransportError;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Encode an input value as the body of the `<input>` element.
pub(crate) fn encode_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                out.push('<');
                out.push_str(key);
                out.push('>');
                write_value(out, child);
                out.push_str("</");
                out.push_str(key);
                out.push('>');
            }
        }
        Value::Array(items) => {
            for item in items {
                out.push_str("<item>");
                write_value(out, item);
                out.push_str("</item>");
            }
        }
        Value::String(s) => out.push_str(&escape(s.as_str())),
        Value::Null => {}
        other => out.push_str(&other.to_string()),
    }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

struct Node {
    name: String,
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }
}

/// Decode a SOAP response body into the dynamic envelope value.
///
/// A SOAP fault surfaces as a decode error carrying the fault string — the
/// only actionable detail the panel provides in that case.
pub(crate) fn decode_response(xml: &str) -> Result<Value, TransportError> {
    let root = parse_tree(xml)?;

    if let Some(fault) = find(&root, "Fault") {
        let message = find(fault, "faultstring")
            .map(|n| n.text.clone())
            .unwrap_or_else(|| "SOAP fault".to_string());
        return Err(TransportError::Decode(message));
    }

    let ret = find(&root, "return").ok_or_else(|| {
        TransportError::Decode("missing return element in SOAP response".to_string())
    })?;
    Ok(node_to_value(ret))
}

fn parse_tree(xml: &str) -> Result<Node, TransportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Synthetic root so the document element has a parent to attach to.
    let mut stack = vec![Node::new(String::new())];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(Node::new(local_name(&e))),
            Ok(Event::Empty(e)) => {
                let node = Node::new(local_name(&e));
                attach(&mut stack, node)?;
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| TransportError::Decode(e.to_string()))?;
                match stack.last_mut() {
                    Some(top) => top.text.push_str(&text),
                    None => return Err(TransportError::Decode("text outside document".into())),
                }
            }
            Ok(Event::End(_)) => {
                let node = match stack.pop() {
                    Some(node) if !stack.is_empty() => node,
                    _ => return Err(TransportError::Decode("unbalanced element tree".into())),
                };
                attach(&mut stack, node)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(TransportError::Decode(e.to_string())),
        }
    }

    match stack.pop() {
        Some(root) if stack.is_empty() => Ok(root),
        _ => Err(TransportError::Decode("unbalanced element tree".into())),
    }
}

fn attach(stack: &mut [Node], node: Node) -> Result<(), TransportError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None => Err(TransportError::Decode("unbalanced element tree".into())),
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn find<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    if node.name == name {
        return Some(node);
    }
    node.children.iter().find_map(|child| find(child, name))
}

fn node_to_value(node: &Node) -> Value {
    if node.children.is_empty() {
        return scalar(&node.text);
    }
    if node.children.iter().all(|c| c.name == "item") {
        return Value::Array(node.children.iter().map(node_to_value).collect());
    }
    let mut map = Map::new();
    for child in &node.children {
        map.insert(child.name.clone(), node_to_value(child));
    }
    Value::Object(map)
}

fn scalar(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    // Integral text becomes a number so envelope status codes compare cleanly.
    if let Ok(n) = text.parse::<i64>() {
        return Value::Number(n.into());
    }
    Value::String(text.to_string())
}

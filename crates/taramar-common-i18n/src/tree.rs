// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Nested message trees and their flat, dot-keyed view.
//!
//! A bundle is a tree of [`MessageNode`]s. Only [`MessageNode::Leaf`] strings
//! are part of the editable surface: [`flatten`] turns every leaf into a
//! `path.to.leaf -> value` entry, and [`set_at_path`] / [`apply_overrides`]
//! write flat entries back into a tree. [`MessageNode::Opaque`] values (such
//! as the footer link list) are carried through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between path segments of a flat key.
pub const KEY_SEPARATOR: char = '.';

/// Section name used for keys whose first segment is empty.
pub const ROOT_SECTION: &str = "root";

/// Flat key -> string value, ordered by key.
pub type FlatMessages = BTreeMap<String, String>;

/// A single node of a message tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageNode {
	/// An override-able string.
	Leaf(String),
	/// A nested mapping.
	Branch(MessageTree),
	/// Any other JSON value, kept verbatim and never flattened.
	Opaque(Value),
}

impl MessageNode {
	pub fn as_leaf(&self) -> Option<&str> {
		match self {
			MessageNode::Leaf(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_branch(&self) -> Option<&MessageTree> {
		match self {
			MessageNode::Branch(tree) => Some(tree),
			_ => None,
		}
	}
}

impl From<Value> for MessageNode {
	fn from(value: Value) -> Self {
		match value {
			Value::String(s) => MessageNode::Leaf(s),
			Value::Object(map) => MessageNode::Branch(MessageTree::from_object(map)),
			other => MessageNode::Opaque(other),
		}
	}
}

impl From<MessageNode> for Value {
	fn from(node: MessageNode) -> Self {
		match node {
			MessageNode::Leaf(s) => Value::String(s),
			MessageNode::Branch(tree) => tree.into(),
			MessageNode::Opaque(value) => value,
		}
	}
}

/// The root of a bundle was some JSON value other than an object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("message tree root must be a JSON object, found {0}")]
pub struct NotAnObject(pub &'static str);

/// A nested mapping from keys to [`MessageNode`]s.
///
/// (De)serializes as the plain JSON object it was read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct MessageTree(BTreeMap<String, MessageNode>);

impl MessageTree {
	pub fn new() -> Self {
		Self::default()
	}

	fn from_object(map: serde_json::Map<String, Value>) -> Self {
		Self(
			map.into_iter()
				.map(|(key, value)| (key, MessageNode::from(value)))
				.collect(),
		)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&MessageNode> {
		self.0.get(key)
	}

	pub fn insert(&mut self, key: impl Into<String>, node: MessageNode) -> Option<MessageNode> {
		self.0.insert(key.into(), node)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageNode)> {
		self.0.iter()
	}

	/// Follow a flat key down the tree.
	pub fn lookup(&self, flat_key: &str) -> Option<&MessageNode> {
		let mut segments = flat_key.split(KEY_SEPARATOR);
		let mut node = self.0.get(segments.next()?)?;
		for segment in segments {
			node = node.as_branch()?.0.get(segment)?;
		}
		Some(node)
	}

	/// The leaf string at a flat key, if the key names a leaf.
	pub fn leaf(&self, flat_key: &str) -> Option<&str> {
		self.lookup(flat_key).and_then(MessageNode::as_leaf)
	}

	pub fn flatten(&self) -> FlatMessages {
		flatten(self)
	}

	pub fn set_at_path(&mut self, flat_key: &str, value: impl Into<String>) {
		set_at_path(self, flat_key, value)
	}

	pub fn apply_overrides<'a, I, K, V>(&self, overrides: I) -> MessageTree
	where
		I: IntoIterator<Item = (&'a K, &'a V)>,
		K: AsRef<str> + ?Sized + 'a,
		V: AsRef<str> + ?Sized + 'a,
	{
		apply_overrides(self, overrides)
	}
}

impl TryFrom<Value> for MessageTree {
	type Error = NotAnObject;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(Self::from_object(map)),
			Value::Null => Err(NotAnObject("null")),
			Value::Bool(_) => Err(NotAnObject("a boolean")),
			Value::Number(_) => Err(NotAnObject("a number")),
			Value::String(_) => Err(NotAnObject("a string")),
			Value::Array(_) => Err(NotAnObject("an array")),
		}
	}
}

impl From<MessageTree> for Value {
	fn from(tree: MessageTree) -> Self {
		Value::Object(
			tree.0
				.into_iter()
				.map(|(key, node)| (key, Value::from(node)))
				.collect(),
		)
	}
}

/// Flatten a tree into `dotted.path -> string` entries.
///
/// Branches are walked depth-first; opaque values are skipped because they
/// are not part of the editable surface.
pub fn flatten(tree: &MessageTree) -> FlatMessages {
	let mut out = FlatMessages::new();
	flatten_into(tree, None, &mut out);
	out
}

fn flatten_into(tree: &MessageTree, prefix: Option<&str>, out: &mut FlatMessages) {
	for (key, node) in &tree.0 {
		let path = prefix.map_or_else(|| key.clone(), |p| format!("{p}{KEY_SEPARATOR}{key}"));
		match node {
			MessageNode::Leaf(value) => {
				out.insert(path, value.clone());
			}
			MessageNode::Branch(child) => flatten_into(child, Some(&path), out),
			MessageNode::Opaque(_) => {}
		}
	}
}

/// Set the leaf addressed by `flat_key`, creating branches along the way.
///
/// An intermediate segment that currently holds a leaf or an opaque value is
/// replaced by an empty branch before descending: the last write wins.
pub fn set_at_path(tree: &mut MessageTree, flat_key: &str, value: impl Into<String>) {
	let segments: Vec<&str> = flat_key.split(KEY_SEPARATOR).collect();
	set_segments(tree, &segments, value.into());
}

fn set_segments(tree: &mut MessageTree, segments: &[&str], value: String) {
	match segments {
		[] => {}
		[last] => {
			tree.0.insert((*last).to_string(), MessageNode::Leaf(value));
		}
		[head, rest @ ..] => {
			let node = tree
				.0
				.entry((*head).to_string())
				.or_insert_with(|| MessageNode::Branch(MessageTree::new()));
			match node {
				MessageNode::Branch(child) => set_segments(child, rest, value),
				other => {
					let mut child = MessageTree::new();
					set_segments(&mut child, rest, value);
					*other = MessageNode::Branch(child);
				}
			}
		}
	}
}

/// Deep-copy `base` and write every override into the copy.
///
/// `base` is never mutated, so one parsed bundle can serve every request.
pub fn apply_overrides<'a, I, K, V>(base: &MessageTree, overrides: I) -> MessageTree
where
	I: IntoIterator<Item = (&'a K, &'a V)>,
	K: AsRef<str> + ?Sized + 'a,
	V: AsRef<str> + ?Sized + 'a,
{
	let mut merged = base.clone();
	for (key, value) in overrides {
		set_at_path(&mut merged, key.as_ref(), value.as_ref());
	}
	merged
}

/// Rebuild a tree from flat entries.
pub fn unflatten(flat: &FlatMessages) -> MessageTree {
	apply_overrides(&MessageTree::new(), flat)
}

/// The section a flat key is grouped under in the editor.
///
/// This is the first path segment, or [`ROOT_SECTION`] when that segment is
/// empty. Always derived, never stored.
pub fn section_of(flat_key: &str) -> &str {
	match flat_key.split(KEY_SEPARATOR).next() {
		Some(section) if !section.is_empty() => section,
		_ => ROOT_SECTION,
	}
}

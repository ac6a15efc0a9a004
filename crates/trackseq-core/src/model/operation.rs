use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::Result;

/// One recorded mutation of a tracked sequence
///
/// Each variant is expressible as a single targeted partial update against
/// the remote store. Payloads are always already-cast elements. Once
/// appended to a log an operation is never changed or merged with its
/// neighbours.
///
/// On the wire an operation is a two-field record:
///
/// ```
/// use trackseq_core::Operation;
///
/// let op: Operation<i64> = Operation::PushAll(vec![5, 6]);
/// assert_eq!(
///     serde_json::to_value(&op).unwrap(),
///     serde_json::json!({ "opcode": "pushAll", "payload": [5, 6] })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "opcode", content = "payload", rename_all = "camelCase")]
pub enum Operation<T> {
    /// Append one element
    Push(T),
    /// Append several elements in order
    PushAll(Vec<T>),
    /// Remove the last element
    Pop,
    /// Remove the first element
    Shift,
    /// Remove every stored element equal to the value
    Pull(T),
    /// Remove every stored element equal to any of the values
    PullAll(Vec<T>),
}

/// Operation tag without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Push,
    PushAll,
    Pop,
    Shift,
    Pull,
    PullAll,
}

impl Opcode {
    /// Wire name of the opcode
    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Push => "push",
            Opcode::PushAll => "pushAll",
            Opcode::Pop => "pop",
            Opcode::Shift => "shift",
            Opcode::Pull => "pull",
            Opcode::PullAll => "pullAll",
        }
    }

    /// Update modifier the remote store applies for this opcode
    ///
    /// `pop` and `shift` share `$pop` and differ only in its argument.
    pub fn modifier(&self) -> &'static str {
        match self {
            Opcode::Push => "$push",
            Opcode::PushAll => "$pushAll",
            Opcode::Pop | Opcode::Shift => "$pop",
            Opcode::Pull => "$pull",
            Opcode::PullAll => "$pullAll",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> Operation<T> {
    pub fn opcode(&self) -> Opcode {
        match self {
            Operation::Push(_) => Opcode::Push,
            Operation::PushAll(_) => Opcode::PushAll,
            Operation::Pop => Opcode::Pop,
            Operation::Shift => Opcode::Shift,
            Operation::Pull(_) => Opcode::Pull,
            Operation::PullAll(_) => Opcode::PullAll,
        }
    }

    pub fn modifier(&self) -> &'static str {
        self.opcode().modifier()
    }

    /// Number of elements carried by the payload (0 for `pop`/`shift`)
    pub fn payload_len(&self) -> usize {
        match self {
            Operation::Push(_) | Operation::Pull(_) => 1,
            Operation::PushAll(values) | Operation::PullAll(values) => values.len(),
            Operation::Pop | Operation::Shift => 0,
        }
    }
}

impl<T: Serialize> Operation<T> {
    /// Render this operation as one partial update for the field at `path`
    ///
    /// `pop` removes from the tail (`1`) and `shift` from the head (`-1`),
    /// each with an implicit count of one.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if an element cannot be encoded as JSON.
    pub fn to_update(&self, path: &str) -> Result<Value> {
        let argument = match self {
            Operation::Push(value) | Operation::Pull(value) => serde_json::to_value(value)?,
            Operation::PushAll(values) | Operation::PullAll(values) => {
                serde_json::to_value(values)?
            }
            Operation::Pop => json!(1),
            Operation::Shift => json!(-1),
        };
        let modifier = self.modifier();
        Ok(json!({ modifier: { path: argument } }))
    }
}

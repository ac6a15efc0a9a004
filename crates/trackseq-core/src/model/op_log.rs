use super::operation::Operation;

/// Append-only buffer of recorded operations for one sequence
///
/// Operations keep the order they were recorded in and are never
/// deduplicated or merged. They leave only through `drain`, which hands the
/// whole batch over, or `drain_front`, which drops the oldest `n` once a
/// store has confirmed them.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationLog<T> {
    ops: Vec<Operation<T>>,
}

impl<T> Default for OperationLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperationLog<T> {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn append(&mut self, op: Operation<T>) {
        self.ops.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation<T>> {
        self.ops.iter()
    }

    pub fn as_slice(&self) -> &[Operation<T>] {
        &self.ops
    }

    /// Take every recorded operation, in order, leaving the log empty
    pub fn drain(&mut self) -> Vec<Operation<T>> {
        std::mem::take(&mut self.ops)
    }

    /// Take the oldest `n` operations, keeping anything recorded after them
    pub fn drain_front(&mut self, n: usize) -> Vec<Operation<T>> {
        let n = n.min(self.ops.len());
        self.ops.drain(..n).collect()
    }
}

impl<'a, T> IntoIterator for &'a OperationLog<T> {
    type Item = &'a Operation<T>;
    type IntoIter = std::slice::Iter<'a, Operation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log: OperationLog<i64> = OperationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut log = OperationLog::new();
        log.append(Operation::Push(1));
        log.append(Operation::Push(1));
        log.append(Operation::Pop);

        assert_eq!(
            log.as_slice(),
            &[Operation::Push(1), Operation::Push(1), Operation::Pop]
        );
    }

    #[test]
    fn test_drain_returns_everything_and_clears() {
        let mut log = OperationLog::new();
        log.append(Operation::Push("a"));
        log.append(Operation::Shift);

        let drained = log.drain();
        assert_eq!(drained, vec![Operation::Push("a"), Operation::Shift]);
        assert!(log.is_empty());

        log.append(Operation::Pull("b"));
        assert_eq!(log.drain(), vec![Operation::Pull("b")]);
    }

    #[test]
    fn test_drain_front_keeps_later_operations() {
        let mut log = OperationLog::new();
        log.append(Operation::Push(1));
        log.append(Operation::Pop);
        log.append(Operation::Push(2));

        assert_eq!(log.drain_front(2), vec![Operation::Push(1), Operation::Pop]);
        assert_eq!(log.as_slice(), &[Operation::Push(2)]);

        assert_eq!(log.drain_front(5), vec![Operation::Push(2)]);
        assert!(log.is_empty());
    }
}

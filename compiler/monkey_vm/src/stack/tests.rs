use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_push_pop_order() {
    let mut stack = Stack::new(4);
    assert_eq!(stack.push(Value::int(1)), Ok(()));
    assert_eq!(stack.push(Value::int(2)), Ok(()));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(&Value::int(2)));
    assert_eq!(stack.pop(), Ok(Value::int(2)));
    assert_eq!(stack.pop(), Ok(Value::int(1)));
    assert!(stack.is_empty());
}

#[test]
fn test_push_past_capacity() {
    let mut stack = Stack::new(1);
    assert_eq!(stack.push(Value::TRUE), Ok(()));
    assert_eq!(
        stack.push(Value::TRUE),
        Err(VmError::StackOverflow { capacity: 1 })
    );
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_pop_empty() {
    let mut stack = Stack::new(1);
    assert_eq!(stack.pop(), Err(VmError::StackUnderflow));
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_zero_capacity() {
    let mut stack = Stack::new(0);
    assert_eq!(
        stack.push(Value::NULL),
        Err(VmError::StackOverflow { capacity: 0 })
    );
    assert_eq!(stack.capacity(), 0);
}

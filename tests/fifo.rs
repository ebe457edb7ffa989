use ringcap::{BoundedRingBuffer, RingCapError};

#[test]
fn overflow_retains_last_capacity_items() {
    let mut buffer = BoundedRingBuffer::new(3).unwrap();
    for i in 1..=10 {
        buffer.enqueue(i);
    }

    let mut drained = Vec::new();
    while let Some(value) = buffer.dequeue() {
        drained.push(value);
    }
    assert_eq!(drained, vec![8, 9, 10]);
}

#[test]
fn zero_capacity_is_rejected() {
    let result = BoundedRingBuffer::<String>::new(0);
    assert!(matches!(result, Err(RingCapError::InvalidCapacity(0))));
}

#[test]
fn buffer_is_reusable_after_drain() {
    let mut buffer = BoundedRingBuffer::new(2).unwrap();
    buffer.enqueue("a");
    buffer.enqueue("b");
    assert_eq!(buffer.dequeue(), Some("a"));
    assert_eq!(buffer.dequeue(), Some("b"));
    assert_eq!(buffer.dequeue(), None);

    buffer.enqueue("c");
    assert_eq!(buffer.peek(), Some(&"c"));
    assert_eq!(buffer.len(), 1);
}

#[test]
fn owned_values_move_through_the_buffer() {
    let mut buffer = BoundedRingBuffer::new(2).unwrap();
    buffer.enqueue(String::from("first"));
    buffer.enqueue(String::from("second"));
    buffer.enqueue(String::from("third"));

    let front = buffer.dequeue().unwrap();
    assert_eq!(front, "second");
    assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["third"]);
}
